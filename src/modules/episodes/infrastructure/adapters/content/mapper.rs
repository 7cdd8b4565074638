use super::models::*;
use crate::modules::episodes::domain::entities::{
    EpisodeImage, ProviderEpisodes, ProviderImages, RawEpisode,
};
use crate::modules::episodes::infrastructure::adapters::common::{clean, episode_number};

/// Maps content-provider payloads to domain episode lists and images
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentMapper;

impl ContentMapper {
    pub fn new() -> Self {
        Self
    }

    /// Provider bundles from an info response; providers without usable episodes are dropped
    pub fn map_info(&self, response: ContentInfoResponse) -> Vec<ProviderEpisodes> {
        response
            .episodes
            .map(|field| field.data)
            .unwrap_or_default()
            .into_iter()
            .map(|provider| ProviderEpisodes {
                episodes: provider
                    .episodes
                    .into_iter()
                    .filter_map(|episode| self.map_episode(episode))
                    .collect(),
                provider_id: provider.provider_id,
            })
            .filter(|bundle| !bundle.episodes.is_empty())
            .collect()
    }

    fn map_episode(&self, episode: ContentEpisode) -> Option<RawEpisode> {
        let Some(number) = episode_number(episode.number) else {
            log::debug!(
                "Content: skipping episode '{}' with non-finite number {}",
                episode.id,
                episode.number
            );
            return None;
        };

        Some(RawEpisode {
            id: episode.id,
            img: clean(episode.img),
            title: clean(episode.title),
            has_dub: episode.has_dub.unwrap_or(false),
            number,
            rating: episode.rating,
            is_filler: episode.is_filler.unwrap_or(false),
            updated_at: episode
                .updated_at
                .filter(|value| value.is_finite())
                .map(|value| value as i64)
                .unwrap_or(0),
            description: clean(episode.description),
        })
    }

    pub fn map_images(&self, entries: Vec<ContentMetadataEntry>) -> Vec<ProviderImages> {
        entries
            .into_iter()
            .map(|entry| ProviderImages {
                provider_id: entry.provider_id,
                data: entry
                    .data
                    .into_iter()
                    .filter_map(|episode| {
                        Some(EpisodeImage {
                            number: episode_number(episode.number)?,
                            img: clean(episode.img),
                            title: clean(episode.title),
                            description: clean(episode.description),
                        })
                    })
                    .collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_info_response() {
        let json = r#"{
            "id": "21",
            "episodes": {
                "latest": {"updatedAt": 1700000000000},
                "data": [
                    {
                        "providerId": "zoro",
                        "episodes": [
                            {"id": "/watch/1", "number": 1, "title": "EP1", "img": null,
                             "hasDub": true, "rating": 8.1, "isFiller": false,
                             "updatedAt": 1700000000000, "description": "  "},
                            {"id": "/watch/1.5", "number": 1.5, "title": "Recap"}
                        ]
                    },
                    {"providerId": "empty", "episodes": []}
                ]
            }
        }"#;

        let response: ContentInfoResponse = serde_json::from_str(json).unwrap();
        let bundles = ContentMapper::new().map_info(response);

        assert_eq!(bundles.len(), 1);
        assert_eq!(bundles[0].provider_id, "zoro");
        assert_eq!(bundles[0].episodes.len(), 2);
        assert_eq!(bundles[0].episodes[1].number.value(), 1.5);

        let episode = &bundles[0].episodes[0];
        assert_eq!(episode.number, 1);
        assert!(episode.has_dub);
        assert_eq!(episode.updated_at, 1_700_000_000_000);
        assert_eq!(episode.description, None);
    }

    #[test]
    fn test_map_info_without_episodes_field() {
        let response: ContentInfoResponse = serde_json::from_str(r#"{"id": "21"}"#).unwrap();
        assert!(ContentMapper::new().map_info(response).is_empty());
    }

    #[test]
    fn test_map_images() {
        let json = r#"[
            {"providerId": "tvdb", "data": [
                {"number": 1, "img": "https://img/1.jpg", "title": "Premiere", "description": "Desc"},
                {"number": 2.5, "img": "https://img/2.5.jpg"}
            ]}
        ]"#;

        let entries: Vec<ContentMetadataEntry> = serde_json::from_str(json).unwrap();
        let images = ContentMapper::new().map_images(entries);

        assert_eq!(images.len(), 1);
        assert_eq!(images[0].data.len(), 2);
        assert_eq!(images[0].data[0].title.as_deref(), Some("Premiere"));
        assert_eq!(images[0].data[1].img.as_deref(), Some("https://img/2.5.jpg"));
    }

    #[test]
    fn test_map_info_keeps_recap_between_episodes() {
        let json = r#"{
            "episodes": {"data": [{"providerId": "zoro", "episodes": [
                {"id": "/watch/12", "number": 12},
                {"id": "/watch/12.5", "number": 12.5, "title": "Recap"},
                {"id": "/watch/13", "number": 13}
            ]}]}
        }"#;

        let response: ContentInfoResponse = serde_json::from_str(json).unwrap();
        let bundles = ContentMapper::new().map_info(response);
        let numbers: Vec<f64> = bundles[0]
            .episodes
            .iter()
            .map(|episode| episode.number.value())
            .collect();

        assert_eq!(numbers, vec![12.0, 12.5, 13.0]);
    }
}
