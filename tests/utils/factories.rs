/// Test data factories using builder pattern
///
/// Domain values for merge/resolution tests, plus upstream JSON payloads for
/// the stub servers.
use miru_episodes_lib::modules::episodes::domain::{
    AnimeInfo, AnimeMetadata, AnimeTitle, EpisodeImage, EpisodeMetadata, ProviderEpisodes,
    ProviderImages, RawEpisode,
};
use serde_json::{json, Value};

pub struct RawEpisodeFactory {
    episode: RawEpisode,
}

impl RawEpisodeFactory {
    pub fn new(number: u32) -> Self {
        Self {
            episode: RawEpisode::new(format!("/watch/test-anime-{}", number), number),
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.episode.title = Some(title.to_string());
        self
    }

    pub fn with_img(mut self, img: &str) -> Self {
        self.episode.img = Some(img.to_string());
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.episode.description = Some(description.to_string());
        self
    }

    pub fn dubbed(mut self) -> Self {
        self.episode.has_dub = true;
        self
    }

    pub fn build(self) -> RawEpisode {
        self.episode
    }
}

pub fn provider_episodes(provider_id: &str, episodes: Vec<RawEpisode>) -> ProviderEpisodes {
    ProviderEpisodes {
        provider_id: provider_id.to_string(),
        episodes,
    }
}

pub fn episode_image(number: u32, img: Option<&str>, title: Option<&str>) -> EpisodeImage {
    EpisodeImage {
        number: number.into(),
        img: img.map(String::from),
        title: title.map(String::from),
        description: None,
    }
}

pub fn provider_images(provider_id: &str, data: Vec<EpisodeImage>) -> ProviderImages {
    ProviderImages {
        provider_id: provider_id.to_string(),
        data,
    }
}

pub fn english_title(title: &str) -> AnimeTitle {
    AnimeTitle {
        english: Some(title.to_string()),
        romaji: None,
        native: None,
    }
}

pub fn anime_info(title: &str, cover: Option<&str>) -> AnimeInfo {
    AnimeInfo {
        title: english_title(title),
        cover_image: cover.map(String::from),
    }
}

pub fn anime_metadata(
    title: &str,
    episodes: &[(u32, Option<&str>, Option<&str>)],
) -> AnimeMetadata {
    AnimeMetadata {
        title: english_title(title),
        episodes: episodes
            .iter()
            .map(|(number, thumbnail, episode_title)| EpisodeMetadata {
                number: (*number).into(),
                thumbnail: thumbnail.map(String::from),
                title: episode_title.map(String::from),
            })
            .collect(),
    }
}

/// `GET /info/{id}?fields=[episodes]` body with one provider
pub fn content_info_payload(provider_id: &str, titles: &[&str]) -> Value {
    let episodes: Vec<Value> = titles
        .iter()
        .enumerate()
        .map(|(index, title)| {
            json!({
                "id": format!("/watch/{}-{}", provider_id, index + 1),
                "number": index + 1,
                "title": title,
                "img": null,
                "hasDub": false,
                "isFiller": false,
                "rating": null,
                "updatedAt": 1_700_000_000_000_i64,
                "description": null
            })
        })
        .collect();

    json!({
        "id": "21",
        "episodes": {
            "data": [{ "providerId": provider_id, "episodes": episodes }]
        }
    })
}

/// `GET /content-metadata/{id}` body
pub fn content_metadata_payload(provider_id: &str, entries: &[(u32, &str, &str)]) -> Value {
    let data: Vec<Value> = entries
        .iter()
        .map(|(number, img, title)| {
            json!({ "number": number, "img": img, "title": title, "description": null })
        })
        .collect();

    json!([{ "providerId": provider_id, "data": data }])
}

/// `GET /episodes/{id}` body of the metadata service
pub fn metadata_episodes_payload(title: &str, entries: &[(u32, &str, &str)]) -> Value {
    let episodes: Vec<Value> = entries
        .iter()
        .map(|(number, thumbnail, episode_title)| {
            json!({ "number": number, "thumbnail": thumbnail, "title": episode_title })
        })
        .collect();

    json!({
        "title": { "english": title, "romaji": null, "native": null },
        "episodes": episodes
    })
}

/// `GET /info/{id}` body of the metadata service
pub fn metadata_info_payload(title: &str, cover: &str) -> Value {
    json!({
        "title": { "english": title, "romaji": null, "native": null },
        "coverImage": cover
    })
}

/// `GET /anime/{id}/episodes` body of Anizone
pub fn anizone_episodes_payload(names: &[&str]) -> Value {
    let episodes: Vec<Value> = names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            json!({
                "episodeId": format!("az-{}", index + 1),
                "episodeNumber": index + 1,
                "name": name,
                "thumbnail": null,
                "airDate": "2023-09-29",
                "hasDub": false
            })
        })
        .collect();

    json!({ "episodes": episodes })
}
