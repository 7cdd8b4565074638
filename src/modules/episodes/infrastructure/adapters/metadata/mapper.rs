use super::models::*;
use crate::modules::episodes::domain::entities::{
    AnimeInfo, AnimeMetadata, AnimeTitle, EpisodeMetadata,
};
use crate::modules::episodes::infrastructure::adapters::common::{clean, episode_number};

/// Maps metadata-service payloads to domain metadata
#[derive(Debug, Clone, Copy, Default)]
pub struct MetadataMapper;

impl MetadataMapper {
    pub fn new() -> Self {
        Self
    }

    pub fn map_title(&self, title: Option<MetadataTitle>) -> AnimeTitle {
        let title = title.unwrap_or_default();
        AnimeTitle {
            english: clean(title.english),
            romaji: clean(title.romaji),
            native: clean(title.native),
        }
    }

    pub fn map_metadata(&self, response: EpisodeMetadataResponse) -> AnimeMetadata {
        AnimeMetadata {
            title: self.map_title(response.title),
            episodes: response
                .episodes
                .into_iter()
                .filter_map(|episode| {
                    Some(EpisodeMetadata {
                        number: episode_number(episode.number)?,
                        thumbnail: clean(episode.thumbnail),
                        title: clean(episode.title),
                    })
                })
                .collect(),
        }
    }

    pub fn map_info(&self, response: AnimeInfoResponse) -> AnimeInfo {
        AnimeInfo {
            title: self.map_title(response.title),
            cover_image: clean(response.cover_image),
        }
    }
}
