use serde::{Deserialize, Serialize};

use crate::modules::episodes::domain::value_objects::EpisodeNumber;

/// Title of an anime in its usual variants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimeTitle {
    pub english: Option<String>,
    pub romaji: Option<String>,
    pub native: Option<String>,
}

impl AnimeTitle {
    /// First available of English, Romaji, Native
    pub fn preferred(&self) -> Option<&str> {
        [&self.english, &self.romaji, &self.native]
            .into_iter()
            .flatten()
            .map(|title| title.trim())
            .find(|title| !title.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.preferred().is_none()
    }
}

/// Episode image record from the content-metadata provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeImage {
    pub number: EpisodeNumber,
    pub img: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Episode images for one content provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderImages {
    pub provider_id: String,
    pub data: Vec<EpisodeImage>,
}

impl ProviderImages {
    pub fn find(&self, number: impl Into<EpisodeNumber>) -> Option<&EpisodeImage> {
        let number = number.into();
        self.data.iter().find(|image| image.number == number)
    }
}

/// Per-episode thumbnail/title record from the metadata service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeMetadata {
    pub number: EpisodeNumber,
    pub thumbnail: Option<String>,
    pub title: Option<String>,
}

/// Episode metadata for a whole anime; only ever used to fill gaps
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimeMetadata {
    pub title: AnimeTitle,
    pub episodes: Vec<EpisodeMetadata>,
}

impl AnimeMetadata {
    pub fn find(&self, number: impl Into<EpisodeNumber>) -> Option<&EpisodeMetadata> {
        let number = number.into();
        self.episodes.iter().find(|episode| episode.number == number)
    }
}

/// General anime information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimeInfo {
    pub title: AnimeTitle,
    pub cover_image: Option<String>,
}
