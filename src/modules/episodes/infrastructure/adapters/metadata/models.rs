// Wire models for the episode-metadata / anime-info service

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataTitle {
    #[serde(default)]
    pub english: Option<String>,
    #[serde(default)]
    pub romaji: Option<String>,
    #[serde(default)]
    pub native: Option<String>,
}

/// `GET /episodes/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeMetadataResponse {
    #[serde(default)]
    pub title: Option<MetadataTitle>,
    #[serde(default)]
    pub episodes: Vec<MetadataEpisode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataEpisode {
    pub number: f64,
    #[serde(default, alias = "image")]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

/// `GET /info/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimeInfoResponse {
    #[serde(default)]
    pub title: Option<MetadataTitle>,
    #[serde(default)]
    pub cover_image: Option<String>,
}
