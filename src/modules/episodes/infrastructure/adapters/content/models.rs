// Wire models for the content-metadata provider
// Only the fields the aggregator reads are modelled; everything else is ignored.

use serde::{Deserialize, Serialize};

/// `GET /info/{id}?fields=[episodes]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentInfoResponse {
    #[serde(default)]
    pub episodes: Option<ContentEpisodesField>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentEpisodesField {
    #[serde(default)]
    pub data: Vec<ContentProviderEpisodes>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentProviderEpisodes {
    pub provider_id: String,
    #[serde(default)]
    pub episodes: Vec<ContentEpisode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentEpisode {
    pub id: String,
    pub number: f64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub img: Option<String>,
    #[serde(default)]
    pub has_dub: Option<bool>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub is_filler: Option<bool>,
    #[serde(default)]
    pub updated_at: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

/// One entry of `GET /content-metadata/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentMetadataEntry {
    pub provider_id: String,
    #[serde(default)]
    pub data: Vec<ContentMetadataEpisode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentMetadataEpisode {
    pub number: f64,
    #[serde(default)]
    pub img: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
