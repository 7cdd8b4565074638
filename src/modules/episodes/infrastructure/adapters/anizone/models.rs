// Wire models for the Anizone episode-list API

use serde::{Deserialize, Serialize};

/// `GET /anime/{id}/episodes`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnizoneEpisodesResponse {
    #[serde(default)]
    pub episodes: Vec<AnizoneEpisode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnizoneEpisode {
    #[serde(default)]
    pub episode_id: Option<String>,
    pub episode_number: f64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// RFC 3339 timestamp or plain `YYYY-MM-DD`
    #[serde(default)]
    pub air_date: Option<String>,
    #[serde(default)]
    pub has_dub: Option<bool>,
}
