use serde::{Deserialize, Serialize};

use crate::modules::episodes::domain::value_objects::EpisodeNumber;

/// Normalized episode as returned to callers
///
/// `number` is the natural key within one anime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub id: String,
    pub img: Option<String>,
    pub title: String,
    pub has_dub: bool,
    pub number: EpisodeNumber,
    pub rating: Option<f32>,
    pub is_filler: bool,
    /// Milliseconds since the Unix epoch
    pub updated_at: i64,
    pub description: Option<String>,
}

/// Episode exactly as an episode-list provider reported it, before merging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEpisode {
    pub id: String,
    #[serde(default)]
    pub img: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub has_dub: bool,
    pub number: EpisodeNumber,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub is_filler: bool,
    #[serde(default)]
    pub updated_at: i64,
    #[serde(default)]
    pub description: Option<String>,
}

impl RawEpisode {
    pub fn new(id: impl Into<String>, number: impl Into<EpisodeNumber>) -> Self {
        Self {
            id: id.into(),
            img: None,
            title: None,
            has_dub: false,
            number: number.into(),
            rating: None,
            is_filler: false,
            updated_at: 0,
            description: None,
        }
    }
}

/// Raw episode list from one content source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderEpisodes {
    pub provider_id: String,
    pub episodes: Vec<RawEpisode>,
}

/// Normalized episodes grouped under the content source that supplied them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderBundle {
    pub episodes: Vec<Episode>,
    pub provider_id: String,
}
