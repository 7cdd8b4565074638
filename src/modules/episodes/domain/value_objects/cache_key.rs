use std::fmt;

use crate::shared::errors::{AppError, AppResult};

const PREFIX: &str = "episodesData";

/// Cache key under which the aggregated episodes of one anime are stored
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EpisodesCacheKey(String);

impl EpisodesCacheKey {
    pub fn for_anime(anime_id: &str) -> AppResult<Self> {
        let anime_id = anime_id.trim();
        if anime_id.is_empty() {
            return Err(AppError::InvalidInput(
                "Anime id cannot be empty".to_string(),
            ));
        }

        Ok(Self(format!("{}:{}", PREFIX, anime_id)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Trimmed anime id the key was built from
    pub fn anime_id(&self) -> &str {
        &self.0[PREFIX.len() + 1..]
    }
}

impl fmt::Display for EpisodesCacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
