use chrono::{DateTime, NaiveDate};

use super::models::*;
use crate::modules::episodes::domain::entities::{ProviderEpisodes, RawEpisode};
use crate::modules::episodes::infrastructure::adapters::common::{clean, episode_number};

pub const ANIZONE_PROVIDER_ID: &str = "anizone";

/// Converts Anizone episodes into the canonical episode shape
#[derive(Debug, Clone, Copy, Default)]
pub struct AnizoneMapper;

impl AnizoneMapper {
    pub fn new() -> Self {
        Self
    }

    pub fn map_episodes(
        &self,
        anime_id: &str,
        response: AnizoneEpisodesResponse,
    ) -> ProviderEpisodes {
        ProviderEpisodes {
            provider_id: ANIZONE_PROVIDER_ID.to_string(),
            episodes: response
                .episodes
                .into_iter()
                .filter_map(|episode| self.map_episode(anime_id, episode))
                .collect(),
        }
    }

    fn map_episode(&self, anime_id: &str, episode: AnizoneEpisode) -> Option<RawEpisode> {
        let number = episode_number(episode.episode_number)?;
        let id = clean(episode.episode_id)
            .unwrap_or_else(|| format!("{}-episode-{}", anime_id, number));

        Some(RawEpisode {
            id,
            img: clean(episode.thumbnail),
            title: clean(episode.name),
            has_dub: episode.has_dub.unwrap_or(false),
            number,
            rating: None,
            is_filler: false,
            updated_at: episode
                .air_date
                .as_deref()
                .and_then(parse_air_date)
                .unwrap_or(0),
            description: None,
        })
    }
}

/// Air date in milliseconds since the Unix epoch
pub fn parse_air_date(raw: &str) -> Option<i64> {
    let raw = raw.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.timestamp_millis());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.and_utc().timestamp_millis())
}
