use async_trait::async_trait;

use crate::modules::episodes::domain::entities::ProviderEpisodes;
use crate::shared::errors::AppResult;

/// Repository interface for episode-list providers
///
/// A source may return episodes for several content providers at once
/// (one `ProviderEpisodes` per provider).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EpisodeSourceRepository: Send + Sync {
    /// Human-readable name used in logs
    fn provider_name(&self) -> &'static str;

    /// Fetch the episode lists for an anime
    ///
    /// An empty result is reported as an error: callers treat "no data" like any
    /// other provider failure.
    async fn fetch_episodes(&self, anime_id: &str) -> AppResult<Vec<ProviderEpisodes>>;
}
