use async_trait::async_trait;

use crate::modules::episodes::domain::entities::{AnimeInfo, AnimeMetadata};
use crate::shared::errors::AppResult;

/// Repository interface for descriptive anime data used to fill gaps in episode lists
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnimeMetadataRepository: Send + Sync {
    /// Per-episode thumbnails and titles, plus the anime title
    async fn fetch_episode_metadata(&self, anime_id: &str) -> AppResult<AnimeMetadata>;

    /// General anime information (title variants, cover image)
    async fn fetch_anime_info(&self, anime_id: &str) -> AppResult<AnimeInfo>;
}
