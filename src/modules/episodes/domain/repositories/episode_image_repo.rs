use async_trait::async_trait;

use crate::modules::episodes::domain::entities::ProviderImages;
use crate::shared::errors::AppResult;

/// Repository interface for per-provider episode images
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EpisodeImageRepository: Send + Sync {
    async fn fetch_episode_images(&self, anime_id: &str) -> AppResult<Vec<ProviderImages>>;
}
