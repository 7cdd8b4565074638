use async_trait::async_trait;
use std::time::Duration;

use super::mapper::ContentMapper;
use super::models::{ContentInfoResponse, ContentMetadataEntry};
use crate::modules::episodes::domain::{
    entities::{ProviderEpisodes, ProviderImages},
    repositories::{EpisodeImageRepository, EpisodeSourceRepository},
};
use crate::modules::episodes::infrastructure::http_client::UpstreamClient;
use crate::shared::errors::{AppError, AppResult};

const PROVIDER_NAME: &str = "Content";

/// Primary episode source: combined info + episodes endpoint, plus per-provider episode images
pub struct ContentProviderAdapter {
    http_client: UpstreamClient,
    mapper: ContentMapper,
    image_timeout: Duration,
}

impl ContentProviderAdapter {
    pub fn new(http_client: UpstreamClient, image_timeout: Duration) -> Self {
        Self {
            http_client,
            mapper: ContentMapper::new(),
            image_timeout,
        }
    }

    /// Create adapter for `base_url` with its own rate-limited client
    pub fn for_base_url(
        base_url: &str,
        requests_per_second: f64,
        timeout: Option<Duration>,
        image_timeout: Duration,
    ) -> AppResult<Self> {
        let http_client =
            UpstreamClient::new(PROVIDER_NAME, base_url, requests_per_second, timeout)?;
        Ok(Self::new(http_client, image_timeout))
    }
}

#[async_trait]
impl EpisodeSourceRepository for ContentProviderAdapter {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn fetch_episodes(&self, anime_id: &str) -> AppResult<Vec<ProviderEpisodes>> {
        let path = format!(
            "info/{}?fields={}",
            urlencoding::encode(anime_id),
            urlencoding::encode("[episodes]")
        );

        log::info!("Content: Getting episodes for '{}'", anime_id);
        let response: ContentInfoResponse = self.http_client.get(&path).await?;

        let bundles = self.mapper.map_info(response);
        if bundles.is_empty() {
            return Err(AppError::NotFound(format!(
                "Content provider has no episodes for '{}'",
                anime_id
            )));
        }

        log::info!(
            "Content: Found {} provider lists for '{}'",
            bundles.len(),
            anime_id
        );
        Ok(bundles)
    }
}

#[async_trait]
impl EpisodeImageRepository for ContentProviderAdapter {
    async fn fetch_episode_images(&self, anime_id: &str) -> AppResult<Vec<ProviderImages>> {
        let path = format!("content-metadata/{}", urlencoding::encode(anime_id));

        let entries: Vec<ContentMetadataEntry> = self
            .http_client
            .get_with_timeout(&path, self.image_timeout)
            .await?;

        Ok(self.mapper.map_images(entries))
    }
}
