use async_trait::async_trait;
use std::time::Duration;

use super::mapper::AnizoneMapper;
use super::models::AnizoneEpisodesResponse;
use crate::modules::episodes::domain::{
    entities::ProviderEpisodes, repositories::EpisodeSourceRepository,
};
use crate::modules::episodes::infrastructure::http_client::UpstreamClient;
use crate::shared::errors::{AppError, AppResult};

const PROVIDER_NAME: &str = "Anizone";

/// Secondary episode-list provider, used when the primary source fails
pub struct AnizoneAdapter {
    http_client: UpstreamClient,
    mapper: AnizoneMapper,
}

impl AnizoneAdapter {
    pub fn new(http_client: UpstreamClient) -> Self {
        Self {
            http_client,
            mapper: AnizoneMapper::new(),
        }
    }

    pub fn for_base_url(
        base_url: &str,
        requests_per_second: f64,
        timeout: Option<Duration>,
    ) -> AppResult<Self> {
        let http_client =
            UpstreamClient::new(PROVIDER_NAME, base_url, requests_per_second, timeout)?;
        Ok(Self::new(http_client))
    }
}

#[async_trait]
impl EpisodeSourceRepository for AnizoneAdapter {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn fetch_episodes(&self, anime_id: &str) -> AppResult<Vec<ProviderEpisodes>> {
        let path = format!("anime/{}/episodes", urlencoding::encode(anime_id));

        log::info!("Anizone: Getting episodes for '{}'", anime_id);
        let response: AnizoneEpisodesResponse = self.http_client.get(&path).await?;

        let bundle = self.mapper.map_episodes(anime_id, response);
        if bundle.episodes.is_empty() {
            return Err(AppError::NotFound(format!(
                "Anizone has no episodes for '{}'",
                anime_id
            )));
        }

        log::info!(
            "Anizone: Found {} episodes for '{}'",
            bundle.episodes.len(),
            anime_id
        );
        Ok(vec![bundle])
    }
}
