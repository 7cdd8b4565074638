use async_trait::async_trait;
use std::time::Duration;

use super::mapper::MetadataMapper;
use super::models::{AnimeInfoResponse, EpisodeMetadataResponse};
use crate::modules::episodes::domain::{
    entities::{AnimeInfo, AnimeMetadata},
    repositories::AnimeMetadataRepository,
};
use crate::modules::episodes::infrastructure::http_client::UpstreamClient;
use crate::shared::errors::AppResult;

const PROVIDER_NAME: &str = "Metadata";

/// Episode-metadata / anime-info service adapter
pub struct MetadataServiceAdapter {
    http_client: UpstreamClient,
    mapper: MetadataMapper,
}

impl MetadataServiceAdapter {
    pub fn new(http_client: UpstreamClient) -> Self {
        Self {
            http_client,
            mapper: MetadataMapper::new(),
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
impl AnimeMetadataRepository for MetadataServiceAdapter {
    async fn fetch_episode_metadata(&self, anime_id: &str) -> AppResult<AnimeMetadata> {
        let path = format!("episodes/{}", urlencoding::encode(anime_id));
        let response: EpisodeMetadataResponse = self.http_client.get(&path).await?;

        let metadata = self.mapper.map_metadata(response);
        log::debug!(
            "Metadata: {} episode records for '{}'",
            metadata.episodes.len(),
            anime_id
        );
        Ok(metadata)
    }

    async fn fetch_anime_info(&self, anime_id: &str) -> AppResult<AnimeInfo> {
        let path = format!("info/{}", urlencoding::encode(anime_id));
        let response: AnimeInfoResponse = self.http_client.get(&path).await?;
        Ok(self.mapper.map_info(response))
    }
}
