use std::sync::Arc;

use crate::modules::cache::MemoryCache;
use crate::modules::episodes::infrastructure::{
    AnizoneAdapter, ContentProviderAdapter, MetadataServiceAdapter,
};
use crate::modules::episodes::EpisodeAggregationService;
use crate::shared::errors::AppResult;
use crate::shared::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub episodes: Arc<EpisodeAggregationService>,
}

impl AppState {
    pub fn new(episodes: EpisodeAggregationService) -> Self {
        Self {
            episodes: Arc::new(episodes),
        }
    }

    /// Wire the upstream adapters, cache and aggregation service from configuration
    pub fn from_config(config: AppConfig) -> AppResult<Self> {
        let rps = config.upstream_requests_per_second;
        let timeout = config.upstream_timeout;

        let content = Arc::new(ContentProviderAdapter::for_base_url(
            &config.content_api_url,
            rps,
            timeout,
            config.image_fetch_timeout,
        )?);
        let anizone = Arc::new(AnizoneAdapter::for_base_url(
            &config.anizone_api_url,
            rps,
            timeout,
        )?);
        let metadata = Arc::new(MetadataServiceAdapter::for_base_url(
            &config.metadata_api_url,
            rps,
            timeout,
        )?);
        let cache = Arc::new(MemoryCache::new(config.cache_max_entries));

        let episodes = EpisodeAggregationService::new(
            content.clone(),
            anizone,
            content,
            metadata,
            cache,
            config.cache_ttl,
        );

        Ok(Self::new(episodes))
    }
}
