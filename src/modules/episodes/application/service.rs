use std::sync::Arc;
use std::time::Duration;

use crate::modules::cache::{CacheRepository, CacheStats};
use crate::modules::episodes::domain::{
    entities::{ProviderBundle, ProviderEpisodes},
    repositories::{AnimeMetadataRepository, EpisodeImageRepository, EpisodeSourceRepository},
    services::{EpisodeMerger, MergeSources},
    value_objects::EpisodesCacheKey,
};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::{LogContext, TimedOperation};

/// Builds the merged episode listing for an anime and caches it as JSON
pub struct EpisodeAggregationService {
    primary: Arc<dyn EpisodeSourceRepository>,
    fallback: Arc<dyn EpisodeSourceRepository>,
    images: Arc<dyn EpisodeImageRepository>,
    metadata: Arc<dyn AnimeMetadataRepository>,
    cache: Arc<dyn CacheRepository>,
    cache_ttl: Duration,
}

impl EpisodeAggregationService {
    pub fn new(
        primary: Arc<dyn EpisodeSourceRepository>,
        fallback: Arc<dyn EpisodeSourceRepository>,
        images: Arc<dyn EpisodeImageRepository>,
        metadata: Arc<dyn AnimeMetadataRepository>,
        cache: Arc<dyn CacheRepository>,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            primary,
            fallback,
            images,
            metadata,
            cache,
            cache_ttl,
        }
    }

    /// Serialized episode listing for `anime_id`, served from cache when possible
    ///
    /// A cache hit returns the stored string unchanged.
    pub async fn get_episodes_json(&self, anime_id: &str) -> AppResult<String> {
        let key = EpisodesCacheKey::for_anime(anime_id)?;
        let anime_id = key.anime_id();

        match self.cache.get(key.as_str()).await {
            Ok(Some(cached)) => {
                LogContext::cache_lookup(key.as_str(), true);
                return Ok(cached);
            }
            Ok(None) => LogContext::cache_lookup(key.as_str(), false),
            Err(e) => log::warn!("Cache read for {} failed, treating as miss: {}", key, e),
        }

        let bundles = self.aggregate(anime_id).await?;
        let json = serde_json::to_string(&bundles)?;

        if let Err(e) = self
            .cache
            .set(key.as_str(), json.clone(), self.cache_ttl)
            .await
        {
            log::warn!("Failed to cache episodes for {}: {}", key, e);
        }

        Ok(json)
    }

    /// Merge episode lists with auxiliary data
    ///
    /// The first pass needs images, metadata and anime info. If any of them
    /// fails, a second pass runs without images and tolerates missing
    /// metadata or info. Failure of both episode sources is final.
    pub async fn aggregate(&self, anime_id: &str) -> AppResult<Vec<ProviderBundle>> {
        let timer = TimedOperation::new(&format!("aggregate episodes for {}", anime_id));

        let sources = match self.fetch_all_sources(anime_id).await {
            Ok(sources) => sources,
            Err(e) => {
                log::warn!(
                    "Auxiliary data for {} unavailable ({}), retrying without images",
                    anime_id,
                    e
                );
                self.fetch_sources_without_images(anime_id).await
            }
        };

        let bundles = self.fetch_episode_lists(anime_id).await?;
        let merged = EpisodeMerger::merge(bundles, &sources);

        let episode_count: usize = merged.iter().map(|bundle| bundle.episodes.len()).sum();
        timer.finish_with_info(&format!(
            "{} providers, {} episodes",
            merged.len(),
            episode_count
        ));

        Ok(merged)
    }

    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.stats().await
    }

    async fn fetch_all_sources(&self, anime_id: &str) -> AppResult<MergeSources> {
        let (images, metadata, info) = tokio::try_join!(
            self.images.fetch_episode_images(anime_id),
            self.metadata.fetch_episode_metadata(anime_id),
            self.metadata.fetch_anime_info(anime_id),
        )?;

        Ok(MergeSources {
            images: Some(images),
            metadata: Some(metadata),
            info: Some(info),
        })
    }

    async fn fetch_sources_without_images(&self, anime_id: &str) -> MergeSources {
        let (metadata, info) = tokio::join!(
            self.metadata.fetch_episode_metadata(anime_id),
            self.metadata.fetch_anime_info(anime_id),
        );

        MergeSources {
            images: None,
            metadata: metadata
                .map_err(|e| log::debug!("Episode metadata for {} missing: {}", anime_id, e))
                .ok(),
            info: info
                .map_err(|e| log::debug!("Anime info for {} missing: {}", anime_id, e))
                .ok(),
        }
    }

    async fn fetch_episode_lists(&self, anime_id: &str) -> AppResult<Vec<ProviderEpisodes>> {
        let primary_error = match self.primary.fetch_episodes(anime_id).await {
            Ok(bundles) => return Ok(bundles),
            Err(e) => e,
        };

        LogContext::provider_fallback(
            self.primary.provider_name(),
            self.fallback.provider_name(),
            &primary_error,
        );

        self.fallback.fetch_episodes(anime_id).await.map_err(|e| {
            log::error!(
                "{} also failed for {}: {}",
                self.fallback.provider_name(),
                anime_id,
                e
            );
            AppError::EpisodesUnavailable(anime_id.to_string())
        })
    }
}
