//! Aggregation service tests
//!
//! Drives the two-pass aggregation with in-process repository fakes.

mod utils;

use async_trait::async_trait;
use miru_episodes_lib::modules::cache::{CacheRepository, MemoryCache};
use miru_episodes_lib::modules::episodes::domain::{
    AnimeInfo, AnimeMetadata, AnimeMetadataRepository, EpisodeImageRepository,
    EpisodeSourceRepository, ProviderEpisodes, ProviderImages,
};
use miru_episodes_lib::modules::episodes::EpisodeAggregationService;
use miru_episodes_lib::shared::errors::{AppError, AppResult};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use utils::factories::*;

struct FakeSource {
    name: &'static str,
    bundles: Option<Vec<ProviderEpisodes>>,
    calls: AtomicUsize,
}

impl FakeSource {
    fn ok(name: &'static str, bundles: Vec<ProviderEpisodes>) -> Arc<Self> {
        Arc::new(Self {
            name,
            bundles: Some(bundles),
            calls: AtomicUsize::new(0),
        })
    }

    fn failing(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            name,
            bundles: None,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EpisodeSourceRepository for FakeSource {
    fn provider_name(&self) -> &'static str {
        self.name
    }

    async fn fetch_episodes(&self, anime_id: &str) -> AppResult<Vec<ProviderEpisodes>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.bundles
            .clone()
            .ok_or_else(|| AppError::ApiError(format!("{} down for {}", self.name, anime_id)))
    }
}

struct FakeImages(Option<Vec<ProviderImages>>);

#[async_trait]
impl EpisodeImageRepository for FakeImages {
    async fn fetch_episode_images(&self, _anime_id: &str) -> AppResult<Vec<ProviderImages>> {
        self.0
            .clone()
            .ok_or_else(|| AppError::ExternalServiceError("Request timeout".to_string()))
    }
}

struct FakeMetadata {
    metadata: Option<AnimeMetadata>,
    info: Option<AnimeInfo>,
}

#[async_trait]
impl AnimeMetadataRepository for FakeMetadata {
    async fn fetch_episode_metadata(&self, _anime_id: &str) -> AppResult<AnimeMetadata> {
        self.metadata
            .clone()
            .ok_or_else(|| AppError::NotFound("metadata".to_string()))
    }

    async fn fetch_anime_info(&self, _anime_id: &str) -> AppResult<AnimeInfo> {
        self.info
            .clone()
            .ok_or_else(|| AppError::NotFound("info".to_string()))
    }
}

fn service(
    primary: Arc<FakeSource>,
    fallback: Arc<FakeSource>,
    images: FakeImages,
    metadata: FakeMetadata,
    cache: Arc<MemoryCache>,
) -> EpisodeAggregationService {
    EpisodeAggregationService::new(
        primary,
        fallback,
        Arc::new(images),
        Arc::new(metadata),
        cache,
        Duration::from_secs(60),
    )
}

fn full_metadata() -> FakeMetadata {
    FakeMetadata {
        metadata: Some(anime_metadata(
            "Mob Psycho 100",
            &[(2, Some("https://thumb/2.jpg"), Some("Doubts About Youth"))],
        )),
        info: Some(anime_info("Mob Psycho 100", Some("https://cover.jpg"))),
    }
}

#[tokio::test]
async fn cached_listing_is_byte_identical() {
    let primary = FakeSource::ok(
        "Content",
        vec![provider_episodes(
            "zoro",
            vec![RawEpisodeFactory::new(1).with_title("Self-Proclaimed Psychic").build()],
        )],
    );
    let fallback = FakeSource::failing("Anizone");
    let cache = Arc::new(MemoryCache::default());

    let service = service(
        primary.clone(),
        fallback.clone(),
        FakeImages(Some(vec![])),
        full_metadata(),
        cache.clone(),
    );

    let first = service.get_episodes_json("32182").await.unwrap();
    let second = service.get_episodes_json("32182").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(primary.calls(), 1);
    assert_eq!(fallback.calls(), 0);
    assert_eq!(
        cache.get("episodesData:32182").await.unwrap().as_deref(),
        Some(first.as_str())
    );
}

#[tokio::test]
async fn surrounding_whitespace_shares_cache_entry() {
    let primary = FakeSource::ok(
        "Content",
        vec![provider_episodes("zoro", vec![RawEpisodeFactory::new(1).build()])],
    );
    let service = service(
        primary.clone(),
        FakeSource::failing("Anizone"),
        FakeImages(Some(vec![])),
        full_metadata(),
        Arc::new(MemoryCache::default()),
    );

    service.get_episodes_json("32182").await.unwrap();
    service.get_episodes_json(" 32182 ").await.unwrap();

    assert_eq!(primary.calls(), 1);
}

#[tokio::test]
async fn fallback_listing_uses_anizone_provider_id() {
    let primary = FakeSource::failing("Content");
    let fallback = FakeSource::ok(
        "Anizone",
        vec![provider_episodes(
            "anizone",
            vec![
                RawEpisodeFactory::new(1).with_title("Self-Proclaimed Psychic").build(),
                RawEpisodeFactory::new(2).build(),
            ],
        )],
    );

    let service = service(
        primary.clone(),
        fallback.clone(),
        FakeImages(Some(vec![])),
        full_metadata(),
        Arc::new(MemoryCache::default()),
    );

    let json = service.get_episodes_json("32182").await.unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(primary.calls(), 1);
    assert_eq!(fallback.calls(), 1);
    assert_eq!(parsed.as_array().unwrap().len(), 1);
    assert_eq!(parsed[0]["providerId"], "anizone");
    assert_eq!(parsed[0]["episodes"][1]["title"], "Doubts About Youth");
    assert_eq!(parsed[0]["episodes"][1]["img"], "https://thumb/2.jpg");
}

#[tokio::test]
async fn both_sources_failing_is_not_cached() {
    let cache = Arc::new(MemoryCache::default());
    let service = service(
        FakeSource::failing("Content"),
        FakeSource::failing("Anizone"),
        FakeImages(Some(vec![])),
        full_metadata(),
        cache.clone(),
    );

    let result = service.get_episodes_json("32182").await;

    assert!(matches!(result, Err(AppError::EpisodesUnavailable(_))));
    assert!(cache.is_empty());
}

#[tokio::test]
async fn image_failure_falls_back_to_metadata() {
    let primary = FakeSource::ok(
        "Content",
        vec![provider_episodes(
            "zoro",
            vec![RawEpisodeFactory::new(2).with_title("EP2").build()],
        )],
    );

    let service = service(
        primary.clone(),
        FakeSource::failing("Anizone"),
        FakeImages(None),
        full_metadata(),
        Arc::new(MemoryCache::default()),
    );

    let merged = service.aggregate("32182").await.unwrap();
    let episode = &merged[0].episodes[0];

    assert_eq!(primary.calls(), 1);
    assert_eq!(episode.title, "Doubts About Youth");
    assert_eq!(episode.img.as_deref(), Some("https://thumb/2.jpg"));
    assert_eq!(
        episode.description.as_deref(),
        Some("2nd Episode of Mob Psycho 100")
    );
}

#[tokio::test]
async fn second_pass_tolerates_missing_auxiliary_data() {
    let primary = FakeSource::ok(
        "Content",
        vec![provider_episodes(
            "zoro",
            vec![RawEpisodeFactory::new(1).with_title("EP1").build()],
        )],
    );

    let service = service(
        primary,
        FakeSource::failing("Anizone"),
        FakeImages(None),
        FakeMetadata {
            metadata: None,
            info: None,
        },
        Arc::new(MemoryCache::default()),
    );

    let merged = service.aggregate("32182").await.unwrap();
    let episode = &merged[0].episodes[0];

    assert_eq!(episode.title, "Episode 1");
    assert_eq!(episode.img, None);
    assert_eq!(episode.description.as_deref(), Some("1st Episode"));
}
