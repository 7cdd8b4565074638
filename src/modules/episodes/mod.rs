pub mod application;
pub mod domain;
pub mod handlers;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::EpisodeAggregationService;
pub use domain::{Episode, EpisodesCacheKey, ProviderBundle};
