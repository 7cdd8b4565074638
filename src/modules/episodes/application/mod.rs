pub mod service;

pub use service::EpisodeAggregationService;
