mod cache_key;
mod episode_number;

pub use cache_key::EpisodesCacheKey;
pub use episode_number::EpisodeNumber;
