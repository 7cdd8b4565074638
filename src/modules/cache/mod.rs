pub mod domain;
pub mod infrastructure;

pub use domain::repositories::{CacheRepository, CacheStats};
pub use infrastructure::MemoryCache;
