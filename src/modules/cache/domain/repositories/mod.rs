mod cache_repo;

pub use cache_repo::*;
