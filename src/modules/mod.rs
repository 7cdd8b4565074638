pub mod cache;
pub mod episodes;
