mod anime_metadata_repo;
mod episode_image_repo;
mod episode_source_repo;

pub use anime_metadata_repo::*;
pub use episode_image_repo::*;
pub use episode_source_repo::*;
