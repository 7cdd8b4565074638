pub mod anime_metadata;
pub mod episode;

pub use anime_metadata::*;
pub use episode::*;
