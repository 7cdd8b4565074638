pub mod entities;
pub mod repositories;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use repositories::*;
pub use services::{EpisodeMerger, FieldResolver, MergeSources};
pub use value_objects::{EpisodeNumber, EpisodesCacheKey};
