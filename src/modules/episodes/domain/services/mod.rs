pub mod episode_merger;
pub mod field_resolver;

pub use episode_merger::{EpisodeMerger, MergeSources};
pub use field_resolver::FieldResolver;
