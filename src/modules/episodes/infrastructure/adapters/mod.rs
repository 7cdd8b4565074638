pub mod anizone;
pub mod common;
pub mod content;
pub mod metadata;

pub use anizone::AnizoneAdapter;
pub use content::ContentProviderAdapter;
pub use metadata::MetadataServiceAdapter;
