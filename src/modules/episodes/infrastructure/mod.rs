pub mod adapters;
pub mod http_client;

pub use adapters::{AnizoneAdapter, ContentProviderAdapter, MetadataServiceAdapter};
pub use http_client::UpstreamClient;
