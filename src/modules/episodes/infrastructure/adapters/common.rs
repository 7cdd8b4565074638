//! Conversions shared by the provider mappers

use crate::modules::episodes::domain::value_objects::EpisodeNumber;

/// Episode number from a wire value
///
/// Providers send numbers as JSON floats and in-between episodes (recaps numbered
/// 12.5) are kept; only NaN and infinities are rejected.
pub fn episode_number(raw: f64) -> Option<EpisodeNumber> {
    EpisodeNumber::new(raw)
}

/// `None` when blank, otherwise the value as the provider sent it
pub fn clean(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
