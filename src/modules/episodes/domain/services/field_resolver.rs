use regex::Regex;
use std::sync::OnceLock;

use crate::modules::episodes::domain::entities::{
    AnimeInfo, AnimeTitle, EpisodeImage, EpisodeMetadata, RawEpisode,
};
use crate::modules::episodes::domain::value_objects::EpisodeNumber;

/// Titles providers emit when they have no real one: "EP1", "Ep. 2", "Episode 3"
fn placeholder_title_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^\s*ep(isode)?\.?\s*\d+\s*$")
            .expect("placeholder title pattern is valid")
    })
}

/// The value as given, unless it is empty or whitespace
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}

/// Resolves each episode field from the available sources in fixed precedence order
///
/// Every resolver takes the first non-blank candidate; the final fallback is
/// either the provider's own value or a synthesized one.
pub struct FieldResolver;

impl FieldResolver {
    /// image match → metadata thumbnail → anime cover → provider image
    pub fn resolve_image(
        raw: &RawEpisode,
        image: Option<&EpisodeImage>,
        metadata: Option<&EpisodeMetadata>,
        info: Option<&AnimeInfo>,
    ) -> Option<String> {
        [
            image.and_then(|image| image.img.as_deref()),
            metadata.and_then(|metadata| metadata.thumbnail.as_deref()),
            info.and_then(|info| info.cover_image.as_deref()),
            raw.img.as_deref(),
        ]
        .into_iter()
        .find_map(non_blank)
        .map(String::from)
    }

    /// provider title (unless placeholder) → image title → metadata title → "Episode N"
    pub fn resolve_title(
        raw: &RawEpisode,
        image: Option<&EpisodeImage>,
        metadata: Option<&EpisodeMetadata>,
    ) -> String {
        let raw_title =
            non_blank(raw.title.as_deref()).filter(|title| !Self::is_placeholder(title));

        [
            raw_title,
            image.and_then(|image| non_blank(image.title.as_deref())),
            metadata.and_then(|metadata| non_blank(metadata.title.as_deref())),
        ]
        .into_iter()
        .flatten()
        .next()
        .map(String::from)
        .unwrap_or_else(|| format!("Episode {}", raw.number))
    }

    /// provider description → image description → "<ordinal> Episode of <anime>"
    pub fn resolve_description(
        raw: &RawEpisode,
        image: Option<&EpisodeImage>,
        anime_title: Option<&AnimeTitle>,
    ) -> String {
        [
            raw.description.as_deref(),
            image.and_then(|image| image.description.as_deref()),
        ]
        .into_iter()
        .find_map(non_blank)
        .map(String::from)
        .unwrap_or_else(|| Self::synthesized_description(raw.number, anime_title))
    }

    /// "12th Episode of <anime>"; in-between numbers read "Episode 12.5 of <anime>"
    pub fn synthesized_description(
        number: EpisodeNumber,
        anime_title: Option<&AnimeTitle>,
    ) -> String {
        let episode = match number.as_whole() {
            Some(whole) => format!("{} Episode", Self::ordinal(whole)),
            None => format!("Episode {}", number),
        };

        match anime_title.and_then(AnimeTitle::preferred) {
            Some(title) => format!("{} of {}", episode, title),
            None => episode,
        }
    }

    /// Whether a provider title is a stand-in such as "EP1"
    pub fn is_placeholder(title: &str) -> bool {
        placeholder_title_pattern().is_match(title)
    }

    /// English ordinal: 1st, 2nd, 3rd, 4th, 11th, 12th, 13th, 21st, ...
    pub fn ordinal(number: i64) -> String {
        let magnitude = number.unsigned_abs();
        let suffix = match (magnitude % 10, magnitude % 100) {
            (_, 11..=13) => "th",
            (1, _) => "st",
            (2, _) => "nd",
            (3, _) => "rd",
            _ => "th",
        };
        format!("{}{}", number, suffix)
    }
}
