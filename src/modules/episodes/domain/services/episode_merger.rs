use super::field_resolver::FieldResolver;
use crate::modules::episodes::domain::entities::{
    AnimeInfo, AnimeMetadata, AnimeTitle, Episode, EpisodeImage, ProviderBundle,
    ProviderEpisodes, ProviderImages, RawEpisode,
};
use crate::modules::episodes::domain::value_objects::EpisodeNumber;

/// Auxiliary data available while merging; any of it may be missing
#[derive(Debug, Clone, Default)]
pub struct MergeSources {
    pub images: Option<Vec<ProviderImages>>,
    pub metadata: Option<AnimeMetadata>,
    pub info: Option<AnimeInfo>,
}

impl MergeSources {
    /// Title used for synthesized descriptions: anime info first, then metadata
    fn anime_title(&self) -> Option<&AnimeTitle> {
        [
            self.info.as_ref().map(|info| &info.title),
            self.metadata.as_ref().map(|metadata| &metadata.title),
        ]
        .into_iter()
        .flatten()
        .find(|title| !title.is_empty())
    }

    /// Image record for an episode: same provider first, then any provider that has the number
    fn image_for(&self, provider_id: &str, number: EpisodeNumber) -> Option<&EpisodeImage> {
        let images = self.images.as_deref()?;

        match images.iter().find(|images| images.provider_id == provider_id) {
            Some(provider_images) => provider_images.find(number),
            None => images.iter().find_map(|images| images.find(number)),
        }
    }
}

/// Turns raw provider episode lists into normalized bundles
pub struct EpisodeMerger;

impl EpisodeMerger {
    /// Merge every bundle, preserving provider and episode order
    pub fn merge(bundles: Vec<ProviderEpisodes>, sources: &MergeSources) -> Vec<ProviderBundle> {
        bundles
            .into_iter()
            .map(|bundle| Self::merge_bundle(bundle, sources))
            .collect()
    }

    fn merge_bundle(bundle: ProviderEpisodes, sources: &MergeSources) -> ProviderBundle {
        let anime_title = sources.anime_title();

        let episodes = bundle
            .episodes
            .into_iter()
            .map(|raw| Self::merge_episode(raw, &bundle.provider_id, sources, anime_title))
            .collect();

        ProviderBundle {
            episodes,
            provider_id: bundle.provider_id,
        }
    }

    fn merge_episode(
        raw: RawEpisode,
        provider_id: &str,
        sources: &MergeSources,
        anime_title: Option<&AnimeTitle>,
    ) -> Episode {
        let image = sources.image_for(provider_id, raw.number);
        let metadata = sources
            .metadata
            .as_ref()
            .and_then(|metadata| metadata.find(raw.number));

        let img = FieldResolver::resolve_image(&raw, image, metadata, sources.info.as_ref());
        let title = FieldResolver::resolve_title(&raw, image, metadata);
        let description = FieldResolver::resolve_description(&raw, image, anime_title);

        Episode {
            id: raw.id,
            img,
            title,
            has_dub: raw.has_dub,
            number: raw.number,
            rating: raw.rating,
            is_filler: raw.is_filler,
            updated_at: raw.updated_at,
            description: Some(description),
        }
    }
}
