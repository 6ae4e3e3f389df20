/// View projections: artist listing, JSON text and moodboard

use crate::artist_data::ArtistStore;
use crate::links::{format_link_label, is_image_url};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Filter value meaning "every artist"
pub const ALL_ARTISTS: &str = "all";

/// File name offered for the JSON export
pub const EXPORT_FILENAME: &str = "artists_data.json";

/// Which artists the moodboard draws from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ArtistFilter {
    #[default]
    All,
    Artist(String),
}

impl ArtistFilter {
    /// Parse a select value: "all" (or empty) is every artist, anything else a name
    pub fn parse(value: &str) -> ArtistFilter {
        match value.trim() {
            "" | ALL_ARTISTS => ArtistFilter::All,
            name => ArtistFilter::Artist(name.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ArtistFilter::All => ALL_ARTISTS,
            ArtistFilter::Artist(name) => name,
        }
    }

    /// Fall back to `All` when the named artist is gone from the store
    pub fn retain_valid(self, store: &ArtistStore) -> ArtistFilter {
        match self {
            ArtistFilter::Artist(name) if !store.contains(&name) => ArtistFilter::All,
            filter => filter,
        }
    }
}

/// One link in the artist list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRow {
    pub index: usize,
    pub url: String,
    pub label: String,
    pub is_image: bool,
}

/// One artist card in the artist list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistRow {
    pub name: String,
    pub links: Vec<LinkRow>,
}

/// An image on the moodboard, tagged with its artist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodboardItem {
    pub artist: String,
    pub link: String,
}

/// The moodboard contents; `Empty` drives the "no images yet" state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "items", rename_all = "lowercase")]
pub enum Moodboard {
    Empty,
    Items(Vec<MoodboardItem>),
}

impl Moodboard {
    pub fn is_empty(&self) -> bool {
        matches!(self, Moodboard::Empty)
    }

    pub fn items(&self) -> &[MoodboardItem] {
        match self {
            Moodboard::Empty => &[],
            Moodboard::Items(items) => items,
        }
    }
}

/// Everything the page needs for one full redraw
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub artists: Vec<ArtistRow>,
    pub json: String,
    pub moodboard: Moodboard,
    pub filter: String,
}

/// Artist cards with their links, labels and image flags
pub fn artist_listing(store: &ArtistStore) -> Vec<ArtistRow> {
    store
        .iter()
        .map(|(name, links)| ArtistRow {
            name: name.to_string(),
            links: links
                .iter()
                .enumerate()
                .map(|(index, url)| LinkRow {
                    index,
                    url: url.clone(),
                    label: format_link_label(url),
                    is_image: is_image_url(url),
                })
                .collect(),
        })
        .collect()
}

/// Pretty-printed JSON of the store (2-space indent), as shown, copied and exported
pub fn to_pretty_json(store: &ArtistStore) -> String {
    serde_json::to_string_pretty(store).unwrap_or_else(|e| {
        log::error!("Failed to render artists as JSON: {:?}", e);
        "{}".to_string()
    })
}

/// Image links in the filter's scope, shuffled with `rng`
pub fn moodboard<R: Rng + ?Sized>(store: &ArtistStore, filter: &ArtistFilter, rng: &mut R) -> Moodboard {
    let mut images: Vec<MoodboardItem> = store
        .iter()
        .filter(|(name, _)| match filter {
            ArtistFilter::All => true,
            ArtistFilter::Artist(selected) => selected.as_str() == *name,
        })
        .flat_map(|(name, links)| {
            links
                .iter()
                .filter(|link| is_image_url(link))
                .map(move |link| MoodboardItem {
                    artist: name.to_string(),
                    link: link.clone(),
                })
        })
        .collect();

    if images.is_empty() {
        return Moodboard::Empty;
    }

    images.shuffle(rng);
    Moodboard::Items(images)
}

/// Recompute every view of the store
pub fn build_view<R: Rng + ?Sized>(store: &ArtistStore, filter: &ArtistFilter, rng: &mut R) -> BoardView {
    BoardView {
        artists: artist_listing(store),
        json: to_pretty_json(store),
        moodboard: moodboard(store, filter, rng),
        filter: filter.as_str().to_string(),
    }
}
