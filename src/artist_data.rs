/// Data structures for Artist Moodboard
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Failures of store operations, worded as the notification shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Artist already exists!")]
    ArtistExists(String),

    #[error("Artist not found!")]
    ArtistNotFound(String),

    #[error("Link already exists for this artist!")]
    DuplicateLink { artist: String, link: String },

    #[error("Link #{index} does not exist for {artist} ({len} links)")]
    LinkIndexOutOfRange {
        artist: String,
        index: usize,
        len: usize,
    },

    #[error("Please enter an artist name!")]
    EmptyArtistName,

    #[error("Please enter a link!")]
    EmptyLink,

    #[error("Please select an artist first!")]
    NoArtistSelected,
}

/// Artists and their reference links
///
/// Artist names are unique and kept in insertion order. Each artist owns an
/// ordered list of links with no duplicates. Serializes as a plain JSON
/// object: `{ "Artist": ["https://...", ...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ArtistStore {
    artists: IndexMap<String, Vec<String>>,
}

impl ArtistStore {
    pub fn new() -> Self {
        ArtistStore {
            artists: IndexMap::new(),
        }
    }

    /// Build a store from raw decoded data, dropping anything that breaks the invariants
    ///
    /// Blank names and blank links are skipped, names and links are trimmed,
    /// and repeated links under one artist keep only their first occurrence.
    pub fn from_map(raw: IndexMap<String, Vec<String>>) -> Self {
        let mut store = ArtistStore::new();

        for (name, links) in raw {
            let name = name.trim();
            if name.is_empty() {
                log::warn!("Skipping artist with blank name ({} links)", links.len());
                continue;
            }

            let entry = store.artists.entry(name.to_string()).or_default();
            for link in links {
                let link = link.trim();
                if !link.is_empty() && !entry.iter().any(|l| l == link) {
                    entry.push(link.to_string());
                }
            }
        }

        store
    }

    /// Add an artist with no links; returns the stored (trimmed) name
    pub fn add_artist(&mut self, name: &str) -> Result<String, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyArtistName);
        }
        if self.artists.contains_key(name) {
            return Err(StoreError::ArtistExists(name.to_string()));
        }

        self.artists.insert(name.to_string(), Vec::new());
        Ok(name.to_string())
    }

    /// Remove an artist and all of their links
    pub fn delete_artist(&mut self, name: &str) -> Result<Vec<String>, StoreError> {
        self.artists
            .shift_remove(name)
            .ok_or_else(|| StoreError::ArtistNotFound(name.to_string()))
    }

    /// Append a link to an artist's list
    pub fn add_link(&mut self, name: &str, link: &str) -> Result<(), StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::NoArtistSelected);
        }

        let link = link.trim();
        let links = self
            .artists
            .get_mut(name)
            .ok_or_else(|| StoreError::ArtistNotFound(name.to_string()))?;

        if link.is_empty() {
            return Err(StoreError::EmptyLink);
        }
        if links.iter().any(|l| l == link) {
            return Err(StoreError::DuplicateLink {
                artist: name.to_string(),
                link: link.to_string(),
            });
        }

        links.push(link.to_string());
        Ok(())
    }

    /// Remove the link at `index` from an artist's list and return it
    pub fn remove_link(&mut self, name: &str, index: usize) -> Result<String, StoreError> {
        let links = self
            .artists
            .get_mut(name)
            .ok_or_else(|| StoreError::ArtistNotFound(name.to_string()))?;

        if index >= links.len() {
            return Err(StoreError::LinkIndexOutOfRange {
                artist: name.to_string(),
                index,
                len: links.len(),
            });
        }

        Ok(links.remove(index))
    }

    pub fn clear(&mut self) {
        self.artists.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.artists.contains_key(name)
    }

    pub fn links(&self, name: &str) -> Option<&[String]> {
        self.artists.get(name).map(Vec::as_slice)
    }

    pub fn artist_names(&self) -> Vec<String> {
        self.artists.keys().cloned().collect()
    }

    /// Artists and their links, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.artists
            .iter()
            .map(|(name, links)| (name.as_str(), links.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    /// Total number of links across all artists
    pub fn link_count(&self) -> usize {
        self.artists.values().map(Vec::len).sum()
    }
}

impl<'de> Deserialize<'de> for ArtistStore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        IndexMap::<String, Vec<String>>::deserialize(deserializer).map(ArtistStore::from_map)
    }
}
