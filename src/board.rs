/// Board controller: owns the store, persists it and recomputes views

use crate::artist_data::{ArtistStore, StoreError};
use crate::storage::ArtistPersistence;
use crate::views::{build_view, to_pretty_json, ArtistFilter, BoardView, EXPORT_FILENAME};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Result of a successful mutation: the message to show and the fresh views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Update {
    pub notice: String,
    pub view: BoardView,
}

/// Single owner of the artist store
///
/// Every successful mutation writes the whole store to the persistence
/// backend and returns all views recomputed. Failed mutations change
/// nothing and write nothing.
pub struct ArtistBoard<P: ArtistPersistence> {
    store: ArtistStore,
    filter: ArtistFilter,
    persistence: P,
    rng: StdRng,
}

impl<P: ArtistPersistence> ArtistBoard<P> {
    /// Load the persisted store with an entropy-seeded moodboard shuffle
    pub fn load(persistence: P) -> Self {
        Self::with_rng(persistence, StdRng::from_entropy())
    }

    /// Load the persisted store with a reproducible moodboard shuffle
    pub fn with_seed(persistence: P, seed: u64) -> Self {
        Self::with_rng(persistence, StdRng::seed_from_u64(seed))
    }

    fn with_rng(persistence: P, rng: StdRng) -> Self {
        let store = persistence.load();
        log::info!(
            "Loaded {} artists with {} links",
            store.len(),
            store.link_count()
        );

        ArtistBoard {
            store,
            filter: ArtistFilter::All,
            persistence,
            rng,
        }
    }

    pub fn store(&self) -> &ArtistStore {
        &self.store
    }

    pub fn filter(&self) -> &ArtistFilter {
        &self.filter
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    pub fn add_artist(&mut self, name: &str) -> Result<Update, StoreError> {
        let name = self.store.add_artist(name).inspect_err(log_rejected)?;
        log::info!("Added artist {}", name);
        Ok(self.commit(format!("Added artist: {}", name)))
    }

    /// Remove an artist and their links; confirming with the user is the caller's job
    pub fn delete_artist(&mut self, name: &str) -> Result<Update, StoreError> {
        let removed = self.store.delete_artist(name).inspect_err(log_rejected)?;
        log::info!("Deleted artist {} ({} links)", name, removed.len());
        Ok(self.commit(format!("Deleted: {}", name)))
    }

    pub fn add_link(&mut self, name: &str, link: &str) -> Result<Update, StoreError> {
        self.store.add_link(name, link).inspect_err(log_rejected)?;
        log::debug!("Added link to {}", name);
        Ok(self.commit("Link added!".to_string()))
    }

    /// Add the URL of the browser's active tab to an artist
    pub fn add_tab_link(&mut self, name: &str, url: &str) -> Result<Update, StoreError> {
        let mut update = self.add_link(name, url)?;
        update.notice = "Tab URL saved!".to_string();
        Ok(update)
    }

    pub fn remove_link(&mut self, name: &str, index: usize) -> Result<Update, StoreError> {
        let link = self.store.remove_link(name, index).inspect_err(log_rejected)?;
        log::debug!("Removed link {} from {}", link, name);
        Ok(self.commit("Link removed".to_string()))
    }

    /// Delete every artist; confirming with the user is the caller's job
    pub fn clear(&mut self) -> Update {
        self.store.clear();
        log::info!("Cleared all artists");
        self.commit("All data cleared!".to_string())
    }

    /// Change the moodboard filter; nothing is persisted
    pub fn set_filter(&mut self, filter: ArtistFilter) -> BoardView {
        self.filter = filter.retain_valid(&self.store);
        self.view()
    }

    /// Recompute all views, reshuffling the moodboard
    pub fn view(&mut self) -> BoardView {
        build_view(&self.store, &self.filter, &mut self.rng)
    }

    /// File name and contents for the JSON export
    pub fn export(&self) -> (&'static str, String) {
        (EXPORT_FILENAME, to_pretty_json(&self.store))
    }

    fn commit(&mut self, notice: String) -> Update {
        self.persistence.save(&self.store);
        self.filter = std::mem::take(&mut self.filter).retain_valid(&self.store);

        Update {
            notice,
            view: self.view(),
        }
    }
}

fn log_rejected(e: &StoreError) {
    log::debug!("Rejected: {:?}", e);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::views::Moodboard;

    fn create_test_board() -> ArtistBoard<MemoryStorage> {
        let storage =
            MemoryStorage::with_raw(r#"{"A":["http://x.com/1.png"],"B":["http://x.com/page"]}"#);
        ArtistBoard::with_seed(storage, 42)
    }

    #[test]
    fn test_load_from_persistence() {
        let board = create_test_board();

        assert_eq!(board.store().artist_names(), vec!["A".to_string(), "B".to_string()]);
        assert_eq!(board.filter(), &ArtistFilter::All);
    }

    #[test]
    fn test_load_corrupt_starts_empty() {
        let board = ArtistBoard::with_seed(MemoryStorage::with_raw("garbage"), 1);

        assert!(board.store().is_empty());
    }

    #[test]
    fn test_add_artist_persists_and_renders() {
        let mut board = create_test_board();

        let update = board.add_artist("Mucha").unwrap();

        assert_eq!(update.notice, "Added artist: Mucha");
        assert_eq!(update.view.artists.len(), 3);
        assert_eq!(update.view.artists[2].name, "Mucha");
        assert!(update.view.json.contains("\"Mucha\": []"));
        assert!(board.persistence().load().contains("Mucha"));
    }

    #[test]
    fn test_failed_mutation_does_not_persist() {
        let mut board = create_test_board();
        let raw_before = board.persistence().raw();

        let result = board.add_artist("A");

        assert_eq!(result, Err(StoreError::ArtistExists("A".to_string())));
        assert_eq!(result.unwrap_err().to_string(), "Artist already exists!");
        assert_eq!(board.persistence().raw(), raw_before);
    }

    #[test]
    fn test_add_link_and_duplicate() {
        let mut board = create_test_board();

        let update = board.add_link("B", "https://i.imgur.com/abc").unwrap();
        assert_eq!(update.notice, "Link added!");
        assert_eq!(
            board.persistence().load().links("B").unwrap(),
            ["http://x.com/page", "https://i.imgur.com/abc"]
        );

        let err = board.add_link("B", "https://i.imgur.com/abc").unwrap_err();
        assert_eq!(err.to_string(), "Link already exists for this artist!");
    }

    #[test]
    fn test_add_link_unknown_artist() {
        let mut board = create_test_board();

        let err = board.add_link("Nobody", "http://x.com/2.png").unwrap_err();

        assert_eq!(err.to_string(), "Artist not found!");
    }

    #[test]
    fn test_add_link_without_artist_selected() {
        let mut board = create_test_board();
        let raw_before = board.persistence().raw();

        let err = board.add_link("", "http://x.com/1.png").unwrap_err();

        assert_eq!(err.to_string(), "Please select an artist first!");
        assert_eq!(board.persistence().raw(), raw_before);
    }

    #[test]
    fn test_add_tab_link() {
        let mut board = create_test_board();

        let update = board.add_tab_link("B", "https://www.artstation.com/artwork/xyz").unwrap();

        assert_eq!(update.notice, "Tab URL saved!");
        assert_eq!(
            board.persistence().load().links("B").unwrap(),
            ["http://x.com/page", "https://www.artstation.com/artwork/xyz"]
        );

        let err = board.add_tab_link("", "https://example.com").unwrap_err();
        assert_eq!(err, StoreError::NoArtistSelected);
    }

    #[test]
    fn test_remove_link() {
        let mut board = create_test_board();
        board.add_link("A", "http://x.com/2.png").unwrap();

        let update = board.remove_link("A", 0).unwrap();

        assert_eq!(update.view.artists[0].links.len(), 1);
        assert_eq!(update.view.artists[0].links[0].url, "http://x.com/2.png");
        assert_eq!(update.view.artists[0].links[0].index, 0);
        assert_eq!(board.persistence().load().links("A").unwrap(), ["http://x.com/2.png"]);
    }

    #[test]
    fn test_remove_link_out_of_range_is_reported() {
        let mut board = create_test_board();

        let result = board.remove_link("A", 5);

        assert!(matches!(result, Err(StoreError::LinkIndexOutOfRange { index: 5, len: 1, .. })));
        assert_eq!(board.store().links("A").unwrap().len(), 1);
    }

    #[test]
    fn test_delete_artist_resets_filter() {
        let mut board = create_test_board();
        board.set_filter(ArtistFilter::parse("A"));

        let update = board.delete_artist("A").unwrap();

        assert_eq!(update.notice, "Deleted: A");
        assert_eq!(update.view.filter, "all");
        assert_eq!(board.filter(), &ArtistFilter::All);
        assert!(!board.persistence().load().contains("A"));
    }

    #[test]
    fn test_clear() {
        let mut board = create_test_board();

        let update = board.clear();

        assert_eq!(update.notice, "All data cleared!");
        assert!(update.view.artists.is_empty());
        assert_eq!(update.view.json, "{}");
        assert_eq!(update.view.moodboard, Moodboard::Empty);
        assert_eq!(board.persistence().raw(), Some("{}".to_string()));
    }

    #[test]
    fn test_set_filter() {
        let mut board = create_test_board();

        let all = board.set_filter(ArtistFilter::All);
        assert_eq!(all.moodboard.items().len(), 1);
        assert_eq!(all.moodboard.items()[0].artist, "A");

        let only_b = board.set_filter(ArtistFilter::parse("B"));
        assert!(only_b.moodboard.is_empty());

        let unknown = board.set_filter(ArtistFilter::parse("Nobody"));
        assert_eq!(unknown.filter, "all");
    }

    #[test]
    fn test_export() {
        let board = create_test_board();

        let (filename, json) = board.export();

        assert_eq!(filename, "artists_data.json");
        let parsed: ArtistStore = serde_json::from_str(&json).unwrap();
        assert_eq!(&parsed, board.store());
    }

    #[test]
    fn test_reload_after_mutations() {
        let mut board = create_test_board();
        board.add_artist("C").unwrap();
        board.add_link("C", "https://www.behance.net/gallery/1").unwrap();
        board.delete_artist("B").unwrap();

        let reloaded = ArtistBoard::with_seed(MemoryStorage::with_raw(&board.persistence().raw().unwrap()), 2);

        assert_eq!(reloaded.store(), board.store());
        assert_eq!(reloaded.store().artist_names(), vec!["A".to_string(), "C".to_string()]);
    }
}
