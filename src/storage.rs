/// Persistence of the artist store in a key-value backend

use crate::artist_data::ArtistStore;
use std::cell::RefCell;
use std::collections::HashMap;

/// Key the whole store is written under
pub const STORAGE_KEY: &str = "artists";

/// Load/save capability for the artist store
///
/// Both calls are synchronous from the caller's point of view. `load` never
/// fails: missing or unreadable data yields an empty store. `save` is
/// fire-and-forget; backends log their own failures.
pub trait ArtistPersistence {
    fn load(&self) -> ArtistStore;
    fn save(&self, store: &ArtistStore);
}

/// Decode persisted JSON text, `None` if it is not an artist object
pub fn decode_store(raw: &str) -> Option<ArtistStore> {
    match serde_json::from_str::<ArtistStore>(raw) {
        Ok(store) => Some(store),
        Err(e) => {
            log::warn!("Ignoring unreadable stored artists: {}", e);
            None
        }
    }
}

/// Encode the store as compact JSON text for storage
pub fn encode_store(store: &ArtistStore) -> Result<String, String> {
    serde_json::to_string(store).map_err(|e| format!("Failed to serialize artists: {:?}", e))
}

/// In-process backend, used natively and in tests
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-seeded with raw text under `STORAGE_KEY`
    pub fn with_raw(raw: &str) -> Self {
        let storage = Self::new();
        storage
            .entries
            .borrow_mut()
            .insert(STORAGE_KEY.to_string(), raw.to_string());
        storage
    }

    /// Raw text currently stored under `STORAGE_KEY`
    pub fn raw(&self) -> Option<String> {
        self.entries.borrow().get(STORAGE_KEY).cloned()
    }
}

impl ArtistPersistence for MemoryStorage {
    fn load(&self) -> ArtistStore {
        self.raw()
            .and_then(|raw| decode_store(&raw))
            .unwrap_or_default()
    }

    fn save(&self, store: &ArtistStore) {
        match encode_store(store) {
            Ok(json) => {
                self.entries
                    .borrow_mut()
                    .insert(STORAGE_KEY.to_string(), json);
            }
            Err(e) => log::error!("{}", e),
        }
    }
}

/// Browser `window.localStorage` backend
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

impl LocalStorage {
    /// Attach to the page's local storage; without one, loads are empty and saves are dropped
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage is not available, artists will not be persisted");
        }
        LocalStorage { storage }
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl ArtistPersistence for LocalStorage {
    fn load(&self) -> ArtistStore {
        let Some(storage) = &self.storage else {
            return ArtistStore::new();
        };

        match storage.get_item(STORAGE_KEY) {
            Ok(Some(raw)) => decode_store(&raw).unwrap_or_default(),
            Ok(None) => ArtistStore::new(),
            Err(e) => {
                log::warn!("Failed to read storage: {:?}", e);
                ArtistStore::new()
            }
        }
    }

    fn save(&self, store: &ArtistStore) {
        let Some(storage) = &self.storage else {
            return;
        };

        let result = encode_store(store).and_then(|json| {
            storage
                .set_item(STORAGE_KEY, &json)
                .map_err(|e| format!("Failed to save storage: {:?}", e))
        });

        if let Err(e) = result {
            log::error!("{}", e);
        }
    }
}
