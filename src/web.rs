/// JavaScript-facing handle for the extension page

use crate::artist_data::StoreError;
use crate::board::{ArtistBoard, Update};
use crate::storage::LocalStorage;
use crate::views::{ArtistFilter, BoardView, EXPORT_FILENAME};
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getActiveTabUrl() -> Result<JsValue, JsValue>;
}

/// The artist board as seen from the page script
///
/// Mutations return `{ notice, view }`; failures throw the notice text.
/// The page does all DOM work from the returned view.
#[wasm_bindgen]
pub struct ArtistBoardHandle {
    board: Rc<RefCell<ArtistBoard<LocalStorage>>>,
}

#[wasm_bindgen]
impl ArtistBoardHandle {
    #[wasm_bindgen(constructor)]
    pub fn new() -> ArtistBoardHandle {
        ArtistBoardHandle {
            board: Rc::new(RefCell::new(ArtistBoard::load(LocalStorage::new()))),
        }
    }

    #[wasm_bindgen(js_name = addArtist)]
    pub fn add_artist(&self, name: &str) -> Result<JsValue, JsValue> {
        update_to_js(self.board.borrow_mut().add_artist(name))
    }

    #[wasm_bindgen(js_name = deleteArtist)]
    pub fn delete_artist(&self, name: &str) -> Result<JsValue, JsValue> {
        update_to_js(self.board.borrow_mut().delete_artist(name))
    }

    #[wasm_bindgen(js_name = addLink)]
    pub fn add_link(&self, name: &str, link: &str) -> Result<JsValue, JsValue> {
        update_to_js(self.board.borrow_mut().add_link(name, link))
    }

    #[wasm_bindgen(js_name = removeLink)]
    pub fn remove_link(&self, name: &str, index: usize) -> Result<JsValue, JsValue> {
        update_to_js(self.board.borrow_mut().remove_link(name, index))
    }

    pub fn clear(&self) -> Result<JsValue, JsValue> {
        to_js(&self.board.borrow_mut().clear())
    }

    /// Pass the filter select's value ("all" or an artist name)
    #[wasm_bindgen(js_name = setFilter)]
    pub fn set_filter(&self, value: &str) -> Result<JsValue, JsValue> {
        let view: BoardView = self.board.borrow_mut().set_filter(ArtistFilter::parse(value));
        to_js(&view)
    }

    pub fn view(&self) -> Result<JsValue, JsValue> {
        to_js(&self.board.borrow_mut().view())
    }

    /// Pretty JSON for the clipboard and the export file
    #[wasm_bindgen(js_name = exportJson)]
    pub fn export_json(&self) -> String {
        let (_, json) = self.board.borrow().export();
        json
    }

    #[wasm_bindgen(js_name = exportFilename)]
    pub fn export_filename() -> String {
        EXPORT_FILENAME.to_string()
    }

    /// Add the active browser tab's URL to `artist`; resolves to `{ notice, view }`
    #[wasm_bindgen(js_name = saveCurrentTab)]
    pub fn save_current_tab(&self, artist: String) -> js_sys::Promise {
        let board = self.board.clone();

        future_to_promise(async move {
            let url = current_tab_url().await?;
            let result = board.borrow_mut().add_tab_link(&artist, &url);
            let update = update_to_js(result)?;
            log::info!("Saved tab URL for {}", artist);
            Ok(update)
        })
    }
}

impl Default for ArtistBoardHandle {
    fn default() -> Self {
        Self::new()
    }
}

// Helper functions

async fn current_tab_url() -> Result<String, JsValue> {
    let url_js = getActiveTabUrl()
        .await
        .map_err(|e| JsValue::from_str(&format!("Failed to get active tab: {:?}", e)))?;

    url_js
        .as_string()
        .filter(|url| !url.is_empty())
        .ok_or_else(|| JsValue::from_str("Active tab has no URL"))
}

fn update_to_js(result: Result<Update, StoreError>) -> Result<JsValue, JsValue> {
    match result {
        Ok(update) => to_js(&update),
        Err(e) => Err(JsValue::from_str(&e.to_string())),
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize: {:?}", e)))
}
