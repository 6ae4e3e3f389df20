/// Artist Moodboard - Chrome Extension for collecting reference artists
/// Built with Rust + WASM

pub mod artist_data;
pub mod board;
pub mod links;
pub mod storage;
pub mod views;
pub mod web;

pub use artist_data::{ArtistStore, StoreError};
pub use board::{ArtistBoard, Update};
pub use storage::{ArtistPersistence, LocalStorage, MemoryStorage};
pub use views::{ArtistFilter, BoardView, Moodboard, MoodboardItem};

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export link helpers for JavaScript access
#[wasm_bindgen(js_name = isImageUrl)]
pub fn is_image_url(link: &str) -> bool {
    links::is_image_url(link)
}

#[wasm_bindgen(js_name = formatLinkLabel)]
pub fn format_link_label(link: &str) -> String {
    links::format_link_label(link)
}
