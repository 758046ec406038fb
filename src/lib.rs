/// New Tab Bookmarks - bookmark bar and fuzzy bookmark search for the new-tab page
/// Built with Rust + WASM + Yew

pub mod bookmark;
pub mod config;
pub mod favicon;
pub mod highlight;
pub mod search;
pub mod selection;
pub mod style;
mod bridge;
pub mod ui;

use wasm_bindgen::prelude::*;

pub use bookmark::{Bookmark, MatchResult, MatchedChar};
pub use highlight::{annotate, segments};
pub use search::{filter, rank, search};
pub use selection::SelectedIndex;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

/// Run the search pipeline on plain JS objects: `[{name, url}]` in,
/// `[{bookmark, annotated_name}]` out
#[wasm_bindgen]
pub fn search_bookmarks(query: &str, bookmarks: JsValue) -> Result<JsValue, JsValue> {
    let bookmarks: Vec<Bookmark> = serde_wasm_bindgen::from_value(bookmarks)?;
    let results = search::search(query, &bookmarks);

    log::debug!("{} of {} bookmarks match {:?}", results.len(), bookmarks.len(), query);

    Ok(serde_wasm_bindgen::to_value(&results)?)
}

// Start the Yew app for the new-tab page
#[wasm_bindgen]
pub fn start_newtab() {
    yew::Renderer::<ui::newtab::NewTab>::new().render();
}
