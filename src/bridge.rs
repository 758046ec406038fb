/// Typed wrappers around the extension's JavaScript shim
use crate::bookmark::{Bookmark, BookmarkNode, bookmarks_from_nodes};
use crate::config::{CONFIG_STORAGE_KEY, Config};
use crate::favicon::Browser;
use thiserror::Error;
use wasm_bindgen::prelude::*;

// Import JS bridge functions
#[wasm_bindgen(module = "/newtab.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getBookmarks() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn getStorage(key: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn openBookmark(url: &str, new_tab: bool) -> Result<(), JsValue>;
}

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("{call} failed: {message}")]
    Js { call: &'static str, message: String },

    #[error("failed to parse {what}: {message}")]
    Parse { what: &'static str, message: String },
}

impl BridgeError {
    fn js(call: &'static str, err: JsValue) -> Self {
        BridgeError::Js {
            call,
            message: format!("{:?}", err),
        }
    }

    fn parse(what: &'static str, err: serde_wasm_bindgen::Error) -> Self {
        BridgeError::Parse {
            what,
            message: err.to_string(),
        }
    }
}

/// Every bookmark in the store, folders dropped, store order kept
pub async fn load_bookmarks() -> Result<Vec<Bookmark>, BridgeError> {
    let nodes_js = getBookmarks()
        .await
        .map_err(|e| BridgeError::js("getBookmarks", e))?;

    let nodes: Vec<BookmarkNode> =
        serde_wasm_bindgen::from_value(nodes_js).map_err(|e| BridgeError::parse("bookmarks", e))?;

    Ok(bookmarks_from_nodes(nodes))
}

/// Stored configuration, or the defaults when nothing was saved yet
pub async fn load_config() -> Result<Config, BridgeError> {
    let config_js = getStorage(CONFIG_STORAGE_KEY)
        .await
        .map_err(|e| BridgeError::js("getStorage", e))?;

    if config_js.is_null() || config_js.is_undefined() {
        Ok(Config::default())
    } else {
        serde_wasm_bindgen::from_value(config_js).map_err(|e| BridgeError::parse("config", e))
    }
}

pub async fn open_bookmark(url: &str, new_tab: bool) -> Result<(), BridgeError> {
    openBookmark(url, new_tab)
        .await
        .map_err(|e| BridgeError::js("openBookmark", e))
}

pub fn current_browser() -> Browser {
    let user_agent = web_sys::window()
        .and_then(|window| window.navigator().user_agent().ok())
        .unwrap_or_default();

    Browser::from_user_agent(&user_agent)
}
