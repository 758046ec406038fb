/// UI module exports

pub mod components;
pub mod bookmark_bar;
pub mod bookmark_search;
pub mod newtab;

/// A request to open a bookmark, raised by the bar or the search results
#[derive(Debug, Clone, PartialEq)]
pub struct OpenRequest {
    pub url: String,
    pub new_tab: bool,
}
