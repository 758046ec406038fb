/// Data structures for the new-tab bookmark bar and search
use serde::{Deserialize, Serialize};

/// A bookmark as the search engine sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub name: String,
    pub url: String,
}

impl Bookmark {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Bookmark {
        Bookmark {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// One character of a bookmark name, tagged with whether the query consumed it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedChar {
    pub ch: char,
    pub is_match: bool,
}

/// A search hit together with its highlighted name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub bookmark: Bookmark,
    pub annotated_name: Vec<MatchedChar>,
}

/// A raw node from the browser bookmark store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkNode {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub date_group_modified: Option<f64>,
}

impl BookmarkNode {
    /// Folders carry `dateGroupModified` and never have a URL worth opening.
    pub fn is_folder(&self) -> bool {
        self.date_group_modified.is_some()
    }

    pub fn into_bookmark(self) -> Option<Bookmark> {
        if self.is_folder() {
            return None;
        }

        self.url.map(|url| Bookmark {
            name: self.title,
            url,
        })
    }
}

/// Flatten store nodes into bookmarks, keeping store order
pub fn bookmarks_from_nodes(nodes: Vec<BookmarkNode>) -> Vec<Bookmark> {
    nodes
        .into_iter()
        .filter_map(BookmarkNode::into_bookmark)
        .collect()
}
