/// Favicon URL construction for bookmark bar icons
use url::{Url, form_urlencoded};

/// Size in px requested from the Chromium favicon endpoint
const FAVICON_SIZE: u32 = 64;

/// Browser family, as far as favicon lookup is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Browser {
    Chromium,
    Firefox,
}

impl Browser {
    /// Firefox advertises itself in the user agent; everything else is
    /// treated as Chromium (Chrome, Edge, Brave, Opera, ...).
    pub fn from_user_agent(user_agent: &str) -> Browser {
        if user_agent.contains("Firefox") {
            Browser::Firefox
        } else {
            Browser::Chromium
        }
    }
}

/// Build the favicon URL for a bookmark
///
/// - Chromium: the extension `_favicon` endpoint, which resolves against the
///   extension origin and serves the browser's cached icon
/// - Firefox: no such endpoint, so ask an icon service for the page host
///
/// Returns an empty string when the bookmark URL has no host.
pub fn favicon_url(page_url: &str, browser: Browser) -> String {
    match browser {
        Browser::Chromium => {
            let encoded: String = form_urlencoded::byte_serialize(page_url.as_bytes()).collect();
            format!("/_favicon/?pageUrl={}&size={}", encoded, FAVICON_SIZE)
        }
        Browser::Firefox => extract_host(page_url)
            .map(|host| format!("https://icons.duckduckgo.com/ip3/{}.ico", host))
            .unwrap_or_default(),
    }
}

/// Extract the lowercase host of a URL, if it has one
fn extract_host(page_url: &str) -> Option<String> {
    let parsed = Url::parse(page_url.trim()).ok()?;
    let host = parsed.host_str()?;

    if host.is_empty() {
        None
    } else {
        Some(host.to_lowercase())
    }
}
