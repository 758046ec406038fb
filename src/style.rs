/// Styling decisions for the search containers
use crate::config::{Config, UiStyle};

/// Border colour of an unfocused search box
pub const TRANSPARENT_BORDER: &str = "#00000000";

/// Class and inline style for one themed container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerStyle {
    pub class: Option<&'static str>,
    pub style: String,
}

/// Stylesheet for the colours that cannot be set inline:
/// input placeholders and the icon colour classes
pub fn palette_css(config: &Config) -> String {
    let search = &config.search;

    format!(
        ".placeholder-color-search::placeholder{{color:{placeholder};}}\
         .placeholder-color-bookmark-search::placeholder{{color:{placeholder};}}\
         .search-search-icon-color{{color:{search_icon};}}\
         .search-bookmark-icon-color{{color:{bookmark_icon};}}\
         .search-select-icon-color{{color:{select_icon};}}",
        placeholder = search.placeholder_text_color,
        search_icon = search.search_icon_color,
        bookmark_icon = search.bookmark_icon_color,
        select_icon = search.select_icon_color,
    )
}

/// Glass containers get the blur class, solid ones the foreground colour
pub fn container_style(config: &Config) -> ContainerStyle {
    match config.ui.style {
        UiStyle::Glass => ContainerStyle {
            class: Some("glass-effect"),
            style: String::new(),
        },
        UiStyle::Solid => ContainerStyle {
            class: None,
            style: format!("background-color: {};", config.ui.foreground_color),
        },
    }
}

/// Bookmark bar background: same two styles, but solid uses a utility class
pub fn bookmark_bar_class(config: &Config) -> &'static str {
    match config.ui.style {
        UiStyle::Glass => "glass-effect",
        UiStyle::Solid => "bg-foreground",
    }
}

pub fn border_color(focused: bool, config: &Config) -> &str {
    if focused {
        &config.search.focused_border_color
    } else {
        TRANSPARENT_BORDER
    }
}
