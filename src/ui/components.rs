/// Reusable UI components

use yew::prelude::*;
use crate::bookmark::{MatchResult, MatchedChar};
use crate::highlight::segments;

#[derive(Properties, PartialEq)]
pub struct HighlightedNameProps {
    pub annotated: Vec<MatchedChar>,
    pub text_color: AttrValue,
    pub placeholder_text_color: AttrValue,
}

/// Bookmark name with the characters the query consumed in the text colour
/// and the rest in the placeholder colour
#[function_component(HighlightedName)]
pub fn highlighted_name(props: &HighlightedNameProps) -> Html {
    html! {
        <span>
            {for segments(&props.annotated).into_iter().map(|segment| {
                let color = if segment.is_match {
                    &props.text_color
                } else {
                    &props.placeholder_text_color
                };
                html! {
                    <span style={format!("color: {};", color)}>{segment.text}</span>
                }
            })}
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultRowProps {
    pub result: MatchResult,
    pub selected: bool,
    pub text_color: AttrValue,
    pub placeholder_text_color: AttrValue,
    /// Fired with `true` when the row should open in a new tab
    pub onopen: Callback<bool>,
}

#[function_component(ResultRow)]
pub fn result_row(props: &ResultRowProps) -> Html {
    let onclick = props.onopen.reform(|e: MouseEvent| e.ctrl_key());

    html! {
        <div class="bookmark-result cursor-pointer" bookmark-result-url={props.result.bookmark.url.clone()} {onclick}>
            if props.selected {
                <span class="search-select-icon-color font-semibold">{"\u{a0}>"}</span>
                {" "}
            } else {
                {"\u{a0}\u{a0}\u{a0}"}
            }
            <HighlightedName
                annotated={props.result.annotated_name.clone()}
                text_color={props.text_color.clone()}
                placeholder_text_color={props.placeholder_text_color.clone()}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct EmptyStateProps {
    pub message: AttrValue,
    #[prop_or_default]
    pub color: Option<AttrValue>,
}

#[function_component(EmptyState)]
pub fn empty_state(props: &EmptyStateProps) -> Html {
    let style = props
        .color
        .as_ref()
        .map(|color| format!("color: {};", color));

    html! {
        <p class="text-center font-message" {style}>{props.message.clone()}</p>
    }
}
