/// Bookmark search overlay: input, ranked results, keyboard selection

use yew::prelude::*;
use web_sys::HtmlInputElement;
use crate::bookmark::Bookmark;
use crate::config::Config;
use crate::search::search;
use crate::selection::SelectedIndex;
use crate::style::{border_color, container_style};
use crate::ui::OpenRequest;
use crate::ui::components::{EmptyState, ResultRow};

#[derive(Properties, PartialEq)]
pub struct BookmarkSearchProps {
    pub bookmarks: Vec<Bookmark>,
    pub config: Config,
    pub active: bool,
    pub intro: bool,
    pub on_close: Callback<()>,
    pub on_unfocus: Callback<()>,
    pub on_open: Callback<OpenRequest>,
}

#[function_component(BookmarkSearch)]
pub fn bookmark_search(props: &BookmarkSearchProps) -> Html {
    let query = use_state(String::new);
    let selected = use_state(SelectedIndex::default);
    let focused = use_state(|| false);
    let input_ref = use_node_ref();

    // Focus on open; clear the query and give focus back on close
    {
        let input_ref = input_ref.clone();
        let query = query.clone();
        let selected = selected.clone();

        use_effect_with(props.active, move |active| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                if *active {
                    let _ = input.focus();
                } else {
                    let _ = input.blur();
                    query.set(String::new());
                    selected.set(SelectedIndex::default());
                }
            }
            || ()
        });
    }

    let config = &props.config;
    let results = search(&query, &props.bookmarks);
    let current = (*selected).clamp(results.len());

    let on_input = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                query.set(input.value());
            }
        })
    };

    let on_keydown = {
        let selected = selected.clone();
        let on_close = props.on_close.clone();
        let on_open = props.on_open.clone();
        let urls: Vec<String> = results.iter().map(|r| r.bookmark.url.clone()).collect();

        Callback::from(move |e: KeyboardEvent| match e.key().as_str() {
            "ArrowDown" => {
                e.prevent_default();
                selected.set((*selected).select_next(urls.len()));
            }
            "ArrowUp" => {
                e.prevent_default();
                let clamped = (*selected).clamp(urls.len()).unwrap_or_default();
                selected.set(clamped.select_previous());
            }
            "Enter" => {
                e.prevent_default();
                if let Some(url) = (*selected).selected(&urls) {
                    on_open.emit(OpenRequest {
                        url: url.clone(),
                        new_tab: e.ctrl_key(),
                    });
                }
            }
            "Escape" => {
                e.prevent_default();
                on_close.emit(());
            }
            _ => {}
        })
    };

    let on_focus = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(true))
    };

    let on_blur = {
        let focused = focused.clone();
        let on_unfocus = props.on_unfocus.clone();
        Callback::from(move |_: FocusEvent| {
            focused.set(false);
            on_unfocus.emit(());
        })
    };

    let container = container_style(config);
    let intro_class = props
        .intro
        .then(|| config.initial_animation())
        .flatten()
        .map(str::to_string);
    let text_color = AttrValue::from(config.search.text_color.clone());
    let placeholder_text_color = AttrValue::from(config.search.placeholder_text_color.clone());

    html! {
        <div id="bookmark-search-section" class={classes!(if props.active { "grid" } else { "hidden" }, "gap-2")}>
            <div
                id="bookmark-search-container"
                class={classes!(
                    container.class,
                    "flex", "gap-2", "p-2", "rounded-md", "border-2",
                    (!*focused).then_some("border-transparent"),
                    intro_class,
                )}
                style={format!("{} border-color: {};", container.style, border_color(*focused, config))}
            >
                <span class="search-bookmark-icon-color font-semibold">{"#"}</span>
                <input
                    ref={input_ref}
                    id="bookmark-search-input"
                    type="text"
                    autocomplete="off"
                    placeholder="Search bookmarks"
                    class="placeholder-color-bookmark-search bg-transparent outline-none w-full"
                    style={format!("color: {};", config.search.text_color)}
                    value={(*query).clone()}
                    oninput={on_input}
                    onkeydown={on_keydown}
                    onfocus={on_focus}
                    onblur={on_blur}
                />
            </div>

            <div
                id="bookmark-search-results-container"
                class={classes!(container.class, "p-2", "rounded-md", "font-search")}
                style={format!("{} color: {};", container.style, config.search.text_color)}
            >
                if results.is_empty() {
                    <EmptyState message="No results!" />
                } else {
                    {for results.into_iter().enumerate().map(|(index, result)| {
                        let url = result.bookmark.url.clone();
                        let onopen = props.on_open.reform(move |new_tab: bool| OpenRequest {
                            url: url.clone(),
                            new_tab,
                        });

                        html! {
                            <ResultRow
                                {result}
                                selected={current.map(SelectedIndex::get) == Some(index)}
                                text_color={text_color.clone()}
                                placeholder_text_color={placeholder_text_color.clone()}
                                {onopen}
                            />
                        }
                    })}
                }
            </div>
        </div>
    }
}
