/// New-tab page root: loads config and bookmarks, owns overlay state

use yew::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{EventTarget, HtmlInputElement, Node};
use patternfly_yew::prelude::{Alert, AlertType, Spinner};
use crate::bookmark::Bookmark;
use crate::bridge::{BridgeError, current_browser, load_bookmarks, load_config, open_bookmark};
use crate::config::Config;
use crate::style::palette_css;
use crate::ui::OpenRequest;
use crate::ui::bookmark_bar::BookmarkBar;
use crate::ui::bookmark_search::BookmarkSearch;

/// Key that opens the bookmark search from anywhere outside an input
const BOOKMARK_SEARCH_KEY: &str = "b";

/// Everything the bar and the overlay need before they can render
#[derive(Debug, Clone, PartialEq)]
struct Loaded {
    config: Config,
    bookmarks: Vec<Bookmark>,
}

#[derive(Debug, Clone, PartialEq)]
enum LoadState {
    Loading,
    Ready(Loaded),
    Error(String),
}

/// Combine both bridge loads. A missing or broken config falls back to the
/// defaults; failing to read the bookmarks is an error.
fn settle(
    config: Result<Config, BridgeError>,
    bookmarks: Result<Vec<Bookmark>, BridgeError>,
) -> LoadState {
    let config = config.unwrap_or_else(|e| {
        log::warn!("Using default config: {}", e);
        Config::default()
    });

    match bookmarks {
        Ok(bookmarks) => {
            log::debug!("Loaded {} bookmarks", bookmarks.len());
            LoadState::Ready(Loaded { config, bookmarks })
        }
        Err(e) => {
            log::error!("Failed to load bookmarks: {}", e);
            LoadState::Error(format!("Failed to load bookmarks: {}", e))
        }
    }
}

/// True when the event was raised by `node` itself rather than bubbled up
/// from a descendant
fn raised_by(target: Option<EventTarget>, node: Option<Node>) -> bool {
    match (target.and_then(|t| t.dyn_into::<Node>().ok()), node) {
        (Some(target), Some(node)) => JsValue::from(target) == JsValue::from(node),
        _ => false,
    }
}

#[function_component(NewTab)]
pub fn new_tab() -> Html {
    let state = use_state(|| LoadState::Loading);
    let root_ref = use_node_ref();
    let browser = use_state(current_browser);
    let search_active = use_state(|| false);
    let intro = use_state(|| true);
    let leaving = use_state(|| None::<String>);

    // Load config and bookmarks on mount
    {
        let state = state.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                let config = load_config().await;
                let bookmarks = load_bookmarks().await;
                state.set(settle(config, bookmarks));
            });
            || ()
        });
    }

    // Until loading settles only the palette defaults are in play
    let config = match &*state {
        LoadState::Ready(loaded) => loaded.config.clone(),
        _ => Config::default(),
    };
    let shortcut_enabled = matches!(&*state, LoadState::Ready(loaded) if loaded.config.search.enabled);

    // Global shortcut for the bookmark search
    {
        let search_active = search_active.clone();

        use_effect_with(shortcut_enabled, move |enabled| {
            let enabled = *enabled;
            let listener = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                if !enabled || e.ctrl_key() || e.meta_key() || e.alt_key() {
                    return;
                }
                if e.key() != BOOKMARK_SEARCH_KEY {
                    return;
                }
                // already typing somewhere
                if e.target().is_some_and(|t| t.dyn_ref::<HtmlInputElement>().is_some()) {
                    return;
                }

                e.prevent_default();
                search_active.set(true);
            });

            let document = web_sys::window().and_then(|w| w.document());
            if let Some(document) = &document {
                let _ = document
                    .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref());
            }

            move || {
                if let Some(document) = document {
                    let _ = document.remove_event_listener_with_callback(
                        "keydown",
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    let on_open = {
        let leaving = leaving.clone();
        let animated = config.bookmark_animation().is_some();

        Callback::from(move |request: OpenRequest| {
            if request.new_tab || !animated {
                open_now(request);
            } else {
                leaving.set(Some(request.url));
            }
        })
    };

    // The exit animation finished: now navigate
    let on_animation_end = {
        let leaving = leaving.clone();
        let root_ref = root_ref.clone();
        Callback::from(move |e: AnimationEvent| {
            // the bar's intro animation bubbles up here too
            if !raised_by(e.target(), root_ref.get()) {
                return;
            }
            if let Some(url) = (*leaving).clone() {
                leaving.set(None);
                open_now(OpenRequest { url, new_tab: false });
            }
        })
    };

    let on_close = {
        let search_active = search_active.clone();
        Callback::from(move |_: ()| search_active.set(false))
    };

    let on_intro_end = {
        let intro = intro.clone();
        Callback::from(move |_: ()| intro.set(false))
    };

    let leaving_class = leaving
        .is_some()
        .then(|| config.bookmark_animation())
        .flatten()
        .map(str::to_string);

    html! {
        <div
            id="newtab"
            ref={root_ref}
            class={classes!("grid", "gap-4", "p-4", leaving_class)}
            onanimationend={on_animation_end}
        >
            <style>{palette_css(&config)}</style>

            {match &*state {
                LoadState::Loading => html! {
                    <div class="loading-text-center">
                        <Spinner />
                    </div>
                },
                LoadState::Error(err) => html! {
                    <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                        {err.clone()}
                    </Alert>
                },
                LoadState::Ready(loaded) => html! {
                    <>
                        if loaded.config.search.enabled {
                            <BookmarkSearch
                                bookmarks={loaded.bookmarks.clone()}
                                config={loaded.config.clone()}
                                active={*search_active}
                                intro={*intro}
                                {on_close}
                                on_unfocus={on_intro_end.clone()}
                                on_open={on_open.clone()}
                            />
                        }

                        <BookmarkBar
                            bookmarks={loaded.bookmarks.clone()}
                            config={loaded.config.clone()}
                            browser={*browser}
                            intro={*intro}
                            {on_intro_end}
                            {on_open}
                        />
                    </>
                },
            }}
        </div>
    }
}

fn open_now(request: OpenRequest) {
    spawn_local(async move {
        if let Err(e) = open_bookmark(&request.url, request.new_tab).await {
            log::error!("Failed to open {}: {}", request.url, e);
        }
    });
}
