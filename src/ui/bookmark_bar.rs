/// Default bookmark bar: one favicon button per bookmark

use yew::prelude::*;
use crate::bookmark::Bookmark;
use crate::config::Config;
use crate::favicon::{Browser, favicon_url};
use crate::style::bookmark_bar_class;
use crate::ui::components::EmptyState;
use crate::ui::OpenRequest;

#[derive(Properties, PartialEq)]
pub struct BookmarkBarProps {
    pub bookmarks: Vec<Bookmark>,
    pub config: Config,
    pub browser: Browser,
    /// Play the initial animation; cleared by the parent once it has run
    pub intro: bool,
    pub on_intro_end: Callback<()>,
    pub on_open: Callback<OpenRequest>,
}

#[function_component(BookmarkBar)]
pub fn bookmark_bar(props: &BookmarkBarProps) -> Html {
    let config = &props.config;
    let text_style = format!("color: {};", config.search.text_color);

    let intro_classes = props
        .intro
        .then(|| config.initial_animation())
        .flatten()
        .map(|animation| classes!(animation.to_string(), "opacity-0"));

    let onanimationend = props.on_intro_end.reform(|_: AnimationEvent| ());

    html! {
        <div
            id="bookmarks-container"
            class={classes!(
                bookmark_bar_class(config),
                "p-2", "rounded-md", "w-full", "overflow-scroll", "scrollbar-hidden",
                intro_classes,
            )}
            {onanimationend}
        >
            if props.bookmarks.is_empty() {
                <div class="overflow-hidden h-16 md:h-20 grid place-items-center">
                    <EmptyState message="No bookmarks yet" color={AttrValue::from(config.search.text_color.clone())} />
                </div>
            } else {
                <div id="inner-bookmark-container" class="grid grid-flow-col gap-2 w-max">
                    {for props.bookmarks.iter().map(|bookmark| {
                        let onclick = {
                            let url = bookmark.url.clone();
                            props.on_open.reform(move |e: MouseEvent| OpenRequest {
                                url: url.clone(),
                                new_tab: e.ctrl_key(),
                            })
                        };

                        html! {
                            <button
                                class="overflow-hidden w-16 md:w-20 aspect-square grid grid-rows-[auto_max-content] place-items-center cursor-pointer"
                                title={bookmark.url.clone()}
                                {onclick}
                            >
                                <img class="w-10 md:w-14" src={favicon_url(&bookmark.url, props.browser)} />
                                <span
                                    class="text-base w-full font-search text-center text-ellipsis overflow-hidden whitespace-nowrap"
                                    style={text_style.clone()}
                                >
                                    {&bookmark.name}
                                </span>
                            </button>
                        }
                    })}
                </div>
            }
        </div>
    }
}
