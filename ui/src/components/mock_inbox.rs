use dioxus::prelude::*;

use crate::components::{Avatar, IconGlyph};
use crate::core::icons::Icon;
use crate::core::inbox::{InboxItem, InboxSnapshot, Segment};

/// Static rendering of an inbox widget for the landing hero.
#[component]
pub fn MockInbox(snapshot: InboxSnapshot) -> Element {
    let InboxSnapshot {
        title,
        mark_all_label,
        items,
    } = snapshot;

    rsx! {
        div { class: "mock-inbox",
            div { class: "mock-inbox__header",
                p { class: "mock-inbox__title", "{title}" }
                p { class: "mock-inbox__mark-all", "{mark_all_label}" }
            }
            for (index, item) in items.into_iter().enumerate() {
                {render_item(index, item)}
            }
        }
    }
}

fn render_item(index: usize, item: InboxItem) -> Element {
    let class = if item.unread {
        "mock-inbox__item mock-inbox__item--unread"
    } else {
        "mock-inbox__item"
    };

    rsx! {
        div { key: "{index}", class: "{class}",
            div { class: "mock-inbox__body",
                {match item.actor {
                    Some(actor) => rsx! {
                        Avatar { src: actor.avatar_url, fallback: actor.initials }
                    },
                    None => rsx! {
                        span { class: "mock-inbox__system",
                            IconGlyph { icon: Icon::CircleAlert }
                        }
                    },
                }}
                div {
                    p { class: "mock-inbox__text",
                        for segment in item.text.iter() {
                            {match segment {
                                Segment::Plain(text) => rsx! { "{text}" },
                                Segment::Strong(text) => rsx! {
                                    span { class: "mock-inbox__strong", "{text}" }
                                },
                            }}
                        }
                    }
                    p { class: "mock-inbox__age", "{item.age}" }
                }
            }
            if item.unread {
                span { class: "mock-inbox__dot" }
            }
        }
    }
}
