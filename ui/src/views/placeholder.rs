use dioxus::prelude::*;

use crate::config::DashboardConfig;
use crate::t;

/// Target of the user links in the notifications table.
#[component]
pub fn UserProfile(id: String) -> Element {
    rsx! {
        section { class: "page page-placeholder",
            h1 { class: "page__title", {t!("user-title", id = id.clone())} }
            p { class: "page__subtitle", {t!("user-placeholder")} }
        }
    }
}

/// Sidebar sections without content yet. The heading comes from the nav entry
/// that owns `path`; paths no entry claims render as not found.
#[component]
pub fn SectionPlaceholder(path: String) -> Element {
    let config = use_context::<DashboardConfig>();
    let heading = config
        .nav
        .active_entry(&path)
        .map(|entry| entry.title.clone());

    rsx! {
        section { class: "page page-placeholder",
            if let Some(title) = heading {
                h1 { class: "page__title", "{title}" }
                p { class: "page__subtitle", {t!("section-placeholder")} }
            } else {
                h1 { class: "page__title", {t!("not-found-title")} }
                p { class: "page__subtitle", {t!("not-found-body", path = path.clone())} }
            }
        }
    }
}
