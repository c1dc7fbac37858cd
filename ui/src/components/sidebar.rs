use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::components::IconGlyph;
use crate::config::DashboardConfig;
use crate::core::nav::{NavConfig, NavEntry, NavGroup};
use crate::t;

// Sidebar stylesheet (also inlined for release native builds)
const SIDEBAR_CSS: Asset = asset!("/assets/styling/sidebar.css");
const SIDEBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/sidebar.css"
));

/// Dashboard sidebar.
///
/// The shell passes `current_path` (its `Route` rendered with `Display`), so
/// this crate never needs to know a platform's route enum. Links are plain
/// string targets taken from the [`NavConfig`] in context; exactly one entry
/// (the longest matching prefix) is highlighted.
#[component]
pub fn Sidebar(current_path: String) -> Element {
    let config = use_context::<DashboardConfig>();
    let nav: NavConfig = config.nav;
    let highlights = nav.highlights(&current_path);

    debug!(path = %current_path, active = ?nav.active_href(&current_path), "sidebar render");

    // Groups render in `entries()` order, so each one owns a contiguous run of flags.
    let footer_offset: usize = nav.groups.iter().map(|g| g.entries.len()).sum();
    let mut offset = 0;
    let groups: Vec<(&NavGroup, &[bool])> = nav
        .groups
        .iter()
        .map(|group| {
            let flags = &highlights[offset..offset + group.entries.len()];
            offset += group.entries.len();
            (group, flags)
        })
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: SIDEBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{SIDEBAR_CSS_INLINE}" }
        }

        aside { class: "sidebar", aria_label: t!("nav-sidebar-label"),
            div { class: "sidebar__groups",
                for (group, flags) in groups.into_iter() {
                    {render_group(group, flags)}
                }
            }
            div { class: "sidebar__footer",
                div { class: "sidebar__divider" }
                {render_group(&nav.footer, &highlights[footer_offset..])}
            }
        }
    }
}

fn render_group(group: &NavGroup, flags: &[bool]) -> Element {
    rsx! {
        div { key: "{group.title}", class: "sidebar__group",
            if !group.title.is_empty() {
                p { class: "sidebar__group-title", "{group.title}" }
            }
            nav { class: "sidebar__links",
                for (entry, is_active) in group.entries.iter().zip(flags.iter().copied()) {
                    {render_entry(entry, is_active)}
                }
            }
        }
    }
}

fn render_entry(entry: &NavEntry, is_active: bool) -> Element {
    let class = if is_active {
        "sidebar__link sidebar__link--active"
    } else {
        "sidebar__link"
    };

    rsx! {
        Link {
            key: "{entry.title}",
            class: "{class}",
            to: entry.href.clone(),
            IconGlyph { icon: entry.icon, class: "sidebar__icon" }
            span { class: "sidebar__label", "{entry.title}" }
        }
    }
}
