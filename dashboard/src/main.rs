#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use ui::components::{AppHeader, Sidebar};
use ui::views::{Notifications, SectionPlaceholder, UserProfile};
use ui::DashboardConfig;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[redirect("/", || Route::Notifications {})]
    #[layout(DashboardShell)]
        #[route("/notifications")]
        Notifications {},
        #[route("/users/:id")]
        UserProfile { id: String },
        #[route("/:..segments")]
        Section { segments: Vec<String> },
}

// Embedded shared theme (ui/assets/theme/main.css); the shell ships no styles of its own.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Whistle Dashboard – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global language code; AppHeader writes it when the user picks a locale.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);
    use_context_provider(DashboardConfig::seeded);

    use_hook(|| info!("dashboard starting"));

    rsx! {
        document::Title { "Whistle Dashboard" }
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed on the language so the routed subtree remounts with fresh strings.
        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

/// Sidebar paths without a page of their own, plus anything unknown.
#[component]
fn Section(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! { SectionPlaceholder { path: path } }
}

/// Header on top, sidebar on the left, routed page on the right.
#[component]
fn DashboardShell() -> Element {
    let route = use_route::<Route>();

    rsx! {
        div { class: "dashboard",
            AppHeader {}
            div { class: "dashboard__body",
                Sidebar { current_path: route.to_string() }
                main { class: "dashboard__content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
