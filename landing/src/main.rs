use dioxus::prelude::*;

use ui::components::SiteHeader;
use ui::core::theme::Theme;
use ui::views::Landing;
use ui::LandingConfig;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(LandingShell)]
    #[route("/")]
    Landing {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    let config = use_context_provider(LandingConfig::default);
    // Theme collaborator: the signal is both the current value and the setter.
    let theme = use_signal(|| config.initial_theme);
    use_context_provider(|| theme);

    rsx! {
        document::Title { "Whistle" }
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// Landing-specific layout wrapping the shared sticky header.
#[component]
fn LandingShell() -> Element {
    let theme = use_context::<Signal<Theme>>();

    rsx! {
        div { class: "landing {theme().css_class()}",
            SiteHeader {}
            Outlet::<Route> {}
        }
    }
}
