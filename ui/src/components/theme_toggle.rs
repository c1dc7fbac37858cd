use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::core::theme::Theme;
use crate::t;

/// Flips the `Signal<Theme>` provided by the shell.
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_context::<Signal<Theme>>();

    rsx! {
        button {
            r#type: "button",
            class: "theme-toggle",
            aria_label: t!("theme-toggle-label"),
            "data-theme": theme().as_str(),
            onclick: move |_| {
                let next = theme().toggled();
                debug!(%next, "theme toggled");
                theme.set(next);
            },
            {t!("theme-toggle")}
        }
    }
}
