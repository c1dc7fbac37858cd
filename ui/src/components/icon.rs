use dioxus::prelude::*;

use crate::core::icons::Icon;

#[component]
pub fn IconGlyph(icon: Icon, #[props(default)] class: String) -> Element {
    rsx! {
        span {
            class: "{icon.css_class()} {class}",
            "data-icon": icon.name(),
            aria_hidden: "true",
            "{icon.glyph()}"
        }
    }
}
