use dioxus::prelude::*;

/// Round avatar that falls back to initials when the image fails to load.
#[component]
pub fn Avatar(src: String, fallback: String, #[props(default)] alt: String) -> Element {
    let mut failed = use_signal(|| false);

    rsx! {
        span { class: "avatar",
            if failed() {
                span { class: "avatar__fallback", "{fallback}" }
            } else {
                img {
                    class: "avatar__image",
                    src: "{src}",
                    alt: "{alt}",
                    onerror: move |_| failed.set(true),
                }
            }
        }
    }
}
