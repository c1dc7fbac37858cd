use dioxus::prelude::*;

use crate::components::{MockInbox, ThemeToggle};
use crate::config::LandingConfig;
use crate::t;

#[component]
pub fn Landing() -> Element {
    let config = use_context::<LandingConfig>();
    let mut email = use_signal(String::new);

    rsx! {
        section { class: "hero",
            div { class: "hero__copy",
                div { class: "hero__headline",
                    p { {t!("hero-line")} }
                    span { class: "hero__highlight", {t!("hero-highlight")} }
                }
                p { class: "hero__body", {t!("hero-body")} }
                form {
                    class: "waitlist",
                    onsubmit: move |evt| evt.prevent_default(),
                    input {
                        class: "waitlist__input",
                        r#type: "email",
                        placeholder: t!("waitlist-placeholder"),
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                    button { r#type: "submit", class: "button button--primary",
                        {t!("waitlist-join")}
                    }
                }
            }
            div { class: "hero__showcase",
                p { class: "hero__caption", {t!("inbox-caption")} }
                div { class: "gradient-frame",
                    MockInbox { snapshot: config.inbox.clone() }
                }
            }
        }
        ThemeToggle {}
    }
}
