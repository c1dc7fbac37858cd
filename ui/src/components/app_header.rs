use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::components::Avatar;
use crate::config::DashboardConfig;
use crate::i18n;
use crate::t;

// Header stylesheet (also inlined for release native builds)
const HEADER_CSS: Asset = asset!("/assets/styling/header.css");
const HEADER_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/header.css"
));

/// Dashboard top bar: brand, locale switcher and account avatar.
///
/// Changing the language writes the new tag into the `Signal<String>` the shell
/// provides (when present), which remounts the routed subtree with fresh
/// strings.
#[component]
pub fn AppHeader() -> Element {
    i18n::init();

    let config = use_context::<DashboardConfig>();
    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    debug!(lang = %lang_marker, "app header render");

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => debug!("language switch to {val} failed: {err}"),
        }
    };

    let account = config.account;

    rsx! {
        document::Link { rel: "stylesheet", href: HEADER_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{HEADER_CSS_INLINE}" }
        }

        header { id: "app-header", class: "app-header",
            div { style: "display:none", "{lang_marker}" }
            h1 { class: "app-header__brand", {t!("brand-name")} }

            div { class: "app-header__actions",
                if show_switcher {
                    div { class: "app-header__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            for code in langs().into_iter() {
                                option { key: "{code}", value: "{code}", "{code}" }
                            }
                        }
                    }
                }

                Avatar {
                    src: account.avatar_url.clone(),
                    fallback: account.initials.clone(),
                    alt: t!("account-avatar-alt"),
                }
            }
        }
    }
}
