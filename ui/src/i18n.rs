//! Internationalization (i18n) support for `whistle-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `i18n_embed::fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/whistle-ui.ftl   (fallback/reference)
//!   es-ES/whistle-ui.ftl   (additional locale)
//! ```
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! crate::i18n::init(); // idempotent
//! let title = t!("notifications-title");
//! ```
//!
//! Only page chrome is localized. Navigation titles and the landing inbox
//! snapshot are configuration data and render as given.
use std::sync::Once;

use dioxus::logger::tracing::warn;
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Translation macro routing every lookup through [`LOADER`].
///
/// ```ignore
/// t!("notifications-title")
/// t!("not-found-body", path = "/nowhere")
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback file is `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "whistle-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    let loader = FluentLanguageLoader::new(DOMAIN, fallback);
    loader.set_use_isolating(false);
    loader
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!("failed selecting languages ({err}); continuing with fallback");
        }
    });
}

/// Switch language at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Tag of the bundle the loader is currently serving, e.g. `es-ES` when the
/// requester picked the browser or desktop locale.
pub fn current_language() -> String {
    LOADER
        .current_languages()
        .first()
        .map(|lang| lang.to_string())
        .unwrap_or_else(|| LOADER.fallback_language().to_string())
}

/// Embedded language identifiers, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::i18n::fl;

    // Tests that switch the shared loader run one at a time.
    static SWITCH: Mutex<()> = Mutex::new(());

    #[test]
    fn embedded_locales_are_listed() {
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == "en-US"));
        assert!(langs.iter().any(|l| l == "es-ES"));
    }

    #[test]
    fn brand_name_is_not_translated() {
        init();
        assert_eq!(fl!(&*LOADER, "brand-name"), "Whistle");
    }

    #[test]
    fn current_language_tracks_selection() {
        let _guard = SWITCH.lock().unwrap_or_else(|e| e.into_inner());
        init();
        set_language("es-ES").unwrap();
        assert_eq!(current_language(), "es-ES");
        assert!(available_languages().contains(&current_language()));
        set_language("en-US").unwrap();
        assert_eq!(current_language(), "en-US");
    }

    #[test]
    fn unknown_language_keeps_current_bundle() {
        let _guard = SWITCH.lock().unwrap_or_else(|e| e.into_inner());
        init();
        let before = fl!(&*LOADER, "brand-name");
        let _ = set_language("zz-ZZ");
        let after = fl!(&*LOADER, "brand-name");
        assert_eq!(before, after);
    }
}
