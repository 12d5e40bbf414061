//! Internationalization (i18n) support for `p13viz-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   es-CL/p13viz-ui.ftl   (fallback/reference)
//!   en-US/p13viz-ui.ftl   (additional locale)
//! ```
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! let label = t!("nav-simulator");
//! ```
//!
//! To add a new locale, copy `es-CL/p13viz-ui.ftl` to `i18n/<lang-id>/p13viz-ui.ftl`,
//! translate each value keeping IDs and placeholders identical, and run the tests.
//!
//! Chart titles, axis labels and export filenames are deliberately not
//! localized: exported images must match the project sheet.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::warn;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-simulator")
///     t!("export-button", filename = "Energia_Generada.png")
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
const DOMAIN: &str = "p13viz-ui";

pub const FALLBACK_LANGUAGE: &str = "es-CL";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = select(&requested) {
            warn!(%err, "failed selecting languages; continuing with fallback");
        }
    });
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()),
    };
    select(&[lang])
}

/// Load bundles for `requested`, then turn bidi isolation off again.
///
/// Placeholders end up in filenames, paths and numbers, so U+2068/U+2069 must
/// never wrap them. `i18n_embed::select` builds fresh bundles with isolation on.
fn select(requested: &[LanguageIdentifier]) -> Result<(), i18n_embed::I18nEmbedError> {
    i18n_embed::select(&*LOADER, &Localizations, requested)?;
    LOADER.set_use_isolating(false);
    Ok(())
}

/// Language currently in effect (first of the loader's active languages).
pub fn current_language() -> String {
    LOADER
        .current_languages()
        .first()
        .map(|l| l.to_string())
        .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string())
}

/// List available (embedded) language identifiers.
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
    use super::*;
    use crate::i18n::fl;

    const BIDI_MARKS: &[char] = &['\u{2068}', '\u{2069}'];

    #[test]
    fn both_locales_are_embedded() {
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == FALLBACK_LANGUAGE));
        assert!(langs.iter().any(|l| l == "en-US"));
    }

    // Single test so language switches on the shared loader never race.
    #[test]
    fn switching_language_changes_lookups() {
        init();
        let button = fl!(&*LOADER, "export-button", filename = "Energia_Generada.png");
        assert!(button.contains("Energia_Generada.png"));
        assert!(!button.contains(BIDI_MARKS));

        set_language("en-US").expect("en-US selectable");
        assert_eq!(fl!(&*LOADER, "nav-simulator"), "Simulator");
        assert_eq!(current_language(), "en-US");

        set_language("es-CL").expect("es-CL selectable");
        assert_eq!(fl!(&*LOADER, "nav-simulator"), "Simulador");

        // Unparseable tags are ignored.
        set_language("not a tag!").expect("ignored");
        assert_eq!(fl!(&*LOADER, "nav-simulator"), "Simulador");

        // Every reload keeps placeholders free of bidi marks.
        for tag in ["en-US", "es-CL"] {
            set_language(tag).expect("locale selectable");
            let saved = fl!(&*LOADER, "export-done-saved", path = "/tmp/Ingresos_Totales.png");
            assert!(saved.contains("/tmp/Ingresos_Totales.png"), "{tag}: {saved}");
            assert!(!saved.contains(BIDI_MARKS), "{tag}: {saved:?}");
        }
    }
}
