//! Fluent strings for the chart panel, embedded from `ui/i18n/<locale>/`.
//!
//! The loader starts from the browser's preferred languages; the page can
//! then pin one through [`set_language`]. Text ends up on a canvas, so bidi
//! isolation marks are switched off every time bundles are (re)loaded.
use std::sync::{Once, PoisonError, RwLock, RwLockReadGuard};

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::I18nEmbedError;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// `t!("chart-loading")`, `t!("chart-tooltip-date", date = label)`.
#[macro_export]
macro_rules! t {
    ($key:literal) => {{
        let _switch = $crate::i18n::lookup_guard();
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    }};
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {{
        let _switch = $crate::i18n::lookup_guard();
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    }};
}

const DOMAIN: &str = "examboard-ui";
const FALLBACK: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK.parse().expect("fallback tag parses");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Held for writing while bundles are swapped and isolation is reset, so a
/// lookup never sees the freshly loaded, still-isolating bundles.
static SWITCH: RwLock<()> = RwLock::new(());

#[doc(hidden)]
pub fn lookup_guard() -> RwLockReadGuard<'static, ()> {
    SWITCH.read().unwrap_or_else(PoisonError::into_inner)
}

/// Load the browser's preferred languages. Later calls do nothing.
pub fn init() {
    INIT.call_once(|| {
        if let Err(err) = select(&requested_languages()) {
            tracing::warn!(%err, "language selection failed; using the fallback");
        }
    });
}

/// Switch to `tag` when a bundled locale serves it. Returns whether the
/// selection changed hands; unparseable or unbundled tags leave the current
/// language in place.
pub fn set_language(tag: &str) -> Result<bool, I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        return Ok(false);
    };
    if !is_bundled(&lang) {
        return Ok(false);
    }
    select(&[lang]).map(|_| true)
}

fn select(requested: &[LanguageIdentifier]) -> Result<(), I18nEmbedError> {
    let _switch = SWITCH.write().unwrap_or_else(PoisonError::into_inner);
    i18n_embed::select(&*LOADER, &Localizations, requested)?;
    LOADER.set_use_isolating(false);
    Ok(())
}

/// Locale directories shipped in the binary, e.g. `["en-US", "fr-FR"]`.
pub fn available_languages() -> Vec<String> {
    let mut langs: Vec<String> = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(str::to_string))
        .collect();
    langs.sort();
    langs.dedup();
    langs
}

/// Negotiation matches on the primary language, so `fr` and `fr-CA` are
/// served by `fr-FR`.
fn is_bundled(lang: &LanguageIdentifier) -> bool {
    available_languages()
        .iter()
        .filter_map(|tag| tag.parse::<LanguageIdentifier>().ok())
        .any(|bundled| bundled.language == lang.language)
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

    #[test]
    fn bundled_locales_are_discoverable() {
        assert_eq!(available_languages(), ["en-US", "fr-FR"]);
    }

    #[test]
    fn english_lookup() {
        assert!(set_language("en-US").unwrap());
        assert_eq!(crate::t!("chart-axis-score"), "Score");
    }

    #[test]
    fn placeables_are_not_isolated() {
        set_language("en-US").unwrap();
        let line = crate::t!("chart-tooltip-score", score = "15", max = "20");
        assert_eq!(line, "Score: 15 / 20");
        assert!(!line.contains(['\u{2068}', '\u{2069}']));
    }

    #[test]
    fn isolation_stays_off_after_init() {
        init();
        set_language("en-US").unwrap();
        let line = crate::t!("chart-tooltip-performance", percent = "75.0");
        assert_eq!(line, "Performance: 75.0%");
    }

    #[test]
    fn unusable_tags_are_refused() {
        assert!(!set_language("not a tag!").unwrap());
        assert!(!set_language("de-DE").unwrap());
        assert!(!set_language("ja").unwrap());
    }

    #[test]
    fn regional_variants_match_their_language() {
        assert!(is_bundled(&"en-GB".parse().unwrap()));
        assert!(is_bundled(&"fr".parse().unwrap()));
        assert!(!is_bundled(&"de-DE".parse().unwrap()));
    }
}
