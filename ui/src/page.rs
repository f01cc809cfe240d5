//! Page-ready entry point running both enhancements exactly once.

use crate::chart::ChartMount;
use crate::core::config::PageConfig;

/// Body attribute a page may use to override [`PageConfig`] defaults.
pub const CONFIG_ATTRIBUTE: &str = "data-examboard-config";

/// Run `f` once the document's structure is available: right away when the
/// document has finished parsing, otherwise on `DOMContentLoaded`.
pub fn on_ready(f: impl FnOnce() + 'static) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::{closure::Closure, JsCast};

        let Some(document) = crate::core::platform::document() else {
            tracing::warn!("no document; page enhancements skipped");
            return;
        };
        if document.ready_state() != "loading" {
            f();
            return;
        }
        let callback = Closure::once_into_js(f);
        if document
            .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
            .is_err()
        {
            tracing::error!("could not wait for DOMContentLoaded");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    f();
}

/// Resolve the page configuration from an optional JSON override.
/// Malformed overrides are logged and ignored.
pub fn resolve_config(raw: Option<&str>) -> PageConfig {
    match raw {
        Some(json) => PageConfig::from_json(json).unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring malformed page configuration");
            PageConfig::default()
        }),
        None => PageConfig::default(),
    }
}

/// Wire the password toggles and claim the score chart container. Returns
/// the chart hand-off when this page carries a chart.
pub fn enhance() -> Option<ChartMount> {
    crate::i18n::init();

    #[cfg(target_arch = "wasm32")]
    {
        let document = crate::core::platform::document()?;
        if let Some(lang) = document
            .document_element()
            .and_then(|root| root.get_attribute("lang"))
            .filter(|lang| !lang.trim().is_empty())
        {
            match crate::i18n::set_language(&lang) {
                Ok(true) => tracing::debug!(%lang, "using page language"),
                Ok(false) => {
                    tracing::debug!(%lang, "page language not bundled; keeping browser choice")
                }
                Err(err) => tracing::warn!(%err, %lang, "page language could not be loaded"),
            }
        }

        let raw = document.body().and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE));
        let config = resolve_config(raw.as_deref());

        crate::password::install_toggles(&document, &config);
        crate::chart::prepare(&document, &config)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("page enhancements need a browser document");
        None
    }
}
