//! Browser glue shared by the page enhancements. Everything here is a no-op
//! off the web target so the logic above it stays testable natively.

#[cfg(target_arch = "wasm32")]
pub fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Set the inline `box-shadow` of the element `id`.
pub fn set_box_shadow(id: &str, value: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let Some(element) = document()
            .and_then(|doc| doc.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            tracing::debug!(id, "box-shadow target left the page");
            return;
        };
        if element.style().set_property("box-shadow", value).is_err() {
            tracing::debug!(id, "box-shadow update rejected");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::trace!(id, value, "box-shadow update skipped off-web");
    }
}

/// Detach the element `id`, if it is still on the page.
pub fn remove_element(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        match document().and_then(|doc| doc.get_element_by_id(id)) {
            Some(element) => element.remove(),
            None => tracing::debug!(id, "element already gone"),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::trace!(id, "element removal skipped off-web");
    }
}
