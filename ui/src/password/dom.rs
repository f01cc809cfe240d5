use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use super::visibility::{sync_companion, FieldGroup, MaskableField, ToggleControl};
use crate::core::config::PageConfig;

impl MaskableField for HtmlInputElement {
    fn input_type(&self) -> String {
        self.type_()
    }

    fn set_input_type(&self, value: &str) {
        self.set_type(value);
    }
}

impl ToggleControl for HtmlInputElement {
    type Group = Element;

    fn is_checked(&self) -> bool {
        self.checked()
    }

    fn enclosing_group(&self, selector: &str) -> Option<Element> {
        self.closest(selector).ok().flatten()
    }
}

impl FieldGroup for Element {
    type Field = HtmlInputElement;

    fn first_field(&self, selector: &str) -> Option<HtmlInputElement> {
        self.query_selector(selector)
            .ok()
            .flatten()?
            .dyn_into::<HtmlInputElement>()
            .ok()
    }
}

/// Wire every show/hide checkbox on the page. Returns how many were wired.
pub fn install_toggles(document: &Document, config: &PageConfig) -> u32 {
    let checkboxes = match document.query_selector_all(&config.toggle_selector) {
        Ok(list) => list,
        Err(_) => {
            tracing::warn!(selector = %config.toggle_selector, "invalid toggle selector");
            return 0;
        }
    };

    let mut wired = 0;
    for index in 0..checkboxes.length() {
        let Some(checkbox) = checkboxes
            .get(index)
            .and_then(|node| node.dyn_into::<HtmlInputElement>().ok())
        else {
            continue;
        };

        let group_selector = config.group_selector.clone();
        let field_selector = config.field_selector.clone();
        let target = checkbox.clone();
        let on_change = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            sync_companion(&target, &group_selector, &field_selector);
        });

        if checkbox
            .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
            .is_ok()
        {
            wired += 1;
        }
        // Listeners live as long as the page.
        on_change.forget();
    }

    tracing::debug!(wired, "password toggles installed");
    wired
}
