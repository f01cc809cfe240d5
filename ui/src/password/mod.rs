//! Show/hide toggles for password fields on the login, signup and reset pages.

mod visibility;
pub use visibility::{
    apply_visibility, sync_companion, FieldGroup, FieldVisibility, MaskableField, ToggleControl,
};

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
pub use dom::install_toggles;
