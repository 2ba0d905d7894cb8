//! Ogone wire-contract adapters.
//!
//! Default implementations of the gateway ports: the canonical SHA
//! signature scheme with its direction whitelists, and the hidden-field
//! HTML hand-off form.

mod form_renderer;
mod parameter_filter;
mod sha_composer;

pub use form_renderer::HiddenFieldFormRenderer;
pub use sha_composer::{AllParametersShaComposer, HashAlgorithm};
