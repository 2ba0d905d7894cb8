//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Gateway Ports
//!
//! - `ShaComposer` - Signature composition over a parameter mapping
//! - `FormRenderer` - Markup rendering of the gateway hand-off form
//! - `PaymentListener` - Ordered observer of classified notifications

mod form_renderer;
mod listener;
mod sha_composer;

pub use form_renderer::{FormRenderer, PaymentForm};
pub use listener::PaymentListener;
pub use sha_composer::{ParameterFilter, ShaComposer};
