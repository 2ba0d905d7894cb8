//! Form rendering port.

use std::collections::BTreeMap;

/// The complete input for rendering a gateway hand-off form.
///
/// Carries the endpoint the form posts to and every parameter to submit,
/// including the composed `SHASIGN`. Field order follows the map order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentForm {
    /// Gateway endpoint receiving the POST.
    pub action: String,

    /// Parameters to submit, keyed by wire name.
    pub fields: BTreeMap<String, String>,
}

/// Port for turning a [`PaymentForm`] into presentable markup.
///
/// The output is returned to the caller verbatim; implementations decide
/// the markup dialect and any styling.
pub trait FormRenderer: Send + Sync {
    /// Renders the form.
    fn render(&self, form: &PaymentForm) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn form_renderer_is_object_safe() {
        fn _accepts_dyn(_renderer: &dyn FormRenderer) {}
    }
}
