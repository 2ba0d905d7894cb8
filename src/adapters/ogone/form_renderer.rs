//! HTML rendering of the gateway hand-off form.

use crate::ports::{FormRenderer, PaymentForm};

/// Renders the hand-off as an HTML form of hidden inputs.
///
/// The customer's browser posts the form to the gateway; every parameter
/// travels as a hidden field. Names and values are HTML-escaped.
///
/// ```
/// use ogone_gateway::adapters::ogone::HiddenFieldFormRenderer;
///
/// let renderer = HiddenFieldFormRenderer::new()
///     .with_form_id("checkout")
///     .with_submit_label("Pay now");
/// ```
#[derive(Debug, Clone)]
pub struct HiddenFieldFormRenderer {
    form_id: String,
    submit_label: String,
}

impl HiddenFieldFormRenderer {
    pub fn new() -> Self {
        Self {
            form_id: "ogone-payment".to_string(),
            submit_label: "Pay".to_string(),
        }
    }

    /// Set the id attribute of the rendered form element.
    pub fn with_form_id(mut self, id: impl Into<String>) -> Self {
        self.form_id = id.into();
        self
    }

    /// Set the label of the rendered submit button.
    pub fn with_submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = label.into();
        self
    }
}

impl Default for HiddenFieldFormRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl FormRenderer for HiddenFieldFormRenderer {
    fn render(&self, form: &PaymentForm) -> String {
        let mut html = String::new();
        html.push_str(&format!(
            "<form id=\"{}\" action=\"{}\" method=\"post\">\n",
            html_escape(&self.form_id),
            html_escape(&form.action)
        ));
        for (name, value) in &form.fields {
            html.push_str(&format!(
                "  <input type=\"hidden\" name=\"{}\" value=\"{}\" />\n",
                html_escape(name),
                html_escape(value)
            ));
        }
        html.push_str(&format!(
            "  <input type=\"submit\" value=\"{}\" />\n",
            html_escape(&self.submit_label)
        ));
        html.push_str("</form>\n");
        html
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
