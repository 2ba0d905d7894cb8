//! PaymentManager - Orchestrates the gateway exchange.
//!
//! One type owns both directions: building the signed hand-off form for an
//! order, and classifying the signed notification that comes back. The
//! signature scheme and the form markup are injected strategies; the
//! manager only sequences them.

use rust_decimal::Decimal;

use crate::config::{ConfigError, MerchantConfig};
use crate::domain::payment::{
    locale_to_language, PaymentNotification, PaymentRequest, RequestError, RequestField,
};
use crate::ports::{FormRenderer, ParameterFilter, PaymentForm, PaymentListener, ShaComposer};

/// Currency applied when an order does not name one.
const DEFAULT_CURRENCY: &str = "EUR";

/// An order to collect payment for.
///
/// Carries the caller-side inputs of a payment request. Extra gateway
/// fields go through [`PaymentOrder::with_option`] (typed) or
/// [`PaymentOrder::with_options`] (dynamic names, validated).
#[derive(Debug, Clone)]
pub struct PaymentOrder {
    locale: String,
    order_id: String,
    customer_name: String,
    amount: Decimal,
    currency: Option<String>,
    options: Vec<(RequestField, String)>,
}

impl PaymentOrder {
    /// Creates an order in the default currency (EUR).
    pub fn new(
        locale: impl Into<String>,
        order_id: impl Into<String>,
        customer_name: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            locale: locale.into(),
            order_id: order_id.into(),
            customer_name: customer_name.into(),
            amount,
            currency: None,
            options: Vec::new(),
        }
    }

    /// Charge in a different currency.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Add a gateway field for this order.
    ///
    /// Applied after the configured overrides; the last write to a field
    /// wins.
    pub fn with_option(mut self, field: RequestField, value: impl Into<String>) -> Self {
        self.options.push((field, value.into()));
        self
    }

    /// Add gateway fields by wire name.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::UnsupportedField`] for names outside the
    /// supported field table.
    pub fn with_options<I, K, V>(mut self, options: I) -> Result<Self, RequestError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (name, value) in options {
            let field = RequestField::from_name(name.as_ref())
                .ok_or_else(|| RequestError::UnsupportedField(name.as_ref().to_string()))?;
            self.options.push((field, value.into()));
        }
        Ok(self)
    }
}

/// Gateway exchange orchestrator.
///
/// Generic over the two injected strategies: the signature scheme and the
/// form markup. Listeners are registered before the manager is shared;
/// notification handling then dispatches in registration order.
pub struct PaymentManager<C: ShaComposer, F: FormRenderer> {
    config: MerchantConfig,
    composer: C,
    renderer: F,
    listeners: Vec<Box<dyn PaymentListener>>,
}

impl<C: ShaComposer, F: FormRenderer> PaymentManager<C, F> {
    /// Creates a manager over a validated merchant configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the configuration fails validation
    /// (empty PSPID or passphrases). No manager value exists in that case.
    pub fn new(config: MerchantConfig, composer: C, renderer: F) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            composer,
            renderer,
            listeners: Vec::new(),
        })
    }

    /// Registers a listener behind any already registered ones.
    ///
    /// Listeners are never deduplicated or removed; registering the same
    /// underlying listener twice means two callbacks per notification.
    pub fn add_listener(&mut self, listener: Box<dyn PaymentListener>) {
        self.listeners.push(listener);
    }

    /// Builds, signs and renders the payment request form for an order.
    ///
    /// The returned markup is the renderer's output, handed back verbatim.
    ///
    /// # Errors
    ///
    /// Returns `RequestError` when an override names an unsupported field
    /// or the assembled request fails structural validation. No partial
    /// form is returned.
    pub fn request_form(&self, order: &PaymentOrder) -> Result<String, RequestError> {
        tracing::debug!(
            order_id = order.order_id.as_str(),
            locale = order.locale.as_str(),
            "Building payment request"
        );

        // 1. Endpoint for the configured environment
        let action = self.config.environment.endpoint();

        // 2. Standard order fields
        let mut request = PaymentRequest::new();
        request.set(RequestField::Pspid, self.config.pspid.as_str());
        request.set(RequestField::CustomerName, order.customer_name.as_str());
        request.set(RequestField::OrderId, order.order_id.as_str());
        request.set_amount(order.amount)?;
        request.set(
            RequestField::Currency,
            order.currency.as_deref().unwrap_or(DEFAULT_CURRENCY),
        );
        request.set(RequestField::Language, locale_to_language(&order.locale));

        // 3. Configured overrides first, then call options
        for (name, value) in &self.config.options {
            let field = RequestField::from_name(name)
                .ok_or_else(|| RequestError::UnsupportedField(name.clone()))?;
            request.set(field, value.as_str());
        }
        for (field, value) in &order.options {
            request.set(*field, value.as_str());
        }

        // 4. Sign the request parameters with the SHA-IN passphrase
        let mut fields = request.to_params();
        let signature = self
            .composer
            .compose(&fields, &self.config.sha_in, ParameterFilter::ShaIn);

        // 5. Structural validation; nothing is rendered on failure
        request.validate()?;

        // 6. Render the hand-off form, signature included
        fields.insert("SHASIGN".to_string(), signature);
        let form = PaymentForm {
            action: action.to_string(),
            fields,
        };
        Ok(self.renderer.render(&form))
    }

    /// Classifies a gateway notification and dispatches it to listeners.
    ///
    /// A notification counts as a successful payment only when its
    /// signature verifies under the SHA-OUT passphrase and its status is a
    /// successful one. Everything else, including malformed or unsigned
    /// input, dispatches as a failure; this method never panics and never
    /// returns an error.
    pub fn handle_notification<I, K, V>(&self, params: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        // 1. Parse; construction is total
        let notification = PaymentNotification::from_params(params);

        // 2. Recompute the expected signature from the feedback parameters
        let expected = self.composer.compose(
            notification.params(),
            &self.config.sha_out,
            ParameterFilter::ShaOut,
        );
        let signature_valid = notification.signature_matches(&expected);

        // 3. Classify and dispatch in registration order
        if signature_valid && notification.is_successful() {
            for listener in &self.listeners {
                listener.on_success(&notification);
            }
            tracing::info!(
                order_id = notification.order_id().unwrap_or(""),
                "success"
            );
        } else {
            for listener in &self.listeners {
                listener.on_failure(&notification);
            }
            tracing::info!(
                order_id = notification.order_id().unwrap_or(""),
                "failure"
            );
        }
    }
}
