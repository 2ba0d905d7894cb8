//! Outgoing payment request construction.
//!
//! The gateway accepts a fixed vocabulary of request parameters. Instead of
//! accepting arbitrary keys, [`RequestField`] enumerates the supported table
//! and every write goes through it, so an unknown override is an explicit
//! [`RequestError::UnsupportedField`] rather than a silently ignored field.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::errors::RequestError;

/// Gateway maximum lengths for free-text identifiers.
const MAX_PSPID_LEN: usize = 30;
const MAX_ORDERID_LEN: usize = 40;
const MAX_CUSTOMER_NAME_LEN: usize = 35;

/// A parameter of the gateway's order-standard request contract.
///
/// Each variant maps to its exact uppercase wire name. The table is closed:
/// fields outside it cannot be set on a [`PaymentRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RequestField {
    // Core order fields
    Pspid,
    OrderId,
    Amount,
    Currency,
    Language,
    CustomerName,

    // Customer details
    Email,
    OwnerAddress,
    OwnerZip,
    OwnerTown,
    OwnerCountry,
    OwnerPhone,

    // Redirect URLs
    AcceptUrl,
    DeclineUrl,
    ExceptionUrl,
    CancelUrl,
    BackUrl,
    HomeUrl,

    // Payment routing
    PaymentMethod,
    Brand,
    Operation,

    // Merchant passthrough data
    ComPlus,
    ParamPlus,
    ParamVar,

    // Payment page look and feel
    Template,
    Title,
    BackgroundColor,
    TextColor,
    TableBackgroundColor,
    TableTextColor,
    ButtonBackgroundColor,
    ButtonTextColor,
    Logo,
    FontType,
}

impl RequestField {
    /// Every supported field, in declaration order.
    pub const ALL: &'static [RequestField] = &[
        RequestField::Pspid,
        RequestField::OrderId,
        RequestField::Amount,
        RequestField::Currency,
        RequestField::Language,
        RequestField::CustomerName,
        RequestField::Email,
        RequestField::OwnerAddress,
        RequestField::OwnerZip,
        RequestField::OwnerTown,
        RequestField::OwnerCountry,
        RequestField::OwnerPhone,
        RequestField::AcceptUrl,
        RequestField::DeclineUrl,
        RequestField::ExceptionUrl,
        RequestField::CancelUrl,
        RequestField::BackUrl,
        RequestField::HomeUrl,
        RequestField::PaymentMethod,
        RequestField::Brand,
        RequestField::Operation,
        RequestField::ComPlus,
        RequestField::ParamPlus,
        RequestField::ParamVar,
        RequestField::Template,
        RequestField::Title,
        RequestField::BackgroundColor,
        RequestField::TextColor,
        RequestField::TableBackgroundColor,
        RequestField::TableTextColor,
        RequestField::ButtonBackgroundColor,
        RequestField::ButtonTextColor,
        RequestField::Logo,
        RequestField::FontType,
    ];

    /// The exact parameter name on the wire.
    pub fn wire_name(&self) -> &'static str {
        match self {
            RequestField::Pspid => "PSPID",
            RequestField::OrderId => "ORDERID",
            RequestField::Amount => "AMOUNT",
            RequestField::Currency => "CURRENCY",
            RequestField::Language => "LANGUAGE",
            RequestField::CustomerName => "CN",
            RequestField::Email => "EMAIL",
            RequestField::OwnerAddress => "OWNERADDRESS",
            RequestField::OwnerZip => "OWNERZIP",
            RequestField::OwnerTown => "OWNERTOWN",
            RequestField::OwnerCountry => "OWNERCTY",
            RequestField::OwnerPhone => "OWNERTELNO",
            RequestField::AcceptUrl => "ACCEPTURL",
            RequestField::DeclineUrl => "DECLINEURL",
            RequestField::ExceptionUrl => "EXCEPTIONURL",
            RequestField::CancelUrl => "CANCELURL",
            RequestField::BackUrl => "BACKURL",
            RequestField::HomeUrl => "HOMEURL",
            RequestField::PaymentMethod => "PM",
            RequestField::Brand => "BRAND",
            RequestField::Operation => "OPERATION",
            RequestField::ComPlus => "COMPLUS",
            RequestField::ParamPlus => "PARAMPLUS",
            RequestField::ParamVar => "PARAMVAR",
            RequestField::Template => "TP",
            RequestField::Title => "TITLE",
            RequestField::BackgroundColor => "BGCOLOR",
            RequestField::TextColor => "TXTCOLOR",
            RequestField::TableBackgroundColor => "TBLBGCOLOR",
            RequestField::TableTextColor => "TBLTXTCOLOR",
            RequestField::ButtonBackgroundColor => "BUTTONBGCOLOR",
            RequestField::ButtonTextColor => "BUTTONTXTCOLOR",
            RequestField::Logo => "LOGO",
            RequestField::FontType => "FONTTYPE",
        }
    }

    /// Looks up a field by wire name, case-insensitively.
    ///
    /// Returns `None` for names outside the supported table.
    pub fn from_name(name: &str) -> Option<RequestField> {
        let upper = name.trim().to_ascii_uppercase();
        RequestField::ALL
            .iter()
            .copied()
            .find(|field| field.wire_name() == upper)
    }
}

impl fmt::Display for RequestField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Maps a short application locale to the gateway's language tag.
///
/// Unrecognized inputs pass through unchanged, so callers may hand over a
/// full tag like `"de_DE"` directly.
pub fn locale_to_language(locale: &str) -> String {
    match locale {
        "fr" => "fr_FR".to_string(),
        "nl" => "nl_NL".to_string(),
        "en" => "en_US".to_string(),
        other => other.to_string(),
    }
}

/// Converts a decimal amount in currency units to gateway minor units.
///
/// Half-up rounding on the cent boundary: 19.995 becomes 2000, 19.994
/// becomes 1999. Negative amounts and amounts that overflow the scaling
/// or the `u64` wire representation are rejected.
fn to_minor_units(amount: Decimal) -> Result<u64, RequestError> {
    let scaled = amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .ok_or_else(|| RequestError::InvalidAmount(amount.to_string()))?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    if scaled.is_sign_negative() {
        return Err(RequestError::InvalidAmount(amount.to_string()));
    }
    scaled
        .to_u64()
        .ok_or_else(|| RequestError::InvalidAmount(amount.to_string()))
}

/// An outgoing order-standard request under construction.
///
/// Holds the parameter map keyed by [`RequestField`]. Values are raw
/// strings; [`PaymentRequest::validate`] checks the structural rules before
/// the request may be rendered.
#[derive(Debug, Clone, Default)]
pub struct PaymentRequest {
    fields: BTreeMap<RequestField, String>,
}

impl PaymentRequest {
    /// Creates an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, replacing any previous value.
    pub fn set(&mut self, field: RequestField, value: impl Into<String>) {
        self.fields.insert(field, value.into());
    }

    /// Sets the amount from decimal currency units.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::InvalidAmount`] when the amount is negative
    /// or too large for the wire representation.
    pub fn set_amount(&mut self, amount: Decimal) -> Result<(), RequestError> {
        let minor = to_minor_units(amount)?;
        self.set(RequestField::Amount, minor.to_string());
        Ok(())
    }

    /// Reads a field back, if set.
    pub fn get(&self, field: RequestField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    /// The request as wire-named parameters, ordered alphabetically by name.
    pub fn to_params(&self) -> BTreeMap<String, String> {
        self.fields
            .iter()
            .map(|(field, value)| (field.wire_name().to_string(), value.clone()))
            .collect()
    }

    /// Checks the structural rules of the order-standard contract.
    ///
    /// Required fields must be present and non-empty, the amount must be a
    /// positive integer in minor units, the currency a three-letter code,
    /// and identifiers within the gateway length caps.
    pub fn validate(&self) -> Result<(), RequestError> {
        const REQUIRED: &[RequestField] = &[
            RequestField::Pspid,
            RequestField::OrderId,
            RequestField::Amount,
            RequestField::Currency,
            RequestField::Language,
        ];
        for field in REQUIRED {
            match self.get(*field) {
                Some(value) if !value.is_empty() => {}
                _ => return Err(RequestError::MissingField(field.wire_name())),
            }
        }

        // Required and non-empty per the loop above
        let amount = self.get(RequestField::Amount).unwrap_or_default();
        match amount.parse::<u64>() {
            Ok(value) if value > 0 => {}
            _ => return Err(RequestError::InvalidAmount(amount.to_string())),
        }

        let currency = self.get(RequestField::Currency).unwrap_or_default();
        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(RequestError::InvalidCurrency(currency.to_string()));
        }

        self.check_length(RequestField::Pspid, MAX_PSPID_LEN)?;
        self.check_length(RequestField::OrderId, MAX_ORDERID_LEN)?;
        self.check_length(RequestField::CustomerName, MAX_CUSTOMER_NAME_LEN)?;

        Ok(())
    }

    fn check_length(&self, field: RequestField, max: usize) -> Result<(), RequestError> {
        match self.get(field) {
            Some(value) if value.chars().count() > max => Err(RequestError::FieldTooLong {
                field: field.wire_name(),
                max,
            }),
            _ => Ok(()),
        }
    }
}
