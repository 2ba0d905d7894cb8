//! Incoming payment notification parsing.
//!
//! The gateway reports transaction outcomes by redirecting the customer (or
//! calling the merchant server) with a flat set of feedback parameters.
//! Construction never fails: a malformed notification still produces a
//! value, it just classifies as a failed payment downstream.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use subtle::ConstantTimeEq;

use super::status::PaymentStatus;

/// A parsed gateway notification.
///
/// Parameter names are normalized to uppercase at construction; lookups are
/// case-insensitive. The raw map stays available for signature composition.
#[derive(Debug, Clone)]
pub struct PaymentNotification {
    params: BTreeMap<String, String>,
}

impl PaymentNotification {
    /// Builds a notification from raw request parameters.
    ///
    /// Accepts any iterable of key/value pairs (query parameters, form
    /// bodies). Later duplicates overwrite earlier ones.
    pub fn from_params<I, K, V>(params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let params = params
            .into_iter()
            .map(|(key, value)| (key.into().trim().to_ascii_uppercase(), value.into()))
            .collect();
        Self { params }
    }

    /// The normalized parameter map, ordered by name.
    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }

    /// Reads a parameter by name, case-insensitively.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .get(&name.trim().to_ascii_uppercase())
            .map(String::as_str)
    }

    /// The merchant order reference this notification belongs to.
    pub fn order_id(&self) -> Option<&str> {
        self.get("ORDERID")
    }

    /// The gateway's own payment reference.
    pub fn pay_id(&self) -> Option<&str> {
        self.get("PAYID")
    }

    /// The acquirer's acceptance code, when the payment was authorized.
    pub fn acceptance(&self) -> Option<&str> {
        self.get("ACCEPTANCE")
    }

    /// The gateway error code; `"0"` means no error.
    pub fn nc_error(&self) -> Option<&str> {
        self.get("NCERROR")
    }

    /// The transaction status code, when present and numeric.
    pub fn status(&self) -> Option<PaymentStatus> {
        self.get("STATUS")
            .and_then(|raw| raw.parse::<u32>().ok())
            .map(PaymentStatus::from_code)
    }

    /// Whether the reported status is a completed, successful payment.
    ///
    /// Missing or non-numeric status counts as not successful.
    pub fn is_successful(&self) -> bool {
        self.status().is_some_and(|status| status.is_successful())
    }

    /// The paid amount in currency units.
    ///
    /// Feedback amounts arrive in major units with a decimal point, unlike
    /// the minor-unit integers of the outgoing request.
    pub fn amount(&self) -> Option<Decimal> {
        self.get("AMOUNT").and_then(|raw| raw.parse().ok())
    }

    /// The payment currency code.
    pub fn currency(&self) -> Option<&str> {
        self.get("CURRENCY")
    }

    /// The payment method, e.g. `"CreditCard"`.
    pub fn payment_method(&self) -> Option<&str> {
        self.get("PM")
    }

    /// The card brand, e.g. `"VISA"`.
    pub fn brand(&self) -> Option<&str> {
        self.get("BRAND")
    }

    /// The masked card number as reported by the gateway.
    pub fn masked_card_number(&self) -> Option<&str> {
        self.get("CARDNO")
    }

    /// The transaction date, parsed from the gateway's `MM/DD/YY` format.
    pub fn transaction_date(&self) -> Option<NaiveDate> {
        self.get("TRXDATE")
            .and_then(|raw| NaiveDate::parse_from_str(raw, "%m/%d/%y").ok())
    }

    /// The signature the gateway attached to this notification.
    pub fn signature(&self) -> Option<&str> {
        self.get("SHASIGN")
    }

    /// Compares the attached signature against an expected digest.
    ///
    /// Both sides are decoded from hex and compared in constant time, so
    /// the check is case-insensitive on the hex text and leaks no prefix
    /// information. Missing or undecodable signatures compare unequal.
    pub fn signature_matches(&self, expected: &str) -> bool {
        let provided = match self.signature() {
            Some(signature) => signature,
            None => return false,
        };
        let provided = match hex::decode(provided) {
            Ok(bytes) => bytes,
            Err(_) => return false,
        };
        let expected = match hex::decode(expected) {
            Ok(bytes) => bytes,
            Err(_) => return false,
        };
        constant_time_compare(&provided, &expected)
    }
}

/// Performs constant-time comparison of two byte slices.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
