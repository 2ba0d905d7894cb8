//! Gateway payment status codes.
//!
//! The gateway reports transaction state as a numeric `STATUS` feedback
//! parameter. The first digit carries the phase (authorization, capture,
//! refund), trailing digits refine it.

use std::fmt;

/// Transaction status reported in gateway feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    /// 0 - Invalid or incomplete.
    InvalidOrIncomplete,
    /// 1 - Cancelled by the customer.
    CancelledByClient,
    /// 2 - Authorization refused.
    AuthorizationRefused,
    /// 4 - Order stored.
    OrderStored,
    /// 5 - Authorized.
    Authorized,
    /// 51 - Authorization waiting.
    AuthorizationWaiting,
    /// 52 - Authorization not known.
    AuthorizationUnknown,
    /// 6 - Authorized and cancelled.
    AuthorizedAndCancelled,
    /// 7 - Payment deleted.
    PaymentDeleted,
    /// 8 - Refund.
    Refund,
    /// 81 - Refund pending.
    RefundPending,
    /// 83 - Refund refused.
    RefundRefused,
    /// 9 - Payment requested.
    PaymentRequested,
    /// 91 - Payment processing.
    PaymentProcessing,
    /// 92 - Payment uncertain.
    PaymentUncertain,
    /// 93 - Payment refused.
    PaymentRefused,
    /// Any code outside the mapped set.
    Unknown(u32),
}

impl PaymentStatus {
    /// Maps a raw feedback code to its status.
    pub fn from_code(code: u32) -> Self {
        match code {
            0 => PaymentStatus::InvalidOrIncomplete,
            1 => PaymentStatus::CancelledByClient,
            2 => PaymentStatus::AuthorizationRefused,
            4 => PaymentStatus::OrderStored,
            5 => PaymentStatus::Authorized,
            51 => PaymentStatus::AuthorizationWaiting,
            52 => PaymentStatus::AuthorizationUnknown,
            6 => PaymentStatus::AuthorizedAndCancelled,
            7 => PaymentStatus::PaymentDeleted,
            8 => PaymentStatus::Refund,
            81 => PaymentStatus::RefundPending,
            83 => PaymentStatus::RefundRefused,
            9 => PaymentStatus::PaymentRequested,
            91 => PaymentStatus::PaymentProcessing,
            92 => PaymentStatus::PaymentUncertain,
            93 => PaymentStatus::PaymentRefused,
            other => PaymentStatus::Unknown(other),
        }
    }

    /// The raw feedback code.
    pub fn code(&self) -> u32 {
        match self {
            PaymentStatus::InvalidOrIncomplete => 0,
            PaymentStatus::CancelledByClient => 1,
            PaymentStatus::AuthorizationRefused => 2,
            PaymentStatus::OrderStored => 4,
            PaymentStatus::Authorized => 5,
            PaymentStatus::AuthorizationWaiting => 51,
            PaymentStatus::AuthorizationUnknown => 52,
            PaymentStatus::AuthorizedAndCancelled => 6,
            PaymentStatus::PaymentDeleted => 7,
            PaymentStatus::Refund => 8,
            PaymentStatus::RefundPending => 81,
            PaymentStatus::RefundRefused => 83,
            PaymentStatus::PaymentRequested => 9,
            PaymentStatus::PaymentProcessing => 91,
            PaymentStatus::PaymentUncertain => 92,
            PaymentStatus::PaymentRefused => 93,
            PaymentStatus::Unknown(code) => *code,
        }
    }

    /// Check if this status counts as a completed, successful payment.
    ///
    /// Only `Authorized` (5) and `PaymentRequested` (9) qualify. Pending
    /// and uncertain states do not, even when they later settle.
    pub fn is_successful(&self) -> bool {
        matches!(
            self,
            PaymentStatus::Authorized | PaymentStatus::PaymentRequested
        )
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentStatus::InvalidOrIncomplete => "invalid or incomplete",
            PaymentStatus::CancelledByClient => "cancelled by client",
            PaymentStatus::AuthorizationRefused => "authorization refused",
            PaymentStatus::OrderStored => "order stored",
            PaymentStatus::Authorized => "authorized",
            PaymentStatus::AuthorizationWaiting => "authorization waiting",
            PaymentStatus::AuthorizationUnknown => "authorization not known",
            PaymentStatus::AuthorizedAndCancelled => "authorized and cancelled",
            PaymentStatus::PaymentDeleted => "payment deleted",
            PaymentStatus::Refund => "refund",
            PaymentStatus::RefundPending => "refund pending",
            PaymentStatus::RefundRefused => "refund refused",
            PaymentStatus::PaymentRequested => "payment requested",
            PaymentStatus::PaymentProcessing => "payment processing",
            PaymentStatus::PaymentUncertain => "payment uncertain",
            PaymentStatus::PaymentRefused => "payment refused",
            PaymentStatus::Unknown(code) => return write!(f, "unknown status {}", code),
        };
        write!(f, "{}", label)
    }
}
