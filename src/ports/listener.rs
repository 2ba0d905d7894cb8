//! Payment outcome listener port.

use crate::domain::payment::PaymentNotification;

/// Observer of classified payment notifications.
///
/// Listeners receive every notification exactly once, on one of the two
/// callbacks, in the order they were registered. A failure callback means
/// the notification did not verify as a successful payment; listeners are
/// not told whether the signature or the payment itself was at fault.
pub trait PaymentListener: Send + Sync {
    /// Called when a notification carries a valid signature and a
    /// successful status.
    fn on_success(&self, notification: &PaymentNotification);

    /// Called for every other notification.
    fn on_failure(&self, notification: &PaymentNotification);
}
