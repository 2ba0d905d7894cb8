//! Payment domain module.
//!
//! Models both directions of the gateway exchange.
//!
//! # Module Structure
//!
//! - `request` - Outgoing order-standard request and its field table
//! - `notification` - Incoming feedback parameters with typed accessors
//! - `status` - Numeric transaction status codes
//! - `passphrase` - SHA-IN/SHA-OUT secret material
//! - `errors` - Request construction failures

mod errors;
mod notification;
mod passphrase;
mod request;
mod status;

pub use errors::RequestError;
pub use notification::PaymentNotification;
pub use passphrase::Passphrase;
pub use request::{locale_to_language, PaymentRequest, RequestField};
pub use status::PaymentStatus;
