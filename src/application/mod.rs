//! Application layer - Gateway orchestration.
//!
//! This layer coordinates the domain model and the ports: it assembles and
//! signs outgoing payment requests, and classifies and dispatches incoming
//! payment notifications.

mod payment_manager;

pub use payment_manager::{PaymentManager, PaymentOrder};
