//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `payment` - Gateway request/notification types and their rules

pub mod payment;
