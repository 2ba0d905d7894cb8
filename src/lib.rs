//! Ogone Gateway - Hosted-page payment integration
//!
//! This crate implements the merchant side of the Ogone/Ingenico e-Commerce
//! exchange: building signed hand-off forms that redirect a customer to the
//! gateway's hosted payment page, and verifying and classifying the signed
//! server-to-server notifications the gateway posts back.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
