//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ogone` - The gateway's SHA signature scheme and HTML hand-off form

pub mod ogone;
