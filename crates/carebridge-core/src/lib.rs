//! carebridge-core
//!
//! Pure domain types for the CareBridge assessment engine.
//! No I/O dependency — this is the shared vocabulary of the CareBridge system.

pub mod error;
pub mod models;
