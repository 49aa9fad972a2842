//! carebridge-engine
//!
//! The health risk assessment engine: domain scoring, worst-domain-wins
//! aggregation, and the draft/completion lifecycle of an assessment.
//! Pure computation over the shared vocabulary — persistence, transport,
//! and UI belong to the surrounding portal.

pub mod aggregate;
pub mod error;
pub mod lifecycle;
pub mod scoring;
