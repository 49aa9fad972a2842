//! carebridge-insights
//!
//! Longitudinal comparison and population reporting over completed
//! assessments. Pure computation — the portal feeds it batches it has
//! already filtered and persisted.

pub mod compare;
pub mod error;
pub mod report;
