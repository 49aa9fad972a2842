use serde::{Deserialize, Serialize};
use ts_rs::TS;

use carebridge_core::models::assessment::DomainResult;
use carebridge_core::models::risk::RiskLevel;

/// The combined conclusion over a set of domain results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OverallRisk {
    /// Sum of all domain scores, not normalized.
    pub cumulative_score: u32,
    /// `None` when no results were supplied.
    pub risk: Option<RiskLevel>,
}

/// Worst-domain-wins aggregation: the overall level is the most severe
/// level any supplied domain reached.
///
/// Runs over whatever results the caller passes, so progress previews
/// omit unfinished domains rather than defaulting them to healthy. The
/// figures are only authoritative when every catalog domain is present,
/// which the lifecycle's `complete` transition enforces.
pub fn aggregate_overall(results: &[DomainResult]) -> OverallRisk {
    OverallRisk {
        cumulative_score: results.iter().map(|r| r.score).sum(),
        risk: results.iter().map(|r| r.risk).max(),
    }
}
