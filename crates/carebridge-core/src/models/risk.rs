use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Risk classification for a single health domain or a whole assessment.
///
/// The variants are ordered by severity, so `Ord` gives worst-domain-wins
/// aggregation directly: `results.iter().map(|r| r.risk).max()`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    Healthy,
    AtRisk,
    Intervention,
}
