use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::risk::RiskLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AssessmentStatus {
    Draft,
    Completed,
}

/// Answers entered for one domain within one assessment attempt.
///
/// Keys are question ids, values the selected option's point value.
/// A `BTreeMap` keeps snapshot serialization deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DomainAnswers {
    pub answers: BTreeMap<String, u8>,
    pub notes: Option<String>,
}

/// Derived per-domain outcome. Recomputed whenever the answers change;
/// never stored independently of its parent assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DomainResult {
    pub domain_id: String,
    pub score: u32,
    pub max_score: u32,
    pub risk: RiskLevel,
    pub complete: bool,
    pub notes: Option<String>,
}

/// The assessment aggregate root.
///
/// `overall_risk` and `cumulative_score` are derived from
/// `domain_results`; the engine recomputes them on completion and rejects
/// stored snapshots whose figures disagree with recomputation.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Assessment {
    pub id: Uuid,
    pub subject_id: Uuid,
    pub assessor_id: Uuid,
    pub assessed_at: jiff::civil::Date,
    pub status: AssessmentStatus,
    pub step: u8,
    pub cumulative_score: u32,
    pub overall_risk: Option<RiskLevel>,
    pub domain_results: Vec<DomainResult>,
    pub domains: BTreeMap<String, DomainAnswers>,
    pub notes: Option<String>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}
