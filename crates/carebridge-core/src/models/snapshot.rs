use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::assessment::{Assessment, AssessmentStatus, DomainAnswers};
use super::risk::RiskLevel;
use crate::error::CoreError;

/// The serializable shape exchanged with the persistence collaborator.
///
/// A draft is fully reconstructable from this: per-domain answers and
/// notes, wizard step, subject. Nothing the user entered is re-derived on
/// resume. For completed assessments the stored conclusions ride along so
/// the engine can verify them against recomputation on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentSnapshot {
    pub id: Uuid,
    pub subject_id: Uuid,
    pub assessor_id: Uuid,
    pub assessed_at: jiff::civil::Date,
    pub status: AssessmentStatus,
    pub step: u8,
    pub domains: BTreeMap<String, DomainAnswers>,
    pub notes: Option<String>,
    pub cumulative_score: Option<u32>,
    pub overall_risk: Option<RiskLevel>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl From<&Assessment> for AssessmentSnapshot {
    /// The write-back shape after save or complete. Conclusions are only
    /// stored for completed assessments; a draft has none to store.
    fn from(assessment: &Assessment) -> Self {
        let completed = assessment.status == AssessmentStatus::Completed;
        Self {
            id: assessment.id,
            subject_id: assessment.subject_id,
            assessor_id: assessment.assessor_id,
            assessed_at: assessment.assessed_at,
            status: assessment.status,
            step: assessment.step,
            domains: assessment.domains.clone(),
            notes: assessment.notes.clone(),
            cumulative_score: completed.then_some(assessment.cumulative_score),
            overall_risk: assessment.overall_risk,
            created_at: assessment.created_at,
            updated_at: assessment.updated_at,
        }
    }
}

impl AssessmentSnapshot {
    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}
