use thiserror::Error;
use uuid::Uuid;

use carebridge_core::models::assessment::AssessmentStatus;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InsightsError {
    #[error("assessment {assessment_id} is {status:?}; comparison requires completed assessments")]
    NotCompleted {
        assessment_id: Uuid,
        status: AssessmentStatus,
    },

    #[error("assessments out of order: previous was assessed {previous}, after current {current}")]
    OutOfOrder {
        previous: jiff::civil::Date,
        current: jiff::civil::Date,
    },
}
