use thiserror::Error;

use carebridge_catalog::error::CatalogError;
use carebridge_core::models::assessment::AssessmentStatus;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifecycleError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("step {step} is incomplete: unanswered questions in {domains:?}")]
    IncompleteStep { step: u8, domains: Vec<String> },

    #[error("cannot complete assessment: unanswered questions in {domains:?}")]
    IncompleteDomains { domains: Vec<String> },

    #[error("operation requires a draft assessment, status is {status:?}")]
    NotDraft { status: AssessmentStatus },

    #[error("operation requires a completed assessment, status is {status:?}")]
    NotCompleted { status: AssessmentStatus },

    #[error("already at the first step")]
    AtFirstStep,

    #[error("already at the final step")]
    AtLastStep,

    #[error("snapshot step {step} is outside 1..={max}")]
    InvalidStep { step: u8, max: u8 },

    #[error("stored {field} ({stored}) disagrees with recomputation ({computed})")]
    DerivedFieldMismatch {
        field: &'static str,
        stored: String,
        computed: String,
    },
}
