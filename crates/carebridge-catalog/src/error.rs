use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown domain: {0}")]
    UnknownDomain(String),

    #[error("unknown question '{question_id}' in domain '{domain_id}'")]
    UnknownQuestion {
        domain_id: String,
        question_id: String,
    },

    #[error("question '{question_id}' in domain '{domain_id}' has no option worth {points} points")]
    InvalidAnswer {
        domain_id: String,
        question_id: String,
        points: u8,
    },

    #[error("duplicate domain id: {0}")]
    DuplicateDomain(String),

    #[error("duplicate question id '{question_id}' in domain '{domain_id}'")]
    DuplicateQuestion {
        domain_id: String,
        question_id: String,
    },

    #[error("wizard step '{step_title}' references unknown domain '{domain_id}'")]
    UnknownStepDomain {
        step_title: String,
        domain_id: String,
    },

    #[error("domain '{0}' is not assigned to any wizard step")]
    UnassignedDomain(String),

    #[error("domain '{0}' is assigned to more than one wizard step")]
    ReassignedDomain(String),
}
