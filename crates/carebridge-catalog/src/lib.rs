//! carebridge-catalog
//!
//! The ICOPE health domain catalog. Pure data — no I/O dependency.
//! Defines every assessable domain, its questions and answer options, and
//! the wizard-step grouping the portal paces the questionnaire with.

pub mod error;
pub mod icope;
pub mod types;

use std::collections::BTreeSet;

use serde::Serialize;
use ts_rs::TS;

use carebridge_core::models::assessment::DomainAnswers;

use crate::error::CatalogError;
use crate::types::{Domain, Question, WizardStep};

/// The immutable catalog an engine instance is constructed against.
///
/// Built once (usually via [`Catalog::icope`]) and passed by reference
/// into every engine entry point, so tests can substitute alternate
/// catalogs. [`Catalog::new`] is the only way to build one, which keeps
/// the step/domain cross-references valid by construction.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct Catalog {
    domains: Vec<Domain>,
    steps: Vec<WizardStep>,
}

impl Catalog {
    /// Validate and assemble a catalog.
    ///
    /// Every domain id must be unique, every question id unique within
    /// its domain, and every domain assigned to exactly one wizard step.
    pub fn new(domains: Vec<Domain>, steps: Vec<WizardStep>) -> Result<Self, CatalogError> {
        let mut domain_ids = BTreeSet::new();
        for domain in &domains {
            if !domain_ids.insert(domain.id.as_str()) {
                return Err(CatalogError::DuplicateDomain(domain.id.clone()));
            }
            let mut question_ids = BTreeSet::new();
            for question in &domain.questions {
                if !question_ids.insert(question.id.as_str()) {
                    return Err(CatalogError::DuplicateQuestion {
                        domain_id: domain.id.clone(),
                        question_id: question.id.clone(),
                    });
                }
            }
        }

        let mut assigned = BTreeSet::new();
        for step in &steps {
            for domain_id in &step.domain_ids {
                if !domain_ids.contains(domain_id.as_str()) {
                    return Err(CatalogError::UnknownStepDomain {
                        step_title: step.title.clone(),
                        domain_id: domain_id.clone(),
                    });
                }
                if !assigned.insert(domain_id.as_str()) {
                    return Err(CatalogError::ReassignedDomain(domain_id.clone()));
                }
            }
        }
        for domain in &domains {
            if !assigned.contains(domain.id.as_str()) {
                return Err(CatalogError::UnassignedDomain(domain.id.clone()));
            }
        }

        Ok(Self { domains, steps })
    }

    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    pub fn steps(&self) -> &[WizardStep] {
        &self.steps
    }

    pub fn domain(&self, id: &str) -> Result<&Domain, CatalogError> {
        self.domains
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| CatalogError::UnknownDomain(id.to_string()))
    }

    pub fn question(&self, domain_id: &str, question_id: &str) -> Result<&Question, CatalogError> {
        self.domain(domain_id)?
            .question(question_id)
            .ok_or_else(|| CatalogError::UnknownQuestion {
                domain_id: domain_id.to_string(),
                question_id: question_id.to_string(),
            })
    }

    /// The domain-group step at 1-based `step`, if `step` is one of the
    /// domain-group steps (review and summary have no group).
    pub fn step(&self, step: u8) -> Option<&WizardStep> {
        (step >= 1)
            .then(|| self.steps.get(usize::from(step) - 1))
            .flatten()
    }

    /// Number of domain-group steps.
    pub fn group_steps(&self) -> u8 {
        self.steps.len() as u8
    }

    /// The review step follows the last domain-group step.
    pub fn review_step(&self) -> u8 {
        self.group_steps() + 1
    }

    /// The summary step is the final wizard position.
    pub fn summary_step(&self) -> u8 {
        self.group_steps() + 2
    }

    pub fn total_steps(&self) -> u8 {
        self.summary_step()
    }

    /// Reject answers whose keys are not question ids of `domain_id`, or
    /// whose point values no option of that question offers. This is the
    /// boundary where unknown keys are caught before they reach scoring.
    pub fn validate_answers(
        &self,
        domain_id: &str,
        answers: &DomainAnswers,
    ) -> Result<(), CatalogError> {
        let domain = self.domain(domain_id)?;
        for (question_id, points) in &answers.answers {
            let question =
                domain
                    .question(question_id)
                    .ok_or_else(|| CatalogError::UnknownQuestion {
                        domain_id: domain_id.to_string(),
                        question_id: question_id.clone(),
                    })?;
            if !question.offers_points(*points) {
                return Err(CatalogError::InvalidAnswer {
                    domain_id: domain_id.to_string(),
                    question_id: question_id.clone(),
                    points: *points,
                });
            }
        }
        Ok(())
    }
}
