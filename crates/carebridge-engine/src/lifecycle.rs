use std::collections::BTreeMap;

use jiff::Timestamp;
use jiff::civil::Date;
use tracing::{debug, info};
use uuid::Uuid;

use carebridge_catalog::Catalog;
use carebridge_catalog::error::CatalogError;
use carebridge_catalog::types::Domain;
use carebridge_core::models::assessment::{
    Assessment, AssessmentStatus, DomainAnswers, DomainResult,
};
use carebridge_core::models::snapshot::AssessmentSnapshot;

use crate::aggregate::{OverallRisk, aggregate_overall};
use crate::error::LifecycleError;
use crate::scoring::score_domain;

/// A draft assessment moving through the questionnaire wizard.
///
/// The wizard advances through the catalog's domain-group steps, then a
/// review step, then a summary step. Every transition is a pure function
/// returning a new state; the caller's previous state survives any
/// rejection, so no transition can discard entered answers.
#[derive(Debug, Clone)]
pub struct DraftAssessment {
    id: Uuid,
    subject_id: Uuid,
    assessor_id: Uuid,
    assessed_at: Date,
    step: u8,
    domains: BTreeMap<String, DomainAnswers>,
    notes: Option<String>,
    results: Vec<DomainResult>,
    overall: Option<OverallRisk>,
    created_at: Timestamp,
}

impl DraftAssessment {
    /// Open a new draft at step 1 with an empty answer set for every
    /// catalog domain.
    pub fn start(
        catalog: &Catalog,
        subject_id: Uuid,
        assessor_id: Uuid,
        assessed_at: Date,
        now: Timestamp,
    ) -> Self {
        let domains = catalog
            .domains()
            .iter()
            .map(|d| (d.id.clone(), DomainAnswers::default()))
            .collect();
        let id = Uuid::new_v4();
        debug!(assessment = %id, subject = %subject_id, "assessment draft started");
        Self {
            id,
            subject_id,
            assessor_id,
            assessed_at,
            step: 1,
            domains,
            notes: None,
            results: Vec::new(),
            overall: None,
            created_at: now,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn subject_id(&self) -> Uuid {
        self.subject_id
    }

    pub fn assessor_id(&self) -> Uuid {
        self.assessor_id
    }

    pub fn assessed_at(&self) -> Date {
        self.assessed_at
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn domain_answers(&self, domain_id: &str) -> Option<&DomainAnswers> {
        self.domains.get(domain_id)
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Domain results computed when the wizard entered the review step.
    /// Empty until then, and cleared again whenever an answer changes.
    pub fn results(&self) -> &[DomainResult] {
        &self.results
    }

    /// Overall figures computed when the wizard entered the review step.
    pub fn overall(&self) -> Option<&OverallRisk> {
        self.overall.as_ref()
    }

    /// Record the selected option's point value for one question.
    ///
    /// Allowed at any step while the assessment is a draft, even out of
    /// step order. Unknown domains, unknown questions, and point values
    /// no option offers are rejected.
    pub fn answer(
        &self,
        catalog: &Catalog,
        domain_id: &str,
        question_id: &str,
        points: u8,
    ) -> Result<Self, LifecycleError> {
        let question = catalog.question(domain_id, question_id)?;
        if !question.offers_points(points) {
            return Err(CatalogError::InvalidAnswer {
                domain_id: domain_id.to_string(),
                question_id: question_id.to_string(),
                points,
            }
            .into());
        }
        let mut next = self.clone();
        next.domains
            .entry(domain_id.to_string())
            .or_default()
            .answers
            .insert(question_id.to_string(), points);
        // review figures are stale the moment an answer changes
        next.results.clear();
        next.overall = None;
        Ok(next)
    }

    /// Attach free-text notes to one domain.
    pub fn note(
        &self,
        catalog: &Catalog,
        domain_id: &str,
        text: impl Into<String>,
    ) -> Result<Self, LifecycleError> {
        catalog.domain(domain_id)?;
        let mut next = self.clone();
        next.domains.entry(domain_id.to_string()).or_default().notes = Some(text.into());
        // results carry domain notes, so they are stale now too
        next.results.clear();
        next.overall = None;
        Ok(next)
    }

    /// Attach general notes to the whole assessment.
    pub fn general_note(&self, text: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.notes = Some(text.into());
        next
    }

    /// Move to the next wizard step.
    ///
    /// A domain-group step is only left once every question of every
    /// domain in the group is answered; rejection names the incomplete
    /// domains and leaves the state untouched. Leaving the last
    /// domain-group step computes the overall figures so the review and
    /// summary steps display authoritative values.
    pub fn advance(&self, catalog: &Catalog) -> Result<Self, LifecycleError> {
        if self.step >= catalog.total_steps() {
            return Err(LifecycleError::AtLastStep);
        }
        if let Some(group) = catalog.step(self.step) {
            let mut incomplete = Vec::new();
            for domain_id in &group.domain_ids {
                let domain = catalog.domain(domain_id)?;
                if !self.domain_complete(domain) {
                    incomplete.push(domain_id.clone());
                }
            }
            if !incomplete.is_empty() {
                return Err(LifecycleError::IncompleteStep {
                    step: self.step,
                    domains: incomplete,
                });
            }
        }
        let mut next = self.clone();
        next.step += 1;
        if next.step == catalog.review_step() {
            let results = next.score_all(catalog)?;
            next.overall = Some(aggregate_overall(&results));
            next.results = results;
        }
        debug!(assessment = %self.id, step = next.step, "wizard advanced");
        Ok(next)
    }

    /// Move to the previous wizard step. Never validates, never loses
    /// data.
    pub fn retreat(&self) -> Result<Self, LifecycleError> {
        if self.step <= 1 {
            return Err(LifecycleError::AtFirstStep);
        }
        let mut next = self.clone();
        next.step -= 1;
        Ok(next)
    }

    /// Provisional overall figures across the domains answered so far.
    /// Incomplete domains are omitted, not treated as healthy.
    pub fn preview(&self, catalog: &Catalog) -> Result<OverallRisk, LifecycleError> {
        let mut complete = Vec::new();
        for domain in catalog.domains() {
            if let Some(answers) = self.domains.get(&domain.id) {
                let result = score_domain(domain, answers)?;
                if result.complete {
                    complete.push(result);
                }
            }
        }
        Ok(aggregate_overall(&complete))
    }

    /// The serializable save shape, regardless of completeness. The
    /// persistence collaborator owns writing it; a draft is fully
    /// reconstructable from it via [`DraftAssessment::resume`].
    pub fn snapshot(&self, now: Timestamp) -> AssessmentSnapshot {
        AssessmentSnapshot {
            id: self.id,
            subject_id: self.subject_id,
            assessor_id: self.assessor_id,
            assessed_at: self.assessed_at,
            status: AssessmentStatus::Draft,
            step: self.step,
            domains: self.domains.clone(),
            notes: self.notes.clone(),
            cumulative_score: None,
            overall_risk: None,
            created_at: self.created_at,
            updated_at: now,
        }
    }

    /// Reconstruct a draft exactly as saved. Stored answers are
    /// validated against the catalog; catalog domains the snapshot never
    /// touched start empty rather than defaulted to an answer.
    pub fn resume(catalog: &Catalog, snapshot: &AssessmentSnapshot) -> Result<Self, LifecycleError> {
        if snapshot.status != AssessmentStatus::Draft {
            return Err(LifecycleError::NotDraft {
                status: snapshot.status,
            });
        }
        if snapshot.step < 1 || snapshot.step > catalog.total_steps() {
            return Err(LifecycleError::InvalidStep {
                step: snapshot.step,
                max: catalog.total_steps(),
            });
        }
        let domains = rebuild_domains(catalog, &snapshot.domains)?;
        debug!(assessment = %snapshot.id, step = snapshot.step, "draft resumed");
        Ok(Self {
            id: snapshot.id,
            subject_id: snapshot.subject_id,
            assessor_id: snapshot.assessor_id,
            assessed_at: snapshot.assessed_at,
            step: snapshot.step,
            domains,
            notes: snapshot.notes.clone(),
            results: Vec::new(),
            overall: None,
            created_at: snapshot.created_at,
        })
    }

    /// Finish the assessment.
    ///
    /// Every catalog domain must be fully answered; otherwise the
    /// incomplete domains are listed and nothing is completed. All
    /// domain results, the cumulative score, and the overall risk are
    /// recomputed here rather than read from any stored figure.
    pub fn complete(&self, catalog: &Catalog, now: Timestamp) -> Result<Assessment, LifecycleError> {
        let results = self.score_all(catalog)?;
        let incomplete: Vec<String> = results
            .iter()
            .filter(|r| !r.complete)
            .map(|r| r.domain_id.clone())
            .collect();
        if !incomplete.is_empty() {
            return Err(LifecycleError::IncompleteDomains {
                domains: incomplete,
            });
        }
        let overall = aggregate_overall(&results);
        info!(
            assessment = %self.id,
            subject = %self.subject_id,
            risk = ?overall.risk,
            "assessment completed"
        );
        Ok(Assessment {
            id: self.id,
            subject_id: self.subject_id,
            assessor_id: self.assessor_id,
            assessed_at: self.assessed_at,
            status: AssessmentStatus::Completed,
            step: catalog.summary_step(),
            cumulative_score: overall.cumulative_score,
            overall_risk: overall.risk,
            domain_results: results,
            domains: self.domains.clone(),
            notes: self.notes.clone(),
            created_at: self.created_at,
            updated_at: now,
        })
    }

    /// Explicitly reopen a completed assessment for editing.
    ///
    /// Returns a draft positioned at the review step with the original
    /// answers. The risk conclusions are not carried over; the draft
    /// must pass [`DraftAssessment::complete`] again to become
    /// authoritative.
    pub fn reopen(catalog: &Catalog, assessment: &Assessment) -> Result<Self, LifecycleError> {
        if assessment.status != AssessmentStatus::Completed {
            return Err(LifecycleError::NotCompleted {
                status: assessment.status,
            });
        }
        let domains = rebuild_domains(catalog, &assessment.domains)?;
        info!(assessment = %assessment.id, "assessment reopened for editing");
        Ok(Self {
            id: assessment.id,
            subject_id: assessment.subject_id,
            assessor_id: assessment.assessor_id,
            assessed_at: assessment.assessed_at,
            step: catalog.review_step(),
            domains,
            notes: assessment.notes.clone(),
            results: Vec::new(),
            overall: None,
            created_at: assessment.created_at,
        })
    }

    fn domain_complete(&self, domain: &Domain) -> bool {
        self.domains
            .get(&domain.id)
            .is_some_and(|a| a.answers.len() == domain.questions.len())
    }

    fn score_all(&self, catalog: &Catalog) -> Result<Vec<DomainResult>, LifecycleError> {
        let empty = DomainAnswers::default();
        catalog
            .domains()
            .iter()
            .map(|domain| {
                let answers = self.domains.get(&domain.id).unwrap_or(&empty);
                score_domain(domain, answers)
            })
            .collect()
    }
}

/// Load a completed assessment from its persisted snapshot.
///
/// The conclusions are recomputed from the stored answers. A stored
/// cumulative score or overall risk that disagrees with recomputation
/// means the derived fields were edited outside the aggregator, and the
/// load is rejected rather than silently accepted.
pub fn completed_from_snapshot(
    catalog: &Catalog,
    snapshot: &AssessmentSnapshot,
) -> Result<Assessment, LifecycleError> {
    if snapshot.status != AssessmentStatus::Completed {
        return Err(LifecycleError::NotCompleted {
            status: snapshot.status,
        });
    }
    let domains = rebuild_domains(catalog, &snapshot.domains)?;
    let empty = DomainAnswers::default();
    let results: Vec<DomainResult> = catalog
        .domains()
        .iter()
        .map(|domain| score_domain(domain, domains.get(&domain.id).unwrap_or(&empty)))
        .collect::<Result<_, _>>()?;
    let incomplete: Vec<String> = results
        .iter()
        .filter(|r| !r.complete)
        .map(|r| r.domain_id.clone())
        .collect();
    if !incomplete.is_empty() {
        return Err(LifecycleError::IncompleteDomains {
            domains: incomplete,
        });
    }
    let overall = aggregate_overall(&results);
    if let Some(stored) = snapshot.cumulative_score
        && stored != overall.cumulative_score
    {
        return Err(LifecycleError::DerivedFieldMismatch {
            field: "cumulative_score",
            stored: stored.to_string(),
            computed: overall.cumulative_score.to_string(),
        });
    }
    if let Some(stored) = snapshot.overall_risk
        && Some(stored) != overall.risk
    {
        return Err(LifecycleError::DerivedFieldMismatch {
            field: "overall_risk",
            stored: format!("{stored:?}"),
            computed: format!("{:?}", overall.risk),
        });
    }
    Ok(Assessment {
        id: snapshot.id,
        subject_id: snapshot.subject_id,
        assessor_id: snapshot.assessor_id,
        assessed_at: snapshot.assessed_at,
        status: AssessmentStatus::Completed,
        step: snapshot.step,
        cumulative_score: overall.cumulative_score,
        overall_risk: overall.risk,
        domain_results: results,
        domains,
        notes: snapshot.notes.clone(),
        created_at: snapshot.created_at,
        updated_at: snapshot.updated_at,
    })
}

fn rebuild_domains(
    catalog: &Catalog,
    stored: &BTreeMap<String, DomainAnswers>,
) -> Result<BTreeMap<String, DomainAnswers>, LifecycleError> {
    for (domain_id, answers) in stored {
        catalog.validate_answers(domain_id, answers)?;
    }
    let mut domains: BTreeMap<String, DomainAnswers> = catalog
        .domains()
        .iter()
        .map(|d| (d.id.clone(), DomainAnswers::default()))
        .collect();
    for (domain_id, answers) in stored {
        domains.insert(domain_id.clone(), answers.clone());
    }
    Ok(domains)
}
