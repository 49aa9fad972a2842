use carebridge_catalog::error::CatalogError;
use carebridge_catalog::types::Domain;
use carebridge_core::models::assessment::{DomainAnswers, DomainResult};
use carebridge_core::models::risk::RiskLevel;

use crate::error::LifecycleError;

/// Map a (score, max) pair onto a risk level.
///
/// Thresholds are fractions of the domain maximum so domains with
/// different question counts share one rule: healthy at or below a
/// quarter of the maximum, at risk at or below half, intervention above.
/// Integer arithmetic keeps the boundaries exact.
pub fn risk_for(score: u32, max: u32) -> RiskLevel {
    if max == 0 {
        // No scoreable questions. Cannot occur with the shipped catalog.
        return RiskLevel::Healthy;
    }
    if score * 4 <= max {
        RiskLevel::Healthy
    } else if score * 2 <= max {
        RiskLevel::AtRisk
    } else {
        RiskLevel::Intervention
    }
}

/// Score one domain's answers against its catalog definition.
///
/// Pure: callable for any domain independent of wizard progress.
/// Unanswered questions contribute nothing to the score but leave the
/// result marked incomplete. Unknown question ids and point values no
/// option offers are rejected at this boundary.
pub fn score_domain(
    domain: &Domain,
    answers: &DomainAnswers,
) -> Result<DomainResult, LifecycleError> {
    let mut score: u32 = 0;
    for (question_id, points) in &answers.answers {
        let question = domain.question(question_id).ok_or_else(|| {
            CatalogError::UnknownQuestion {
                domain_id: domain.id.clone(),
                question_id: question_id.clone(),
            }
        })?;
        if !question.offers_points(*points) {
            return Err(CatalogError::InvalidAnswer {
                domain_id: domain.id.clone(),
                question_id: question_id.clone(),
                points: *points,
            }
            .into());
        }
        score += u32::from(*points);
    }

    let max_score = domain.max_score();
    Ok(DomainResult {
        domain_id: domain.id.clone(),
        score,
        max_score,
        risk: risk_for(score, max_score),
        complete: answers.answers.len() == domain.questions.len(),
        notes: answers.notes.clone(),
    })
}
