use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use carebridge_catalog::Catalog;
use carebridge_core::models::assessment::{Assessment, AssessmentStatus};

use crate::error::InsightsError;

/// How one domain moved between two assessments. Lower scores are
/// healthier, so a negative change is an improvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Trend {
    /// Scored in the current assessment only (e.g., a domain added to
    /// the catalog between the two).
    New,
    Improved,
    Declined,
    Same,
    /// Scored in the previous assessment only.
    Removed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DomainComparison {
    pub domain_id: String,
    pub previous_score: Option<u32>,
    pub current_score: Option<u32>,
    /// `current − previous`; 0 whenever either side is absent.
    pub change: i64,
    pub trend: Trend,
}

/// Align two completed assessments domain by domain.
///
/// `previous` must have been assessed no later than `current`; reversed
/// arguments are rejected, not silently accepted. The output covers the
/// union of domain ids seen in either assessment (catalog order first,
/// then off-catalog ids lexicographically), so a domain introduced or
/// retired between the two surfaces as `New`/`Removed` instead of being
/// dropped.
pub fn compare_assessments(
    catalog: &Catalog,
    previous: &Assessment,
    current: &Assessment,
) -> Result<Vec<DomainComparison>, InsightsError> {
    for assessment in [previous, current] {
        if assessment.status != AssessmentStatus::Completed {
            return Err(InsightsError::NotCompleted {
                assessment_id: assessment.id,
                status: assessment.status,
            });
        }
    }
    if previous.assessed_at > current.assessed_at {
        return Err(InsightsError::OutOfOrder {
            previous: previous.assessed_at,
            current: current.assessed_at,
        });
    }

    let previous_scores: BTreeMap<&str, u32> = previous
        .domain_results
        .iter()
        .map(|r| (r.domain_id.as_str(), r.score))
        .collect();
    let current_scores: BTreeMap<&str, u32> = current
        .domain_results
        .iter()
        .map(|r| (r.domain_id.as_str(), r.score))
        .collect();

    let seen: BTreeSet<&str> = previous_scores
        .keys()
        .chain(current_scores.keys())
        .copied()
        .collect();
    let mut ordered: Vec<&str> = catalog
        .domains()
        .iter()
        .map(|d| d.id.as_str())
        .filter(|id| seen.contains(id))
        .collect();
    for id in &seen {
        if catalog.domain(id).is_err() {
            ordered.push(*id);
        }
    }

    let mut comparisons = Vec::with_capacity(ordered.len());
    for domain_id in ordered {
        let previous_score = previous_scores.get(domain_id).copied();
        let current_score = current_scores.get(domain_id).copied();
        let (trend, change) = match (previous_score, current_score) {
            (None, Some(_)) => (Trend::New, 0),
            (Some(_), None) => (Trend::Removed, 0),
            (Some(p), Some(c)) => {
                let change = i64::from(c) - i64::from(p);
                let trend = match change {
                    d if d < 0 => Trend::Improved,
                    d if d > 0 => Trend::Declined,
                    _ => Trend::Same,
                };
                (trend, change)
            }
            // ids come from the union of the two score maps
            (None, None) => continue,
        };
        comparisons.push(DomainComparison {
            domain_id: domain_id.to_string(),
            previous_score,
            current_score,
            change,
            trend,
        });
    }
    Ok(comparisons)
}
