use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use carebridge_catalog::Catalog;
use carebridge_core::models::assessment::Assessment;
use carebridge_core::models::risk::RiskLevel;

/// How many monthly buckets the trend series keeps.
const TREND_MONTHS: usize = 12;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportSummary {
    pub total: u32,
    pub healthy: u32,
    pub at_risk: u32,
    pub intervention: u32,
    pub unique_subjects: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DomainBreakdown {
    pub domain_id: String,
    /// Average over the assessments where this domain has a score;
    /// assessments that never scored it are excluded from numerator and
    /// denominator both.
    pub avg_score: f64,
    /// How many assessments the average was computed over.
    pub scored: u32,
    pub at_risk: u32,
    pub intervention: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MonthlyTrendPoint {
    /// `YYYY-MM` of the assessed-at date.
    pub month: String,
    pub healthy: u32,
    pub at_risk: u32,
    pub intervention: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentReport {
    pub summary: ReportSummary,
    pub domains: Vec<DomainBreakdown>,
    /// Chronological, capped to the most recent twelve months.
    pub monthly: Vec<MonthlyTrendPoint>,
}

/// Population statistics over a batch of assessments.
///
/// The batch is taken as given; date-range and risk filtering happen
/// upstream. Assessments without an overall risk (drafts) count toward
/// the total but not toward any risk bucket.
pub fn generate_report(catalog: &Catalog, assessments: &[Assessment]) -> AssessmentReport {
    let mut summary = ReportSummary {
        total: assessments.len() as u32,
        ..ReportSummary::default()
    };
    let mut subjects = BTreeSet::new();
    let mut months: BTreeMap<String, MonthlyTrendPoint> = BTreeMap::new();

    for assessment in assessments {
        subjects.insert(assessment.subject_id);
        if let Some(risk) = assessment.overall_risk {
            let month = format!(
                "{:04}-{:02}",
                assessment.assessed_at.year(),
                assessment.assessed_at.month()
            );
            let point = months.entry(month.clone()).or_insert(MonthlyTrendPoint {
                month,
                ..MonthlyTrendPoint::default()
            });
            match risk {
                RiskLevel::Healthy => {
                    summary.healthy += 1;
                    point.healthy += 1;
                }
                RiskLevel::AtRisk => {
                    summary.at_risk += 1;
                    point.at_risk += 1;
                }
                RiskLevel::Intervention => {
                    summary.intervention += 1;
                    point.intervention += 1;
                }
            }
        }
    }
    summary.unique_subjects = subjects.len() as u32;

    let domains = domain_breakdowns(catalog, assessments);

    // BTreeMap keys are zero-padded YYYY-MM, so iteration order is
    // chronological; keep the tail.
    let mut monthly: Vec<MonthlyTrendPoint> = months.into_values().collect();
    if monthly.len() > TREND_MONTHS {
        monthly.drain(..monthly.len() - TREND_MONTHS);
    }

    debug!(
        total = summary.total,
        subjects = summary.unique_subjects,
        "report generated"
    );
    AssessmentReport {
        summary,
        domains,
        monthly,
    }
}

fn domain_breakdowns(catalog: &Catalog, assessments: &[Assessment]) -> Vec<DomainBreakdown> {
    let seen: BTreeSet<&str> = assessments
        .iter()
        .flat_map(|a| a.domain_results.iter())
        .map(|r| r.domain_id.as_str())
        .collect();
    let mut ordered: Vec<&str> = catalog.domains().iter().map(|d| d.id.as_str()).collect();
    for id in &seen {
        if catalog.domain(id).is_err() {
            ordered.push(*id);
        }
    }

    ordered
        .into_iter()
        .map(|domain_id| {
            let mut sum: u64 = 0;
            let mut scored: u32 = 0;
            let mut at_risk: u32 = 0;
            let mut intervention: u32 = 0;
            for assessment in assessments {
                let result = assessment
                    .domain_results
                    .iter()
                    .find(|r| r.domain_id == domain_id);
                if let Some(result) = result {
                    sum += u64::from(result.score);
                    scored += 1;
                    match result.risk {
                        RiskLevel::Healthy => {}
                        RiskLevel::AtRisk => at_risk += 1,
                        RiskLevel::Intervention => intervention += 1,
                    }
                }
            }
            let avg_score = if scored == 0 {
                0.0
            } else {
                sum as f64 / f64::from(scored)
            };
            DomainBreakdown {
                domain_id: domain_id.to_string(),
                avg_score,
                scored,
                at_risk,
                intervention,
            }
        })
        .collect()
}
