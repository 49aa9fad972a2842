use std::collections::BTreeMap;

use jiff::civil::{Date, date};
use uuid::Uuid;

use carebridge_catalog::Catalog;
use carebridge_core::models::assessment::{Assessment, AssessmentStatus, DomainResult};
use carebridge_core::models::risk::RiskLevel;
use carebridge_insights::report::generate_report;

fn result(domain_id: &str, score: u32, risk: RiskLevel) -> DomainResult {
    DomainResult {
        domain_id: domain_id.to_string(),
        score,
        max_score: 4,
        risk,
        complete: true,
        notes: None,
    }
}

fn assessment(
    subject_id: Uuid,
    assessed_at: Date,
    overall_risk: Option<RiskLevel>,
    results: Vec<DomainResult>,
) -> Assessment {
    Assessment {
        id: Uuid::new_v4(),
        subject_id,
        assessor_id: Uuid::new_v4(),
        assessed_at,
        status: AssessmentStatus::Completed,
        step: 8,
        cumulative_score: results.iter().map(|r| r.score).sum(),
        overall_risk,
        domain_results: results,
        domains: BTreeMap::new(),
        notes: None,
        created_at: jiff::Timestamp::UNIX_EPOCH,
        updated_at: jiff::Timestamp::UNIX_EPOCH,
    }
}

#[test]
fn averages_exclude_assessments_without_a_score() {
    let catalog = Catalog::icope();
    let mut batch = Vec::new();
    // hearing scored in 6 of 10 assessments
    for i in 0..10 {
        let results = if i < 6 {
            vec![result("hearing", 2, RiskLevel::Intervention)]
        } else {
            vec![result("mood", 1, RiskLevel::AtRisk)]
        };
        batch.push(assessment(
            Uuid::new_v4(),
            date(2026, 5, 1),
            Some(RiskLevel::AtRisk),
            results,
        ));
    }

    let report = generate_report(catalog, &batch);
    let hearing = report
        .domains
        .iter()
        .find(|d| d.domain_id == "hearing")
        .unwrap();
    assert_eq!(hearing.scored, 6);
    assert_eq!(hearing.avg_score, 2.0);
    assert_eq!(hearing.intervention, 6);

    // a domain nobody scored averages zero over zero samples
    let vision = report
        .domains
        .iter()
        .find(|d| d.domain_id == "vision")
        .unwrap();
    assert_eq!(vision.scored, 0);
    assert_eq!(vision.avg_score, 0.0);
}

#[test]
fn summary_counts_risk_levels_and_unique_subjects() {
    let catalog = Catalog::icope();
    let repeat_subject = Uuid::new_v4();
    let batch = vec![
        assessment(repeat_subject, date(2026, 2, 3), Some(RiskLevel::Healthy), vec![]),
        assessment(repeat_subject, date(2026, 5, 3), Some(RiskLevel::AtRisk), vec![]),
        assessment(Uuid::new_v4(), date(2026, 5, 20), Some(RiskLevel::Intervention), vec![]),
    ];

    let report = generate_report(catalog, &batch);
    assert_eq!(report.summary.total, 3);
    assert_eq!(report.summary.healthy, 1);
    assert_eq!(report.summary.at_risk, 1);
    assert_eq!(report.summary.intervention, 1);
    assert_eq!(report.summary.unique_subjects, 2);
}

#[test]
fn drafts_count_toward_total_only() {
    let catalog = Catalog::icope();
    let batch = vec![assessment(Uuid::new_v4(), date(2026, 5, 1), None, vec![])];

    let report = generate_report(catalog, &batch);
    assert_eq!(report.summary.total, 1);
    assert_eq!(report.summary.healthy, 0);
    assert_eq!(report.summary.at_risk, 0);
    assert_eq!(report.summary.intervention, 0);
    assert!(report.monthly.is_empty());
}

#[test]
fn monthly_trend_is_chronological_and_capped_to_twelve() {
    let catalog = Catalog::icope();
    let mut batch = Vec::new();
    // fourteen consecutive months ending 2026-02, newest first in the input
    for offset in 0..14i16 {
        let (year, month) = if offset < 2 {
            (2026, 2 - offset)
        } else {
            (2025, 14 - offset)
        };
        batch.push(assessment(
            Uuid::new_v4(),
            date(year, month as i8, 15),
            Some(RiskLevel::Healthy),
            vec![],
        ));
    }

    let report = generate_report(catalog, &batch);
    assert_eq!(report.monthly.len(), 12);
    assert_eq!(report.monthly.first().unwrap().month, "2025-03");
    assert_eq!(report.monthly.last().unwrap().month, "2026-02");
    let months: Vec<&str> = report.monthly.iter().map(|p| p.month.as_str()).collect();
    let mut sorted = months.clone();
    sorted.sort_unstable();
    assert_eq!(months, sorted);
    assert!(report.monthly.iter().all(|p| p.healthy == 1));
}

#[test]
fn monthly_buckets_accumulate_within_a_month() {
    let catalog = Catalog::icope();
    let batch = vec![
        assessment(Uuid::new_v4(), date(2026, 5, 2), Some(RiskLevel::Healthy), vec![]),
        assessment(Uuid::new_v4(), date(2026, 5, 28), Some(RiskLevel::Intervention), vec![]),
    ];

    let report = generate_report(catalog, &batch);
    assert_eq!(report.monthly.len(), 1);
    let point = &report.monthly[0];
    assert_eq!(point.month, "2026-05");
    assert_eq!(point.healthy, 1);
    assert_eq!(point.intervention, 1);
}

#[test]
fn off_catalog_domains_still_appear_in_the_breakdown() {
    let catalog = Catalog::icope();
    let batch = vec![assessment(
        Uuid::new_v4(),
        date(2026, 5, 1),
        Some(RiskLevel::AtRisk),
        vec![result("grip_strength", 3, RiskLevel::AtRisk)],
    )];

    let report = generate_report(catalog, &batch);
    let grip = report
        .domains
        .iter()
        .find(|d| d.domain_id == "grip_strength")
        .unwrap();
    assert_eq!(grip.scored, 1);
    assert_eq!(grip.avg_score, 3.0);
    assert_eq!(grip.at_risk, 1);
    // off-catalog ids trail the twelve catalog domains
    assert_eq!(report.domains.len(), 13);
    assert_eq!(report.domains.last().unwrap().domain_id, "grip_strength");
}

#[test]
fn empty_batch_produces_an_empty_report() {
    let catalog = Catalog::icope();
    let report = generate_report(catalog, &[]);
    assert_eq!(report.summary.total, 0);
    assert_eq!(report.summary.unique_subjects, 0);
    assert!(report.monthly.is_empty());
    assert!(report.domains.iter().all(|d| d.scored == 0));
}
