use carebridge_catalog::Catalog;
use carebridge_catalog::error::CatalogError;
use carebridge_core::models::assessment::DomainAnswers;
use carebridge_core::models::risk::RiskLevel;
use carebridge_engine::aggregate::aggregate_overall;
use carebridge_engine::error::LifecycleError;
use carebridge_engine::scoring::{risk_for, score_domain};

fn answers(pairs: &[(&str, u8)]) -> DomainAnswers {
    DomainAnswers {
        answers: pairs
            .iter()
            .map(|(id, points)| (id.to_string(), *points))
            .collect(),
        notes: None,
    }
}

#[test]
fn risk_boundaries_for_max_eight() {
    // quarter of max = 2, half of max = 4
    assert_eq!(risk_for(0, 8), RiskLevel::Healthy);
    assert_eq!(risk_for(2, 8), RiskLevel::Healthy);
    assert_eq!(risk_for(3, 8), RiskLevel::AtRisk);
    assert_eq!(risk_for(4, 8), RiskLevel::AtRisk);
    assert_eq!(risk_for(5, 8), RiskLevel::Intervention);
    assert_eq!(risk_for(8, 8), RiskLevel::Intervention);
}

#[test]
fn risk_is_monotonic_in_score() {
    for max in [1, 2, 3, 4, 6, 8] {
        let mut previous = RiskLevel::Healthy;
        for score in 0..=max {
            let level = risk_for(score, max);
            assert!(level >= previous, "score {score} of {max}");
            previous = level;
        }
    }
}

#[test]
fn zero_max_is_defensively_healthy() {
    assert_eq!(risk_for(0, 0), RiskLevel::Healthy);
}

#[test]
fn score_is_bounded_by_domain_maximum() {
    let catalog = Catalog::icope();
    for domain in catalog.domains() {
        let full = DomainAnswers {
            answers: domain
                .questions
                .iter()
                .map(|q| (q.id.clone(), q.max_points()))
                .collect(),
            notes: None,
        };
        let result = score_domain(domain, &full).unwrap();
        assert_eq!(result.score, domain.max_score());
        assert!(result.complete);
        assert_eq!(result.risk, RiskLevel::Intervention);
    }
}

#[test]
fn unanswered_questions_contribute_zero_but_mark_incomplete() {
    let catalog = Catalog::icope();
    let cognition = catalog.domain("cognition").unwrap();

    let partial = score_domain(cognition, &answers(&[("memory_complaints", 1)])).unwrap();
    assert_eq!(partial.score, 1);
    assert_eq!(partial.max_score, 4);
    assert!(!partial.complete);

    let empty = score_domain(cognition, &DomainAnswers::default()).unwrap();
    assert_eq!(empty.score, 0);
    assert_eq!(empty.risk, RiskLevel::Healthy);
    assert!(!empty.complete);
}

#[test]
fn unknown_question_and_foreign_points_are_rejected() {
    let catalog = Catalog::icope();
    let vision = catalog.domain("vision").unwrap();

    let unknown = score_domain(vision, &answers(&[("bogus", 1)]));
    assert!(matches!(
        unknown,
        Err(LifecycleError::Catalog(CatalogError::UnknownQuestion { .. }))
    ));

    let foreign = score_domain(vision, &answers(&[("eyesight", 9)]));
    assert!(matches!(
        foreign,
        Err(LifecycleError::Catalog(CatalogError::InvalidAnswer {
            points: 9,
            ..
        }))
    ));
}

#[test]
fn notes_carry_through_to_the_result() {
    let catalog = Catalog::icope();
    let vision = catalog.domain("vision").unwrap();
    let mut input = answers(&[("eyesight", 1)]);
    input.notes = Some("new glasses last spring".to_string());
    let result = score_domain(vision, &input).unwrap();
    assert_eq!(result.notes.as_deref(), Some("new glasses last spring"));
}

#[test]
fn worst_domain_wins_scenario() {
    let catalog = Catalog::icope();
    let vision = score_domain(
        catalog.domain("vision").unwrap(),
        &answers(&[("eyesight", 2)]),
    )
    .unwrap();
    assert_eq!(vision.score, 2);
    assert_eq!(vision.max_score, 2);
    assert_eq!(vision.risk, RiskLevel::Intervention);

    let cognition = score_domain(
        catalog.domain("cognition").unwrap(),
        &answers(&[("memory_complaints", 0), ("orientation", 0)]),
    )
    .unwrap();
    assert_eq!(cognition.risk, RiskLevel::Healthy);

    let overall = aggregate_overall(&[cognition, vision]);
    assert_eq!(overall.risk, Some(RiskLevel::Intervention));
    assert_eq!(overall.cumulative_score, 2);
}

#[test]
fn aggregation_over_no_results_has_no_risk() {
    let overall = aggregate_overall(&[]);
    assert_eq!(overall.risk, None);
    assert_eq!(overall.cumulative_score, 0);
}

#[test]
fn aggregation_ignores_absent_domains_rather_than_defaulting_them() {
    let catalog = Catalog::icope();
    // only one domain supplied; the aggregate reflects just that domain
    let mobility = score_domain(
        catalog.domain("mobility").unwrap(),
        &answers(&[("chair_stand", 1), ("balance", 0)]),
    )
    .unwrap();
    let overall = aggregate_overall(std::slice::from_ref(&mobility));
    assert_eq!(overall.cumulative_score, 1);
    assert_eq!(overall.risk, Some(mobility.risk));
}
