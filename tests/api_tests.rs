mod common;

use common::*;
use rstest::rstest;
use teamforge::api::{suggest_team, suggest_team_with, suggest_team_with_evaluator, TeamRequest};
use teamforge::catalog::Catalog;
use teamforge::config::{Algorithm, AlgorithmParams, BudgetArgs, DEFAULT_SAMPLES};
use teamforge::error::TeamForgeError;
use teamforge::optimizer::{NoProgress, Strategy, Termination};
use teamforge::roster::Roster;

#[rstest]
#[case("sampling")]
#[case("genetic")]
fn test_suggest_returns_full_valid_roster(#[case] algorithm: &str) {
    let catalog = Catalog::builtin();
    let request = TeamRequest::new(5, "zerg", algorithm)
        .with_seed(42)
        .with_params(AlgorithmParams {
            samples: Some(200),
            generations: Some(10),
            population_size: Some(40),
            ..AlgorithmParams::default()
        });

    let result = suggest_team(&request, &catalog).unwrap();
    assert_eq!(result.roster.len(), 5);
    assert_eq!(result.roster.filled_count(), 5);
    assert!(result.roster.filled().all(|a| catalog.supports(a)));
    assert!((0.0..=1.0).contains(&result.score.total));
    assert_eq!(result.alternatives[0].roster, result.roster);
}

#[test]
fn test_same_seed_same_team() {
    let catalog = Catalog::builtin();
    let request = TeamRequest::new(8, "raid_guild", "genetic")
        .with_seed(7)
        .with_params(AlgorithmParams {
            generations: Some(15),
            population_size: Some(50),
            ..AlgorithmParams::default()
        });

    let a = suggest_team(&request, &catalog).unwrap();
    let b = suggest_team(&request, &catalog).unwrap();
    assert_eq!(a.roster, b.roster);
    assert_eq!(a.score, b.score);
    assert_eq!(a.diagnostics.history, b.diagnostics.history);
}

#[test]
fn test_effective_request_reproduces_unseeded_run() {
    let catalog = Catalog::builtin();
    let first = suggest_team(&TeamRequest::new(5, "havoc", "sampling"), &catalog).unwrap();

    let replay = TeamRequest::new(5, "havoc", "sampling").with_seed(first.request.seed);
    let second = suggest_team(&replay, &catalog).unwrap();
    assert_eq!(first.roster, second.roster);
}

#[test]
fn test_defaults_are_echoed() {
    let result = suggest_team(
        &TeamRequest::new(3, "Roaming", "SAMPLING").with_seed(1),
        &Catalog::builtin(),
    )
    .unwrap();

    assert_eq!(result.request.playstyle, "roaming");
    assert_eq!(result.request.algorithm, Algorithm::Sampling);
    match &result.request.strategy {
        Strategy::Sampling(p) => assert_eq!(p.samples, DEFAULT_SAMPLES),
        other => panic!("unexpected strategy {:?}", other),
    }
    assert_eq!(result.diagnostics.evaluations, DEFAULT_SAMPLES);
}

#[test]
fn test_zero_team_size_is_rejected_before_scoring() {
    let evaluator = CountingEvaluator::new();
    let err = suggest_team_with_evaluator(
        &TeamRequest::new(0, "ab", "sampling"),
        &ab_catalog(),
        &ab_registry(),
        &evaluator,
        &NoProgress,
    )
    .unwrap_err();

    assert!(matches!(err, TeamForgeError::Config(_)));
    assert_eq!(evaluator.calls(), 0);
}

#[test]
fn test_zero_samples_is_rejected_before_scoring() {
    let evaluator = CountingEvaluator::new();
    let request = TeamRequest::new(3, "ab", "sampling").with_params(AlgorithmParams {
        samples: Some(0),
        ..AlgorithmParams::default()
    });
    let err = suggest_team_with_evaluator(
        &request,
        &ab_catalog(),
        &ab_registry(),
        &evaluator,
        &NoProgress,
    )
    .unwrap_err();

    assert!(err.is_configuration());
    assert_eq!(evaluator.calls(), 0);
}

#[test]
fn test_unknown_playstyle() {
    let err = suggest_team(&TeamRequest::new(5, "siege", "sampling"), &Catalog::builtin())
        .unwrap_err();
    assert!(matches!(err, TeamForgeError::UnknownPlaystyle(ref n) if n == "siege"));
}

#[test]
fn test_unknown_algorithm() {
    let err = suggest_team(&TeamRequest::new(5, "zerg", "annealing"), &Catalog::builtin())
        .unwrap_err();
    assert!(matches!(err, TeamForgeError::UnknownAlgorithm(_)));
}

#[test]
fn test_empty_allowed_list_gives_unfilled_team() {
    let request = TeamRequest::new(3, "ab", "genetic")
        .with_seed(1)
        .with_allowed(Vec::<String>::new());
    let result = suggest_team_with(&request, &ab_catalog(), &ab_registry()).unwrap();

    assert_eq!(result.roster, Roster::unfilled(3));
    assert_eq!(result.score.total, 0.0);
    assert_eq!(result.diagnostics.termination, Termination::Infeasible);
    assert_eq!(result.diagnostics.eligible_assignments, 0);
    assert_eq!(result.diagnostics.unavailable_professions, ["A", "B"]);
}

#[test]
fn test_unknown_allowed_names_are_reported() {
    let request = TeamRequest::new(2, "ab", "sampling")
        .with_seed(1)
        .with_allowed(["b", "Zed"]);
    let result = suggest_team_with(&request, &ab_catalog(), &ab_registry()).unwrap();

    assert!(result.roster.filled().all(|a| a.profession == "B"));
    assert_eq!(result.diagnostics.unknown_professions, ["Zed"]);
    assert_eq!(result.diagnostics.unavailable_professions, ["A"]);
}

#[test]
fn test_expired_deadline_still_returns_a_team() {
    let request = TeamRequest::new(4, "zerg", "genetic")
        .with_seed(3)
        .with_budget(BudgetArgs {
            deadline_ms: Some(0),
            ..BudgetArgs::default()
        });
    let result = suggest_team(&request, &Catalog::builtin()).unwrap();

    assert_eq!(result.roster.len(), 4);
    assert_eq!(result.diagnostics.termination, Termination::DeadlineExceeded);
    assert!(result.diagnostics.truncated);
    assert_eq!(result.diagnostics.iterations, 0);
}

#[test]
fn test_invalid_budget_is_rejected() {
    let request = TeamRequest::new(4, "zerg", "sampling").with_budget(BudgetArgs {
        target_score: Some(1.5),
        ..BudgetArgs::default()
    });
    assert!(suggest_team(&request, &Catalog::builtin()).is_err());
}

#[test]
fn test_memoized_run_matches_plain_run() {
    let catalog = Catalog::builtin();
    let base = TeamRequest::new(5, "havoc", "genetic")
        .with_seed(12)
        .with_params(AlgorithmParams {
            generations: Some(20),
            population_size: Some(30),
            ..AlgorithmParams::default()
        });

    let plain = suggest_team(&base, &catalog).unwrap();
    let memo = suggest_team(&base.clone().with_memoize(true), &catalog).unwrap();

    assert_eq!(plain.roster, memo.roster);
    assert_eq!(plain.score, memo.score);
    assert!(memo.diagnostics.cache_hits.is_some());
    assert!(plain.diagnostics.cache_hits.is_none());
}

#[test]
fn test_request_round_trips_through_json() {
    let json = r#"{
        "teamSize": 4,
        "playstyle": "zerg",
        "algorithm": "genetic",
        "params": { "generations": 5, "population_size": 20 },
        "seed": 9,
        "topN": 2
    }"#;
    let request: TeamRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.params.generations, Some(5));
    assert_eq!(request.allowed_professions, None);

    let result = suggest_team(&request, &Catalog::builtin()).unwrap();
    assert_eq!(result.alternatives.len(), 2);
    let out = serde_json::to_value(&result).unwrap();
    assert_eq!(out["request"]["seed"], 9);
    assert_eq!(out["diagnostics"]["termination"], "completed");
}
