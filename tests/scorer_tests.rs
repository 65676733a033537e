mod common;

use common::*;
use rstest::rstest;
use teamforge::catalog::Catalog;
use teamforge::error::TeamForgeError;
use teamforge::playstyle::{DuplicatePenalty, PlaystyleProfile, PlaystyleRegistry};
use teamforge::roster::Roster;
use teamforge::scorer::{score, ScoreBreakdown, Scorer};

#[test]
fn test_perfect_roster_scores_one() {
    let catalog = ab_catalog();
    let profile = ab_profile();
    let team = roster(&[("A", "damage"), ("A", "support"), ("B", "healing")]);

    let s = score(&team, &catalog, &profile);
    assert_eq!(s.buff_coverage, 1.0);
    assert_eq!(s.role_coverage, 1.0);
    assert_eq!(s.duplicate_penalty, 0.0);
    assert_eq!(s.total, 1.0);
}

#[test]
fn test_duplicates_reduce_total_despite_full_coverage() {
    let catalog = ab_catalog();
    let profile = ab_profile();
    let team = roster(&[
        ("A", "damage"),
        ("A", "support"),
        ("B", "healing"),
        ("A", "damage"),
        ("B", "healing"),
    ]);

    let s = score(&team, &catalog, &profile);
    assert_eq!(s.role_coverage, 1.0);
    assert_eq!(s.buff_coverage, 1.0);
    assert!(s.duplicate_penalty > 0.0);
    assert!(s.total < 1.0);
}

#[test]
fn test_scoring_is_idempotent() {
    let catalog = Catalog::builtin();
    let registry = PlaystyleRegistry::builtin();
    let profile = registry.resolve("zerg").unwrap();
    let team = Roster::parse(
        "Guardian/heal, Revenant/alacrity, Warrior/quickness, Necromancer/dps, -",
        &catalog,
    )
    .unwrap();

    let first = score(&team, &catalog, profile);
    for _ in 0..10 {
        assert_eq!(score(&team, &catalog, profile), first);
    }
}

#[test]
fn test_all_unfilled_scores_zero() {
    let s = score(&Roster::unfilled(5), &ab_catalog(), &ab_profile());
    assert_eq!(s.total, 0.0);
    assert_eq!(s.buff_coverage, 0.0);
    assert_eq!(s.role_coverage, 0.0);
}

#[rstest]
#[case(&[("A", "damage")], 0.5, 1.0 / 3.0)]
#[case(&[("B", "healing")], 0.5, 1.0 / 3.0)]
#[case(&[("A", "damage"), ("B", "healing")], 1.0, 2.0 / 3.0)]
#[case(&[("A", "support")], 0.0, 1.0 / 3.0)]
fn test_partial_coverage(
    #[case] entries: &[(&str, &str)],
    #[case] roles: f64,
    #[case] buffs: f64,
) {
    let s = score(&roster(entries), &ab_catalog(), &ab_profile());
    assert!((s.role_coverage - roles).abs() < 1e-12);
    assert!((s.buff_coverage - buffs).abs() < 1e-12);
}

#[test]
fn test_heavier_penalty_never_raises_total() {
    let catalog = ab_catalog();
    let team = roster(&[("A", "damage"), ("A", "damage"), ("B", "healing")]);
    let soft = ab_profile().with_penalty(DuplicatePenalty::Ratio { max: 0.1 });
    let hard = ab_profile().with_penalty(DuplicatePenalty::Ratio { max: 0.9 });
    assert!(score(&team, &catalog, &hard).total <= score(&team, &catalog, &soft).total);
}

#[test]
fn test_total_is_clamped_at_zero() {
    let catalog = ab_catalog();
    let profile = PlaystyleProfile::new("harsh", 0.5, 0.5)
        .with_roles(["tank"])
        .with_buffs(["aegis"])
        .with_penalty(DuplicatePenalty::Ratio { max: 1.0 });
    let team = roster(&[("A", "damage"), ("A", "damage")]);
    let s = score(&team, &catalog, &profile);
    assert_eq!(s.total, 0.0);
    assert_eq!(s.duplicate_penalty, 1.0);
}

#[test]
fn test_scorer_rejects_wrong_length() {
    let catalog = ab_catalog();
    let profile = ab_profile();
    let scorer = Scorer::new(&catalog, &profile, 3).unwrap();
    let err = scorer.score(&Roster::unfilled(4)).unwrap_err();
    assert!(matches!(
        err,
        TeamForgeError::RosterLength {
            expected: 3,
            actual: 4
        }
    ));
}

#[test]
fn test_scorer_rejects_zero_team_size() {
    let catalog = ab_catalog();
    let profile = ab_profile();
    assert!(matches!(
        Scorer::new(&catalog, &profile, 0),
        Err(TeamForgeError::Config(_))
    ));
}

#[test]
fn test_details_agree_with_fast_path() {
    let catalog = ab_catalog();
    let profile = ab_profile();
    let scorer = Scorer::new(&catalog, &profile, 4).unwrap();
    let team = roster(&[("A", "damage"), ("A", "damage"), ("B", "healing"), ("X", "damage")]);

    let details = scorer.score_details(&team).unwrap();
    assert_eq!(details.breakdown, scorer.score(&team).unwrap());
    assert_eq!(details.unknown_slots, [3]);
    let missing: Vec<&str> = details.missing_buffs().collect();
    assert_eq!(missing, ["quickness"]);
}

#[test]
fn test_pairs_missing_from_catalog_count_as_unfilled() {
    let mut catalog = Catalog::new();
    catalog.insert("A", "damage", ["might"]);
    let profile = PlaystyleProfile::new("heal", 0.5, 0.5).with_roles(["healing"]);

    let ghost = roster(&[("Ghost", "healing")]);
    assert_eq!(score(&ghost, &catalog, &profile), ScoreBreakdown::default());

    // Unlisted copies neither cover roles nor add duplicate penalty
    let mixed = roster(&[("A", "damage"), ("Ghost", "healing"), ("Ghost", "healing")]);
    let s = score(&mixed, &catalog, &profile);
    assert_eq!(s.role_coverage, 0.0);
    assert_eq!(s.duplicate_penalty, 0.0);
    assert_eq!(s.total, 0.5);

    let scorer = Scorer::new(&catalog, &profile, 3).unwrap();
    let details = scorer.score_details(&mixed).unwrap();
    assert_eq!(details.unknown_slots, [1, 2]);
    assert!(details.duplicates.is_empty());
    assert!(details.roles[0].providers.is_empty());
}
