use proptest::prelude::*;
use teamforge::catalog::{Assignment, Catalog};
use teamforge::playstyle::{DuplicatePenalty, PlaystyleProfile};
use teamforge::roster::Roster;
use teamforge::scorer::score;

const PROFESSIONS: [&str; 4] = ["P0", "P1", "P2", "P3"];
const ROLES: [&str; 3] = ["r0", "r1", "r2"];
const TAGS: [&str; 5] = ["t0", "t1", "t2", "t3", "t4"];

// --- STRATEGIES ---

fn fixed_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    for (p, prof) in PROFESSIONS.iter().enumerate() {
        for (r, role) in ROLES.iter().enumerate() {
            catalog.insert(prof, role, [TAGS[(p + r) % TAGS.len()], TAGS[(p * r) % TAGS.len()]]);
        }
    }
    catalog
}

fn arb_penalty() -> impl Strategy<Value = DuplicatePenalty> {
    prop_oneof![
        (0.0..1.0f64, 0.0..=1.0f64)
            .prop_map(|(per_excess, max)| DuplicatePenalty::Linear { per_excess, max }),
        (0.0..=1.0f64).prop_map(|max| DuplicatePenalty::Ratio { max }),
    ]
}

prop_compose! {
    fn arb_profile()(
        weight_buff in 0.0..=1.0f64,
        roles in proptest::sample::subsequence(ROLES.to_vec(), 0..=ROLES.len()),
        buffs in proptest::sample::subsequence(TAGS.to_vec(), 0..=TAGS.len()),
        penalty in arb_penalty(),
    ) -> PlaystyleProfile {
        PlaystyleProfile::new("prop", weight_buff, 1.0 - weight_buff)
            .with_roles(roles)
            .with_buffs(buffs)
            .with_penalty(penalty)
    }
}

fn arb_slot() -> impl Strategy<Value = Option<Assignment>> {
    prop_oneof![
        1 => Just(None::<Assignment>),
        4 => (0..PROFESSIONS.len(), 0..ROLES.len())
            .prop_map(|(p, r)| Some(Assignment::new(PROFESSIONS[p], ROLES[r]))),
    ]
}

fn arb_roster() -> impl Strategy<Value = Roster> {
    proptest::collection::vec(arb_slot(), 1..12).prop_map(Roster::new)
}

proptest! {
    #[test]
    fn test_total_stays_in_unit_interval(profile in arb_profile(), roster in arb_roster()) {
        let s = score(&roster, &fixed_catalog(), &profile);
        prop_assert!((0.0..=1.0).contains(&s.total));
        prop_assert!((0.0..=1.0).contains(&s.buff_coverage));
        prop_assert!((0.0..=1.0).contains(&s.role_coverage));
        prop_assert!(s.duplicate_penalty >= 0.0);
        prop_assert!(s.duplicate_penalty <= profile.duplicate_penalty.max());
    }

    #[test]
    fn test_distinct_pairs_pay_no_penalty(profile in arb_profile(), roster in arb_roster()) {
        let mut seen = std::collections::BTreeSet::new();
        let distinct: Roster = roster
            .slots()
            .iter()
            .map(|s| s.clone().filter(|a| seen.insert(a.clone())))
            .collect();
        let s = score(&distinct, &fixed_catalog(), &profile);
        prop_assert_eq!(s.duplicate_penalty, 0.0);
    }

    #[test]
    fn test_slot_order_does_not_matter(profile in arb_profile(), roster in arb_roster()) {
        let catalog = fixed_catalog();
        let reversed: Roster = roster.slots().iter().rev().cloned().collect();
        prop_assert_eq!(score(&roster, &catalog, &profile), score(&reversed, &catalog, &profile));
    }

    #[test]
    fn test_penalty_is_monotone(penalty in arb_penalty(), team_size in 2usize..20) {
        let values: Vec<f64> = (0..team_size).map(|e| penalty.apply(e, team_size)).collect();
        prop_assert!(values.windows(2).all(|w| w[0] <= w[1]));
        prop_assert!(values.iter().all(|v| *v <= penalty.max()));
    }

    #[test]
    fn test_identical_team_pays_full_penalty(penalty in arb_penalty(), team_size in 2usize..20) {
        let full = penalty.apply(team_size - 1, team_size);
        prop_assert!((full - penalty.max()).abs() < 1e-12);
    }

    #[test]
    fn test_identical_roster_scores_full_penalty(
        profile in arb_profile(),
        p in 0..PROFESSIONS.len(),
        r in 0..ROLES.len(),
        team_size in 2usize..12,
    ) {
        let roster = Roster::new(vec![Some(Assignment::new(PROFESSIONS[p], ROLES[r])); team_size]);
        let s = score(&roster, &fixed_catalog(), &profile);
        prop_assert!((s.duplicate_penalty - profile.duplicate_penalty.max()).abs() < 1e-12);
    }
}
