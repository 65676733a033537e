use super::types::{CoverageEntry, DuplicateEntry, ScoreBreakdown, ScoreDetails};
use crate::catalog::{Assignment, Catalog};
use crate::playstyle::PlaystyleProfile;
use crate::roster::Roster;
use std::collections::{BTreeMap, BTreeSet};

/// Fast Path: Used by the optimizers. Pure and deterministic.
///
/// Slots holding a pair the catalog does not list count as unfilled.
pub fn score(roster: &Roster, catalog: &Catalog, profile: &PlaystyleProfile) -> ScoreBreakdown {
    let mut roles_present: BTreeSet<&str> = BTreeSet::new();
    let mut tags_present: BTreeSet<&str> = BTreeSet::new();
    let mut counts: BTreeMap<&Assignment, usize> = BTreeMap::new();
    let mut filled = 0;

    for a in roster.filled() {
        let Some(tags) = catalog.tags_for(a) else {
            continue;
        };
        filled += 1;
        *counts.entry(a).or_insert(0) += 1;
        roles_present.insert(a.role.as_str());
        tags_present.extend(tags.iter().map(String::as_str));
    }

    // A team with nobody in it delivers nothing, even against empty requirements
    if filled == 0 {
        return ScoreBreakdown::default();
    }

    let buff_coverage = coverage(&profile.required_buffs, &tags_present);
    let role_coverage = coverage(&profile.required_roles, &roles_present);
    let duplicate_penalty = profile
        .duplicate_penalty
        .apply(counts.values().map(|c| c - 1).sum(), roster.len());

    let total = profile.weight_buff * buff_coverage + profile.weight_role * role_coverage
        - duplicate_penalty;

    ScoreBreakdown {
        buff_coverage,
        role_coverage,
        duplicate_penalty,
        total: total.clamp(0.0, 1.0),
    }
}

/// Detailed scoring for reports (Rich Data)
pub fn score_details(
    roster: &Roster,
    catalog: &Catalog,
    profile: &PlaystyleProfile,
) -> ScoreDetails {
    let breakdown = score(roster, catalog, profile);

    let mut unknown_slots = Vec::new();
    for (idx, slot) in roster.slots().iter().enumerate() {
        if let Some(a) = slot {
            if !catalog.supports(a) {
                unknown_slots.push(idx);
            }
        }
    }

    let buffs = profile
        .required_buffs
        .iter()
        .map(|buff| CoverageEntry {
            name: buff.clone(),
            providers: providers(roster, |a| {
                catalog.tags_for(a).is_some_and(|tags| tags.contains(buff))
            }),
        })
        .collect();

    let roles = profile
        .required_roles
        .iter()
        .map(|role| CoverageEntry {
            name: role.clone(),
            providers: providers(roster, |a| &a.role == role && catalog.supports(a)),
        })
        .collect();

    let duplicates = roster
        .assignment_counts()
        .into_iter()
        .filter(|(a, count)| *count > 1 && catalog.supports(a))
        .map(|(a, count)| DuplicateEntry {
            assignment: a.clone(),
            count,
        })
        .collect();

    let filled_slots = roster.filled_count();

    ScoreDetails {
        breakdown,
        buffs,
        roles,
        duplicates,
        filled_slots,
        unfilled_slots: roster.len() - filled_slots,
        unknown_slots,
    }
}

fn coverage(required: &BTreeSet<String>, present: &BTreeSet<&str>) -> f64 {
    if required.is_empty() {
        return 1.0;
    }
    let met = required
        .iter()
        .filter(|r| present.contains(r.as_str()))
        .count();
    met as f64 / required.len() as f64
}

fn providers(
    roster: &Roster,
    provides: impl Fn(&Assignment) -> bool,
) -> Vec<usize> {
    roster
        .slots()
        .iter()
        .enumerate()
        .filter_map(|(idx, slot)| slot.as_ref().filter(|a| provides(*a)).map(|_| idx))
        .collect()
}
