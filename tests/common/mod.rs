#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use teamforge::catalog::{Assignment, Catalog};
use teamforge::playstyle::{DuplicatePenalty, PlaystyleProfile, PlaystyleRegistry};
use teamforge::roster::{Roster, Slot};
use teamforge::scorer::{RosterEvaluator, ScoreBreakdown};

/// Two professions: A can deal damage or support, B can heal.
pub fn ab_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog
        .insert("A", "damage", ["might"])
        .insert("A", "support", ["quickness"])
        .insert("B", "healing", ["regen"]);
    catalog
}

pub fn ab_profile() -> PlaystyleProfile {
    PlaystyleProfile::new("ab", 0.5, 0.5)
        .with_roles(["damage", "healing"])
        .with_buffs(["might", "regen", "quickness"])
        .with_penalty(DuplicatePenalty::Linear {
            per_excess: 0.1,
            max: 0.5,
        })
}

pub fn ab_registry() -> PlaystyleRegistry {
    let mut registry = PlaystyleRegistry::new();
    registry.insert(ab_profile()).unwrap();
    registry
}

pub fn slot(profession: &str, role: &str) -> Slot {
    Some(Assignment::new(profession, role))
}

pub fn roster(entries: &[(&str, &str)]) -> Roster {
    entries.iter().map(|(p, r)| slot(p, r)).collect()
}

/// Scores every roster by filled slot share and counts calls.
pub struct CountingEvaluator {
    pub calls: AtomicUsize,
}

impl CountingEvaluator {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RosterEvaluator for CountingEvaluator {
    fn evaluate(&self, roster: &Roster) -> ScoreBreakdown {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let total = if roster.is_empty() {
            0.0
        } else {
            roster.filled_count() as f64 / roster.len() as f64
        };
        ScoreBreakdown {
            total,
            ..ScoreBreakdown::default()
        }
    }
}

/// Gives every roster the same score.
pub struct ConstantEvaluator(pub f64);

impl RosterEvaluator for ConstantEvaluator {
    fn evaluate(&self, _roster: &Roster) -> ScoreBreakdown {
        ScoreBreakdown {
            total: self.0,
            ..ScoreBreakdown::default()
        }
    }
}
