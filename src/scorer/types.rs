use crate::catalog::Assignment;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    // Fractions of the playstyle's requirements met, each in [0, 1]
    pub buff_coverage: f64,
    pub role_coverage: f64,

    // Already bounded by the penalty curve's max
    pub duplicate_penalty: f64,

    // Weighted coverage minus penalty, clamped to [0, 1]
    pub total: f64,
}

/// A requirement and the slots that satisfy it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageEntry {
    pub name: String,
    pub providers: Vec<usize>,
}

impl CoverageEntry {
    pub fn covered(&self) -> bool {
        !self.providers.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateEntry {
    pub assignment: Assignment,
    pub count: usize,
}

/// Rich view of a score for reports. Slot indices are zero-based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDetails {
    pub breakdown: ScoreBreakdown,
    pub buffs: Vec<CoverageEntry>,
    pub roles: Vec<CoverageEntry>,
    pub duplicates: Vec<DuplicateEntry>,
    pub filled_slots: usize,
    pub unfilled_slots: usize,
    // Filled slots whose pair the catalog does not list
    pub unknown_slots: Vec<usize>,
}

impl ScoreDetails {
    pub fn missing_buffs(&self) -> impl Iterator<Item = &str> {
        self.buffs
            .iter()
            .filter(|e| !e.covered())
            .map(|e| e.name.as_str())
    }

    pub fn missing_roles(&self) -> impl Iterator<Item = &str> {
        self.roles
            .iter()
            .filter(|e| !e.covered())
            .map(|e| e.name.as_str())
    }
}
