pub mod builtin;
pub mod loader;

use crate::error::{TeamForgeError, TfResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use tracing::warn;

/// Roles a profession can fill, each mapped to the tags it provides.
pub type RoleTable = BTreeMap<String, BTreeSet<String>>;

/// One filled roster slot: a profession playing one of its roles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Assignment {
    pub profession: String,
    pub role: String,
}

impl Assignment {
    pub fn new(profession: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            profession: profession.into(),
            role: role.into(),
        }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.profession, self.role)
    }
}

/// Read-only snapshot of what every profession can do.
///
/// Ordered maps keep iteration (and therefore every random draw built on
/// top of it) stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    professions: BTreeMap<String, RoleTable>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or extends) a role for a profession.
    pub fn insert<I, T>(&mut self, profession: &str, role: &str, tags: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.professions
            .entry(profession.to_string())
            .or_default()
            .entry(role.to_string())
            .or_default()
            .extend(tags.into_iter().map(Into::into));
        self
    }

    /// Registers a profession without roles. It stays listed but can never be drawn.
    pub fn insert_profession(&mut self, profession: &str) -> &mut Self {
        self.professions.entry(profession.to_string()).or_default();
        self
    }

    pub fn len(&self) -> usize {
        self.professions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.professions.is_empty()
    }

    pub fn professions(&self) -> impl Iterator<Item = (&str, &RoleTable)> {
        self.professions.iter().map(|(name, roles)| (name.as_str(), roles))
    }

    pub fn roles_of(&self, profession: &str) -> Option<&RoleTable> {
        self.professions.get(profession)
    }

    pub fn tags_for(&self, assignment: &Assignment) -> Option<&BTreeSet<String>> {
        self.professions
            .get(&assignment.profession)
            .and_then(|roles| roles.get(&assignment.role))
    }

    pub fn supports(&self, assignment: &Assignment) -> bool {
        self.tags_for(assignment).is_some()
    }

    pub fn all_roles(&self) -> BTreeSet<&str> {
        self.professions
            .values()
            .flat_map(|roles| roles.keys().map(String::as_str))
            .collect()
    }

    pub fn all_tags(&self) -> BTreeSet<&str> {
        self.professions
            .values()
            .flat_map(|roles| roles.values())
            .flat_map(|tags| tags.iter().map(String::as_str))
            .collect()
    }

    /// Case-insensitive lookup returning the catalog's own spelling.
    pub fn canonical_profession(&self, name: &str) -> Option<&str> {
        let name = name.trim();
        self.professions
            .keys()
            .find(|p| p.eq_ignore_ascii_case(name))
            .map(String::as_str)
    }

    /// Parses `profession/role`, matching both halves case-insensitively.
    pub fn resolve(&self, text: &str) -> TfResult<Assignment> {
        let (prof, role) = text.split_once('/').ok_or_else(|| {
            TeamForgeError::InvalidRoster(format!(
                "Expected 'profession/role', got '{}'",
                text.trim()
            ))
        })?;

        let profession = self.canonical_profession(prof).ok_or_else(|| {
            TeamForgeError::InvalidRoster(format!("Unknown profession '{}'", prof.trim()))
        })?;
        let role = self.professions[profession]
            .keys()
            .find(|r| r.eq_ignore_ascii_case(role.trim()))
            .ok_or_else(|| {
                TeamForgeError::InvalidRoster(format!(
                    "{} cannot play role '{}'",
                    profession,
                    role.trim()
                ))
            })?;

        Ok(Assignment::new(profession, role.as_str()))
    }

    /// Builds the pool of draws permitted under an optional profession filter.
    ///
    /// `None` means every profession is eligible. `Some(&[])` means none is.
    pub fn eligible(&self, allowed: Option<&[String]>) -> AssignmentPool {
        let mut unknown = Vec::new();
        let filter: Option<BTreeSet<&str>> = allowed.map(|names| {
            names
                .iter()
                .filter_map(|name| match self.canonical_profession(name) {
                    Some(p) => Some(p),
                    None => {
                        unknown.push(name.trim().to_string());
                        None
                    }
                })
                .collect()
        });

        if !unknown.is_empty() {
            warn!(?unknown, "Allowed professions not present in catalog");
        }

        let mut pool = AssignmentPool {
            unknown,
            ..AssignmentPool::default()
        };

        for (profession, roles) in &self.professions {
            let permitted = filter
                .as_ref()
                .map_or(true, |f| f.contains(profession.as_str()));
            if !permitted || roles.is_empty() {
                pool.unavailable.push(profession.clone());
                continue;
            }
            pool.assignments.extend(
                roles
                    .keys()
                    .map(|role| Assignment::new(profession.as_str(), role.as_str())),
            );
        }

        pool
    }
}

/// The (profession, role) pairs an optimizer may draw from, plus accounting
/// for the professions that were left out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignmentPool {
    assignments: Vec<Assignment>,
    unavailable: Vec<String>,
    unknown: Vec<String>,
}

impl AssignmentPool {
    pub fn from_assignments(assignments: Vec<Assignment>) -> Self {
        Self {
            assignments,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Catalog professions that cannot be drawn (filtered out or without roles).
    pub fn unavailable(&self) -> &[String] {
        &self.unavailable
    }

    /// Requested professions the catalog does not know.
    pub fn unknown(&self) -> &[String] {
        &self.unknown
    }

    /// Uniform draw over all eligible pairs. `None` when nothing is eligible.
    pub fn draw(&self, rng: &mut fastrand::Rng) -> Option<Assignment> {
        if self.assignments.is_empty() {
            return None;
        }
        let idx = rng.usize(..self.assignments.len());
        Some(self.assignments[idx].clone())
    }
}
