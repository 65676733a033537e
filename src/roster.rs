use crate::catalog::{Assignment, Catalog};
use crate::error::TfResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A roster slot. `None` marks a slot nothing eligible could fill.
pub type Slot = Option<Assignment>;

/// Fixed-length sequence of slots proposed as a team.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    slots: Vec<Slot>,
}

impl Roster {
    pub fn new(slots: Vec<Slot>) -> Self {
        Self { slots }
    }

    pub fn unfilled(team_size: usize) -> Self {
        Self {
            slots: vec![None; team_size],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut [Slot] {
        &mut self.slots
    }

    pub fn filled(&self) -> impl Iterator<Item = &Assignment> {
        self.slots.iter().flatten()
    }

    pub fn filled_count(&self) -> usize {
        self.filled().count()
    }

    /// How often each (profession, role) pair occurs among filled slots.
    pub fn assignment_counts(&self) -> BTreeMap<&Assignment, usize> {
        let mut counts = BTreeMap::new();
        for a in self.filled() {
            *counts.entry(a).or_insert(0) += 1;
        }
        counts
    }

    /// Slots beyond the first occurrence of each pair.
    pub fn excess_duplicates(&self) -> usize {
        self.assignment_counts().values().map(|c| c - 1).sum()
    }

    /// Order-independent form used to tell distinct teams apart.
    pub fn canonical(&self) -> Vec<Slot> {
        let mut slots = self.slots.clone();
        slots.sort();
        slots
    }

    /// Parses a comma-separated list of `profession/role` entries. `-` or an
    /// empty entry stands for an unfilled slot.
    pub fn parse(text: &str, catalog: &Catalog) -> TfResult<Self> {
        text.split(',')
            .map(str::trim)
            .map(|entry| match entry {
                "" | "-" => Ok(None),
                _ => catalog.resolve(entry).map(Some),
            })
            .collect::<TfResult<Vec<_>>>()
            .map(Self::new)
    }
}

impl FromIterator<Slot> for Roster {
    fn from_iter<I: IntoIterator<Item = Slot>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match slot {
                Some(a) => write!(f, "{}", a)?,
                None => write!(f, "-")?,
            }
        }
        Ok(())
    }
}
