use super::Candidate;
use crate::roster::{Roster, Slot};
use crate::scorer::ScoreBreakdown;

/// The best distinct teams seen so far, highest total first.
///
/// Two rosters holding the same slots in a different order count as the
/// same team. A newcomer only moves ahead of an entry it strictly beats,
/// so among equal scores the earliest find keeps its rank.
#[derive(Debug, Clone)]
pub struct Leaderboard {
    capacity: usize,
    entries: Vec<(Vec<Slot>, Candidate)>,
}

impl Leaderboard {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: Vec::with_capacity(capacity + 1),
        }
    }

    /// Offers a scored roster. Returns the rank it took, if any.
    pub fn offer(&mut self, roster: &Roster, score: &ScoreBreakdown) -> Option<usize> {
        let rank = self
            .entries
            .iter()
            .position(|(_, c)| score.total > c.score.total)
            .unwrap_or(self.entries.len());
        if rank >= self.capacity {
            return None;
        }

        let key = roster.canonical();
        if let Some(existing) = self.entries.iter().position(|(k, _)| *k == key) {
            // Same team with an equal score: it can only be at or above `rank`
            if existing <= rank {
                return None;
            }
            self.entries.remove(existing);
        }

        self.entries.insert(
            rank,
            (
                key,
                Candidate {
                    roster: roster.clone(),
                    score: *score,
                },
            ),
        );
        self.entries.truncate(self.capacity);
        Some(rank)
    }

    pub fn best(&self) -> Option<&Candidate> {
        self.entries.first().map(|(_, c)| c)
    }

    pub fn best_total(&self) -> f64 {
        self.best().map_or(0.0, |c| c.score.total)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_candidates(self) -> Vec<Candidate> {
        self.entries.into_iter().map(|(_, c)| c).collect()
    }
}
