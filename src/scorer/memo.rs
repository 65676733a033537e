use super::types::ScoreBreakdown;
use super::RosterEvaluator;
use crate::roster::Roster;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

/// Caches scores for rosters already seen during one optimization run.
///
/// Scoring is pure, so a cached value is always identical to a fresh one.
/// The cache lives exactly as long as the wrapper.
///
/// Two workers may both score a roster that neither has cached yet. The
/// counters are therefore derived from the number of lookups and of distinct
/// cached rosters, which depend only on the rosters asked for.
pub struct MemoizedEvaluator<'e, E: ?Sized> {
    inner: &'e E,
    cache: RwLock<HashMap<Roster, ScoreBreakdown>>,
    lookups: AtomicUsize,
}

impl<'e, E: RosterEvaluator + ?Sized> MemoizedEvaluator<'e, E> {
    pub fn new(inner: &'e E) -> Self {
        Self {
            inner,
            cache: RwLock::new(HashMap::new()),
            lookups: AtomicUsize::new(0),
        }
    }

    /// Lookups answered by an earlier evaluation of the same roster.
    pub fn hits(&self) -> usize {
        self.lookups.load(Ordering::Relaxed).saturating_sub(self.misses())
    }

    /// Distinct rosters evaluated.
    pub fn misses(&self) -> usize {
        self.cache.read().map(|cache| cache.len()).unwrap_or(0)
    }
}

impl<E: RosterEvaluator + ?Sized> RosterEvaluator for MemoizedEvaluator<'_, E> {
    fn evaluate(&self, roster: &Roster) -> ScoreBreakdown {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        if let Ok(cache) = self.cache.read() {
            if let Some(score) = cache.get(roster) {
                return *score;
            }
        }

        let score = self.inner.evaluate(roster);
        match self.cache.write() {
            Ok(mut cache) => *cache.entry(roster.clone()).or_insert(score),
            // A poisoned lock only costs us the cache entry
            Err(_) => score,
        }
    }
}
