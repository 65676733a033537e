use crate::config::BudgetArgs;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use strum_macros::Display;

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// Ran the full sample count or generation count.
    Completed,
    /// No improvement for the configured number of generations.
    Stagnated,
    /// Wall-clock deadline hit; the incumbent is returned.
    DeadlineExceeded,
    /// Iteration cap hit; the incumbent is returned.
    IterationCap,
    /// A roster reached the target score.
    TargetReached,
    /// A progress callback asked to stop.
    Cancelled,
    /// Nothing was eligible to draw, so every slot stayed unfilled.
    Infeasible,
}

impl Termination {
    /// True when a caller-imposed limit cut the search short.
    pub fn truncated(&self) -> bool {
        matches!(
            self,
            Self::DeadlineExceeded | Self::IterationCap | Self::Cancelled
        )
    }
}

/// Limits checked between iterations of either optimizer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Budget {
    pub deadline: Option<Instant>,
    pub max_iterations: Option<usize>,
    pub target_score: Option<f64>,
}

impl Budget {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.deadline = Some(Instant::now() + timeout);
        self
    }

    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = Some(max);
        self
    }

    pub fn with_target(mut self, target: f64) -> Self {
        self.target_score = Some(target);
        self
    }

    /// Checked before starting iteration number `done`.
    pub fn exhausted(&self, done: usize) -> Option<Termination> {
        if self.deadline.is_some_and(|d| Instant::now() >= d) {
            return Some(Termination::DeadlineExceeded);
        }
        if self.max_iterations.is_some_and(|max| done >= max) {
            return Some(Termination::IterationCap);
        }
        None
    }

    /// Iterations still allowed after `done`, if capped.
    pub fn remaining(&self, done: usize) -> Option<usize> {
        self.max_iterations.map(|max| max.saturating_sub(done))
    }

    pub fn target_reached(&self, best: f64) -> bool {
        self.target_score.is_some_and(|t| best >= t)
    }
}

impl BudgetArgs {
    /// Starts the clock: deadlines count from this call.
    pub fn start(&self) -> Budget {
        let budget = Budget {
            deadline: None,
            max_iterations: self.max_iterations,
            target_score: self.target_score,
        };
        match self.deadline_ms {
            Some(ms) => budget.with_timeout(Duration::from_millis(ms)),
            None => budget,
        }
    }
}
