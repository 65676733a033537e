pub mod budget;
pub mod crossover;
pub mod genetic;
pub mod initialization;
pub mod leaderboard;
pub mod mutation;
pub mod sampling;

pub use self::budget::{Budget, Termination};
pub use self::genetic::optimize_by_genetic;
pub use self::leaderboard::Leaderboard;
pub use self::sampling::optimize_by_sampling;
use crate::catalog::AssignmentPool;
use crate::config::{Algorithm, GeneticParams, SamplingParams};
use crate::error::TfResult;
use crate::roster::Roster;
use crate::scorer::{RosterEvaluator, ScoreBreakdown};
use serde::{Deserialize, Serialize};

/// A roster together with its score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub roster: Roster,
    pub score: ScoreBreakdown,
}

impl Candidate {
    pub fn total(&self) -> f64 {
        self.score.total
    }
}

/// Everything a search run reports back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub best: Candidate,
    /// Distinct teams, best first; `alternatives[0] == best`.
    pub alternatives: Vec<Candidate>,
    pub evaluations: usize,
    /// Samples drawn or generations evolved.
    pub iterations: usize,
    /// Sample index or generation at which `best` was first found.
    pub best_iteration: usize,
    pub termination: Termination,
    /// Best-so-far total after each generation (genetic) or batch (sampling).
    pub history: Vec<f64>,
}

impl SearchOutcome {
    /// Result for a search with nothing eligible to draw: the all-unfilled roster.
    pub(crate) fn infeasible<E>(team_size: usize, evaluator: &E) -> Self
    where
        E: RosterEvaluator + ?Sized,
    {
        let roster = Roster::unfilled(team_size);
        let score = evaluator.evaluate(&roster);
        let best = Candidate { roster, score };
        Self {
            alternatives: vec![best.clone()],
            best,
            evaluations: 1,
            iterations: 0,
            best_iteration: 0,
            termination: Termination::Infeasible,
            history: vec![score.total],
        }
    }
}

/// A trait for receiving updates during optimization.
/// Boolean return value indicates if the search should continue (true) or abort (false).
pub trait ProgressCallback: Sync {
    fn on_progress(&self, iteration: usize, best: &Candidate) -> bool;
}

/// Callback that never interrupts and reports nothing.
pub struct NoProgress;

impl ProgressCallback for NoProgress {
    fn on_progress(&self, _iteration: usize, _best: &Candidate) -> bool {
        true
    }
}

/// A resolved search strategy with its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum Strategy {
    Sampling(SamplingParams),
    Genetic(GeneticParams),
}

impl Strategy {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::Sampling(_) => Algorithm::Sampling,
            Self::Genetic(_) => Algorithm::Genetic,
        }
    }

    pub fn validate(&self) -> TfResult<()> {
        match self {
            Self::Sampling(p) => p.validate(),
            Self::Genetic(p) => p.validate(),
        }
    }

    pub fn run<E, P>(
        &self,
        pool: &AssignmentPool,
        team_size: usize,
        evaluator: &E,
        budget: &Budget,
        progress: &P,
        rng: &mut fastrand::Rng,
    ) -> TfResult<SearchOutcome>
    where
        E: RosterEvaluator + ?Sized,
        P: ProgressCallback + ?Sized,
    {
        match self {
            Self::Sampling(p) => {
                optimize_by_sampling(pool, team_size, p, evaluator, budget, progress, rng)
            }
            Self::Genetic(p) => {
                optimize_by_genetic(pool, team_size, p, evaluator, budget, progress, rng)
            }
        }
    }
}
