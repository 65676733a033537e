use super::initialization::generate_batch;
use super::{Budget, Candidate, Leaderboard, ProgressCallback, SearchOutcome, Termination};
use crate::catalog::AssignmentPool;
use crate::config::SamplingParams;
use crate::error::{TeamForgeError, TfResult};
use crate::roster::Roster;
use crate::scorer::{RosterEvaluator, ScoreBreakdown};
use rayon::prelude::*;
use tracing::{debug, warn};

/// Draws `params.samples` independent random rosters and keeps the best.
///
/// Rosters are drawn in batches from `rng` on the calling thread and only
/// the scoring runs in parallel, so results depend on the seed alone. The
/// incumbent is replaced only by a strictly higher total.
pub fn optimize_by_sampling<E, P>(
    pool: &AssignmentPool,
    team_size: usize,
    params: &SamplingParams,
    evaluator: &E,
    budget: &Budget,
    progress: &P,
    rng: &mut fastrand::Rng,
) -> TfResult<SearchOutcome>
where
    E: RosterEvaluator + ?Sized,
    P: ProgressCallback + ?Sized,
{
    if team_size == 0 {
        return Err(TeamForgeError::Config("team_size must be at least 1".into()));
    }
    params.validate()?;

    if pool.is_empty() {
        warn!(team_size, "No eligible assignments, returning an unfilled roster");
        return Ok(SearchOutcome::infeasible(team_size, evaluator));
    }

    let mut board = Leaderboard::new(params.top_n);
    let mut history = Vec::new();
    let mut drawn = 0;
    let mut best_iteration = 0;
    let mut termination = Termination::Completed;

    while drawn < params.samples {
        if let Some(stop) = budget.exhausted(drawn) {
            termination = stop;
            break;
        }

        let mut batch_len = params.batch_size.min(params.samples - drawn);
        if let Some(left) = budget.remaining(drawn) {
            batch_len = batch_len.min(left);
        }

        let batch = generate_batch(rng, pool, team_size, batch_len);
        let scores: Vec<ScoreBreakdown> = batch.par_iter().map(|r| evaluator.evaluate(r)).collect();

        for (offset, (roster, score)) in batch.iter().zip(&scores).enumerate() {
            if board.offer(roster, score) == Some(0) {
                best_iteration = drawn + offset;
            }
        }
        drawn += batch_len;

        let best_total = board.best_total();
        history.push(best_total);
        debug!(drawn, best = best_total, "Sampling batch scored");

        if budget.target_reached(best_total) {
            termination = Termination::TargetReached;
            break;
        }
        if let Some(best) = board.best() {
            if !progress.on_progress(drawn, best) {
                termination = Termination::Cancelled;
                break;
            }
        }
    }

    let mut evaluations = drawn;

    // A budget spent before the first batch still returns a scored roster
    if board.is_empty() {
        evaluations += 1;
        let roster = Roster::unfilled(team_size);
        let score = evaluator.evaluate(&roster);
        board.offer(&roster, &score);
        history.push(score.total);
    }

    let alternatives = board.into_candidates();
    let best: Candidate = alternatives
        .first()
        .cloned()
        .ok_or_else(|| TeamForgeError::Validation("sampling produced no candidate".into()))?;

    Ok(SearchOutcome {
        best,
        alternatives,
        evaluations,
        iterations: drawn,
        best_iteration,
        termination,
        history,
    })
}
