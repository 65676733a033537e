//! Genetic search over rosters.
//!
//! Each generation keeps the top `elite_count` individuals unchanged and
//! fills the rest through tournament selection, uniform crossover and
//! per-slot mutation. All random draws happen on the calling thread; only
//! scoring is spread over rayon workers, so a seed fully determines a run.
//!
//! The reported best is the best individual ever evaluated, not merely the
//! best of the final generation.

use super::crossover::crossover_uniform;
use super::initialization::generate_batch;
use super::mutation::mutate;
use super::{Budget, Candidate, Leaderboard, ProgressCallback, SearchOutcome, Termination};
use crate::catalog::AssignmentPool;
use crate::config::GeneticParams;
use crate::error::{TeamForgeError, TfResult};
use crate::roster::Roster;
use crate::scorer::RosterEvaluator;
use fastrand::Rng;
use rayon::prelude::*;
use tracing::{debug, warn};

/// Scored individuals, kept sorted by total descending.
#[derive(Debug, Clone)]
pub struct Population {
    individuals: Vec<Candidate>,
}

impl Population {
    /// Scores rosters in parallel and ranks them.
    pub fn evaluate<E>(rosters: Vec<Roster>, evaluator: &E) -> Self
    where
        E: RosterEvaluator + ?Sized,
    {
        let individuals = rosters
            .into_par_iter()
            .map(|roster| {
                let score = evaluator.evaluate(&roster);
                Candidate { roster, score }
            })
            .collect();
        Self::ranked(individuals)
    }

    fn ranked(mut individuals: Vec<Candidate>) -> Self {
        // Stable: equal totals keep their creation order
        individuals.sort_by(|a, b| b.score.total.total_cmp(&a.score.total));
        Self { individuals }
    }

    pub fn individuals(&self) -> &[Candidate] {
        &self.individuals
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn mean_total(&self) -> f64 {
        if self.individuals.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.individuals.iter().map(Candidate::total).sum();
        sum / self.individuals.len() as f64
    }
}

/// Controls how one generation turns into the next.
#[derive(Debug)]
pub struct PopulationEvolver<'a> {
    pub pool: &'a AssignmentPool,
    pub elite_count: usize,
    pub tournament_size: usize,
    pub crossover_rate: f64,
    pub mutation_rate: f64,
}

impl<'a> PopulationEvolver<'a> {
    pub fn new(pool: &'a AssignmentPool, params: &GeneticParams) -> Self {
        Self {
            pool,
            elite_count: params.elite_count,
            tournament_size: params.tournament_size,
            crossover_rate: params.crossover_rate,
            mutation_rate: params.mutation_rate,
        }
    }

    /// Builds the next generation. Returns it with the number of new evaluations.
    pub fn evolve<E>(
        &self,
        population: &Population,
        rng: &mut Rng,
        evaluator: &E,
    ) -> (Population, usize)
    where
        E: RosterEvaluator + ?Sized,
    {
        let size = population.len();
        let elites = self.elite_count.min(size);

        let offspring: Vec<Roster> = (elites..size)
            .map(|_| {
                let p1 = tournament_select(&population.individuals, self.tournament_size, rng);
                let p2 = tournament_select(&population.individuals, self.tournament_size, rng);

                let mut child = if rng.f64() < self.crossover_rate {
                    crossover_uniform(&p1.roster, &p2.roster, rng)
                } else {
                    p1.roster.clone()
                };
                mutate(&mut child, self.pool, self.mutation_rate, rng);
                child
            })
            .collect();
        let evaluated = offspring.len();

        let mut next = population.individuals[..elites].to_vec();
        next.extend(Population::evaluate(offspring, evaluator).individuals);
        (Population::ranked(next), evaluated)
    }
}

/// Picks `tournament_size` individuals with replacement and returns the fittest.
/// On equal totals the lower index (the better-ranked one) wins.
fn tournament_select<'p>(
    population: &'p [Candidate],
    tournament_size: usize,
    rng: &mut Rng,
) -> &'p Candidate {
    let mut winner = rng.usize(..population.len());
    for _ in 1..tournament_size {
        let challenger = rng.usize(..population.len());
        let (w, c) = (&population[winner], &population[challenger]);
        if c.total() > w.total() || (c.total() == w.total() && challenger < winner) {
            winner = challenger;
        }
    }
    &population[winner]
}

pub fn optimize_by_genetic<E, P>(
    pool: &AssignmentPool,
    team_size: usize,
    params: &GeneticParams,
    evaluator: &E,
    budget: &Budget,
    progress: &P,
    rng: &mut Rng,
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

    // Generation 0
    let initial = generate_batch(rng, pool, team_size, params.population_size);
    let mut population = Population::evaluate(initial, evaluator);
    let mut evaluations = population.len();

    let mut board = Leaderboard::new(params.top_n);
    for ind in population.individuals() {
        board.offer(&ind.roster, &ind.score);
    }

    let evolver = PopulationEvolver::new(pool, params);
    let mut history = vec![board.best_total()];
    let mut best_generation = 0;
    let mut stagnant = 0;
    let mut generation = 0;
    let mut termination = Termination::Completed;

    if budget.target_reached(board.best_total()) {
        termination = Termination::TargetReached;
    }

    while termination == Termination::Completed && generation < params.generations {
        if let Some(stop) = budget.exhausted(generation) {
            termination = stop;
            break;
        }

        generation += 1;
        let (next, evaluated) = evolver.evolve(&population, rng, evaluator);
        population = next;
        evaluations += evaluated;

        let mut improved = false;
        for ind in population.individuals() {
            if board.offer(&ind.roster, &ind.score) == Some(0) {
                improved = true;
            }
        }

        let best_total = board.best_total();
        history.push(best_total);
        debug!(
            generation,
            best = best_total,
            mean = population.mean_total(),
            "Generation evolved"
        );

        if improved {
            best_generation = generation;
            stagnant = 0;
        } else {
            stagnant += 1;
        }

        if budget.target_reached(best_total) {
            termination = Termination::TargetReached;
        } else if params.stagnation_limit > 0 && stagnant >= params.stagnation_limit {
            termination = Termination::Stagnated;
        } else if let Some(best) = board.best() {
            if !progress.on_progress(generation, best) {
                termination = Termination::Cancelled;
            }
        }
    }

    let alternatives = board.into_candidates();
    let best = alternatives
        .first()
        .cloned()
        .ok_or_else(|| TeamForgeError::Validation("genetic search produced no candidate".into()))?;

    Ok(SearchOutcome {
        best,
        alternatives,
        evaluations,
        iterations: generation,
        best_iteration: best_generation,
        termination,
        history,
    })
}
