use crate::catalog::Catalog;
use crate::config::{Algorithm, AlgorithmParams, BudgetArgs};
use crate::error::{TeamForgeError, TfResult};
use crate::optimizer::{Candidate, NoProgress, ProgressCallback, Strategy, Termination};
use crate::playstyle::{PlaystyleProfile, PlaystyleRegistry};
use crate::roster::Roster;
use crate::scorer::{MemoizedEvaluator, RosterEvaluator, ScoreBreakdown, ScoreDetails, Scorer};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{info, warn};

/// A request for a team suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRequest {
    pub team_size: usize,
    pub playstyle: String,
    pub algorithm: String,
    #[serde(default)]
    pub params: AlgorithmParams,
    /// `None` allows every profession, `Some(vec![])` allows none.
    #[serde(default)]
    pub allowed_professions: Option<Vec<String>>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub budget: BudgetArgs,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default)]
    pub memoize: bool,
}

fn default_top_n() -> usize {
    1
}

impl TeamRequest {
    pub fn new(team_size: usize, playstyle: &str, algorithm: &str) -> Self {
        Self {
            team_size,
            playstyle: playstyle.to_string(),
            algorithm: algorithm.to_string(),
            params: AlgorithmParams::default(),
            allowed_professions: None,
            seed: None,
            budget: BudgetArgs::default(),
            top_n: default_top_n(),
            memoize: false,
        }
    }

    pub fn with_params(mut self, params: AlgorithmParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_allowed<I, S>(mut self, professions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_professions = Some(professions.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_budget(mut self, budget: BudgetArgs) -> Self {
        self.budget = budget;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }
}

/// The request as actually executed, with every default filled in.
/// Feeding it back (same seed, same catalog) reproduces the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveRequest {
    pub team_size: usize,
    pub playstyle: String,
    pub algorithm: Algorithm,
    pub strategy: Strategy,
    pub allowed_professions: Option<Vec<String>>,
    pub seed: u64,
    pub budget: BudgetArgs,
    pub memoize: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostics {
    pub evaluations: usize,
    pub iterations: usize,
    pub best_iteration: usize,
    pub termination: Termination,
    /// True when a deadline, iteration cap or cancellation cut the search short.
    pub truncated: bool,
    pub eligible_assignments: usize,
    pub unavailable_professions: Vec<String>,
    pub unknown_professions: Vec<String>,
    pub history: Vec<f64>,
    pub elapsed_ms: u64,
    pub cache_hits: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamResult {
    pub roster: Roster,
    pub score: ScoreBreakdown,
    /// Distinct teams ranked best first. The first entry is `roster`.
    pub alternatives: Vec<Candidate>,
    pub request: EffectiveRequest,
    pub diagnostics: Diagnostics,
}

/// A validated request, resolved against a playstyle registry.
struct Plan<'r> {
    profile: &'r PlaystyleProfile,
    strategy: Strategy,
}

fn resolve_plan<'r>(
    request: &TeamRequest,
    registry: &'r PlaystyleRegistry,
) -> TfResult<Plan<'r>> {
    if request.team_size == 0 {
        return Err(TeamForgeError::Config("team_size must be at least 1".into()));
    }
    let profile = registry.resolve(&request.playstyle)?;
    profile.validate()?;

    let strategy = match Algorithm::parse(&request.algorithm)? {
        Algorithm::Sampling => Strategy::Sampling(request.params.sampling(request.top_n)),
        Algorithm::Genetic => Strategy::Genetic(request.params.genetic(request.top_n)),
    };
    strategy.validate()?;
    request.budget.validate()?;

    Ok(Plan { profile, strategy })
}

/// Service: suggest a team using the built-in playstyles.
pub fn suggest_team(request: &TeamRequest, catalog: &Catalog) -> TfResult<TeamResult> {
    suggest_team_with(request, catalog, &PlaystyleRegistry::builtin())
}

/// Service: suggest a team using a caller-supplied playstyle registry.
pub fn suggest_team_with(
    request: &TeamRequest,
    catalog: &Catalog,
    registry: &PlaystyleRegistry,
) -> TfResult<TeamResult> {
    let plan = resolve_plan(request, registry)?;
    let scorer = Scorer::new(catalog, plan.profile, request.team_size)?;
    execute(request, catalog, plan, &scorer, &NoProgress)
}

/// Service: like [`suggest_team_with`] but scoring through any evaluator and
/// reporting progress. Every request check runs before the evaluator is touched.
pub fn suggest_team_with_evaluator<E, P>(
    request: &TeamRequest,
    catalog: &Catalog,
    registry: &PlaystyleRegistry,
    evaluator: &E,
    progress: &P,
) -> TfResult<TeamResult>
where
    E: RosterEvaluator + ?Sized,
    P: ProgressCallback + ?Sized,
{
    let plan = resolve_plan(request, registry)?;
    execute(request, catalog, plan, evaluator, progress)
}

fn execute<E, P>(
    request: &TeamRequest,
    catalog: &Catalog,
    plan: Plan<'_>,
    evaluator: &E,
    progress: &P,
) -> TfResult<TeamResult>
where
    E: RosterEvaluator + ?Sized,
    P: ProgressCallback + ?Sized,
{
    let start = Instant::now();
    let budget = request.budget.start();
    let seed = request.seed.unwrap_or_else(|| fastrand::u64(..));
    let mut rng = fastrand::Rng::with_seed(seed);

    let pool = catalog.eligible(request.allowed_professions.as_deref());
    if pool.is_empty() {
        warn!(
            unavailable = pool.unavailable().len(),
            "No profession is eligible under the current constraints"
        );
    } else if !pool.unavailable().is_empty() {
        info!(
            "{} professions unavailable under current constraints",
            pool.unavailable().len()
        );
    }

    info!(
        playstyle = %plan.profile.name,
        algorithm = %plan.strategy.algorithm(),
        team_size = request.team_size,
        seed,
        "Starting team search"
    );

    let (outcome, cache_hits) = if request.memoize {
        let memo = MemoizedEvaluator::new(evaluator);
        let outcome = plan.strategy.run(
            &pool,
            request.team_size,
            &memo,
            &budget,
            progress,
            &mut rng,
        )?;
        (outcome, Some(memo.hits()))
    } else {
        let outcome = plan.strategy.run(
            &pool,
            request.team_size,
            evaluator,
            &budget,
            progress,
            &mut rng,
        )?;
        (outcome, None)
    };

    let elapsed_ms = start.elapsed().as_millis() as u64;
    info!(
        score = outcome.best.score.total,
        evaluations = outcome.evaluations,
        termination = %outcome.termination,
        elapsed_ms,
        "Team search finished"
    );
    if outcome.termination.truncated() {
        warn!(termination = %outcome.termination, "Search stopped early, returning best so far");
    }

    Ok(TeamResult {
        roster: outcome.best.roster,
        score: outcome.best.score,
        alternatives: outcome.alternatives,
        request: EffectiveRequest {
            team_size: request.team_size,
            playstyle: plan.profile.name.clone(),
            algorithm: plan.strategy.algorithm(),
            strategy: plan.strategy,
            allowed_professions: request.allowed_professions.clone(),
            seed,
            budget: request.budget.clone(),
            memoize: request.memoize,
        },
        diagnostics: Diagnostics {
            evaluations: outcome.evaluations,
            iterations: outcome.iterations,
            best_iteration: outcome.best_iteration,
            termination: outcome.termination,
            truncated: outcome.termination.truncated(),
            eligible_assignments: pool.len(),
            unavailable_professions: pool.unavailable().to_vec(),
            unknown_professions: pool.unknown().to_vec(),
            history: outcome.history,
            elapsed_ms,
            cache_hits,
        },
    })
}

/// Service: score a fixed roster against a named playstyle.
pub fn score_roster(
    roster: &Roster,
    playstyle: &str,
    catalog: &Catalog,
    registry: &PlaystyleRegistry,
) -> TfResult<ScoreDetails> {
    let profile = registry.resolve(playstyle)?;
    let scorer = Scorer::new(catalog, profile, roster.len())?;
    scorer.score_details(roster)
}
