use crate::error::{TeamForgeError, TfResult};
use clap::Args;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

pub const DEFAULT_SAMPLES: usize = 500;
pub const DEFAULT_BATCH_SIZE: usize = 64;
pub const DEFAULT_GENERATIONS: usize = 40;
pub const DEFAULT_POPULATION: usize = 200;
pub const DEFAULT_MUTATION_RATE: f64 = 0.1;
pub const DEFAULT_CROSSOVER_RATE: f64 = 0.8;
pub const DEFAULT_TOURNAMENT_SIZE: usize = 3;
pub const DEFAULT_ELITE_COUNT: usize = 1;
pub const DEFAULT_STAGNATION_LIMIT: usize = 15;

/// Search algorithm selector. Parsed case-insensitively.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Sampling,
    Genetic,
}

impl Algorithm {
    pub fn parse(name: &str) -> TfResult<Self> {
        name.trim()
            .parse()
            .map_err(|_| TeamForgeError::UnknownAlgorithm(name.to_string()))
    }
}

/// Optional algorithm knobs as supplied by a caller. Anything left unset
/// resolves to the documented default for the chosen algorithm; knobs that
/// do not apply to that algorithm are ignored.
#[derive(Args, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlgorithmParams {
    /// Random rosters to draw (sampling)
    #[arg(long)]
    pub samples: Option<usize>,
    /// Rosters drawn per parallel scoring batch (sampling)
    #[arg(long)]
    pub batch_size: Option<usize>,
    /// Generations to evolve (genetic)
    #[arg(long)]
    pub generations: Option<usize>,
    /// Individuals per generation (genetic)
    #[arg(long = "population")]
    pub population_size: Option<usize>,
    /// Per-slot mutation probability (genetic)
    #[arg(long)]
    pub mutation_rate: Option<f64>,
    /// Probability of uniform crossover per offspring (genetic)
    #[arg(long)]
    pub crossover_rate: Option<f64>,
    #[arg(long)]
    pub tournament_size: Option<usize>,
    /// Best individuals copied unchanged into the next generation (genetic)
    #[arg(long = "elite")]
    pub elite_count: Option<usize>,
    /// Generations without improvement before stopping, 0 disables (genetic)
    #[arg(long)]
    pub stagnation_limit: Option<usize>,
}

impl AlgorithmParams {
    pub fn sampling(&self, top_n: usize) -> SamplingParams {
        SamplingParams {
            samples: self.samples.unwrap_or(DEFAULT_SAMPLES),
            batch_size: self.batch_size.unwrap_or(DEFAULT_BATCH_SIZE),
            top_n,
        }
    }

    pub fn genetic(&self, top_n: usize) -> GeneticParams {
        GeneticParams {
            generations: self.generations.unwrap_or(DEFAULT_GENERATIONS),
            population_size: self.population_size.unwrap_or(DEFAULT_POPULATION),
            mutation_rate: self.mutation_rate.unwrap_or(DEFAULT_MUTATION_RATE),
            crossover_rate: self.crossover_rate.unwrap_or(DEFAULT_CROSSOVER_RATE),
            tournament_size: self.tournament_size.unwrap_or(DEFAULT_TOURNAMENT_SIZE),
            elite_count: self.elite_count.unwrap_or(DEFAULT_ELITE_COUNT),
            stagnation_limit: self.stagnation_limit.unwrap_or(DEFAULT_STAGNATION_LIMIT),
            top_n,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingParams {
    pub samples: usize,
    pub batch_size: usize,
    pub top_n: usize,
}

impl Default for SamplingParams {
    fn default() -> Self {
        AlgorithmParams::default().sampling(1)
    }
}

impl SamplingParams {
    pub fn validate(&self) -> TfResult<()> {
        if self.samples == 0 {
            return Err(config_error("samples must be at least 1"));
        }
        if self.batch_size == 0 {
            return Err(config_error("batch_size must be at least 1"));
        }
        validate_top_n(self.top_n)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneticParams {
    pub generations: usize,
    pub population_size: usize,
    pub mutation_rate: f64,
    pub crossover_rate: f64,
    pub tournament_size: usize,
    pub elite_count: usize,
    pub stagnation_limit: usize,
    pub top_n: usize,
}

impl Default for GeneticParams {
    fn default() -> Self {
        AlgorithmParams::default().genetic(1)
    }
}

impl GeneticParams {
    pub fn validate(&self) -> TfResult<()> {
        if self.population_size < 2 {
            return Err(config_error("population_size must be at least 2"));
        }
        if self.generations == 0 {
            return Err(config_error("generations must be at least 1"));
        }
        validate_rate("mutation_rate", self.mutation_rate)?;
        validate_rate("crossover_rate", self.crossover_rate)?;
        if self.tournament_size == 0 {
            return Err(config_error("tournament_size must be at least 1"));
        }
        if self.elite_count == 0 || self.elite_count >= self.population_size {
            return Err(config_error(format!(
                "elite_count must be between 1 and {} (population_size - 1), got {}",
                self.population_size - 1,
                self.elite_count
            )));
        }
        validate_top_n(self.top_n)
    }
}

/// Caller-supplied limits on a single optimization call.
#[derive(Args, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetArgs {
    /// Wall-clock budget in milliseconds
    #[arg(long)]
    pub deadline_ms: Option<u64>,
    /// Cap on sampled rosters (sampling) or generations (genetic)
    #[arg(long)]
    pub max_iterations: Option<usize>,
    /// Stop as soon as a roster reaches this total score
    #[arg(long)]
    pub target_score: Option<f64>,
}

impl BudgetArgs {
    pub fn validate(&self) -> TfResult<()> {
        if self.max_iterations == Some(0) {
            return Err(config_error("max_iterations must be at least 1"));
        }
        if let Some(target) = self.target_score {
            if !(0.0..=1.0).contains(&target) {
                return Err(config_error(format!(
                    "target_score must be within [0, 1], got {}",
                    target
                )));
            }
        }
        Ok(())
    }
}

fn validate_rate(name: &str, value: f64) -> TfResult<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(config_error(format!(
            "{} must be within [0, 1], got {}",
            name, value
        )));
    }
    Ok(())
}

fn validate_top_n(top_n: usize) -> TfResult<()> {
    if top_n == 0 {
        return Err(config_error("top_n must be at least 1"));
    }
    Ok(())
}

fn config_error(msg: impl Into<String>) -> TeamForgeError {
    TeamForgeError::Config(msg.into())
}
