use crate::reports;
use clap::Args;
use teamforge::api::{self, TeamRequest};
use teamforge::catalog::Catalog;
use teamforge::config::{AlgorithmParams, BudgetArgs};
use teamforge::error::TfResult;
use teamforge::playstyle::PlaystyleRegistry;

#[derive(Args, Debug, Clone)]
pub struct SuggestArgs {
    #[arg(short = 't', long, default_value_t = 5)]
    pub team_size: usize,

    #[arg(short, long, default_value = "zerg")]
    pub playstyle: String,

    /// sampling or genetic
    #[arg(short, long, default_value = "sampling")]
    pub algorithm: String,

    #[command(flatten)]
    pub params: AlgorithmParams,

    #[command(flatten)]
    pub budget: BudgetArgs,

    /// Comma-separated professions to draw from. Pass an empty value to allow none.
    #[arg(long = "allow", value_delimiter = ',')]
    pub allowed: Option<Vec<String>>,

    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of distinct teams to report
    #[arg(short = 'n', long, default_value_t = 1)]
    pub top_n: usize,

    /// Cache scores of rosters already seen during this run
    #[arg(long, default_value_t = false)]
    pub memoize: bool,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl SuggestArgs {
    fn to_request(&self) -> TeamRequest {
        TeamRequest {
            team_size: self.team_size,
            playstyle: self.playstyle.clone(),
            algorithm: self.algorithm.clone(),
            params: self.params.clone(),
            allowed_professions: self.allowed.as_ref().map(|names| {
                names
                    .iter()
                    .map(|n| n.trim().to_string())
                    .filter(|n| !n.is_empty())
                    .collect()
            }),
            seed: self.seed,
            budget: self.budget.clone(),
            top_n: self.top_n,
            memoize: self.memoize,
        }
    }
}

pub fn run(args: SuggestArgs, catalog: &Catalog, registry: &PlaystyleRegistry) -> TfResult<()> {
    let request = args.to_request();
    let result = api::suggest_team_with(&request, catalog, registry)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    reports::print_team_result(&result);
    let details = api::score_roster(
        &result.roster,
        &result.request.playstyle,
        catalog,
        registry,
    )?;
    reports::print_details(&details);
    Ok(())
}
