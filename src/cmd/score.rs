use crate::reports;
use clap::Args;
use teamforge::api;
use teamforge::catalog::Catalog;
use teamforge::error::TfResult;
use teamforge::playstyle::PlaystyleRegistry;
use teamforge::roster::Roster;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[arg(short, long, default_value = "zerg")]
    pub playstyle: String,

    /// Comma-separated `profession/role` entries, `-` for an unfilled slot
    #[arg(short, long)]
    pub roster: String,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: ScoreArgs, catalog: &Catalog, registry: &PlaystyleRegistry) -> TfResult<()> {
    let roster = Roster::parse(&args.roster, catalog)?;
    let details = api::score_roster(&roster, &args.playstyle, catalog, registry)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&details)?);
        return Ok(());
    }

    println!("\n🔎 Scoring against '{}'", args.playstyle);
    reports::print_roster_table(&roster);
    reports::print_breakdown(&details.breakdown);
    println!("Score: {:.6}", details.breakdown.total);
    reports::print_details(&details);
    Ok(())
}
