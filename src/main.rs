use clap::{Parser, Subcommand};
use std::process;
use teamforge::catalog::Catalog;
use teamforge::error::TfResult;
use teamforge::playstyle::PlaystyleRegistry;
use tracing::{error, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Suggests team compositions for a playstyle", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Catalog file (.json or .csv). Defaults to the bundled snapshot.
    #[arg(global = true, long)]
    catalog: Option<String>,

    /// JSON file with extra or overriding playstyle profiles
    #[arg(global = true, long)]
    playstyles: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search for the best team
    Suggest(cmd::suggest::SuggestArgs),
    /// Score a fixed roster
    Score(cmd::score::ScoreArgs),
    /// List professions and playstyles
    Catalog(cmd::catalog::CatalogArgs),
}

fn load_sources(cli: &Cli) -> TfResult<(Catalog, PlaystyleRegistry)> {
    let catalog = match &cli.catalog {
        Some(path) => Catalog::load_from_file(path)?,
        None => Catalog::builtin(),
    };

    let mut registry = PlaystyleRegistry::builtin();
    if let Some(path) = &cli.playstyles {
        registry.extend_from_file(path)?;
    }
    Ok((catalog, registry))
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so --json output stays machine-readable
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let result = load_sources(&cli).and_then(|(catalog, registry)| match cli.command {
        Commands::Suggest(args) => cmd::suggest::run(args, &catalog, &registry),
        Commands::Score(args) => cmd::score::run(args, &catalog, &registry),
        Commands::Catalog(args) => cmd::catalog::run(args, &catalog, &registry),
    });

    if let Err(e) = result {
        error!("{}", e);
        process::exit(if e.is_configuration() { 2 } else { 1 });
    }
}
