use crate::reports;
use clap::Args;
use serde_json::json;
use strum::IntoEnumIterator;
use teamforge::catalog::Catalog;
use teamforge::config::Algorithm;
use teamforge::error::TfResult;
use teamforge::playstyle::PlaystyleRegistry;

#[derive(Args, Debug, Clone)]
pub struct CatalogArgs {
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: CatalogArgs, catalog: &Catalog, registry: &PlaystyleRegistry) -> TfResult<()> {
    if args.json {
        let playstyles: Vec<_> = registry.profiles().collect();
        let algorithms: Vec<Algorithm> = Algorithm::iter().collect();
        let doc = json!({
            "catalog": catalog,
            "playstyles": playstyles,
            "algorithms": algorithms,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("\n📚 Professions ({})", catalog.len());
    reports::print_catalog(catalog);
    println!("\n🎯 Playstyles");
    reports::print_playstyles(registry);

    let algorithms: Vec<String> = Algorithm::iter().map(|a| a.to_string()).collect();
    println!("\nAlgorithms: {}", algorithms.join(", "));
    Ok(())
}
