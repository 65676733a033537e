use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use teamforge::api::{Diagnostics, TeamResult};
use teamforge::catalog::Catalog;
use teamforge::optimizer::Candidate;
use teamforge::playstyle::{DuplicatePenalty, PlaystyleRegistry};
use teamforge::roster::Roster;
use teamforge::scorer::{CoverageEntry, ScoreBreakdown, ScoreDetails};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn print_roster_table(roster: &Roster) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Profession").add_attribute(Attribute::Bold),
        Cell::new("Role").add_attribute(Attribute::Bold),
    ]);

    for (i, slot) in roster.slots().iter().enumerate() {
        let row = match slot {
            Some(a) => vec![
                Cell::new(i + 1),
                Cell::new(&a.profession),
                Cell::new(&a.role),
            ],
            None => vec![
                Cell::new(i + 1),
                Cell::new("(unfilled)").fg(Color::DarkGrey),
                Cell::new("-").fg(Color::DarkGrey),
            ],
        };
        table.add_row(row);
    }
    println!("{}", table);
}

pub fn print_breakdown(score: &ScoreBreakdown) {
    let mut table = new_table();
    table.set_header(vec!["Buffs", "Roles", "Dup. Penalty", "Total"]);
    table.add_row(vec![
        Cell::new(format!("{:.1}%", score.buff_coverage * 100.0)),
        Cell::new(format!("{:.1}%", score.role_coverage * 100.0)),
        Cell::new(format!("-{:.3}", score.duplicate_penalty)).fg(Color::Red),
        Cell::new(format!("{:.4}", score.total))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
    ]);
    for i in 0..4 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    println!("{}", table);
}

fn coverage_row(kind: &str, entry: &CoverageEntry) -> Vec<Cell> {
    let providers = entry
        .providers
        .iter()
        .map(|i| format!("#{}", i + 1))
        .collect::<Vec<_>>()
        .join(" ");
    let status = if entry.covered() {
        Cell::new("yes").fg(Color::Green)
    } else {
        Cell::new("MISSING").fg(Color::Red)
    };
    vec![Cell::new(kind), Cell::new(&entry.name), status, Cell::new(providers)]
}

pub fn print_details(details: &ScoreDetails) {
    let mut table = new_table();
    table.set_header(vec!["Kind", "Requirement", "Covered", "Slots"]);
    for entry in &details.roles {
        table.add_row(coverage_row("role", entry));
    }
    for entry in &details.buffs {
        table.add_row(coverage_row("buff", entry));
    }
    println!("{}", table);

    if !details.duplicates.is_empty() {
        let dups = details
            .duplicates
            .iter()
            .map(|d| format!("{} x{}", d.assignment, d.count))
            .collect::<Vec<_>>()
            .join(", ");
        println!("Duplicates: {}", dups);
    }
    if !details.unknown_slots.is_empty() {
        println!(
            "⚠️  {} slot(s) not listed in the catalog contribute no tags",
            details.unknown_slots.len()
        );
    }
}

pub fn print_alternatives(alternatives: &[Candidate]) {
    if alternatives.len() < 2 {
        return;
    }
    let mut table = new_table();
    table.set_header(vec!["Rank", "Score", "Team"]);
    for (rank, c) in alternatives.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(format!("{:.4}", c.score.total)).fg(Color::Cyan),
            Cell::new(c.roster.to_string()),
        ]);
    }
    println!("\nAlternatives:\n{}", table);
}

pub fn print_diagnostics(d: &Diagnostics, seed: u64) {
    println!(
        "Evaluations: {} | Iterations: {} | Best found at: {} | Stop: {}{}",
        d.evaluations,
        d.iterations,
        d.best_iteration,
        d.termination,
        if d.truncated { " (truncated)" } else { "" }
    );
    println!("Seed: {} | Elapsed: {} ms", seed, d.elapsed_ms);
    if let Some(hits) = d.cache_hits {
        println!("Cache hits: {}", hits);
    }
    if !d.unavailable_professions.is_empty() {
        println!(
            "{} professions unavailable under current constraints: {}",
            d.unavailable_professions.len(),
            d.unavailable_professions.join(", ")
        );
    }
    if !d.unknown_professions.is_empty() {
        println!(
            "⚠️  Unknown professions ignored: {}",
            d.unknown_professions.join(", ")
        );
    }
}

pub fn print_team_result(result: &TeamResult) {
    println!(
        "\n🏁 Suggested {} team ({} via {})",
        result.request.playstyle, result.request.team_size, result.request.algorithm
    );
    print_roster_table(&result.roster);
    print_breakdown(&result.score);
    println!("Score: {:.6}", result.score.total);
    print_alternatives(&result.alternatives);
    print_diagnostics(&result.diagnostics, result.request.seed);
}

pub fn print_catalog(catalog: &Catalog) {
    let mut table = new_table();
    table.set_header(vec!["Profession", "Role", "Tags"]);
    for (profession, roles) in catalog.professions() {
        if roles.is_empty() {
            table.add_row(vec![
                Cell::new(profession).add_attribute(Attribute::Bold),
                Cell::new("(none)").fg(Color::DarkGrey),
                Cell::new(""),
            ]);
        }
        for (role, tags) in roles {
            let tags: Vec<&str> = tags.iter().map(String::as_str).collect();
            table.add_row(vec![
                Cell::new(profession).add_attribute(Attribute::Bold),
                Cell::new(role),
                Cell::new(tags.join(", ")),
            ]);
        }
    }
    println!("{}", table);
}

fn describe_penalty(penalty: &DuplicatePenalty) -> String {
    match *penalty {
        DuplicatePenalty::Linear { per_excess, max } => {
            format!("linear {:.2}/dup, max {:.2}", per_excess, max)
        }
        DuplicatePenalty::Ratio { max } => format!("ratio, max {:.2}", max),
    }
}

pub fn print_playstyles(registry: &PlaystyleRegistry) {
    let mut table = new_table();
    table.set_header(vec!["Playstyle", "Roles", "Buffs", "Weights (buff/role)", "Duplicates"]);
    for p in registry.profiles() {
        let roles: Vec<&str> = p.required_roles.iter().map(String::as_str).collect();
        let buffs: Vec<&str> = p.required_buffs.iter().map(String::as_str).collect();
        table.add_row(vec![
            Cell::new(&p.name).add_attribute(Attribute::Bold),
            Cell::new(roles.join(", ")),
            Cell::new(buffs.join(", ")),
            Cell::new(format!("{:.3} / {:.3}", p.weight_buff, p.weight_role)),
            Cell::new(describe_penalty(&p.duplicate_penalty)),
        ]);
    }
    println!("{}", table);
}
