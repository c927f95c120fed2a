//! RI Simulator CLI
//!
//! Determines eligibility and the monthly RI amount for the profiles in a JSON file
//! and prints a statement (or the full result as JSON).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use ri_simulator::{
    profile::load_profiles, render_statement, CategoryMapping, DeterminationConfig, RateTables,
    SimulationRunner,
};

#[derive(Parser, Debug)]
#[command(
    name = "ri-simulator",
    about = "Integration income (RI) eligibility and amount simulator"
)]
struct Args {
    #[arg(long, help = "JSON file with one profile or an array of profiles")]
    profile: PathBuf,
    #[arg(long, help = "Directory of rate table CSV files; built-in tables when omitted")]
    rates: Option<PathBuf>,
    #[arg(
        long,
        default_value_t = CategoryMapping::Current,
        help = "Situation to category mapping: current or legacy"
    )]
    mapping: CategoryMapping,
    #[arg(long, help = "Print the full result as JSON instead of a statement")]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let tables = match &args.rates {
        Some(dir) => RateTables::from_csv_path(dir)
            .with_context(|| format!("loading rate tables from {}", dir.display()))?,
        None => RateTables::current(),
    };
    let runner = SimulationRunner::with_tables(tables)
        .with_config(DeterminationConfig { category_mapping: args.mapping });

    let profiles = load_profiles(&args.profile)
        .with_context(|| format!("loading profiles from {}", args.profile.display()))?;
    info!("Loaded {} profile(s), mapping={}", profiles.len(), args.mapping);

    let mut results = Vec::with_capacity(profiles.len());
    for (i, profile) in profiles.iter().enumerate() {
        let result = runner
            .run(profile)
            .with_context(|| format!("determining profile #{}", i + 1))?;
        results.push(result);
    }

    if args.json {
        let out = if results.len() == 1 {
            serde_json::to_string_pretty(&results[0])?
        } else {
            serde_json::to_string_pretty(&results)?
        };
        println!("{}", out);
    } else {
        for (i, result) in results.iter().enumerate() {
            if i > 0 {
                println!("\n{}\n", "=".repeat(66));
            }
            print!("{}", render_statement(result));
        }
    }

    Ok(())
}
