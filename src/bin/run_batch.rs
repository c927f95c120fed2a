//! Run determinations for every profile of a JSON file
//!
//! Outputs one CSV summary row per profile, in input order.
//!
//! Usage: run_batch [PROFILES_JSON] [OUTPUT_CSV]

use std::env;
use std::time::Instant;

use anyhow::{Context, Result};
use log::warn;
use serde::Serialize;

use ri_simulator::{profile::load_profiles, SimulationRunner};

const DEFAULT_PROFILES_PATH: &str = "data/profiles/batch.json";
const DEFAULT_OUTPUT_PATH: &str = "batch_summary.csv";

/// Summary row written for each profile
#[derive(Debug, Serialize, Default)]
#[serde(rename_all = "PascalCase")]
struct SummaryRow {
    index: usize,
    reference_date: String,
    situation: String,
    category: Option<u8>,
    threshold: Option<f64>,
    professional_annual: Option<f64>,
    other_annual: Option<f64>,
    total_annual_resources: Option<f64>,
    retained_resources: Option<f64>,
    eligible: Option<bool>,
    annual_entitlement: Option<f64>,
    monthly_entitlement: Option<f64>,
    prorated_monthly_entitlement: Option<f64>,
    error: String,
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let profiles_path = args.next().unwrap_or_else(|| DEFAULT_PROFILES_PATH.to_string());
    let output_path = args.next().unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string());

    let start = Instant::now();
    println!("Loading profiles from {}...", profiles_path);
    let profiles = load_profiles(&profiles_path)
        .with_context(|| format!("loading profiles from {}", profiles_path))?;
    println!("Loaded {} profiles in {:?}", profiles.len(), start.elapsed());

    let runner = SimulationRunner::from_csv().context("loading rate tables")?;

    let run_start = Instant::now();
    let results = runner.run_batch(&profiles);
    println!("Determinations complete in {:?}", run_start.elapsed());

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {}", output_path))?;

    let mut eligible_count = 0;
    let mut monthly_total = 0.0;
    for (i, (profile, result)) in profiles.iter().zip(&results).enumerate() {
        let mut row = SummaryRow {
            index: i + 1,
            reference_date: profile.reference_date.format("%Y-%m-%d").to_string(),
            situation: profile.situation.as_str().to_string(),
            ..Default::default()
        };
        match result {
            Ok(r) => {
                row.category = Some(r.category.number());
                row.threshold = Some(r.summary.threshold);
                row.professional_annual = Some(r.professional.annual);
                row.other_annual = Some(r.other_resources_annual());
                row.total_annual_resources = Some(r.summary.total_annual_resources);
                row.retained_resources = Some(r.summary.retained_resources);
                row.eligible = Some(r.eligible);
                row.annual_entitlement = Some(r.annual_entitlement);
                row.monthly_entitlement = Some(r.monthly_entitlement);
                row.prorated_monthly_entitlement = Some(r.prorated_monthly_entitlement);
                if r.eligible {
                    eligible_count += 1;
                    monthly_total += r.prorated_monthly_entitlement;
                }
            }
            Err(e) => {
                warn!("Profile #{}: {}", i + 1, e);
                row.error = e.to_string();
            }
        }
        writer.serialize(&row)?;
    }
    writer.flush()?;

    println!("Output written to {}", output_path);
    println!("\nBatch Summary:");
    println!("  Profiles: {}", profiles.len());
    println!("  Eligible: {}", eligible_count);
    println!("  Errors:   {}", results.iter().filter(|r| r.is_err()).count());
    println!("  Total monthly RI: {:.2}", monthly_total);
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
