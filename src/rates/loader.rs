//! CSV-based rate table loader
//!
//! Loads date-versioned rate tables from CSV files in data/rates/

use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;
use log::info;
use serde::Deserialize;

use super::table::{CategoryAmounts, ExemptionRates, RateTableEntry};
use crate::error::LoadError;

/// Default path to the rate tables directory
pub const DEFAULT_RATES_PATH: &str = "data/rates";

pub const THRESHOLDS_FILE: &str = "thresholds.csv";
pub const SUPPLEMENTAL_EXEMPTION_FILE: &str = "supplemental_exemption.csv";
pub const EXEMPTIONS_FILE: &str = "exemptions.csv";

/// Row of a per-category table
#[derive(Debug, Deserialize)]
struct CategoryRow {
    date: NaiveDate,
    cat1: f64,
    cat2: f64,
    cat3: f64,
}

/// Row of the socio-professional exemption table
#[derive(Debug, Deserialize)]
struct ExemptionRow {
    date: NaiveDate,
    general_monthly: f64,
    student_monthly: f64,
    labor_shortage_monthly: f64,
    artistic_annual: f64,
}

fn open_reader(path: &Path) -> Result<csv::Reader<File>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(file))
}

/// Load a per-category table (benefit thresholds, supplemental exemption)
pub fn load_category_table(
    path: &Path,
) -> Result<Vec<RateTableEntry<CategoryAmounts>>, LoadError> {
    let mut reader = open_reader(path)?;
    let mut entries = Vec::new();

    for result in reader.deserialize() {
        let row: CategoryRow = result.map_err(|source| LoadError::Csv {
            path: path.display().to_string(),
            source,
        })?;
        entries.push(RateTableEntry {
            effective_date: row.date,
            values: CategoryAmounts::new(row.cat1, row.cat2, row.cat3),
        });
    }

    Ok(entries)
}

/// Load the socio-professional exemption table
pub fn load_exemption_table(
    path: &Path,
) -> Result<Vec<RateTableEntry<ExemptionRates>>, LoadError> {
    let mut reader = open_reader(path)?;
    let mut entries = Vec::new();

    for result in reader.deserialize() {
        let row: ExemptionRow = result.map_err(|source| LoadError::Csv {
            path: path.display().to_string(),
            source,
        })?;
        entries.push(RateTableEntry {
            effective_date: row.date,
            values: ExemptionRates {
                general_monthly: row.general_monthly,
                student_monthly: row.student_monthly,
                labor_shortage_monthly: row.labor_shortage_monthly,
                artistic_annual: row.artistic_annual,
            },
        });
    }

    Ok(entries)
}

/// All tables read from one directory
pub struct LoadedRates {
    pub thresholds: Vec<RateTableEntry<CategoryAmounts>>,
    pub supplemental_exemption: Vec<RateTableEntry<CategoryAmounts>>,
    pub exemptions: Vec<RateTableEntry<ExemptionRates>>,
}

impl LoadedRates {
    /// Load all tables from the default path
    pub fn load_default() -> Result<Self, LoadError> {
        Self::load_from(Path::new(DEFAULT_RATES_PATH))
    }

    /// Load all tables from a specific directory; empty tables are rejected
    pub fn load_from(path: &Path) -> Result<Self, LoadError> {
        let thresholds = load_category_table(&path.join(THRESHOLDS_FILE))?;
        if thresholds.is_empty() {
            return Err(LoadError::EmptyTable("thresholds"));
        }
        let supplemental_exemption =
            load_category_table(&path.join(SUPPLEMENTAL_EXEMPTION_FILE))?;
        if supplemental_exemption.is_empty() {
            return Err(LoadError::EmptyTable("supplemental_exemption"));
        }
        let exemptions = load_exemption_table(&path.join(EXEMPTIONS_FILE))?;
        if exemptions.is_empty() {
            return Err(LoadError::EmptyTable("exemptions"));
        }

        info!(
            "Loaded rate tables from {}: {} threshold rows, {} supplemental rows, {} exemption rows",
            path.display(),
            thresholds.len(),
            supplemental_exemption.len(),
            exemptions.len()
        );

        Ok(Self {
            thresholds,
            supplemental_exemption,
            exemptions,
        })
    }
}
