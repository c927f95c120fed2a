//! Date-versioned rate tables and fixed legal parameters

mod table;
mod parameters;
pub mod calendar;
pub mod loader;

pub use table::{RateTable, RateTableEntry, CategoryAmounts, ExemptionRates};
pub use parameters::{ProgressiveTiers, RealEstateParameters, CessionParameters};
pub use loader::LoadedRates;

use std::path::Path;

use chrono::NaiveDate;

use crate::error::LoadError;

/// Container for every table and parameter the determination reads
#[derive(Debug, Clone)]
pub struct RateTables {
    /// Annual RI amount per category
    pub thresholds: RateTable<CategoryAmounts>,
    /// Supplemental annual exemption per category
    pub supplemental_exemption: RateTable<CategoryAmounts>,
    /// Socio-professional exemption rates
    pub exemptions: RateTable<ExemptionRates>,
    pub real_estate: RealEstateParameters,
    pub cession: CessionParameters,
    pub tiers: ProgressiveTiers,
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    // Literal dates below are all valid
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

impl RateTables {
    /// Built-in tables matching the reference workbook
    pub fn current() -> Self {
        let category_row = |date: NaiveDate, cat1, cat2, cat3| RateTableEntry {
            effective_date: date,
            values: CategoryAmounts::new(cat1, cat2, cat3),
        };
        let exemption_row = |date: NaiveDate, general, student, shortage, artistic| RateTableEntry {
            effective_date: date,
            values: ExemptionRates {
                general_monthly: general,
                student_monthly: student,
                labor_shortage_monthly: shortage,
                artistic_annual: artistic,
            },
        };

        Self {
            thresholds: RateTable::new(
                "thresholds",
                vec![
                    category_row(ymd(2023, 1, 1), 9713.04, 14569.58, 19690.01),
                    category_row(ymd(2023, 7, 1), 9907.30, 14860.96, 20083.80),
                    category_row(ymd(2023, 11, 1), 10105.38, 15158.08, 20485.33),
                    category_row(ymd(2024, 5, 1), 10307.68, 15461.53, 20895.43),
                    category_row(ymd(2025, 2, 1), 10513.60, 15770.41, 21312.87),
                ],
            ),
            supplemental_exemption: RateTable::new(
                "supplemental_exemption",
                vec![category_row(ymd(2023, 1, 1), 155.0, 250.0, 310.0)],
            ),
            exemptions: RateTable::new(
                "exemptions",
                vec![
                    exemption_row(ymd(2023, 1, 1), 291.81, 95.56, 256.38, 3131.66),
                    exemption_row(ymd(2023, 7, 1), 297.64, 97.47, 261.51, 3194.29),
                    exemption_row(ymd(2023, 11, 1), 303.59, 99.42, 266.74, 3258.18),
                    exemption_row(ymd(2024, 5, 1), 309.66, 101.41, 272.07, 3323.34),
                    exemption_row(ymd(2025, 2, 1), 315.85, 103.44, 277.51, 3389.81),
                ],
            ),
            real_estate: RealEstateParameters::default(),
            cession: CessionParameters::default(),
            tiers: ProgressiveTiers::default(),
        }
    }

    /// Load dated tables from CSV files in the default location (data/rates/)
    pub fn from_csv() -> Result<Self, LoadError> {
        Self::from_csv_path(Path::new(loader::DEFAULT_RATES_PATH))
    }

    /// Load dated tables from CSV files in a specific directory
    ///
    /// Fixed parameters keep their built-in values.
    pub fn from_csv_path(path: &Path) -> Result<Self, LoadError> {
        let loaded = LoadedRates::load_from(path)?;
        Ok(Self::from_loaded(loaded))
    }

    pub fn from_loaded(loaded: LoadedRates) -> Self {
        Self {
            thresholds: RateTable::new("thresholds", loaded.thresholds),
            supplemental_exemption: RateTable::new(
                "supplemental_exemption",
                loaded.supplemental_exemption,
            ),
            exemptions: RateTable::new("exemptions", loaded.exemptions),
            ..Self::current()
        }
    }
}

impl Default for RateTables {
    fn default() -> Self {
        Self::current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Category;

    #[test]
    fn test_csv_tables_match_built_in() {
        let from_csv = RateTables::from_csv().expect("default rate tables should load");
        let built_in = RateTables::current();

        assert_eq!(from_csv.thresholds, built_in.thresholds);
        assert_eq!(from_csv.supplemental_exemption, built_in.supplemental_exemption);
        assert_eq!(from_csv.exemptions, built_in.exemptions);
    }

    #[test]
    fn test_threshold_lookup_by_date() {
        let tables = RateTables::current();

        let feb_2025 = tables.thresholds.resolve(ymd(2025, 2, 1)).unwrap();
        assert_eq!(feb_2025.values.for_category(Category::Two), 15770.41);

        let jan_2025 = tables.thresholds.resolve(ymd(2025, 1, 31)).unwrap();
        assert_eq!(jan_2025.values.for_category(Category::One), 10307.68);

        assert!(tables.thresholds.resolve(ymd(2022, 12, 1)).is_err());
    }
}
