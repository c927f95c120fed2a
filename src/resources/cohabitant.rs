//! Resources of cohabitants counted for the household

use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::numeric::round_currency;
use crate::profile::{Category, CohabitantRecord, SupportMode};
use crate::rates::{CategoryAmounts, RateTable};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CohabitantLine {
    pub category: Category,
    /// Annual RI amount of the cohabitant's own category
    pub threshold: f64,
    pub excess_annual: f64,
    pub excess_monthly: f64,
    pub support_mode: SupportMode,
    pub counted_monthly: f64,
    /// Resources not reported: the cohabitant may claim in their own right
    pub possibly_independently_entitled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CohabitantBreakdown {
    pub lines: Vec<CohabitantLine>,
    pub monthly: f64,
    pub annual: f64,
}

/// Excess of one cohabitant over their category threshold, reported per support mode
pub fn cohabitant_line(record: &CohabitantRecord, threshold: f64) -> CohabitantLine {
    let excess_annual = round_currency(record.total_annual_resources - threshold).max(0.0);
    let excess_monthly = round_currency(excess_annual / 12.0);

    let counted_monthly = match record.support_mode {
        SupportMode::None => 0.0,
        SupportMode::Full => excess_monthly,
        SupportMode::Capped => {
            round_currency(excess_monthly * record.capped_percent.max(0.0) / 100.0)
        }
    };

    CohabitantLine {
        category: record.category,
        threshold,
        excess_annual,
        excess_monthly,
        support_mode: record.support_mode,
        counted_monthly,
        possibly_independently_entitled: record.support_mode == SupportMode::None,
    }
}

/// Sum of the cohabitants' counted resources
pub fn cohabitant_resources(
    records: &[CohabitantRecord],
    thresholds: &RateTable<CategoryAmounts>,
    date: NaiveDate,
) -> Result<CohabitantBreakdown, SimulationError> {
    let mut lines = Vec::with_capacity(records.len());
    for record in records {
        let threshold = thresholds.resolve(date)?.values.for_category(record.category);
        let line = cohabitant_line(record, threshold);
        debug!(
            "Cohabitant cat {}: excess={}/yr mode={:?} counted={}/month",
            line.category.number(), line.excess_annual, line.support_mode, line.counted_monthly
        );
        lines.push(line);
    }

    let monthly = round_currency(lines.iter().map(|l| l.counted_monthly).sum());
    Ok(CohabitantBreakdown {
        lines,
        monthly,
        annual: round_currency(monthly * 12.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates::RateTables;
    use approx::assert_relative_eq;

    fn cohabitant(resources: f64, mode: SupportMode, pct: f64) -> CohabitantRecord {
        CohabitantRecord {
            total_annual_resources: resources,
            category: Category::One,
            support_mode: mode,
            capped_percent: pct,
        }
    }

    #[test]
    fn test_full_mode_counts_whole_excess() {
        let line = cohabitant_line(&cohabitant(22_513.60, SupportMode::Full, 0.0), 10_513.60);
        assert_relative_eq!(line.excess_annual, 12_000.0);
        assert_relative_eq!(line.excess_monthly, 1_000.0);
        assert_relative_eq!(line.counted_monthly, 1_000.0);
        assert!(!line.possibly_independently_entitled);
    }

    #[test]
    fn test_capped_mode_counts_percentage() {
        let line = cohabitant_line(&cohabitant(22_513.60, SupportMode::Capped, 25.0), 10_513.60);
        assert_relative_eq!(line.counted_monthly, 250.0);
    }

    #[test]
    fn test_none_mode_counts_nothing_and_flags() {
        let line = cohabitant_line(&cohabitant(50_000.0, SupportMode::None, 0.0), 10_513.60);
        assert_eq!(line.counted_monthly, 0.0);
        assert!(line.possibly_independently_entitled);
    }

    #[test]
    fn test_resources_below_threshold_count_nothing() {
        let line = cohabitant_line(&cohabitant(8_000.0, SupportMode::Full, 0.0), 10_513.60);
        assert_eq!(line.excess_annual, 0.0);
        assert_eq!(line.counted_monthly, 0.0);
    }

    #[test]
    fn test_breakdown_uses_dated_threshold() {
        let tables = RateTables::current();
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let records = vec![
            cohabitant(22_513.60, SupportMode::Full, 0.0),
            cohabitant(22_513.60, SupportMode::Capped, 50.0),
        ];
        let b = cohabitant_resources(&records, &tables.thresholds, date).unwrap();
        assert_relative_eq!(b.monthly, 1_500.0);
        assert_relative_eq!(b.annual, 18_000.0);

        let too_early = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
        assert!(cohabitant_resources(&records, &tables.thresholds, too_early).is_err());
        assert!(cohabitant_resources(&[], &tables.thresholds, too_early).is_ok());
    }
}
