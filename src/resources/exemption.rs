//! Socio-professional exemptions per person

use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::numeric::round_currency;
use crate::profile::ExemptionFlags;
use crate::rates::{ExemptionRates, RateTable};

/// Exemptions granted to one person for the reference month
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonExemptions {
    /// Fraction of the month covered (1.0 for a full month)
    pub prorata: f64,
    pub general: f64,
    pub student: f64,
    pub labor_shortage: f64,
    /// Monthly equivalent of the annual artistic exemption
    pub artistic: f64,
    /// Sum of the above, as a negative adjustment
    pub adjustment: f64,
}

impl PersonExemptions {
    /// Positive amount deducted from the person's net income
    pub fn total(&self) -> f64 {
        -self.adjustment
    }
}

impl ExemptionFlags {
    pub fn any(&self) -> bool {
        self.general || self.student || self.labor_shortage || self.artistic
    }
}

/// Compute a person's exemptions from the rates in force at `date`
///
/// The exemption table is only consulted when at least one flag is set, so a
/// profile without exemptions never fails on it.
pub fn person_exemptions(
    flags: &ExemptionFlags,
    table: &RateTable<ExemptionRates>,
    date: NaiveDate,
    days_in_month: u32,
) -> Result<PersonExemptions, SimulationError> {
    if !flags.any() {
        return Ok(PersonExemptions { prorata: 1.0, ..Default::default() });
    }
    let rates = table.resolve(date)?.values;
    Ok(exemptions_from_rates(flags, &rates, days_in_month))
}

/// Exemption arithmetic once the rates are known
pub fn exemptions_from_rates(
    flags: &ExemptionFlags,
    rates: &ExemptionRates,
    days_in_month: u32,
) -> PersonExemptions {
    let prorata = if flags.counter_days > 0 && days_in_month > 0 {
        flags.counter_days as f64 / days_in_month as f64
    } else {
        1.0
    };

    let monthly = |enabled: bool, rate: f64| {
        if enabled { round_currency(rate * prorata) } else { 0.0 }
    };

    let general = monthly(flags.general, rates.general_monthly);
    let student = monthly(flags.student, rates.student_monthly);
    let labor_shortage = monthly(flags.labor_shortage, rates.labor_shortage_monthly);
    let artistic = if flags.artistic {
        round_currency(rates.artistic_annual / 12.0)
    } else {
        0.0
    };

    let total = round_currency(general + student + labor_shortage + artistic);
    debug!(
        "Exemptions: prorata={:.4} general={} student={} shortage={} artistic={} total={}",
        prorata, general, student, labor_shortage, artistic, total
    );

    PersonExemptions {
        prorata,
        general,
        student,
        labor_shortage,
        artistic,
        adjustment: -total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rates() -> ExemptionRates {
        ExemptionRates {
            general_monthly: 315.85,
            student_monthly: 103.44,
            labor_shortage_monthly: 277.51,
            artistic_annual: 3389.81,
        }
    }

    #[test]
    fn test_no_flags_no_exemption() {
        let e = exemptions_from_rates(&ExemptionFlags::default(), &rates(), 28);
        assert_eq!(e.total(), 0.0);
        assert_eq!(e.adjustment, 0.0);
    }

    #[test]
    fn test_full_month_general_and_student() {
        let flags = ExemptionFlags { general: true, student: true, ..Default::default() };
        let e = exemptions_from_rates(&flags, &rates(), 28);
        assert_eq!(e.prorata, 1.0);
        assert_relative_eq!(e.general, 315.85);
        assert_relative_eq!(e.student, 103.44);
        assert_relative_eq!(e.adjustment, -419.29);
    }

    #[test]
    fn test_counter_days_prorate_monthly_rates_only() {
        let flags = ExemptionFlags {
            general: true,
            artistic: true,
            counter_days: 7,
            ..Default::default()
        };
        let e = exemptions_from_rates(&flags, &rates(), 28);
        assert_relative_eq!(e.prorata, 0.25);
        // 315.85 / 4 = 78.9625
        assert_relative_eq!(e.general, 78.96);
        // 3389.81 / 12 = 282.484..., not prorated
        assert_relative_eq!(e.artistic, 282.48);
        assert_relative_eq!(e.total(), 361.44);
    }

    #[test]
    fn test_table_not_consulted_without_flags() {
        let empty = RateTable::new("exemptions", Vec::new());
        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        assert!(person_exemptions(&ExemptionFlags::default(), &empty, date, 31).is_ok());

        let flags = ExemptionFlags { student: true, ..Default::default() };
        assert!(person_exemptions(&flags, &empty, date, 31).is_err());
    }
}
