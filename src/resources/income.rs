//! Professional income, replacement income and ancillary resources

use chrono::{Datelike, NaiveDate};
use log::debug;
use serde::{Deserialize, Serialize};

use super::exemption::PersonExemptions;
use crate::numeric::round_currency;
use crate::profile::{AmountLine, DailyBenefit, IncomeLine, MiscResources, ReplacementIncomeInputs};
use crate::rates::calendar::days_payable_in_year;

/// Days per month on which a per-day benefit is paid
pub const PAID_DAYS_PER_MONTH: f64 = 26.0;

/// Net professional income of one person
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonIncome {
    /// Σ taxable − Σ exempt, monthly
    pub net_monthly: f64,
    pub net_annual: f64,
    pub exemptions: PersonExemptions,
    /// Net income after the person's own exemptions, monthly
    pub net_after_exemption_monthly: f64,
    pub net_after_exemption_annual: f64,
}

/// Replacement incomes converted to a monthly figure
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplacementIncome {
    pub days_payable_in_year: u32,
    pub unemployment_monthly: f64,
    pub health_insurance_monthly: f64,
    /// Pension, bridging right and disability allowance
    pub other_monthly: f64,
    pub total_monthly: f64,
}

/// In-kind advantages and miscellaneous resources
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AncillaryIncome {
    pub in_kind_monthly: f64,
    pub misc_general_monthly: f64,
    pub misc_volunteer_monthly: f64,
    pub misc_monthly: f64,
    pub misc_annual: f64,
}

/// Σ taxable − Σ exempt over a person's lines, floored at zero
pub fn net_income(lines: &[IncomeLine]) -> f64 {
    let taxable: f64 = lines.iter().map(|l| l.taxable_amount).sum();
    let exempt: f64 = lines.iter().map(|l| l.exempt_amount).sum();
    round_currency(taxable - exempt).max(0.0)
}

/// Net income of a person, offset by their exemptions
pub fn person_income(lines: &[IncomeLine], exemptions: PersonExemptions) -> PersonIncome {
    let net_monthly = net_income(lines);
    let net_after_exemption_monthly =
        round_currency(net_monthly + exemptions.adjustment).max(0.0);

    PersonIncome {
        net_monthly,
        net_annual: round_currency(net_monthly * 12.0),
        exemptions,
        net_after_exemption_monthly,
        net_after_exemption_annual: round_currency(net_after_exemption_monthly * 12.0),
    }
}

/// Monthly equivalent of a per-day benefit
pub fn daily_benefit_monthly(benefit: &DailyBenefit, days_payable_in_year: u32) -> f64 {
    let monthly = benefit.fixed_monthly
        + benefit.per_day_rate * PAID_DAYS_PER_MONTH
        + benefit.per_annual_day_rate * days_payable_in_year as f64 / 12.0;
    round_currency(monthly).max(0.0)
}

/// Replacement incomes for the year of the reference date
pub fn replacement_income(inputs: &ReplacementIncomeInputs, reference_date: NaiveDate) -> ReplacementIncome {
    let days_payable = days_payable_in_year(reference_date.year());

    let unemployment_monthly = daily_benefit_monthly(&inputs.unemployment, days_payable);
    let health_insurance_monthly = daily_benefit_monthly(&inputs.health_insurance, days_payable);
    let other_monthly =
        round_currency(inputs.pension + inputs.bridging_right + inputs.disability_allowance).max(0.0);
    let total_monthly = round_currency(unemployment_monthly + health_insurance_monthly + other_monthly);

    debug!(
        "Replacement income: unemployment={} health={} other={} (payable days {})",
        unemployment_monthly, health_insurance_monthly, other_monthly, days_payable
    );

    ReplacementIncome {
        days_payable_in_year: days_payable,
        unemployment_monthly,
        health_insurance_monthly,
        other_monthly,
        total_monthly,
    }
}

fn sum_lines(lines: &[AmountLine]) -> f64 {
    round_currency(lines.iter().map(|l| l.amount).sum::<f64>()).max(0.0)
}

/// Flat monthly sums of in-kind advantages and miscellaneous resources
pub fn ancillary_income(in_kind: &[AmountLine], misc: &MiscResources) -> AncillaryIncome {
    let in_kind_monthly = sum_lines(in_kind);
    let misc_general_monthly = sum_lines(&misc.general);
    let misc_volunteer_monthly = sum_lines(&misc.volunteer);
    let misc_monthly = round_currency(misc_general_monthly + misc_volunteer_monthly);

    AncillaryIncome {
        in_kind_monthly,
        misc_general_monthly,
        misc_volunteer_monthly,
        misc_monthly,
        misc_annual: round_currency(misc_monthly * 12.0),
    }
}
