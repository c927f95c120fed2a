//! Taxable income imputed on transferred goods

use chrono::{Datelike, NaiveDate};
use log::debug;
use serde::{Deserialize, Serialize};

use super::tiers::{apply_tiers, TierBreakdown};
use crate::numeric::round_currency;
use crate::profile::{Category, CessionKind, CessionNature, CessionRecord, OwnershipTitle};
use crate::rates::{CessionParameters, ProgressiveTiers};

/// Computation detail for one transfer (annual amounts)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CessionLine {
    pub kind: CessionKind,
    pub nature: CessionNature,
    pub share: f64,
    pub coefficient: f64,
    pub venal_amount: f64,
    pub tranche: f64,
    pub months_elapsed: u32,
    pub abatement: f64,
    pub debts_deducted: f64,
    pub amount_considered: f64,
    pub tiers: TierBreakdown,
    pub equity_waiver: bool,
    pub annual: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CessionBreakdown {
    pub lines: Vec<CessionLine>,
    pub annual: f64,
    pub monthly: f64,
}

impl CessionParameters {
    /// Share of the full-ownership value a title carries
    pub fn coefficient(&self, title: OwnershipTitle) -> f64 {
        match title {
            OwnershipTitle::Full => 1.0,
            OwnershipTitle::BareOwnership => self.bare_ownership_coefficient,
            OwnershipTitle::Usufruct => self.usufruct_coefficient,
        }
    }
}

/// Whole calendar months from `from` to `to` (0 when `to` precedes `from`)
pub fn whole_months_between(from: NaiveDate, to: NaiveDate) -> u32 {
    if to <= from {
        return 0;
    }
    let mut months = (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    if to.day() < from.day() {
        months -= 1;
    }
    months.max(0) as u32
}

/// Months counted for the abatement: whole months elapsed minus one, floored at 0
pub fn abatement_months(transfer_date: Option<NaiveDate>, ri_start_date: Option<NaiveDate>) -> u32 {
    match (transfer_date, ri_start_date) {
        (Some(from), Some(to)) => whole_months_between(from, to).saturating_sub(1),
        _ => 0,
    }
}

/// Annual taxable income imputed on one transfer
pub fn cession_line(
    record: &CessionRecord,
    category: Category,
    params: &CessionParameters,
    tiers: &ProgressiveTiers,
) -> CessionLine {
    let share = record.share();
    let coefficient = params.coefficient(record.ownership_title);
    let venal_amount = round_currency(record.venal_value * share * coefficient);

    let (tranche, months_elapsed, abatement) = if record.kind.is_unique() {
        let months = abatement_months(record.transfer_date, record.ri_start_date);
        let annual_abatement = params.annual_abatement.for_category(category);
        (
            params.unique_good_tranche * share,
            months,
            round_currency(annual_abatement * months as f64 / 12.0),
        )
    } else {
        (0.0, 0, 0.0)
    };

    let debts_deducted = match record.nature {
        CessionNature::Onerous => record.personal_debts.max(0.0),
        CessionNature::Gratuitous => 0.0,
    };

    let amount_considered =
        round_currency(venal_amount - tranche - abatement - debts_deducted).max(0.0);
    let tier_breakdown = apply_tiers(tiers, amount_considered, share);

    CessionLine {
        kind: record.kind,
        nature: record.nature,
        share,
        coefficient,
        venal_amount,
        tranche: round_currency(tranche),
        months_elapsed,
        abatement,
        debts_deducted,
        amount_considered,
        tiers: tier_breakdown,
        equity_waiver: record.equity_waiver,
        annual: tier_breakdown.total,
    }
}

/// Taxable income of all transfers
pub fn cession_income(
    records: &[CessionRecord],
    category: Category,
    params: &CessionParameters,
    tiers: &ProgressiveTiers,
) -> CessionBreakdown {
    let lines: Vec<CessionLine> = records
        .iter()
        .map(|r| cession_line(r, category, params, tiers))
        .collect();

    for line in &lines {
        debug!(
            "Cession {:?}/{:?}: venal={} tranche={} abatement={} ({} months) debts={} considered={} taxable={}",
            line.kind, line.nature, line.venal_amount, line.tranche, line.abatement,
            line.months_elapsed, line.debts_deducted, line.amount_considered, line.annual
        );
    }

    let annual = round_currency(lines.iter().map(|l| l.annual).sum());
    CessionBreakdown {
        lines,
        annual,
        monthly: round_currency(annual / 12.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(kind: CessionKind, value: f64, nature: CessionNature) -> CessionRecord {
        CessionRecord {
            kind,
            venal_value: value,
            share_percent: 100.0,
            ownership_title: OwnershipTitle::Full,
            nature,
            transfer_date: Some(date(2025, 1, 1)),
            ri_start_date: Some(date(2025, 1, 1)),
            personal_debts: 0.0,
            equity_waiver: false,
        }
    }

    fn line(r: &CessionRecord, category: Category) -> CessionLine {
        cession_line(r, category, &CessionParameters::default(), &ProgressiveTiers::default())
    }

    #[test]
    fn test_unique_built_sale_without_elapsed_time() {
        let r = record(CessionKind::UniqueBuilt, 100_000.0, CessionNature::Onerous);
        let l = line(&r, Category::Two);

        assert_relative_eq!(l.venal_amount, 100_000.0);
        assert_relative_eq!(l.tranche, 37_200.0);
        assert_eq!(l.months_elapsed, 0);
        assert_eq!(l.abatement, 0.0);
        assert_relative_eq!(l.amount_considered, 62_800.0);
        assert_eq!(l.tiers.first, 0.0);
        assert_relative_eq!(l.tiers.second, 378.0);
        assert_relative_eq!(l.tiers.third, 5_030.0);
        assert_relative_eq!(l.annual, 5_408.0);
    }

    #[test]
    fn test_abatement_counts_months_minus_one() {
        let mut r = record(CessionKind::UniqueBuilt, 100_000.0, CessionNature::Onerous);
        r.transfer_date = Some(date(2024, 1, 15));
        r.ri_start_date = Some(date(2025, 2, 1));
        let l = line(&r, Category::Two);

        // 12 whole months (15 Jan 2024 .. 15 Jan 2025), minus one
        assert_eq!(l.months_elapsed, 11);
        // 2000 * 11 / 12 = 1833.333...
        assert_relative_eq!(l.abatement, 1833.33);
        assert_relative_eq!(l.amount_considered, 60_966.67);
    }

    #[test]
    fn test_tranche_unrounded_in_amount_considered() {
        let mut r = record(CessionKind::UniqueBuilt, 100_000.0, CessionNature::Onerous);
        r.share_percent = 33.3334;
        r.personal_debts = 0.004;
        let l = line(&r, Category::Two);

        assert_relative_eq!(l.venal_amount, 33_333.4);
        // 37200 * 0.333334 = 12400.0248, reported rounded
        assert_relative_eq!(l.tranche, 12_400.02);
        // 33333.4 - 12400.0248 - 0.004 = 20933.3712
        assert_relative_eq!(l.amount_considered, 20_933.37);
    }

    #[test]
    fn test_other_goods_get_no_tranche_nor_abatement() {
        let mut r = record(CessionKind::OtherBuilt, 50_000.0, CessionNature::Onerous);
        r.transfer_date = Some(date(2020, 1, 1));
        let l = line(&r, Category::Three);
        assert_eq!(l.tranche, 0.0);
        assert_eq!(l.abatement, 0.0);
        assert_relative_eq!(l.amount_considered, 50_000.0);
    }

    #[test]
    fn test_ownership_coefficients_and_share() {
        let mut r = record(CessionKind::OtherUnbuilt, 100_000.0, CessionNature::Onerous);
        r.ownership_title = OwnershipTitle::BareOwnership;
        r.share_percent = 50.0;
        assert_relative_eq!(line(&r, Category::One).venal_amount, 30_000.0);

        r.ownership_title = OwnershipTitle::Usufruct;
        assert_relative_eq!(line(&r, Category::One).venal_amount, 20_000.0);
    }

    #[test]
    fn test_debts_only_for_onerous_transfers() {
        let mut onerous = record(CessionKind::Movable, 30_000.0, CessionNature::Onerous);
        onerous.personal_debts = 10_000.0;
        assert_relative_eq!(line(&onerous, Category::Two).amount_considered, 20_000.0);

        let mut gift = record(CessionKind::Movable, 30_000.0, CessionNature::Gratuitous);
        let before = line(&gift, Category::Two);
        gift.personal_debts = 10_000.0;
        let after = line(&gift, Category::Two);
        assert_eq!(before.annual, after.annual);
        assert_eq!(after.debts_deducted, 0.0);
    }

    #[test]
    fn test_amount_floored_at_zero() {
        let r = record(CessionKind::UniqueUnbuilt, 20_000.0, CessionNature::Onerous);
        let l = line(&r, Category::Two);
        assert_eq!(l.amount_considered, 0.0);
        assert_eq!(l.annual, 0.0);
    }

    #[test]
    fn test_whole_months_between() {
        assert_eq!(whole_months_between(date(2024, 1, 31), date(2024, 2, 29)), 0);
        assert_eq!(whole_months_between(date(2024, 1, 31), date(2024, 3, 1)), 1);
        assert_eq!(whole_months_between(date(2024, 3, 1), date(2024, 1, 1)), 0);
        assert_eq!(abatement_months(None, Some(date(2025, 1, 1))), 0);
    }

    #[test]
    fn test_totals_across_transfers() {
        let records = vec![
            record(CessionKind::UniqueBuilt, 100_000.0, CessionNature::Onerous),
            record(CessionKind::OtherBuilt, 10_000.0, CessionNature::Gratuitous),
        ];
        let b = cession_income(
            &records,
            Category::Two,
            &CessionParameters::default(),
            &ProgressiveTiers::default(),
        );
        // 5408 + (3800 * 6 %)
        assert_relative_eq!(b.annual, 5_636.0);
        assert_relative_eq!(b.monthly, 469.67);
    }
}
