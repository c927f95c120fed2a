//! Taxable income imputed on movable capital

use log::debug;
use serde::{Deserialize, Serialize};

use super::tiers::{apply_tiers, TierBreakdown};
use crate::numeric::round_currency;
use crate::profile::MovableAssets;
use crate::rates::ProgressiveTiers;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MovableBreakdown {
    /// Capital × share
    pub amount_considered: f64,
    pub tiers: TierBreakdown,
    pub annual: f64,
    pub monthly: f64,
}

/// Capital × share through the progressive bands, with no tranche nor abatement
pub fn movable_income(assets: &MovableAssets, tiers: &ProgressiveTiers) -> MovableBreakdown {
    let share = assets.share_percent / 100.0;
    let amount_considered = round_currency(assets.capital_amount * share).max(0.0);
    let tier_breakdown = apply_tiers(tiers, amount_considered, 1.0);
    let annual = tier_breakdown.total;

    debug!("Movable capital: considered={} taxable={}", amount_considered, annual);

    MovableBreakdown {
        amount_considered,
        tiers: tier_breakdown,
        annual,
        monthly: round_currency(annual / 12.0),
    }
}
