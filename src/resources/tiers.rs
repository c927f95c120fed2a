//! Progressive three-band imputation shared by cessions and movable capital

use serde::{Deserialize, Serialize};

use crate::numeric::round_currency;
use crate::rates::ProgressiveTiers;

/// Contribution of each band, already scaled and rounded
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TierBreakdown {
    /// Band below the lower threshold (always 0 %)
    pub first: f64,
    pub second: f64,
    pub third: f64,
    pub total: f64,
}

/// Run `amount` through the bands, scaling each band's contribution by `share`
pub fn apply_tiers(tiers: &ProgressiveTiers, amount: f64, share: f64) -> TierBreakdown {
    let amount = amount.max(0.0);
    let band_width = (tiers.upper_threshold - tiers.lower_threshold).max(0.0);

    let in_second = (amount - tiers.lower_threshold).max(0.0).min(band_width);
    let in_third = (amount - tiers.upper_threshold).max(0.0);

    let second = round_currency(in_second * tiers.middle_rate * share);
    let third = round_currency(in_third * tiers.upper_rate * share);

    TierBreakdown {
        first: 0.0,
        second,
        third,
        total: round_currency(second + third),
    }
}
