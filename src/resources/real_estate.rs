//! Real-estate income: cadastral income net of exemptions, or rent when higher
//!
//! For each built or unbuilt asset:
//! - `K` cadastral income × share
//! - `L` exemption constant × multiplier × share, split across the assets with a
//!   positive cadastral income
//! - `M` retained resource `(K − L) × 3`
//!
//! The rent actually collected replaces `M` when it is higher, and then no interest
//! or annuity deduction applies. Foreign assets contribute their declared income.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::numeric::round_currency;
use crate::profile::{RealEstateAsset, RealEstateKind};
use crate::rates::RealEstateParameters;

/// Computation detail for one asset (annual amounts)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RealEstateLine {
    pub kind: RealEstateKind,
    pub share: f64,
    /// K
    pub cadastral_share: f64,
    /// L
    pub exemption: f64,
    /// M
    pub retained: f64,
    pub rent_share: f64,
    pub rent_applies: bool,
    pub interest_deduction: f64,
    pub annuity_deduction: f64,
    pub contribution: f64,
}

/// Real-estate totals (annual unless stated)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RealEstateBreakdown {
    pub lines: Vec<RealEstateLine>,
    pub built_annual: f64,
    pub unbuilt_annual: f64,
    pub foreign_annual: f64,
    pub annual: f64,
    pub monthly: f64,
}

impl RealEstateParameters {
    fn exemption_for(&self, kind: RealEstateKind) -> f64 {
        match kind {
            RealEstateKind::Built => self.built_exemption,
            RealEstateKind::Unbuilt => self.unbuilt_exemption,
            RealEstateKind::Foreign => 0.0,
        }
    }
}

/// Number of domestic assets sharing the exemption
fn assets_with_cadastral_income(assets: &[RealEstateAsset]) -> usize {
    assets
        .iter()
        .filter(|a| a.kind != RealEstateKind::Foreign && a.cadastral_income > 0.0)
        .count()
}

/// Contribution of one domestic asset
pub fn domestic_asset_line(
    asset: &RealEstateAsset,
    params: &RealEstateParameters,
    exemption_count: usize,
) -> RealEstateLine {
    let share = asset.share();
    let has_income = asset.cadastral_income > 0.0;

    // K and L stay unrounded until M; only the reported figures are rounded
    let cadastral_share = asset.cadastral_income * share;
    let exemption = if has_income && exemption_count > 0 {
        params.exemption_for(asset.kind) * params.exemption_multiplier * share
            / exemption_count as f64
    } else {
        0.0
    };
    let retained = if has_income && cadastral_share >= exemption {
        round_currency((cadastral_share - exemption) * params.cadastral_multiplier)
    } else {
        0.0
    };

    let rent_share = round_currency(asset.annual_rent * share).max(0.0);
    let rent_applies = rent_share > retained;

    let (interest_deduction, annuity_deduction, contribution) = if rent_applies {
        (0.0, 0.0, rent_share)
    } else {
        let cap = retained * params.deduction_cap;
        let interest = asset.interest_paid.max(0.0).min(cap);
        let annuity = asset.annuity_paid.max(0.0).min(cap);
        let net = round_currency(retained - interest - annuity).max(0.0);
        (round_currency(interest), round_currency(annuity), net)
    };

    RealEstateLine {
        kind: asset.kind,
        share,
        cadastral_share: round_currency(cadastral_share),
        exemption: round_currency(exemption),
        retained,
        rent_share,
        rent_applies,
        interest_deduction,
        annuity_deduction,
        contribution,
    }
}

fn foreign_asset_line(asset: &RealEstateAsset) -> RealEstateLine {
    RealEstateLine {
        kind: RealEstateKind::Foreign,
        share: asset.share(),
        cadastral_share: 0.0,
        exemption: 0.0,
        retained: 0.0,
        rent_share: 0.0,
        rent_applies: false,
        interest_deduction: 0.0,
        annuity_deduction: 0.0,
        contribution: round_currency(asset.foreign_income).max(0.0),
    }
}

/// Annual real-estate income of the household
pub fn real_estate_income(assets: &[RealEstateAsset], params: &RealEstateParameters) -> RealEstateBreakdown {
    let exemption_count = assets_with_cadastral_income(assets);
    let mut breakdown = RealEstateBreakdown::default();

    for asset in assets {
        let line = match asset.kind {
            RealEstateKind::Foreign => foreign_asset_line(asset),
            RealEstateKind::Built | RealEstateKind::Unbuilt => {
                domestic_asset_line(asset, params, exemption_count)
            }
        };
        debug!(
            "Real estate {:?}: K={} L={} M={} rent={} rent_applies={} contribution={}",
            line.kind, line.cadastral_share, line.exemption, line.retained,
            line.rent_share, line.rent_applies, line.contribution
        );

        match line.kind {
            RealEstateKind::Built => breakdown.built_annual += line.contribution,
            RealEstateKind::Unbuilt => breakdown.unbuilt_annual += line.contribution,
            RealEstateKind::Foreign => breakdown.foreign_annual += line.contribution,
        }
        breakdown.lines.push(line);
    }

    breakdown.built_annual = round_currency(breakdown.built_annual);
    breakdown.unbuilt_annual = round_currency(breakdown.unbuilt_annual);
    breakdown.foreign_annual = round_currency(breakdown.foreign_annual);
    breakdown.annual = round_currency(
        breakdown.built_annual + breakdown.unbuilt_annual + breakdown.foreign_annual,
    );
    breakdown.monthly = round_currency(breakdown.annual / 12.0);
    breakdown
}
