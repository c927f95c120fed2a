//! Fixed legal parameters that are not date-indexed

use serde::{Deserialize, Serialize};

use super::table::CategoryAmounts;

/// Three-band progressive structure shared by cessions and movable capital
///
/// Band 1 `[0, lower)` is untaxed, band 2 `[lower, upper)` is taxed at
/// `middle_rate`, band 3 `[upper, ∞)` at `upper_rate`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressiveTiers {
    pub lower_threshold: f64,
    pub upper_threshold: f64,
    pub middle_rate: f64,
    pub upper_rate: f64,
}

impl Default for ProgressiveTiers {
    fn default() -> Self {
        Self {
            lower_threshold: 6_200.0,
            upper_threshold: 12_500.0,
            middle_rate: 0.06,
            upper_rate: 0.10,
        }
    }
}

/// Real-estate cadastral income exemptions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RealEstateParameters {
    /// Exemption constant for built property
    pub built_exemption: f64,
    /// Exemption constant for unbuilt land
    pub unbuilt_exemption: f64,
    /// Multiplier applied to the exemption constant before share allocation
    pub exemption_multiplier: f64,
    /// Multiplier turning net cadastral income into a retained resource
    pub cadastral_multiplier: f64,
    /// Cap on interest and on annuity deductions, as a fraction of the retained resource
    pub deduction_cap: f64,
}

impl Default for RealEstateParameters {
    fn default() -> Self {
        Self {
            built_exemption: 750.0,
            unbuilt_exemption: 30.0,
            exemption_multiplier: 2.0,
            cadastral_multiplier: 3.0,
            deduction_cap: 0.5,
        }
    }
}

/// Asset cession parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CessionParameters {
    /// Exempt tranche for a sole built or unbuilt good
    pub unique_good_tranche: f64,
    /// Annual abatement per elapsed year, by category of the applicant
    pub annual_abatement: CategoryAmounts,
    /// Venal coefficient for bare ownership
    pub bare_ownership_coefficient: f64,
    /// Venal coefficient for usufruct
    pub usufruct_coefficient: f64,
}

impl Default for CessionParameters {
    fn default() -> Self {
        Self {
            unique_good_tranche: 37_200.0,
            annual_abatement: CategoryAmounts::new(1_250.0, 2_000.0, 2_500.0),
            bare_ownership_coefficient: 0.6,
            usufruct_coefficient: 0.4,
        }
    }
}
