//! Output structures of a determination

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::profile::{Category, HouseholdSituation};
use crate::resources::{
    AncillaryIncome, CessionBreakdown, CohabitantBreakdown, MovableBreakdown, PersonIncome,
    RealEstateBreakdown, ReplacementIncome,
};

/// Professional and assimilated resources
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfessionalBreakdown {
    pub applicant: PersonIncome,
    pub partner: Option<PersonIncome>,
    pub replacement: ReplacementIncome,
    pub in_kind_monthly: f64,
    /// Sum of the above for a full month
    pub monthly: f64,
    /// Monthly figure after partial-month prorating (equal to `monthly` otherwise)
    pub prorated_monthly: f64,
    pub annual: f64,
}

/// Threshold comparison and entitlement derivation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeterminationSummary {
    /// Annual RI amount for the household category
    pub threshold: f64,
    pub total_annual_resources: f64,
    /// Supplemental annual exemption, as a negative adjustment
    pub supplemental_exemption: f64,
    /// Resources after the supplemental exemption, floored at 0
    pub retained_resources: f64,
    pub days_in_month: u32,
    pub days_counted: Option<u32>,
}

/// Verdict and itemized breakdown for one profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputationResult {
    pub reference_date: NaiveDate,
    pub situation: HouseholdSituation,
    pub category: Category,
    pub eligible: bool,
    pub annual_entitlement: f64,
    pub monthly_entitlement: f64,
    /// Final monthly amount after partial-month prorating
    pub prorated_monthly_entitlement: f64,
    pub summary: DeterminationSummary,
    pub professional: ProfessionalBreakdown,
    pub ancillary: AncillaryIncome,
    pub real_estate: RealEstateBreakdown,
    pub cessions: CessionBreakdown,
    pub movable_assets: MovableBreakdown,
    pub cohabitants: CohabitantBreakdown,
    pub explanations: Vec<String>,
}

impl ComputationResult {
    /// Whether the final amount was prorated for a partial month
    pub fn is_prorated(&self) -> bool {
        matches!(self.summary.days_counted, Some(d) if d > 0)
    }

    /// Annual resources other than professional income
    pub fn other_resources_annual(&self) -> f64 {
        self.ancillary.misc_annual
            + self.real_estate.annual
            + self.cessions.annual
            + self.movable_assets.annual
            + self.cohabitants.annual
    }
}
