//! Resource calculators feeding the determination
//!
//! Each calculator is a pure function of the profile and the rate tables. They do not
//! depend on one another and can be evaluated in any order.

mod tiers;
mod income;
mod exemption;
mod real_estate;
mod cession;
mod movable;
mod cohabitant;

pub use tiers::{apply_tiers, TierBreakdown};
pub use income::{
    net_income, person_income, daily_benefit_monthly, replacement_income, ancillary_income,
    PersonIncome, ReplacementIncome, AncillaryIncome, PAID_DAYS_PER_MONTH,
};
pub use exemption::{person_exemptions, exemptions_from_rates, PersonExemptions};
pub use real_estate::{real_estate_income, domestic_asset_line, RealEstateLine, RealEstateBreakdown};
pub use cession::{
    cession_income, cession_line, whole_months_between, abatement_months,
    CessionLine, CessionBreakdown,
};
pub use movable::{movable_income, MovableBreakdown};
pub use cohabitant::{cohabitant_resources, cohabitant_line, CohabitantLine, CohabitantBreakdown};
