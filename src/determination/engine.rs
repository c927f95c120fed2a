//! Eligibility and benefit determination
//!
//! Runs every resource calculator on the profile, adds the annual figures, applies
//! the supplemental exemption and compares against the category threshold.

use log::{debug, info, warn};

use super::config::DeterminationConfig;
use super::result::{ComputationResult, DeterminationSummary, ProfessionalBreakdown};
use crate::error::SimulationError;
use crate::numeric::round_currency;
use crate::profile::{HouseholdProfile, Person};
use crate::rates::calendar::days_in_month;
use crate::rates::RateTables;
use crate::resources::{
    ancillary_income, cession_income, cohabitant_resources, movable_income, person_exemptions,
    person_income, real_estate_income, replacement_income, PersonIncome,
};

/// Scale a full-month amount to `days` out of `days_in_month`
pub fn prorate(monthly: f64, days: Option<u32>, days_in_month: u32) -> f64 {
    match days {
        Some(d) if d > 0 && days_in_month > 0 => {
            round_currency(monthly * d as f64 / days_in_month as f64)
        }
        _ => monthly,
    }
}

/// Main determination engine
#[derive(Debug, Clone)]
pub struct DeterminationEngine {
    tables: RateTables,
    config: DeterminationConfig,
}

impl DeterminationEngine {
    /// Create a new engine with given rate tables and config
    pub fn new(tables: RateTables, config: DeterminationConfig) -> Self {
        Self { tables, config }
    }

    pub fn tables(&self) -> &RateTables {
        &self.tables
    }

    pub fn config(&self) -> &DeterminationConfig {
        &self.config
    }

    fn person(
        &self,
        person: &Person,
        profile: &HouseholdProfile,
        days_in_month: u32,
    ) -> Result<PersonIncome, SimulationError> {
        let exemptions = person_exemptions(
            &person.exemptions,
            &self.tables.exemptions,
            profile.reference_date,
            days_in_month,
        )?;
        Ok(person_income(&person.income_lines, exemptions))
    }

    /// Determine eligibility and entitlement for one profile
    pub fn determine(&self, profile: &HouseholdProfile) -> Result<ComputationResult, SimulationError> {
        let date = profile.reference_date;
        let category = self.config.category_mapping.category_for(profile.situation);

        let threshold = self.tables.thresholds.resolve(date)?.values.for_category(category);
        let supplemental = self
            .tables
            .supplemental_exemption
            .resolve(date)?
            .values
            .for_category(category);
        let dim = days_in_month(date);
        let days_counted = profile.days_counted_in_period;

        debug!(
            "Determination at {} for {} (category {}): threshold={} supplemental={} days_in_month={}",
            date, profile.situation.as_str(), category.number(), threshold, supplemental, dim
        );
        if let Some(days) = days_counted {
            if days > dim {
                warn!("{} days counted exceeds the {} days of the reference month", days, dim);
            }
        }

        // Professional and assimilated resources
        let applicant = self.person(&profile.applicant, profile, dim)?;
        let partner = match &profile.partner {
            Some(p) => Some(self.person(p, profile, dim)?),
            None => None,
        };
        let replacement = replacement_income(&profile.replacement_income, date);
        let ancillary = ancillary_income(&profile.in_kind_advantages, &profile.miscellaneous);

        let professional_monthly = round_currency(
            applicant.net_after_exemption_monthly
                + partner.map_or(0.0, |p| p.net_after_exemption_monthly)
                + replacement.total_monthly
                + ancillary.in_kind_monthly,
        );
        let professional_prorated = prorate(professional_monthly, days_counted, dim);
        let professional = ProfessionalBreakdown {
            applicant,
            partner,
            replacement,
            in_kind_monthly: ancillary.in_kind_monthly,
            monthly: professional_monthly,
            prorated_monthly: professional_prorated,
            annual: round_currency(professional_prorated * 12.0),
        };

        // Other resources
        let real_estate = real_estate_income(&profile.real_estate, &self.tables.real_estate);
        let cessions = cession_income(
            &profile.cessions,
            category,
            &self.tables.cession,
            &self.tables.tiers,
        );
        let movable_assets = movable_income(&profile.movable_assets, &self.tables.tiers);
        let cohabitants = cohabitant_resources(&profile.cohabitants, &self.tables.thresholds, date)?;

        let total_annual_resources = round_currency(
            professional.annual
                + real_estate.annual
                + cessions.annual
                + movable_assets.annual
                + cohabitants.annual
                + ancillary.misc_annual,
        );

        let supplemental_exemption = -supplemental;
        let retained_resources = round_currency(total_annual_resources + supplemental_exemption).max(0.0);

        let eligible = total_annual_resources < threshold;
        let annual_entitlement = if eligible {
            round_currency(threshold - retained_resources).max(0.0)
        } else {
            0.0
        };
        let monthly_entitlement = round_currency(annual_entitlement / 12.0);
        let prorated_monthly_entitlement = prorate(monthly_entitlement, days_counted, dim);

        let summary = DeterminationSummary {
            threshold,
            total_annual_resources,
            supplemental_exemption,
            retained_resources,
            days_in_month: dim,
            days_counted,
        };

        let mut explanations = Vec::new();
        if eligible {
            explanations.push(format!("Base annuelle RI (A) = {}€", threshold));
            explanations.push(format!("Ressources annuelles (B) = {}€", total_annual_resources));
            explanations.push(format!("Exonération annuelle (C) = {}€", supplemental_exemption));
            explanations.push(format!("Ressources retenues (D=max(0,B+C)) = {}€", retained_resources));
        } else {
            explanations.push(format!(
                "Ressources annuelles ({}€) ≥ base annuelle RI ({}€).",
                total_annual_resources, threshold
            ));
        }
        for (i, line) in cohabitants.lines.iter().enumerate() {
            if line.possibly_independently_entitled {
                explanations.push(format!(
                    "Cohabitant {} : ressources non prises en compte, droit propre possible.",
                    i + 1
                ));
            }
        }

        info!(
            "Determination {}: resources={} threshold={} eligible={} monthly={} prorated={}",
            date, total_annual_resources, threshold, eligible, monthly_entitlement,
            prorated_monthly_entitlement
        );

        Ok(ComputationResult {
            reference_date: date,
            situation: profile.situation,
            category,
            eligible,
            annual_entitlement,
            monthly_entitlement,
            prorated_monthly_entitlement,
            summary,
            professional,
            ancillary,
            real_estate,
            cessions,
            movable_assets,
            cohabitants,
            explanations,
        })
    }
}

impl Default for DeterminationEngine {
    fn default() -> Self {
        Self::new(RateTables::current(), DeterminationConfig::default())
    }
}
