//! RI Simulator - Eligibility and amount engine for the integration income benefit
//!
//! This library provides:
//! - Date-versioned rate tables (thresholds, exemptions) with CSV loading
//! - Household profiles with permissive JSON input
//! - Resource calculators (income, real estate, cessions, movable capital, cohabitants)
//! - Eligibility determination with partial-month prorating
//! - Batch simulation and plain-text statements

pub mod error;
pub mod numeric;
pub mod rates;
pub mod profile;
pub mod resources;
pub mod determination;
pub mod runner;
pub mod statement;

// Re-export commonly used types
pub use error::{LoadError, SimulationError};
pub use rates::RateTables;
pub use profile::{HouseholdProfile, HouseholdSituation, Category};
pub use determination::{
    CategoryMapping, ComputationResult, DeterminationConfig, DeterminationEngine,
};
pub use runner::SimulationRunner;
pub use statement::{format_currency, render_statement};
