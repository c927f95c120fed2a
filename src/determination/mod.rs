//! Determination engine: resources against the category threshold

mod config;
mod engine;
mod result;

pub use config::{CategoryMapping, DeterminationConfig};
pub use engine::{prorate, DeterminationEngine};
pub use result::{ComputationResult, DeterminationSummary, ProfessionalBreakdown};
