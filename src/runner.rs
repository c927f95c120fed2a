//! Simulation runner for batch determinations
//!
//! Loads the rate tables once, then evaluates any number of profiles against them
//! without re-reading the CSV files.

use std::path::Path;

use log::info;
use rayon::prelude::*;

use crate::determination::{ComputationResult, DeterminationConfig, DeterminationEngine};
use crate::error::{LoadError, SimulationError};
use crate::profile::HouseholdProfile;
use crate::rates::RateTables;

/// Pre-loaded runner for single and batch determinations
///
/// # Example
/// ```ignore
/// let runner = SimulationRunner::from_csv()?;
/// let results = runner.run_batch(&profiles);
/// ```
#[derive(Debug, Clone)]
pub struct SimulationRunner {
    engine: DeterminationEngine,
}

impl SimulationRunner {
    /// Create runner with the built-in rate tables
    pub fn new() -> Self {
        Self::with_tables(RateTables::current())
    }

    /// Create runner by loading rate tables from CSV files
    pub fn from_csv() -> Result<Self, LoadError> {
        Ok(Self::with_tables(RateTables::from_csv()?))
    }

    /// Create runner from a specific rates directory
    pub fn from_csv_path(path: &Path) -> Result<Self, LoadError> {
        Ok(Self::with_tables(RateTables::from_csv_path(path)?))
    }

    /// Create runner with pre-built tables
    pub fn with_tables(tables: RateTables) -> Self {
        Self {
            engine: DeterminationEngine::new(tables, DeterminationConfig::default()),
        }
    }

    /// Replace the determination config, keeping the loaded tables
    pub fn with_config(self, config: DeterminationConfig) -> Self {
        let tables = self.engine.tables().clone();
        Self {
            engine: DeterminationEngine::new(tables, config),
        }
    }

    /// Determine a single profile
    pub fn run(&self, profile: &HouseholdProfile) -> Result<ComputationResult, SimulationError> {
        self.engine.determine(profile)
    }

    /// Determine many profiles in parallel, results in input order
    pub fn run_batch(
        &self,
        profiles: &[HouseholdProfile],
    ) -> Vec<Result<ComputationResult, SimulationError>> {
        info!("Running {} determinations", profiles.len());
        profiles.par_iter().map(|p| self.engine.determine(p)).collect()
    }

    pub fn tables(&self) -> &RateTables {
        self.engine.tables()
    }

    pub fn config(&self) -> &DeterminationConfig {
        self.engine.config()
    }
}

impl Default for SimulationRunner {
    fn default() -> Self {
        Self::new()
    }
}
