//! Determination configuration

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::profile::{Category, HouseholdSituation};

/// Which category a household situation falls in
///
/// Two revisions of the reference workbook disagree on the first two categories, so
/// the mapping is chosen explicitly rather than assumed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CategoryMapping {
    /// cohabitant → 1, isolé → 2, famille → 3
    #[default]
    Current,
    /// isolé → 1, cohabitant → 2, famille → 3
    Legacy,
}

impl CategoryMapping {
    pub fn category_for(&self, situation: HouseholdSituation) -> Category {
        match (self, situation) {
            (_, HouseholdSituation::Famille) => Category::Three,
            (CategoryMapping::Current, HouseholdSituation::Cohabitant) => Category::One,
            (CategoryMapping::Current, HouseholdSituation::Isole) => Category::Two,
            (CategoryMapping::Legacy, HouseholdSituation::Isole) => Category::One,
            (CategoryMapping::Legacy, HouseholdSituation::Cohabitant) => Category::Two,
        }
    }
}

impl FromStr for CategoryMapping {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "current" => Ok(CategoryMapping::Current),
            "legacy" => Ok(CategoryMapping::Legacy),
            other => Err(format!("Unknown category mapping: {} (expected current or legacy)", other)),
        }
    }
}

impl fmt::Display for CategoryMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryMapping::Current => write!(f, "current"),
            CategoryMapping::Legacy => write!(f, "legacy"),
        }
    }
}

/// Configuration for a determination run
#[derive(Debug, Clone, Default)]
pub struct DeterminationConfig {
    pub category_mapping: CategoryMapping,
}
