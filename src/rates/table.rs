//! Date-versioned rate tables with approximate-match lookup

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::profile::Category;

/// One version of a table, in force from `effective_date` until the next entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTableEntry<V> {
    pub effective_date: NaiveDate,
    pub values: V,
}

/// Immutable table of dated entries, kept sorted by effective date
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable<V> {
    name: &'static str,
    entries: Vec<RateTableEntry<V>>,
}

impl<V> RateTable<V> {
    /// Build a table from entries in any order
    pub fn new(name: &'static str, mut entries: Vec<RateTableEntry<V>>) -> Self {
        entries.sort_by_key(|e| e.effective_date);
        Self { name, entries }
    }

    /// Table name used in error messages
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn entries(&self) -> &[RateTableEntry<V>] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry with the greatest effective date not after `date`
    ///
    /// Spreadsheet equivalent: approximate-match lookup on a sorted date column.
    pub fn resolve(&self, date: NaiveDate) -> Result<&RateTableEntry<V>, SimulationError> {
        let idx = self.entries.partition_point(|e| e.effective_date <= date);
        if idx == 0 {
            return Err(SimulationError::NoApplicableRate {
                table: self.name,
                date,
            });
        }
        Ok(&self.entries[idx - 1])
    }
}

/// One amount per household category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryAmounts {
    pub cat1: f64,
    pub cat2: f64,
    pub cat3: f64,
}

impl CategoryAmounts {
    pub const fn new(cat1: f64, cat2: f64, cat3: f64) -> Self {
        Self { cat1, cat2, cat3 }
    }

    pub fn for_category(&self, category: Category) -> f64 {
        match category {
            Category::One => self.cat1,
            Category::Two => self.cat2,
            Category::Three => self.cat3,
        }
    }
}

/// Socio-professional exemption rates in force at a date
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExemptionRates {
    /// General integration exemption (monthly)
    pub general_monthly: f64,
    /// Student exemption (monthly)
    pub student_monthly: f64,
    /// Labor-shortage occupation exemption (monthly)
    pub labor_shortage_monthly: f64,
    /// Artistic activity exemption (annual)
    pub artistic_annual: f64,
}
