//! Population happiness aggregation
//!
//! Maintains the mean happiness of a population. The value is recomputed
//! only on an explicit `update` call and is stale in between; callers that
//! change citizen happiness must update the tracker before reading it.

use serde::{Deserialize, Serialize};

use crate::models::population::Population;

/// Tracks the average happiness of a population snapshot
///
/// # Example
/// ```
/// use city_simulator_core_rs::{HappinessTracker, Population};
///
/// let tracker = HappinessTracker::new(&Population::new());
/// // Empty population is defined as zero, not a division fault
/// assert_eq!(tracker.get(), 0.0);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HappinessTracker {
    /// Last computed mean happiness
    average_happiness: f64,
}

impl HappinessTracker {
    /// Create a tracker initialized against the given population
    pub fn new(population: &Population) -> Self {
        let mut tracker = Self {
            average_happiness: 0.0,
        };
        tracker.update(population);
        tracker
    }

    /// Recompute the mean from the population's current citizen happiness
    ///
    /// Defined as `0.0` for an empty population (explicit guard).
    pub fn update(&mut self, population: &Population) {
        if population.is_empty() {
            self.average_happiness = 0.0;
            return;
        }

        let total: i64 = population.citizens().iter().map(|c| c.happiness()).sum();
        self.average_happiness = total as f64 / population.len() as f64;
    }

    /// Get the last computed average; does not recompute
    pub fn get(&self) -> f64 {
        self.average_happiness
    }
}
