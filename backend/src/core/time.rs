//! Time management for the simulation
//!
//! The simulation operates in discrete days. One day is fully processed
//! before the next begins; nothing suspends or yields mid-day.

use serde::{Deserialize, Serialize};

/// Tracks the number of completed simulation days
///
/// # Example
/// ```
/// use city_simulator_core_rs::DayClock;
///
/// let mut clock = DayClock::new();
/// assert_eq!(clock.current_day(), 0);
///
/// clock.advance_day();
/// assert_eq!(clock.current_day(), 1);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayClock {
    /// Days elapsed since simulation start
    current_day: usize,
}

impl DayClock {
    /// Create a new clock at day zero
    pub fn new() -> Self {
        Self { current_day: 0 }
    }

    /// Advance time by one day
    pub fn advance_day(&mut self) {
        self.current_day += 1;
    }

    /// Get the current day (0-indexed; the number of completed days)
    pub fn current_day(&self) -> usize {
        self.current_day
    }
}
