//! City (settlement) model
//!
//! The city owns the infrastructure counters and the population, and runs
//! the per-day resource-distribution and happiness-update pass.
//!
//! # Rationing
//!
//! Resources are rationed strictly by stored index: citizen `i` receives
//! water iff `i < water_facilities × 20`, electricity iff
//! `i < electricity_facilities × 20`, housing iff `i < housing_units`.
//! Citizens placed earlier in the registry are always served first under
//! scarcity; there is no fairness rotation. The flags are reassigned from
//! the current day's capacity in both directions, so a citizen displaced
//! past capacity loses the resource.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::happiness::HappinessTracker;
use crate::models::population::Population;
use crate::rng::RngManager;

/// Citizens served per water facility per day
pub const CITIZENS_PER_WATER_FACILITY: usize = 20;

/// Citizens served per electricity facility per day
pub const CITIZENS_PER_ELECTRICITY_FACILITY: usize = 20;

/// Starting water facilities for a new city
pub const DEFAULT_WATER_FACILITIES: usize = 2;

/// Starting electricity facilities for a new city
pub const DEFAULT_ELECTRICITY_FACILITIES: usize = 2;

/// Starting housing units for a new city
pub const DEFAULT_HOUSING_UNITS: usize = 30;

/// Errors that can occur during city operations
#[derive(Debug, Error, PartialEq)]
pub enum CityError {
    #[error("invalid argument: delta must be non-negative, got {delta}")]
    InvalidArgument { delta: i64 },
}

/// The single modeled settlement: infrastructure plus population
///
/// Facility and housing counters only grow, and only through the dedicated
/// mutators, which reject negative deltas.
///
/// # Example
/// ```
/// use city_simulator_core_rs::{Citizen, City, Population, RngManager};
///
/// let mut rng = RngManager::new(42);
/// let mut population = Population::new();
/// for _ in 0..10 {
///     population.add(Citizen::new(&mut rng));
/// }
///
/// let mut city = City::new(population);
/// assert_eq!(city.water_facilities(), 2);
/// assert_eq!(city.housing_units(), 30);
///
/// city.on_advance_day(&mut rng);
/// // 10 citizens, capacity 40/40/30: everyone served
/// assert!(city.population().citizens().iter().all(|c| c.has_water()));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    /// Number of water facilities (each serves 20 citizens per day)
    water_facilities: usize,

    /// Number of electricity facilities (each serves 20 citizens per day)
    electricity_facilities: usize,

    /// Number of housing units (each houses one citizen)
    housing_units: usize,

    /// The citizen registry owned by this city
    population: Population,

    /// Mean-happiness aggregator bound to this city's population
    happiness_tracker: HappinessTracker,
}

impl City {
    /// Create a city with the default starting infrastructure
    /// (2 water facilities, 2 electricity facilities, 30 housing units)
    pub fn new(population: Population) -> Self {
        Self::with_infrastructure(
            population,
            DEFAULT_WATER_FACILITIES,
            DEFAULT_ELECTRICITY_FACILITIES,
            DEFAULT_HOUSING_UNITS,
        )
    }

    /// Create a city with explicit starting infrastructure
    pub fn with_infrastructure(
        population: Population,
        water_facilities: usize,
        electricity_facilities: usize,
        housing_units: usize,
    ) -> Self {
        let happiness_tracker = HappinessTracker::new(&population);
        Self {
            water_facilities,
            electricity_facilities,
            housing_units,
            population,
            happiness_tracker,
        }
    }

    /// Run the daily resource pass and happiness update
    ///
    /// 1. Compute water and electricity capacity from the facility counts.
    /// 2. Serve citizens strictly by stored index up to each capacity.
    /// 3. Recompute every citizen's happiness from its resulting needs-state.
    /// 4. Refresh the happiness tracker against the (possibly resized)
    ///    population.
    pub fn on_advance_day(&mut self, rng: &mut RngManager) {
        let water_capacity = self.water_facilities * CITIZENS_PER_WATER_FACILITY;
        let electricity_capacity =
            self.electricity_facilities * CITIZENS_PER_ELECTRICITY_FACILITY;
        let housing_capacity = self.housing_units;

        for (i, citizen) in self.population.citizens_mut().iter_mut().enumerate() {
            citizen.set_water(i < water_capacity);
            citizen.set_electricity(i < electricity_capacity);
            citizen.set_home(i < housing_capacity);
        }

        for citizen in self.population.citizens_mut() {
            citizen.recompute_happiness(rng);
        }

        self.happiness_tracker.update(&self.population);
    }

    /// Add water facilities
    ///
    /// # Errors
    /// Returns `CityError::InvalidArgument` for a negative delta, leaving
    /// state unchanged.
    ///
    /// # Example
    /// ```
    /// use city_simulator_core_rs::{City, Population};
    ///
    /// let mut city = City::new(Population::new());
    /// city.add_water_facilities(3).unwrap();
    /// assert_eq!(city.water_facilities(), 5);
    ///
    /// assert!(city.add_water_facilities(-1).is_err());
    /// assert_eq!(city.water_facilities(), 5);
    /// ```
    pub fn add_water_facilities(&mut self, delta: i64) -> Result<(), CityError> {
        self.water_facilities += Self::validated_delta(delta)?;
        Ok(())
    }

    /// Add electricity facilities
    ///
    /// # Errors
    /// Returns `CityError::InvalidArgument` for a negative delta, leaving
    /// state unchanged.
    pub fn add_electricity_facilities(&mut self, delta: i64) -> Result<(), CityError> {
        self.electricity_facilities += Self::validated_delta(delta)?;
        Ok(())
    }

    /// Add housing units
    ///
    /// # Errors
    /// Returns `CityError::InvalidArgument` for a negative delta, leaving
    /// state unchanged.
    pub fn add_housing_units(&mut self, delta: i64) -> Result<(), CityError> {
        self.housing_units += Self::validated_delta(delta)?;
        Ok(())
    }

    fn validated_delta(delta: i64) -> Result<usize, CityError> {
        if delta < 0 {
            return Err(CityError::InvalidArgument { delta });
        }
        Ok(delta as usize)
    }

    /// Number of water facilities
    pub fn water_facilities(&self) -> usize {
        self.water_facilities
    }

    /// Number of electricity facilities
    pub fn electricity_facilities(&self) -> usize {
        self.electricity_facilities
    }

    /// Number of housing units
    pub fn housing_units(&self) -> usize {
        self.housing_units
    }

    /// Read-only ordered view of the population
    ///
    /// Consumed by the finance module to sum taxable citizens and by
    /// reporting to count sick/unserved citizens.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Mutable access to the population (newcomer intake, leaver attrition)
    pub fn population_mut(&mut self) -> &mut Population {
        &mut self.population
    }

    /// Last computed average happiness
    ///
    /// Stale until the next daily pass refreshes the tracker.
    pub fn average_happiness(&self) -> f64 {
        self.happiness_tracker.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::citizen::Citizen;

    fn city_with_citizens(count: usize) -> (City, RngManager) {
        let mut rng = RngManager::new(42);
        let mut population = Population::new();
        for _ in 0..count {
            population.add(Citizen::new(&mut rng));
        }
        (City::new(population), rng)
    }

    #[test]
    fn test_default_infrastructure() {
        let (city, _) = city_with_citizens(0);
        assert_eq!(city.water_facilities(), 2);
        assert_eq!(city.electricity_facilities(), 2);
        assert_eq!(city.housing_units(), 30);
    }

    #[test]
    fn test_add_facilities_accumulates() {
        let (mut city, _) = city_with_citizens(0);

        city.add_water_facilities(0).unwrap();
        city.add_water_facilities(4).unwrap();
        city.add_electricity_facilities(1).unwrap();
        city.add_housing_units(10).unwrap();

        assert_eq!(city.water_facilities(), 6);
        assert_eq!(city.electricity_facilities(), 3);
        assert_eq!(city.housing_units(), 40);
    }

    #[test]
    fn test_negative_delta_rejected_without_mutation() {
        let (mut city, _) = city_with_citizens(0);

        assert_eq!(
            city.add_water_facilities(-1),
            Err(CityError::InvalidArgument { delta: -1 })
        );
        assert_eq!(
            city.add_electricity_facilities(-5),
            Err(CityError::InvalidArgument { delta: -5 })
        );
        assert_eq!(
            city.add_housing_units(-100),
            Err(CityError::InvalidArgument { delta: -100 })
        );

        assert_eq!(city.water_facilities(), 2);
        assert_eq!(city.electricity_facilities(), 2);
        assert_eq!(city.housing_units(), 30);
    }

    #[test]
    fn test_rationing_serves_first_indices() {
        let mut rng = RngManager::new(42);
        let mut population = Population::new();
        for _ in 0..25 {
            population.add(Citizen::new(&mut rng));
        }
        // One water facility: capacity 20 for 25 citizens
        let mut city = City::with_infrastructure(population, 1, 2, 30);

        city.on_advance_day(&mut rng);

        let citizens = city.population().citizens();
        assert!(citizens[..20].iter().all(|c| c.has_water()));
        assert!(citizens[20..].iter().all(|c| !c.has_water()));
    }

    #[test]
    fn test_rationing_reassigns_on_capacity_loss() {
        let mut rng = RngManager::new(42);
        let mut population = Population::new();
        for _ in 0..25 {
            population.add(Citizen::new(&mut rng));
        }
        let mut city = City::with_infrastructure(population, 2, 2, 30);

        city.on_advance_day(&mut rng);
        assert!(city.population().citizens().iter().all(|c| c.has_water()));

        // Newcomers push the tail past capacity next day
        for _ in 0..20 {
            let citizen = Citizen::new(&mut rng);
            city.population_mut().add(citizen);
        }
        city.on_advance_day(&mut rng);

        let citizens = city.population().citizens();
        assert!(citizens[..40].iter().all(|c| c.has_water()));
        assert!(citizens[40..].iter().all(|c| !c.has_water()));
    }

    #[test]
    fn test_daily_pass_refreshes_tracker() {
        let (mut city, mut rng) = city_with_citizens(10);
        assert_eq!(city.average_happiness(), 0.0);

        city.on_advance_day(&mut rng);

        // 10 citizens, everyone served water/electricity/housing but not
        // entertained or garbage-collected: 10 + 10 + 10 − 5 − 5 = 20 each,
        // barring 1% sickness rolls for this seed
        assert_eq!(city.average_happiness(), 20.0);
    }
}
