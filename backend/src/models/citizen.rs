//! Citizen model
//!
//! Represents a single inhabitant of the city. Each citizen has:
//! - A needs-state: water, electricity, housing, entertainment, garbage
//!   collection (booleans, set by the city's daily resource pass)
//! - A derived happiness score, recomputed from scratch every day
//! - Demand figures for water and electricity (data carried for reporting,
//!   not yet consumed by rationing)
//!
//! Happiness is never accumulated across days: `recompute_happiness` resets
//! it to zero before applying the need weights, so yesterday's score has no
//! influence on today's.

use serde::{Deserialize, Serialize};

use crate::rng::RngManager;

/// Happiness contribution of a met/unmet basic need (water, electricity, housing)
pub const BASIC_NEED_WEIGHT: i64 = 10;

/// Happiness contribution of a met/unmet comfort need (entertainment, garbage)
pub const COMFORT_NEED_WEIGHT: i64 = 5;

/// Per-day probability that a citizen falls sick during recomputation
pub const SICKNESS_CHANCE: f64 = 0.01;

/// Happiness penalty applied on the day a citizen falls sick
pub const SICKNESS_PENALTY: i64 = 15;

/// A piece of property owned by a citizen
///
/// Only read by the finance module (property holders are taxed and counted
/// as employed). Citizens start without one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Unique property identifier
    id: String,

    /// Assessed value (i64 cents)
    value: i64,
}

impl Property {
    /// Create a new property with the given assessed value in cents
    pub fn new(value: i64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            value,
        }
    }

    /// Get the property identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the assessed value (i64 cents)
    pub fn value(&self) -> i64 {
        self.value
    }
}

/// A single inhabitant of the city
///
/// # Lifecycle
///
/// Created with all needs unmet and zero happiness; mutated once per day by
/// the city's resource pass and once by its own happiness recomputation;
/// removed from the population only by the leaver rule.
///
/// # Example
/// ```
/// use city_simulator_core_rs::{Citizen, RngManager};
///
/// let mut rng = RngManager::new(42);
/// let citizen = Citizen::new(&mut rng);
///
/// assert_eq!(citizen.happiness(), 0);
/// assert!(!citizen.has_water());
/// assert!(!citizen.is_sick());
/// assert!(citizen.property().is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Citizen {
    /// Unique citizen identifier
    id: String,

    /// Derived happiness score (signed, unbounded)
    ///
    /// Fully recomputed each day from the needs-state; not carried forward.
    happiness: i64,

    /// Whether the citizen received water in the last resource pass
    has_water: bool,

    /// Whether the citizen received electricity in the last resource pass
    has_electricity: bool,

    /// Whether the citizen was assigned housing in the last resource pass
    has_home: bool,

    /// Whether the citizen's entertainment need is met
    is_entertained: bool,

    /// Whether the citizen's garbage was collected
    garbage_collected: bool,

    /// Whether the citizen has fallen sick (never clears once set)
    is_sick: bool,

    /// Daily water demand in [0, 100]
    water_demand: u8,

    /// Daily electricity demand in [0, 100]
    electricity_demand: u8,

    /// Owned property, if any (none by default)
    property: Option<Property>,
}

impl Citizen {
    /// Create a new citizen with all needs unmet and zero happiness
    ///
    /// Demand figures are sampled uniformly in [0, 100] from the injected
    /// random source.
    ///
    /// # Example
    /// ```
    /// use city_simulator_core_rs::{Citizen, RngManager};
    ///
    /// let mut rng = RngManager::new(7);
    /// let citizen = Citizen::new(&mut rng);
    /// assert!(citizen.water_demand() <= 100);
    /// assert!(citizen.electricity_demand() <= 100);
    /// ```
    pub fn new(rng: &mut RngManager) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            happiness: 0,
            has_water: false,
            has_electricity: false,
            has_home: false,
            is_entertained: false,
            garbage_collected: false,
            is_sick: false,
            water_demand: rng.range(0, 101) as u8,
            electricity_demand: rng.range(0, 101) as u8,
            property: None,
        }
    }

    /// Get the citizen identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the current happiness score
    pub fn happiness(&self) -> i64 {
        self.happiness
    }

    /// Whether the citizen received water in the last resource pass
    pub fn has_water(&self) -> bool {
        self.has_water
    }

    /// Whether the citizen received electricity in the last resource pass
    pub fn has_electricity(&self) -> bool {
        self.has_electricity
    }

    /// Whether the citizen was assigned housing in the last resource pass
    pub fn has_home(&self) -> bool {
        self.has_home
    }

    /// Whether the citizen's entertainment need is met
    pub fn is_entertained(&self) -> bool {
        self.is_entertained
    }

    /// Whether the citizen's garbage was collected
    pub fn garbage_collected(&self) -> bool {
        self.garbage_collected
    }

    /// Whether the citizen is sick
    pub fn is_sick(&self) -> bool {
        self.is_sick
    }

    /// Daily water demand in [0, 100]
    pub fn water_demand(&self) -> u8 {
        self.water_demand
    }

    /// Daily electricity demand in [0, 100]
    pub fn electricity_demand(&self) -> u8 {
        self.electricity_demand
    }

    /// Owned property, if any
    pub fn property(&self) -> Option<&Property> {
        self.property.as_ref()
    }

    /// Grant the citizen a property (replaces any existing one)
    pub fn grant_property(&mut self, property: Property) {
        self.property = Some(property);
    }

    /// Set whether the citizen receives water (called by the resource pass)
    pub fn set_water(&mut self, served: bool) {
        self.has_water = served;
    }

    /// Set whether the citizen receives electricity (called by the resource pass)
    pub fn set_electricity(&mut self, served: bool) {
        self.has_electricity = served;
    }

    /// Set whether the citizen is housed (called by the resource pass)
    pub fn set_home(&mut self, housed: bool) {
        self.has_home = housed;
    }

    /// Set whether the citizen's entertainment need is met
    pub fn set_entertained(&mut self, entertained: bool) {
        self.is_entertained = entertained;
    }

    /// Set whether the citizen's garbage was collected
    pub fn set_garbage_collected(&mut self, collected: bool) {
        self.garbage_collected = collected;
    }

    /// Recompute happiness from the current needs-state
    ///
    /// Resets happiness to 0, then applies fixed weights per need:
    ///
    /// | Need               | Met | Unmet |
    /// |--------------------|-----|-------|
    /// | water              | +10 | −10   |
    /// | electricity        | +10 | −10   |
    /// | housing            | +10 | −10   |
    /// | entertainment      | +5  | −5    |
    /// | garbage collection | +5  | −5    |
    ///
    /// Afterwards one uniform draw in [0, 1) decides sickness: below 0.01
    /// the citizen falls sick and loses 15 more. Sickness never clears, but
    /// its penalty applies only on the day the roll fires (the next
    /// recomputation starts from zero again).
    ///
    /// # Example
    /// ```
    /// use city_simulator_core_rs::{Citizen, RngManager};
    ///
    /// let mut rng = RngManager::new(42);
    /// let mut citizen = Citizen::new(&mut rng);
    /// citizen.set_water(true);
    /// citizen.set_electricity(true);
    /// citizen.set_home(true);
    ///
    /// citizen.recompute_happiness(&mut rng);
    /// // +10 +10 +10 −5 −5 = 20, unless the 1% sickness roll fired
    /// assert!(citizen.happiness() == 20 || citizen.happiness() == 5);
    /// ```
    pub fn recompute_happiness(&mut self, rng: &mut RngManager) {
        self.happiness = 0;

        self.happiness += Self::need_weight(self.has_water, BASIC_NEED_WEIGHT);
        self.happiness += Self::need_weight(self.has_electricity, BASIC_NEED_WEIGHT);
        self.happiness += Self::need_weight(self.has_home, BASIC_NEED_WEIGHT);
        self.happiness += Self::need_weight(self.is_entertained, COMFORT_NEED_WEIGHT);
        self.happiness += Self::need_weight(self.garbage_collected, COMFORT_NEED_WEIGHT);

        if rng.next_f64() < SICKNESS_CHANCE {
            self.is_sick = true;
            self.happiness -= SICKNESS_PENALTY;
        }
    }

    /// Adjust happiness directly (for instantaneous shocks)
    ///
    /// Used by the orchestrator to apply the disaster penalty after the
    /// daily pass. The shock is overwritten by the next day's
    /// recomputation.
    pub fn adjust_happiness(&mut self, delta: i64) {
        self.happiness += delta;
    }

    fn need_weight(met: bool, weight: i64) -> i64 {
        if met {
            weight
        } else {
            -weight
        }
    }
}
