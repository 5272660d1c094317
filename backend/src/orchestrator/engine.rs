//! Orchestrator Engine
//!
//! Main simulation loop integrating all components:
//! - Newcomer intake (stochastic migration in)
//! - Leaver attrition (stochastic migration out)
//! - City daily pass (resource rationing + happiness recomputation)
//! - Disaster roll and effect application
//! - Event logging (complete simulation history)
//!
//! # Architecture
//!
//! One call to `advance_day` processes one full day, in strict order:
//!
//! ```text
//! For each day d:
//! 1. Newcomer intake (reads the previous day's average happiness)
//! 2. Leaver attrition (only while the average is negative)
//! 3. City daily pass (rationing, per-citizen happiness, tracker refresh)
//! 4. Disaster roll; on success −50 happiness to every citizen
//! 5. Advance the day clock, log events
//! ```
//!
//! The ordering matters: newcomers and leavers change population membership
//! BEFORE rationing runs, so a same-day newcomer may or may not be served
//! depending on its index position; the disaster strikes AFTER the daily
//! pass, so its penalty is the day's last mutation and survives until the
//! next day's recomputation overwrites it.
//!
//! # Determinism
//!
//! All randomness is via one `RngManager` with seeded xorshift64*.
//! Same seed + same config = identical results.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::time::DayClock;
use crate::decisions::{
    Decision, DecisionError, DisasterDecision, LeaverDecision, NewcomerDecision,
    DISASTER_HAPPINESS_PENALTY,
};
use crate::models::citizen::Citizen;
use crate::models::city::{City, CityError};
use crate::models::event::{Event, EventLog, InfrastructureKind};
use crate::models::population::Population;
use crate::rng::RngManager;

// ============================================================================
// Configuration Types
// ============================================================================

/// Complete orchestrator configuration
///
/// # Example
///
/// ```rust
/// use city_simulator_core_rs::{Orchestrator, OrchestratorConfig};
///
/// let config = OrchestratorConfig {
///     rng_seed: 12345,
///     initial_population: 50,
///     ..OrchestratorConfig::default()
/// };
///
/// let mut orchestrator = Orchestrator::new(config).unwrap();
/// let result = orchestrator.advance_day();
/// assert_eq!(result.day, 0);
/// assert_eq!(result.population, 50);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrchestratorConfig {
    /// RNG seed for deterministic simulation
    pub rng_seed: u64,

    /// Citizens present when the simulation starts
    pub initial_population: usize,

    /// Starting water facilities
    pub water_facilities: usize,

    /// Starting electricity facilities
    pub electricity_facilities: usize,

    /// Starting housing units
    pub housing_units: usize,

    /// Per-day disaster probability (must lie in [0, 1])
    pub disaster_chance: f64,

    /// Per-missing-utility leave probability (must lie in [0, 1])
    pub leave_chance: f64,

    /// Optional uniform override for the newcomer tier probabilities
    /// (must lie in [0, 1]); None keeps the standard tiers
    pub newcomer_chance: Option<f64>,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            rng_seed: 0,
            initial_population: 1,
            water_facilities: crate::models::city::DEFAULT_WATER_FACILITIES,
            electricity_facilities: crate::models::city::DEFAULT_ELECTRICITY_FACILITIES,
            housing_units: crate::models::city::DEFAULT_HOUSING_UNITS,
            disaster_chance: crate::decisions::DISASTER_CHANCE,
            leave_chance: crate::decisions::LEAVE_CHANCE_PER_UNMET_NEED,
            newcomer_chance: None,
        }
    }
}

/// Simulation error types
#[derive(Debug, Error, PartialEq)]
pub enum SimulationError {
    /// Configuration validation error
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] DecisionError),
}

/// Result of a single simulated day
#[derive(Debug, Clone, PartialEq)]
pub struct DayResult {
    /// Day number that was processed (0-indexed)
    pub day: usize,

    /// Newcomers who moved in this day
    pub newcomers: usize,

    /// Citizens who left this day
    pub leavers: usize,

    /// Whether a disaster struck this day
    pub disaster_struck: bool,

    /// Population at end of day
    pub population: usize,

    /// Average happiness after the daily pass
    pub average_happiness: f64,
}

// ============================================================================
// Orchestrator
// ============================================================================

/// Main orchestrator managing simulation state and the day loop
///
/// Owns the city, the day clock, the decision rules, the RNG, and the event
/// log. The surrounding CLI calls `advance_day` once per user command and
/// reads the population snapshot and the average for display.
#[derive(Debug)]
pub struct Orchestrator {
    /// The simulated city (infrastructure + population + tracker)
    city: City,

    /// Day counter
    clock: DayClock,

    /// Deterministic RNG, threaded into every stochastic rule
    rng: RngManager,

    /// Disaster rule
    disaster_rule: DisasterDecision,

    /// Newcomer rule
    newcomer_rule: NewcomerDecision,

    /// Leaver rule
    leaver_rule: LeaverDecision,

    /// Event log (all simulation events)
    event_log: EventLog,
}

impl Orchestrator {
    /// Create a new orchestrator from configuration
    ///
    /// Initializes the city with the configured infrastructure and spawns
    /// the initial citizens from the seeded RNG.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::InvalidConfig` when a configured
    /// probability lies outside [0, 1].
    pub fn new(config: OrchestratorConfig) -> Result<Self, SimulationError> {
        let disaster_rule = DisasterDecision::with_chance(config.disaster_chance)?;
        let leaver_rule = LeaverDecision::with_chance(config.leave_chance)?;
        let newcomer_rule = match config.newcomer_chance {
            Some(chance) => NewcomerDecision::with_uniform_chance(chance)?,
            None => NewcomerDecision::new(),
        };

        let mut rng = RngManager::new(config.rng_seed);

        let mut population = Population::new();
        for _ in 0..config.initial_population {
            population.add(Citizen::new(&mut rng));
        }

        let city = City::with_infrastructure(
            population,
            config.water_facilities,
            config.electricity_facilities,
            config.housing_units,
        );

        Ok(Self {
            city,
            clock: DayClock::new(),
            rng,
            disaster_rule,
            newcomer_rule,
            leaver_rule,
            event_log: EventLog::new(),
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the current day number (days completed so far)
    pub fn current_day(&self) -> usize {
        self.clock.current_day()
    }

    /// Get a reference to the city
    pub fn city(&self) -> &City {
        &self.city
    }

    /// Get a mutable reference to the city
    ///
    /// Primarily for testing. Direct mutation bypasses event logging; use
    /// the orchestrator's own mutators where one exists.
    pub fn city_mut(&mut self) -> &mut City {
        &mut self.city
    }

    /// Get a reference to the event log
    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    // ========================================================================
    // Infrastructure mutators (delegate to the city, log the growth)
    // ========================================================================

    /// Add water facilities; negative deltas are rejected
    pub fn add_water_facilities(&mut self, delta: i64) -> Result<(), CityError> {
        self.city.add_water_facilities(delta)?;
        self.log_infrastructure(InfrastructureKind::Water, delta);
        Ok(())
    }

    /// Add electricity facilities; negative deltas are rejected
    pub fn add_electricity_facilities(&mut self, delta: i64) -> Result<(), CityError> {
        self.city.add_electricity_facilities(delta)?;
        self.log_infrastructure(InfrastructureKind::Electricity, delta);
        Ok(())
    }

    /// Add housing units; negative deltas are rejected
    pub fn add_housing_units(&mut self, delta: i64) -> Result<(), CityError> {
        self.city.add_housing_units(delta)?;
        self.log_infrastructure(InfrastructureKind::Housing, delta);
        Ok(())
    }

    fn log_infrastructure(&mut self, kind: InfrastructureKind, delta: i64) {
        self.event_log.log(Event::InfrastructureAdded {
            day: self.clock.current_day(),
            kind,
            count: delta as usize,
        });
    }

    // ========================================================================
    // Day Loop Implementation
    // ========================================================================

    /// Execute one full simulated day
    ///
    /// Strict order: newcomer intake → leaver attrition → city daily pass →
    /// disaster roll and effect → clock advance. See the module docs for why
    /// the order matters.
    pub fn advance_day(&mut self) -> DayResult {
        let day = self.clock.current_day();

        // The migration rules read the average computed at the end of the
        // previous day; the tracker is refreshed only by the daily pass.
        let average_before = self.city.average_happiness();

        // STEP 1: NEWCOMER INTAKE
        let newcomers = self.newcomer_rule.evaluate(average_before, &mut self.rng);
        for _ in 0..newcomers {
            let citizen = Citizen::new(&mut self.rng);
            self.city.population_mut().add(citizen);
        }
        if newcomers > 0 {
            self.event_log.log(Event::NewcomersArrived {
                day,
                count: newcomers,
            });
        }

        // STEP 2: LEAVER ATTRITION
        let leaver_ids = self.collect_leavers(average_before);
        for citizen_id in &leaver_ids {
            self.city.population_mut().remove(citizen_id);
            self.event_log.log(Event::CitizenLeft {
                day,
                citizen_id: citizen_id.clone(),
            });
        }

        // STEP 3: CITY DAILY PASS
        let sick_before = self.sick_ids();
        self.city.on_advance_day(&mut self.rng);
        for citizen_id in self.sick_ids().difference(&sick_before) {
            self.event_log.log(Event::CitizenFellSick {
                day,
                citizen_id: citizen_id.clone(),
            });
        }

        // STEP 4: DISASTER ROLL + EFFECT
        // Rolled after the pass so the penalty is the day's last mutation;
        // it disappears with the next day's recomputation.
        let disaster_struck = self.disaster_rule.roll(&mut self.rng);
        if disaster_struck {
            for citizen in self.city.population_mut().citizens_mut() {
                citizen.adjust_happiness(-DISASTER_HAPPINESS_PENALTY);
            }
            self.event_log.log(Event::Disaster {
                day,
                happiness_penalty: DISASTER_HAPPINESS_PENALTY,
            });
        }

        // STEP 5: ADVANCE TIME
        self.clock.advance_day();

        let result = DayResult {
            day,
            newcomers,
            leavers: leaver_ids.len(),
            disaster_struck,
            population: self.city.population().len(),
            average_happiness: self.city.average_happiness(),
        };
        self.event_log.log(Event::DayAdvanced {
            day,
            population: result.population,
            average_happiness: result.average_happiness,
        });

        result
    }

    /// Roll the leaver rule for every citizen, in stored order
    ///
    /// Returns the IDs of the citizens who decided to leave. Empty when the
    /// average happiness is not negative.
    fn collect_leavers(&mut self, average_happiness: f64) -> Vec<String> {
        if !self.leaver_rule.applies(average_happiness) {
            return Vec::new();
        }

        let mut leaving = Vec::new();
        for citizen in self.city.population().citizens() {
            if self.leaver_rule.wants_to_leave(citizen, &mut self.rng) {
                leaving.push(citizen.id().to_string());
            }
        }
        leaving
    }

    fn sick_ids(&self) -> HashSet<String> {
        self.city
            .population()
            .citizens()
            .iter()
            .filter(|c| c.is_sick())
            .map(|c| c.id().to_string())
            .collect()
    }
}
