//! City Simulator Core - Rust Engine
//!
//! Turn-based city daily-life simulator with deterministic execution.
//!
//! # Architecture
//!
//! - **core**: Time management (day clock)
//! - **models**: Domain types (Citizen, Population, City, events)
//! - **decisions**: Probability-driven rules (disasters, migration)
//! - **orchestrator**: The per-day simulation loop
//! - **finance**: Read-only city budget aggregation
//! - **rng**: Deterministic random number generation
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 (cents)
//! 2. All randomness is deterministic (seeded RNG)
//! 3. Citizen happiness is recomputed from scratch every day, never
//!    accumulated across days

// Module declarations
pub mod core;
pub mod decisions;
pub mod finance;
pub mod models;
pub mod orchestrator;
pub mod rng;

// Re-exports for convenience
pub use crate::core::time::DayClock;
pub use decisions::{Decision, DecisionError, DisasterDecision, LeaverDecision, NewcomerDecision};
pub use finance::CityBudget;
pub use models::{
    citizen::{Citizen, Property},
    city::{City, CityError},
    event::{Event, EventLog},
    happiness::HappinessTracker,
    population::Population,
};
pub use orchestrator::{DayResult, Orchestrator, OrchestratorConfig, SimulationError};
pub use rng::RngManager;
