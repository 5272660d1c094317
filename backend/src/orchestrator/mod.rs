//! Simulation orchestration
//!
//! The orchestrator owns the city, the day clock, the decision rules, and
//! the deterministic RNG, and runs the per-day simulation loop.

mod engine;

pub use engine::{DayResult, Orchestrator, OrchestratorConfig, SimulationError};
