//! Event logging for simulation replay and reporting.
//!
//! This module defines the Event enum which captures all significant state
//! changes during simulation. Events enable:
//! - Reporting (the CLI prints the day's notices from the log)
//! - Debugging (understand what happened and when)
//! - Analysis (count migrations, disasters, sickness over a run)
//!
//! # Event Types
//!
//! Events are categorized by simulation phase:
//! - **Migration**: newcomers arriving, citizens leaving
//! - **Daily pass**: day advanced with the resulting population and average
//! - **Shocks**: disasters, citizens falling sick
//! - **Infrastructure**: facilities or housing added

/// Kind of infrastructure a growth event refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfrastructureKind {
    Water,
    Electricity,
    Housing,
}

/// Simulation event capturing a state change.
///
/// All events include a day number for temporal ordering. Events are logged
/// in the order they occur within a day.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Newcomers moved into the city
    NewcomersArrived { day: usize, count: usize },

    /// A dissatisfied citizen left the city
    CitizenLeft { day: usize, citizen_id: String },

    /// A disaster struck, penalizing every citizen's happiness
    Disaster { day: usize, happiness_penalty: i64 },

    /// A citizen fell sick during the daily pass
    CitizenFellSick { day: usize, citizen_id: String },

    /// Infrastructure was added
    InfrastructureAdded {
        day: usize,
        kind: InfrastructureKind,
        count: usize,
    },

    /// A full day was processed
    DayAdvanced {
        day: usize,
        population: usize,
        average_happiness: f64,
    },
}

impl Event {
    /// Get the day this event occurred
    pub fn day(&self) -> usize {
        match self {
            Event::NewcomersArrived { day, .. } => *day,
            Event::CitizenLeft { day, .. } => *day,
            Event::Disaster { day, .. } => *day,
            Event::CitizenFellSick { day, .. } => *day,
            Event::InfrastructureAdded { day, .. } => *day,
            Event::DayAdvanced { day, .. } => *day,
        }
    }

    /// Get a short description of the event type
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::NewcomersArrived { .. } => "NewcomersArrived",
            Event::CitizenLeft { .. } => "CitizenLeft",
            Event::Disaster { .. } => "Disaster",
            Event::CitizenFellSick { .. } => "CitizenFellSick",
            Event::InfrastructureAdded { .. } => "InfrastructureAdded",
            Event::DayAdvanced { .. } => "DayAdvanced",
        }
    }

    /// Get citizen ID if the event relates to a specific citizen
    pub fn citizen_id(&self) -> Option<&str> {
        match self {
            Event::CitizenLeft { citizen_id, .. } => Some(citizen_id),
            Event::CitizenFellSick { citizen_id, .. } => Some(citizen_id),
            _ => None,
        }
    }
}

/// Event log for storing and querying simulation events.
///
/// This is a simple wrapper around Vec<Event> with convenience methods.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Create a new empty event log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Add an event to the log
    pub fn log(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Get the number of events logged
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Get all events
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Get events for a specific day
    pub fn events_at_day(&self, day: usize) -> Vec<&Event> {
        self.events.iter().filter(|e| e.day() == day).collect()
    }

    /// Get events of a specific type
    pub fn events_of_type(&self, event_type: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Clear all events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
