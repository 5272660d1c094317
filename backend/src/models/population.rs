//! Citizen registry
//!
//! The population is an insertion-ordered collection of citizens owned by
//! exactly one city. Order matters: the daily resource pass serves citizens
//! strictly by stored index, so earlier citizens are always served first
//! under scarcity.
//!
//! # Critical Invariants
//!
//! 1. **Identity Uniqueness**: Each citizen ID appears exactly once
//! 2. **Stable Ordering**: Insertion order is preserved; removal compacts
//!    without reordering the survivors

use serde::{Deserialize, Serialize};

use crate::models::citizen::Citizen;

/// Insertion-ordered collection of citizens
///
/// # Example
///
/// ```rust
/// use city_simulator_core_rs::{Citizen, Population, RngManager};
///
/// let mut rng = RngManager::new(42);
/// let mut population = Population::new();
/// assert!(population.is_empty());
///
/// population.add(Citizen::new(&mut rng));
/// population.add(Citizen::new(&mut rng));
/// assert_eq!(population.len(), 2);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Population {
    /// Citizens in insertion order
    citizens: Vec<Citizen>,
}

impl Population {
    /// Create a new empty population
    pub fn new() -> Self {
        Self {
            citizens: Vec::new(),
        }
    }

    /// Create a population from an existing list of citizens
    ///
    /// # Panics
    ///
    /// Panics if two citizens share an ID (duplicate identity)
    pub fn from_citizens(citizens: Vec<Citizen>) -> Self {
        let mut population = Self::new();
        for citizen in citizens {
            population.add(citizen);
        }
        population
    }

    /// Add a citizen to the end of the registry
    ///
    /// # Panics
    ///
    /// Panics if a citizen with the same ID is already registered
    pub fn add(&mut self, citizen: Citizen) {
        assert!(
            self.get(citizen.id()).is_none(),
            "Citizen ID {} already exists",
            citizen.id()
        );
        self.citizens.push(citizen);
    }

    /// Remove a citizen by ID
    ///
    /// Survivors keep their relative order.
    ///
    /// # Returns
    /// true if found and removed, false if no such citizen
    pub fn remove(&mut self, citizen_id: &str) -> bool {
        if let Some(pos) = self.citizens.iter().position(|c| c.id() == citizen_id) {
            self.citizens.remove(pos);
            true
        } else {
            false
        }
    }

    /// Keep only the citizens for which the predicate returns true
    ///
    /// This is how leaver attrition replaces the population with the
    /// stay-set in one pass.
    pub fn retain<F>(&mut self, predicate: F)
    where
        F: FnMut(&Citizen) -> bool,
    {
        self.citizens.retain(predicate);
    }

    /// Get a citizen by ID
    pub fn get(&self, citizen_id: &str) -> Option<&Citizen> {
        self.citizens.iter().find(|c| c.id() == citizen_id)
    }

    /// Read-only ordered view of the citizens
    pub fn citizens(&self) -> &[Citizen] {
        &self.citizens
    }

    /// Mutable ordered view of the citizens (for the daily resource pass)
    pub fn citizens_mut(&mut self) -> &mut [Citizen] {
        &mut self.citizens
    }

    /// Number of citizens
    pub fn len(&self) -> usize {
        self.citizens.len()
    }

    /// Whether the population is empty (a valid state)
    pub fn is_empty(&self) -> bool {
        self.citizens.is_empty()
    }
}
