//! City budget aggregation
//!
//! A read-only financial view over the city's population snapshot: tax
//! income from citizens and maintenance expenditure for infrastructure.
//! Updating the budget never mutates the city.
//!
//! CRITICAL: All money values are i64 (cents).

use serde::{Deserialize, Serialize};

use crate::models::city::City;

/// Daily income tax collected per employed citizen (cents)
///
/// For simplicity, citizens owning property are considered employed.
pub const INCOME_TAX: i64 = 10;

/// Daily property tax collected per property holder (cents)
pub const PROPERTY_TAX: i64 = 5;

/// Daily utility tax collected per utility user (cents)
pub const UTILITY_TAX: i64 = 2;

/// Daily maintenance cost per water or electricity facility (cents)
pub const FACILITY_MAINTENANCE_COST: i64 = 50_00;

/// Daily maintenance cost per housing unit (cents)
pub const HOME_MAINTENANCE_COST: i64 = 5_00;

/// The city's running budget
///
/// Income and expenditure accumulate across `update` calls (one call per
/// day); the balance is their running difference.
///
/// # Example
/// ```
/// use city_simulator_core_rs::{City, CityBudget, Population};
///
/// let city = City::new(Population::new());
/// let mut budget = CityBudget::new();
/// budget.update(&city);
///
/// // No citizens: no income, only maintenance
/// assert_eq!(budget.income(), 0);
/// assert!(budget.expenditure() > 0);
/// assert_eq!(budget.balance(), budget.income() - budget.expenditure());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CityBudget {
    /// Accumulated tax income (cents)
    income: i64,

    /// Accumulated maintenance expenditure (cents)
    expenditure: i64,

    /// Running balance: income − expenditure (cents)
    balance: i64,
}

impl CityBudget {
    /// Create an empty budget
    pub fn new() -> Self {
        Self::default()
    }

    /// Accrue one day of income and expenditure from the city snapshot
    pub fn update(&mut self, city: &City) {
        self.accrue_income(city);
        self.accrue_expenditure(city);
        self.balance = self.income - self.expenditure;
    }

    /// Accumulated tax income (cents)
    pub fn income(&self) -> i64 {
        self.income
    }

    /// Accumulated maintenance expenditure (cents)
    pub fn expenditure(&self) -> i64 {
        self.expenditure
    }

    /// Running balance (cents); negative when the city runs a deficit
    pub fn balance(&self) -> i64 {
        self.balance
    }

    fn accrue_income(&mut self, city: &City) {
        let citizens = city.population().citizens();

        // Property holders are both the employed and the property-taxed set
        let employed = citizens.iter().filter(|c| c.property().is_some()).count() as i64;
        self.income += employed * INCOME_TAX;
        self.income += employed * PROPERTY_TAX;

        let utility_users = citizens
            .iter()
            .filter(|c| c.has_water() || c.has_electricity())
            .count() as i64;
        self.income += utility_users * UTILITY_TAX;
    }

    fn accrue_expenditure(&mut self, city: &City) {
        let facilities = (city.water_facilities() + city.electricity_facilities()) as i64;
        self.expenditure += facilities * FACILITY_MAINTENANCE_COST;
        self.expenditure += city.housing_units() as i64 * HOME_MAINTENANCE_COST;
    }
}
