//! Integration tests for the city budget
//!
//! The budget is a read-only aggregation over the population snapshot: it
//! must track who is taxed and what infrastructure costs, without ever
//! mutating the city.

use city_simulator_core_rs::{
    finance::{FACILITY_MAINTENANCE_COST, HOME_MAINTENANCE_COST, INCOME_TAX, PROPERTY_TAX, UTILITY_TAX},
    CityBudget, Orchestrator, OrchestratorConfig, Property,
};

fn orchestrator_with_citizens(count: usize) -> Orchestrator {
    Orchestrator::new(OrchestratorConfig {
        rng_seed: 42,
        initial_population: count,
        disaster_chance: 0.0,
        newcomer_chance: Some(0.0),
        ..OrchestratorConfig::default()
    })
    .expect("valid config")
}

#[test]
fn test_budget_over_one_simulated_day() {
    let mut orchestrator = orchestrator_with_citizens(50);
    orchestrator.advance_day();

    let mut budget = CityBudget::new();
    budget.update(orchestrator.city());

    // 40 of 50 citizens received water and the same first 40 electricity,
    // so there are exactly 40 utility users; nobody owns property yet
    let expected_income = 40 * UTILITY_TAX;
    let expected_expenditure = 4 * FACILITY_MAINTENANCE_COST + 30 * HOME_MAINTENANCE_COST;

    assert_eq!(budget.income(), expected_income);
    assert_eq!(budget.expenditure(), expected_expenditure);
    assert_eq!(budget.balance(), expected_income - expected_expenditure);
}

#[test]
fn test_property_holders_are_taxed_as_employed() {
    let mut orchestrator = orchestrator_with_citizens(10);
    orchestrator.advance_day();

    // Grant three citizens property; they become the employed set
    for citizen in orchestrator
        .city_mut()
        .population_mut()
        .citizens_mut()
        .iter_mut()
        .take(3)
    {
        citizen.grant_property(Property::new(500_000_00));
    }

    let mut budget = CityBudget::new();
    budget.update(orchestrator.city());

    // 10 citizens all served (capacity 40/40/30): 10 utility users
    let expected_income = 3 * INCOME_TAX + 3 * PROPERTY_TAX + 10 * UTILITY_TAX;
    assert_eq!(budget.income(), expected_income);
}

#[test]
fn test_update_does_not_mutate_the_city() {
    let mut orchestrator = orchestrator_with_citizens(20);
    orchestrator.advance_day();

    let before = serde_json::to_string(orchestrator.city()).expect("serializable");

    let mut budget = CityBudget::new();
    budget.update(orchestrator.city());
    budget.update(orchestrator.city());

    let after = serde_json::to_string(orchestrator.city()).expect("serializable");
    assert_eq!(before, after);
}

#[test]
fn test_budget_accumulates_day_over_day() {
    let mut orchestrator = orchestrator_with_citizens(0);
    let mut budget = CityBudget::new();

    for _ in 0..3 {
        orchestrator.advance_day();
        budget.update(orchestrator.city());
    }

    let one_day = 4 * FACILITY_MAINTENANCE_COST + 30 * HOME_MAINTENANCE_COST;
    assert_eq!(budget.expenditure(), 3 * one_day);
    assert_eq!(budget.balance(), -3 * one_day);
}
