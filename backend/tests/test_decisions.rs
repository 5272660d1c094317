//! Integration tests for the decision engine
//!
//! These tests validate tier selection and mutual exclusivity of the
//! newcomer rule, the leaver rule's gating and roll semantics, and the
//! probability validation shared by every rule.

use city_simulator_core_rs::{
    Citizen, Decision, DecisionError, DisasterDecision, LeaverDecision, NewcomerDecision,
    RngManager,
};

#[test]
fn test_newcomer_tiers_are_mutually_exclusive() {
    // Force every tier to succeed: the count must still come from exactly
    // one tier, never a sum of tiers
    let rule = NewcomerDecision::with_uniform_chance(1.0).unwrap();
    let mut rng = RngManager::new(42);

    assert_eq!(rule.evaluate(25.0, &mut rng), 20);
    assert_eq!(rule.evaluate(20.0, &mut rng), 20);
    assert_eq!(rule.evaluate(15.0, &mut rng), 10);
    assert_eq!(rule.evaluate(10.0, &mut rng), 1);
    assert_eq!(rule.evaluate(5.0, &mut rng), 1);
    assert_eq!(rule.evaluate(0.0, &mut rng), 0);
    assert_eq!(rule.evaluate(-10.0, &mut rng), 0);
}

#[test]
fn test_newcomer_failed_roll_admits_nobody() {
    let rule = NewcomerDecision::with_uniform_chance(0.0).unwrap();
    let mut rng = RngManager::new(42);

    assert_eq!(rule.evaluate(25.0, &mut rng), 0);
    assert_eq!(rule.evaluate(15.0, &mut rng), 0);
    assert_eq!(rule.evaluate(5.0, &mut rng), 0);
}

#[test]
fn test_newcomer_non_positive_average_consumes_no_randomness() {
    let rule = NewcomerDecision::new();
    let mut rng = RngManager::new(42);
    let state_before = rng.state();

    assert_eq!(rule.evaluate(0.0, &mut rng), 0);
    assert_eq!(rule.evaluate(-25.0, &mut rng), 0);
    assert_eq!(rng.state(), state_before);
}

#[test]
fn test_leaver_gate_is_strictly_negative() {
    let rule = LeaverDecision::new();

    assert!(!rule.applies(0.0));
    assert!(!rule.applies(4.5));
    assert!(rule.applies(-0.001));
}

#[test]
fn test_leaver_rolls_once_per_missing_utility() {
    let mut rng = RngManager::new(42);

    // Citizen missing electricity and water, but housed
    let mut citizen = Citizen::new(&mut rng);
    citizen.set_home(true);

    let rule = LeaverDecision::new();
    let mut probe = rng.clone();

    let _ = rule.wants_to_leave(&citizen, &mut rng);

    probe.next();
    probe.next();
    assert_eq!(
        rng.state(),
        probe.state(),
        "two missing utilities must consume exactly two draws"
    );
}

#[test]
fn test_invalid_probabilities_are_rejected() {
    assert_eq!(
        DisasterDecision::with_chance(-0.5).unwrap_err(),
        DecisionError::InvalidProbability(-0.5)
    );
    assert_eq!(
        DisasterDecision::with_chance(1.01).unwrap_err(),
        DecisionError::InvalidProbability(1.01)
    );
    assert_eq!(
        NewcomerDecision::with_uniform_chance(2.0).unwrap_err(),
        DecisionError::InvalidProbability(2.0)
    );
    assert!(LeaverDecision::with_chance(f64::NAN).is_err());

    // Boundaries are valid
    assert!(DisasterDecision::with_chance(0.0).is_ok());
    assert!(DisasterDecision::with_chance(1.0).is_ok());
}

#[test]
fn test_disaster_frequency_tracks_configured_chance() {
    let rule = DisasterDecision::new();
    let mut rng = RngManager::new(9001);

    let strikes = (0..10_000).filter(|_| rule.roll(&mut rng)).count();

    // 1% per day: expect roughly 100 strikes in 10,000 rolls
    assert!(
        (50..=200).contains(&strikes),
        "unexpected disaster frequency: {strikes}/10000"
    );
}

#[test]
fn test_fifty_percent_roll_is_balanced() {
    let rule = LeaverDecision::new();
    let mut rng = RngManager::new(9001);

    let hits = (0..10_000).filter(|_| rule.roll(&mut rng)).count();

    assert!(
        (4_500..=5_500).contains(&hits),
        "unexpected 50% roll balance: {hits}/10000"
    );
}
