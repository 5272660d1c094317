//! Decision engine
//!
//! Probability-driven rules governing disasters, migration in, and
//! migration out. Every rule is a pure probability evaluator over the
//! injected random source; stochastic outcomes are branches, never errors.
//! The only failure mode is constructing a rule with a probability outside
//! [0, 1].
//!
//! # Rules
//!
//! 1. **Disaster**: fixed 1% per-day chance; the effect (−50 happiness to
//!    every citizen) is applied by the orchestrator after the daily pass.
//! 2. **Newcomers**: tiered on the current average happiness, evaluated
//!    high-to-low, first matching tier only.
//! 3. **Leavers**: per-citizen rolls for each missing basic utility, only
//!    evaluated while average happiness is negative.

use thiserror::Error;

use crate::models::citizen::Citizen;
use crate::rng::RngManager;

/// Per-day probability of a disaster striking the city
pub const DISASTER_CHANCE: f64 = 0.01;

/// Flat happiness penalty a disaster inflicts on every citizen
pub const DISASTER_HAPPINESS_PENALTY: i64 = 50;

/// Per-unmet-utility probability that a citizen decides to leave
pub const LEAVE_CHANCE_PER_UNMET_NEED: f64 = 0.5;

/// Errors that can occur when configuring a decision rule
#[derive(Debug, Error, PartialEq)]
pub enum DecisionError {
    #[error("invalid probability {0}: must lie in [0.0, 1.0]")]
    InvalidProbability(f64),
}

/// The capability every rule shares: produce a boolean outcome from a
/// probability
///
/// `roll` is provided: one uniform draw in [0, 1) compared against
/// `chance`.
pub trait Decision {
    /// Probability that this decision resolves to `true`
    fn chance(&self) -> f64;

    /// Roll the decision against the injected random source
    fn roll(&self, rng: &mut RngManager) -> bool {
        rng.chance(self.chance())
    }
}

fn validated(probability: f64) -> Result<f64, DecisionError> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(DecisionError::InvalidProbability(probability));
    }
    Ok(probability)
}

// ============================================================================
// Disaster
// ============================================================================

/// Decides whether a disaster strikes the city today
///
/// # Example
/// ```
/// use city_simulator_core_rs::{Decision, DisasterDecision, RngManager};
///
/// let rule = DisasterDecision::new();
/// let mut rng = RngManager::new(42);
/// let struck = rule.roll(&mut rng); // true on ~1% of days
/// # let _ = struck;
/// ```
#[derive(Debug, Clone)]
pub struct DisasterDecision {
    chance: f64,
}

impl DisasterDecision {
    /// Create the rule with the standard 1% per-day chance
    pub fn new() -> Self {
        Self {
            chance: DISASTER_CHANCE,
        }
    }

    /// Create the rule with a custom chance (validated to [0, 1])
    pub fn with_chance(chance: f64) -> Result<Self, DecisionError> {
        Ok(Self {
            chance: validated(chance)?,
        })
    }
}

impl Default for DisasterDecision {
    fn default() -> Self {
        Self::new()
    }
}

impl Decision for DisasterDecision {
    fn chance(&self) -> f64 {
        self.chance
    }
}

// ============================================================================
// Newcomers
// ============================================================================

/// One happiness band of the newcomer rule
#[derive(Debug, Clone, Copy)]
pub struct NewcomerTier {
    /// Probability the tier fires once matched
    chance: f64,

    /// Citizens arriving when the tier fires
    newcomers: usize,
}

impl Decision for NewcomerTier {
    fn chance(&self) -> f64 {
        self.chance
    }
}

/// Decides whether newcomers move in, tiered on average happiness
///
/// Tiers are evaluated high-to-low and are mutually exclusive: only the
/// first band matching the average is rolled per day.
///
/// | Average happiness | Chance | Newcomers |
/// |-------------------|--------|-----------|
/// | avg ≥ 20          | 20%    | 20        |
/// | 10 < avg < 20     | 10%    | 10        |
/// | 0 < avg ≤ 10      | 5%     | 1         |
///
/// # Example
/// ```
/// use city_simulator_core_rs::{NewcomerDecision, RngManager};
///
/// let rule = NewcomerDecision::new();
/// let mut rng = RngManager::new(42);
///
/// // A miserable city attracts nobody, no roll happens
/// assert_eq!(rule.evaluate(-5.0, &mut rng), 0);
/// ```
#[derive(Debug, Clone)]
pub struct NewcomerDecision {
    high: NewcomerTier,
    mid: NewcomerTier,
    low: NewcomerTier,
}

impl NewcomerDecision {
    /// Create the rule with the standard tiers
    pub fn new() -> Self {
        Self {
            high: NewcomerTier {
                chance: 0.20,
                newcomers: 20,
            },
            mid: NewcomerTier {
                chance: 0.10,
                newcomers: 10,
            },
            low: NewcomerTier {
                chance: 0.05,
                newcomers: 1,
            },
        }
    }

    /// Create the rule with one uniform chance applied to every tier
    ///
    /// Tier newcomer counts are unchanged. Useful for scenarios that need
    /// migration forced on (1.0) or off (0.0).
    pub fn with_uniform_chance(chance: f64) -> Result<Self, DecisionError> {
        let chance = validated(chance)?;
        let mut rule = Self::new();
        rule.high.chance = chance;
        rule.mid.chance = chance;
        rule.low.chance = chance;
        Ok(rule)
    }

    /// Evaluate the rule: how many newcomers arrive today?
    ///
    /// Selects the single matching tier (if any) and rolls it. Returns 0
    /// when no tier matches or the roll fails.
    pub fn evaluate(&self, average_happiness: f64, rng: &mut RngManager) -> usize {
        match self.tier_for(average_happiness) {
            Some(tier) if tier.roll(rng) => tier.newcomers,
            _ => 0,
        }
    }

    /// Select the tier matching the average, high-to-low, first match only
    fn tier_for(&self, average_happiness: f64) -> Option<&NewcomerTier> {
        if average_happiness >= 20.0 {
            Some(&self.high)
        } else if average_happiness > 10.0 {
            Some(&self.mid)
        } else if average_happiness > 0.0 {
            Some(&self.low)
        } else {
            None
        }
    }
}

impl Default for NewcomerDecision {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Leavers
// ============================================================================

/// Decides, per citizen, whether a dissatisfied citizen leaves the city
///
/// Only evaluated while the city's average happiness is negative. For each
/// citizen, every missing basic utility (home, electricity, water) triggers
/// an independent 50% roll; ALL triggered checks are rolled (no
/// short-circuit) and the citizen leaves if any succeeds.
#[derive(Debug, Clone)]
pub struct LeaverDecision {
    chance_per_unmet_need: f64,
}

impl LeaverDecision {
    /// Create the rule with the standard 50% chance per missing utility
    pub fn new() -> Self {
        Self {
            chance_per_unmet_need: LEAVE_CHANCE_PER_UNMET_NEED,
        }
    }

    /// Create the rule with a custom chance (validated to [0, 1])
    pub fn with_chance(chance: f64) -> Result<Self, DecisionError> {
        Ok(Self {
            chance_per_unmet_need: validated(chance)?,
        })
    }

    /// Whether attrition applies at all for this average happiness
    pub fn applies(&self, average_happiness: f64) -> bool {
        average_happiness < 0.0
    }

    /// Roll whether this citizen decides to leave
    ///
    /// Each missing utility rolls independently; the rolls after a success
    /// still execute, so the random stream consumption depends only on the
    /// citizen's needs-state.
    pub fn wants_to_leave(&self, citizen: &Citizen, rng: &mut RngManager) -> bool {
        let no_home = !citizen.has_home() && rng.chance(self.chance_per_unmet_need);
        let no_electricity =
            !citizen.has_electricity() && rng.chance(self.chance_per_unmet_need);
        let no_water = !citizen.has_water() && rng.chance(self.chance_per_unmet_need);

        no_home || no_electricity || no_water
    }
}

impl Default for LeaverDecision {
    fn default() -> Self {
        Self::new()
    }
}

impl Decision for LeaverDecision {
    fn chance(&self) -> f64 {
        self.chance_per_unmet_need
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_probability_rejected() {
        assert_eq!(
            DisasterDecision::with_chance(1.5).unwrap_err(),
            DecisionError::InvalidProbability(1.5)
        );
        assert_eq!(
            LeaverDecision::with_chance(-0.1).unwrap_err(),
            DecisionError::InvalidProbability(-0.1)
        );
        assert!(DisasterDecision::with_chance(0.0).is_ok());
        assert!(LeaverDecision::with_chance(1.0).is_ok());
    }

    #[test]
    fn test_disaster_certain_and_impossible() {
        let mut rng = RngManager::new(42);

        let certain = DisasterDecision::with_chance(1.0).unwrap();
        let impossible = DisasterDecision::with_chance(0.0).unwrap();

        for _ in 0..50 {
            assert!(certain.roll(&mut rng));
            assert!(!impossible.roll(&mut rng));
        }
    }

    #[test]
    fn test_newcomer_tier_selection() {
        let rule = NewcomerDecision::new();

        assert_eq!(rule.tier_for(25.0).unwrap().newcomers, 20);
        assert_eq!(rule.tier_for(20.0).unwrap().newcomers, 20);
        assert_eq!(rule.tier_for(19.9).unwrap().newcomers, 10);
        assert_eq!(rule.tier_for(10.5).unwrap().newcomers, 10);
        assert_eq!(rule.tier_for(10.0).unwrap().newcomers, 1);
        assert_eq!(rule.tier_for(0.5).unwrap().newcomers, 1);
        assert!(rule.tier_for(0.0).is_none());
        assert!(rule.tier_for(-12.0).is_none());
    }

    #[test]
    fn test_newcomer_zero_average_never_rolls() {
        let rule = NewcomerDecision::new();
        let mut rng = RngManager::new(42);
        let state_before = rng.state();

        assert_eq!(rule.evaluate(0.0, &mut rng), 0);
        assert_eq!(rule.evaluate(-40.0, &mut rng), 0);

        // No tier matched, so the random stream was never consumed
        assert_eq!(rng.state(), state_before);
    }

    #[test]
    fn test_leaver_applies_only_below_zero() {
        let rule = LeaverDecision::new();
        assert!(rule.applies(-0.1));
        assert!(!rule.applies(0.0));
        assert!(!rule.applies(15.0));
    }

    #[test]
    fn test_leaver_fully_served_citizen_never_leaves() {
        let mut rng = RngManager::new(42);
        let mut citizen = crate::models::citizen::Citizen::new(&mut rng);
        citizen.set_home(true);
        citizen.set_electricity(true);
        citizen.set_water(true);

        let rule = LeaverDecision::with_chance(1.0).unwrap();
        let state_before = rng.state();

        assert!(!rule.wants_to_leave(&citizen, &mut rng));
        // No need was missing, so no roll was triggered
        assert_eq!(rng.state(), state_before);
    }

    #[test]
    fn test_leaver_all_triggered_checks_roll() {
        let mut rng = RngManager::new(42);
        let citizen = crate::models::citizen::Citizen::new(&mut rng);
        // All three utilities missing on a fresh citizen

        let rule = LeaverDecision::with_chance(1.0).unwrap();
        let mut probe = rng.clone();

        assert!(rule.wants_to_leave(&citizen, &mut rng));

        // Exactly three draws consumed even though the first already decided
        probe.next();
        probe.next();
        probe.next();
        assert_eq!(rng.state(), probe.state());
    }

    #[test]
    fn test_leaver_missing_needs_with_certain_chance() {
        let mut rng = RngManager::new(42);
        let mut citizen = crate::models::citizen::Citizen::new(&mut rng);
        citizen.set_home(true);
        citizen.set_electricity(true);
        // Water still missing

        let certain = LeaverDecision::with_chance(1.0).unwrap();
        assert!(certain.wants_to_leave(&citizen, &mut rng));

        let never = LeaverDecision::with_chance(0.0).unwrap();
        assert!(!never.wants_to_leave(&citizen, &mut rng));
    }
}
