//! Payout calculator: gross loot, fees, and per-player gains.
//!
//! Every multiplication of money truncates toward zero. Rates are integer
//! basis points, so `630 000 x 1.10` is exactly `693 000` and
//! `690 000 x 0.88` exactly `607 200`; no float rounding leaks into totals.
//! Only the share split multiplies by a float percentage, and it floors.
//!
//! Order of operations:
//! 1. primary value, hard-mode multiplier applied to the primary alone;
//! 2. gross = primary + secondary (bag totals) + safe;
//! 3. net = gross minus stacked fees;
//! 4. per player: `floor(net x share / 100)`, plus the elite bonus.

use serde::{Deserialize, Serialize};

use crate::catalog::primary;
use crate::constants::*;
use crate::types::{BagPlan, LootQuantities, PrimaryKind};

/// Where the safe value in estimates comes from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum SafeValuePolicy {
    /// Always this amount.
    Fixed { amount: u64 },
    /// The observed average over finished heists, or `fallback` with no history.
    Averaged { fallback: u64 },
}

/// Fee, bonus and multiplier constants for payout math.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayoutRules {
    /// Primary multiplier in hard mode, basis points.
    pub hard_mode_bps: u64,
    /// Fees deducted from the gross, basis points each, stacked additively.
    pub fee_bps: Vec<u64>,
    pub elite_bonus_normal: u64,
    pub elite_bonus_hard: u64,
    pub safe_value: SafeValuePolicy,
}

impl Default for PayoutRules {
    fn default() -> Self {
        Self {
            hard_mode_bps: HARD_MODE_MULTIPLIER_BPS,
            fee_bps: vec![PAVEL_FEE_BPS, FENCING_FEE_BPS],
            elite_bonus_normal: ELITE_BONUS_NORMAL,
            elite_bonus_hard: ELITE_BONUS_HARD,
            safe_value: SafeValuePolicy::Averaged {
                fallback: DEFAULT_SAFE_VALUE,
            },
        }
    }
}

impl PayoutRules {
    /// Share of the gross kept after fees, basis points.
    pub fn net_bps(&self) -> u64 {
        let fees = self
            .fee_bps
            .iter()
            .fold(0, |sum: u64, &bps| sum.saturating_add(bps));
        BPS_DENOMINATOR.saturating_sub(fees)
    }

    pub fn elite_bonus(&self, hard_mode: bool) -> u64 {
        if hard_mode {
            self.elite_bonus_hard
        } else {
            self.elite_bonus_normal
        }
    }

    /// Safe value to use in an estimate, given the running average if one exists.
    pub fn resolve_safe_value(&self, observed_average: Option<u64>) -> u64 {
        match self.safe_value {
            SafeValuePolicy::Fixed { amount } => amount,
            SafeValuePolicy::Averaged { fallback } => {
                observed_average.filter(|&avg| avg > 0).unwrap_or(fallback)
            }
        }
    }
}

/// `floor(amount x bps / 10 000)`, widened so the product cannot overflow.
fn apply_bps(amount: u64, bps: u64) -> u64 {
    let scaled = u128::from(amount) * u128::from(bps) / u128::from(BPS_DENOMINATOR);
    u64::try_from(scaled).unwrap_or(u64::MAX)
}

/// Primary value, with the hard-mode multiplier when `hard_mode`.
pub fn primary_value(target: PrimaryKind, hard_mode: bool, rules: &PayoutRules) -> u64 {
    let value = primary(target).value;
    if hard_mode {
        apply_bps(value, rules.hard_mode_bps)
    } else {
        value
    }
}

/// Secondary value actually carried out: the sum of every bag.
pub fn recoverable_value(bags: &[BagPlan]) -> u64 {
    bags.iter()
        .fold(0, |sum: u64, bag| sum.saturating_add(bag.total_value))
}

/// Realistically recoverable loot: primary + packed bags + safe.
pub fn estimate_total_loot(
    target: PrimaryKind,
    bags: &[BagPlan],
    hard_mode: bool,
    safe_value: u64,
    rules: &PayoutRules,
) -> u64 {
    primary_value(target, hard_mode, rules)
        .saturating_add(recoverable_value(bags))
        .saturating_add(safe_value)
}

/// Upper bound if every unit present could be carried, ignoring bag space and solo rules.
pub fn theoretical_total_loot(
    target: PrimaryKind,
    quantities: &LootQuantities,
    hard_mode: bool,
    safe_value: u64,
    rules: &PayoutRules,
) -> u64 {
    let secondary: u64 = quantities
        .iter()
        .map(|(kind, count)| crate::catalog::secondary(kind).value * count as u64)
        .sum();
    primary_value(target, hard_mode, rules)
        .saturating_add(secondary)
        .saturating_add(safe_value)
}

/// Net take after fees: `floor(gross x net_bps / 10 000)`.
pub fn net_total(
    primary_with_bonus: u64,
    secondary_sum: u64,
    safe_value: u64,
    rules: &PayoutRules,
) -> u64 {
    let gross = primary_with_bonus
        .saturating_add(secondary_sum)
        .saturating_add(safe_value);
    apply_bps(gross, rules.net_bps())
}

/// Per-player gains, index-aligned with `shares`.
pub fn player_gains(
    net_total: u64,
    shares: &[f64],
    elite_completed: bool,
    hard_mode: bool,
    rules: &PayoutRules,
) -> Vec<u64> {
    let bonus = if elite_completed {
        rules.elite_bonus(hard_mode)
    } else {
        0
    };
    shares
        .iter()
        .map(|&share| ((net_total as f64 * share / 100.0).floor() as u64).saturating_add(bonus))
        .collect()
}

/// Every intermediate of a heist payout, for display and later comparison.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HeistPayout {
    pub primary_value: u64,
    pub secondary_value: u64,
    pub safe_value: u64,
    pub gross_total: u64,
    pub net_total: u64,
    pub gains: Vec<u64>,
}

/// Run the whole payout pipeline for one heist.
pub fn plan_payout(
    target: PrimaryKind,
    hard_mode: bool,
    bags: &[BagPlan],
    safe_value: u64,
    shares: &[f64],
    elite_completed: bool,
    rules: &PayoutRules,
) -> HeistPayout {
    let primary_value = primary_value(target, hard_mode, rules);
    let secondary_value = recoverable_value(bags);
    let net = net_total(primary_value, secondary_value, safe_value, rules);
    HeistPayout {
        primary_value,
        secondary_value,
        safe_value,
        gross_total: primary_value
            .saturating_add(secondary_value)
            .saturating_add(safe_value),
        net_total: net,
        gains: player_gains(net, shares, elite_completed, hard_mode, rules),
    }
}
