//! Environment configuration for the planner server.
//!
//! Reads `CAYO_PORT`, `CAYO_HARD_MODE_BPS`, `CAYO_SAFE_VALUE` and `RUST_LOG`.
//! Malformed values are logged and replaced by defaults.

use std::str::FromStr;

use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::constants::MAX_HARD_MODE_BPS;
use crate::cooldown::CooldownRules;
use crate::payout::{PayoutRules, SafeValuePolicy};
use crate::server::PlannerContext;

const DEFAULT_PORT: u16 = 9100;
const DEFAULT_LOG_FILTER: &str = "cayo=info,tower_http=info";

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(var = name, value = %raw, "ignoring malformed environment value");
            None
        }
    }
}

/// Install the stderr `tracing` subscriber, filtered by `RUST_LOG`.
/// Safe to call more than once.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Read `CAYO_PORT` (default 9100).
pub fn server_port() -> u16 {
    parse_var("CAYO_PORT").unwrap_or(DEFAULT_PORT)
}

/// Default payout rules with environment overrides applied.
///
/// `CAYO_SAFE_VALUE` pins the safe to a fixed amount instead of the observed average.
pub fn payout_rules() -> PayoutRules {
    let mut rules = PayoutRules::default();
    if let Some(bps) = parse_var("CAYO_HARD_MODE_BPS").and_then(hard_mode_bps) {
        rules.hard_mode_bps = bps;
    }
    if let Some(amount) = parse_var("CAYO_SAFE_VALUE") {
        rules.safe_value = SafeValuePolicy::Fixed { amount };
    }
    rules
}

/// A configured hard-mode multiplier, if it is within `0..=MAX_HARD_MODE_BPS`.
fn hard_mode_bps(bps: u64) -> Option<u64> {
    if bps <= MAX_HARD_MODE_BPS {
        Some(bps)
    } else {
        warn!(bps, max = MAX_HARD_MODE_BPS, "ignoring oversized CAYO_HARD_MODE_BPS");
        None
    }
}

pub fn planner_context() -> PlannerContext {
    PlannerContext {
        rules: payout_rules(),
        cooldown: CooldownRules::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hard_mode_bps_cap() {
        assert_eq!(hard_mode_bps(12_500), Some(12_500));
        assert_eq!(hard_mode_bps(MAX_HARD_MODE_BPS), Some(MAX_HARD_MODE_BPS));
        assert_eq!(hard_mode_bps(MAX_HARD_MODE_BPS + 1), None);
        assert_eq!(hard_mode_bps(u64::MAX), None);
    }
}
