//! Error types.
//!
//! Allocation and payout math never fail on in-range input. These enums cover
//! the caller-facing validation cases: custom share splits, lifecycle
//! transitions, and request parsing, including amounts too large to add up.

use thiserror::Error;

use crate::constants::{
    MAX_AMOUNT, MAX_PLAYERS, MAX_SHARE_PERCENT, MIN_SHARE_PERCENT, SHARE_INCREMENT,
};
use crate::lifecycle::HeistStatus;

/// Which custom-share rule was broken. Indices are 0-based player positions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShareViolation {
    #[error(
        "player {} share {value}% is outside {min}-{max}%",
        .index + 1,
        min = MIN_SHARE_PERCENT,
        max = MAX_SHARE_PERCENT
    )]
    OutOfRange { index: usize, value: u32 },

    #[error(
        "player {} share {value}% is not a multiple of {step}%",
        .index + 1,
        step = SHARE_INCREMENT
    )]
    NotMultipleOfFive { index: usize, value: u32 },

    #[error("shares total {total}%, expected 100%")]
    BadTotal { total: u32 },

    #[error("{actual} shares given for {expected} players")]
    WrongCount { expected: usize, actual: usize },
}

/// Illegal heist status change.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot move heist from {from} to {to}")]
pub struct LifecycleError {
    pub from: HeistStatus,
    pub to: HeistStatus,
}

/// Request-level failures surfaced to callers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlannerError {
    #[error("unknown primary target: {0}")]
    UnknownPrimary(String),

    #[error("unknown loot type: {0}")]
    UnknownLoot(String),

    #[error("player count {0} out of range 1-{max}", max = MAX_PLAYERS)]
    PlayerCount(usize),

    #[error("{0} bags given, a crew carries at most {max}", max = MAX_PLAYERS)]
    BagCount(usize),

    #[error("{field} {value} exceeds the {max} limit", max = MAX_AMOUNT)]
    AmountOutOfRange { field: &'static str, value: u64 },

    #[error(transparent)]
    Shares(#[from] ShareViolation),

    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),
}
