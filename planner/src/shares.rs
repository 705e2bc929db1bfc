//! Share scheme: default payout splits and custom-split validation.
//!
//! Defaults slightly favour the organizer (index 0). Custom splits must keep
//! every share within 15–85%, in steps of 5%, totalling exactly 100%.

use crate::constants::{MAX_SHARE_PERCENT, MIN_SHARE_PERCENT, SHARE_INCREMENT};
use crate::error::ShareViolation;
use crate::types::ShareSet;

/// Default split for `player_count` players.
///
/// 1: `[100]`, 2: `[50, 50]`, 3: `[40, 30, 30]`, 4: `[40, 20, 20, 20]`;
/// any other non-zero count splits equally. Zero players gives an empty set.
pub fn default_shares(player_count: usize) -> ShareSet {
    let shares = match player_count {
        0 => Vec::new(),
        1 => vec![100.0],
        2 => vec![50.0, 50.0],
        3 => vec![40.0, 30.0, 30.0],
        4 => vec![40.0, 20.0, 20.0, 20.0],
        n => vec![100.0 / n as f64; n],
    };
    ShareSet(shares)
}

/// Check a user-supplied split.
///
/// Entries are checked in order (range, then step) before the total, so the
/// first offending player is reported.
pub fn validate_custom_shares(shares: &[u32]) -> Result<ShareSet, ShareViolation> {
    for (index, &value) in shares.iter().enumerate() {
        if !(MIN_SHARE_PERCENT..=MAX_SHARE_PERCENT).contains(&value) {
            return Err(ShareViolation::OutOfRange { index, value });
        }
        if value % SHARE_INCREMENT != 0 {
            return Err(ShareViolation::NotMultipleOfFive { index, value });
        }
    }

    let total: u32 = shares.iter().sum();
    if total != 100 {
        return Err(ShareViolation::BadTotal { total });
    }

    Ok(ShareSet(shares.iter().map(|&s| s as f64).collect()))
}

/// Shares for a crew of `participants`: the custom split when given, else the default.
pub fn shares_for_crew(
    custom: Option<&[u32]>,
    participants: usize,
) -> Result<ShareSet, ShareViolation> {
    match custom {
        None => Ok(default_shares(participants)),
        Some(shares) if shares.len() != participants => Err(ShareViolation::WrongCount {
            expected: participants,
            actual: shares.len(),
        }),
        Some(shares) => validate_custom_shares(shares),
    }
}
