//! Action-count model: how many clicks or grabs an allocation takes in game.
//!
//! Each loot kind lists the percent of one unit collected after every action
//! ([`SecondaryTarget::pickup_steps`]). A full unit costs `N = steps.len()`
//! actions. A partial unit costs the action whose checkpoint lies closest to
//! the partial percentage, so `units = 1.37` on a ten-click stack costs
//! `10 + 4`.
//!
//! The in-game counter for some kinds is off by one whenever the total is not
//! a round ten; [`ActionCorrection`] carries that per-kind rule.

use crate::types::{ActionCorrection, SecondaryTarget};

/// Units are snapped to this grid before splitting into whole and partial parts,
/// so `0.9999999` counts as one full unit rather than a 100% partial.
const UNIT_GRID: f64 = 1e6;

/// Total actions needed to collect `units` of `target`.
///
/// `crew` is true when more than one player is in the heist.
pub fn action_count(target: &SecondaryTarget, units: f64, crew: bool) -> u32 {
    let units = (units.max(0.0) * UNIT_GRID).round() / UNIT_GRID;
    let whole = units.floor();
    let fraction = units - whole;

    let mut total = whole as u32 * target.actions_per_unit();
    if fraction > 0.0 {
        total += partial_unit_actions(target.pickup_steps, fraction * 100.0);
    }

    apply_correction(total, target.correction, crew)
}

/// 1-based index of the checkpoint closest to `percent`.
///
/// Ties resolve to the earlier checkpoint.
pub fn partial_unit_actions(steps: &[f64], percent: f64) -> u32 {
    let mut best_idx = 0usize;
    let mut best_diff = f64::INFINITY;
    for (i, &step) in steps.iter().enumerate() {
        let diff = (step - percent).abs();
        if diff < best_diff {
            best_diff = diff;
            best_idx = i;
        }
    }
    if steps.is_empty() {
        0
    } else {
        best_idx as u32 + 1
    }
}

/// Add one action when the rule applies and `total` is not a multiple of 10.
pub fn apply_correction(total: u32, correction: ActionCorrection, crew: bool) -> u32 {
    if total % 10 != 0 && correction.applies(crew) {
        total + 1
    } else {
        total
    }
}
