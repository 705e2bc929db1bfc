//! Bag allocator: greedy value-density packing of secondary loot.
//!
//! Loot kinds are sorted by GTA$ per percent of bag, best first, and each
//! player's bag is filled from that list in turn. Stock is shared: what the
//! leader (player 0) takes is gone for player 1, and so on. Because every
//! divisible kind can be split arbitrarily this is the fractional-knapsack
//! greedy, optimal per bag. Indivisible kinds (paintings) are taken in whole
//! units only.

use tracing::debug;

use crate::catalog::eligible_quantities;
use crate::constants::*;
use crate::pickup::action_count;
use crate::types::{BagItem, BagPlan, LootQuantities, SecondaryTarget};

/// A loot kind still on the island, with its undistributed stock.
struct Candidate {
    target: &'static SecondaryTarget,
    remaining: f64,
}

/// Allocate loot to `player_count` bags.
///
/// - `solo`: drop kinds a lone player cannot collect.
/// - `office_paintings`: paintings hanging in the office, collectable solo.
///
/// `player_count` is clamped to `1..=MAX_PLAYERS` and `office_paintings` to
/// the paintings actually present (at most [`MAX_OFFICE_PAINTINGS`]). Returns
/// one plan per player, in player order; bags are empty when nothing is
/// eligible.
pub fn optimize_bags(
    quantities: &LootQuantities,
    player_count: usize,
    solo: bool,
    office_paintings: u32,
) -> Vec<BagPlan> {
    let player_count = player_count.clamp(1, MAX_PLAYERS);
    let crew = player_count > 1;
    let mut candidates = build_candidates(quantities, solo, office_paintings);

    let mut bags = Vec::with_capacity(player_count);
    for player_index in 0..player_count {
        let mut bag = BagPlan::empty(player_index);

        for candidate in candidates.iter_mut() {
            if bag.capacity_remaining < CAPACITY_EPSILON {
                break;
            }
            if candidate.remaining <= 0.0 {
                continue;
            }

            let taken = if candidate.target.divisible {
                take_fraction(candidate, bag.capacity_remaining, crew)
            } else {
                take_whole(candidate, bag.capacity_remaining, crew)
            };
            let Some(item) = taken else {
                continue;
            };

            candidate.remaining = (candidate.remaining - item.units).max(0.0);
            bag.push(item);
        }

        debug!(
            player = player_index,
            items = bag.items.len(),
            value = bag.total_value,
            capacity_remaining = bag.capacity_remaining,
            "bag filled"
        );
        bags.push(bag);
    }

    bags
}

/// Eligible loot pools, best value density first (stable: ties keep catalog order).
fn build_candidates(
    quantities: &LootQuantities,
    solo: bool,
    office_paintings: u32,
) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = eligible_quantities(quantities, solo, office_paintings)
        .iter()
        .map(|(kind, count)| Candidate {
            target: crate::catalog::secondary(kind),
            remaining: count as f64,
        })
        .collect();
    candidates.sort_by(|a, b| b.target.density().total_cmp(&a.target.density()));
    candidates
}

/// Largest whole number of units that fits both the bag and the stock.
fn take_whole(candidate: &Candidate, capacity_remaining: f64, crew: bool) -> Option<BagItem> {
    let target = candidate.target;
    let capacity = target.capacity();
    let fit = ((capacity_remaining + WHOLE_UNIT_SLACK) / capacity).floor();
    let units = fit.min(candidate.remaining.floor());
    if units < 1.0 {
        return None;
    }

    Some(BagItem {
        kind: target.kind,
        units,
        action_count: action_count(target, units, crew),
        capacity_used: units * capacity,
        value: units as u64 * target.value,
    })
}

/// As much of the unit as fits, dropped when worth less than [`MIN_ITEM_VALUE`].
fn take_fraction(candidate: &Candidate, capacity_remaining: f64, crew: bool) -> Option<BagItem> {
    let target = candidate.target;
    let capacity = target.capacity();
    let units = (capacity_remaining / capacity).min(candidate.remaining);
    let value = (units * target.value as f64).floor() as u64;
    if units <= 0.0 || value < MIN_ITEM_VALUE {
        return None;
    }

    Some(BagItem {
        kind: target.kind,
        units,
        action_count: action_count(target, units, crew),
        capacity_used: units * capacity,
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::secondary;
    use crate::types::LootKind;

    fn total_units(bags: &[BagPlan], kind: LootKind) -> f64 {
        bags.iter().map(|bag| bag.units_of(kind)).sum()
    }

    #[test]
    fn test_sorted_by_density() {
        let q: LootQuantities = LootKind::ALL.into_iter().map(|k| (k, 1)).collect();
        let order: Vec<LootKind> = build_candidates(&q, false, 0)
            .iter()
            .map(|c| c.target.kind)
            .collect();
        assert_eq!(
            order,
            vec![
                LootKind::Gold,
                LootKind::Cocaine,
                LootKind::Weed,
                LootKind::Cash,
                LootKind::Paintings,
            ]
        );
    }

    #[test]
    fn test_gold_fills_leader_first() {
        let q = LootQuantities::new().with(LootKind::Gold, 4);
        let bags = optimize_bags(&q, 2, false, 0);
        assert_eq!(bags.len(), 2);
        let gold = secondary(LootKind::Gold);
        let expected_units = 100.0 / gold.capacity();
        assert!((bags[0].items[0].units - expected_units).abs() < 1e-9);
        assert!(bags[0].capacity_remaining < CAPACITY_EPSILON);
        assert!((bags[1].items[0].units - expected_units).abs() < 1e-9);
        assert!((total_units(&bags, LootKind::Gold) - 2.0 * expected_units).abs() < 1e-9);
    }

    #[test]
    fn test_leftover_space_takes_next_best() {
        let q = LootQuantities::new()
            .with(LootKind::Gold, 1)
            .with(LootKind::Cocaine, 4);
        let bags = optimize_bags(&q, 1, false, 0);
        let bag = &bags[0];
        assert_eq!(bag.items.len(), 2);
        assert_eq!(bag.items[0].kind, LootKind::Gold);
        assert_eq!(bag.items[0].units, 1.0);
        assert_eq!(bag.items[1].kind, LootKind::Cocaine);
        let cocaine_units = (100.0 - secondary(LootKind::Gold).capacity()) / 50.0;
        assert!((bag.items[1].units - cocaine_units).abs() < 1e-9);
        assert!((bag.capacity_used() - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_paintings_whole_units_only() {
        let q = LootQuantities::new()
            .with(LootKind::Cash, 1)
            .with(LootKind::Paintings, 2);
        let bags = optimize_bags(&q, 1, false, 0);
        // cash (25%) goes first by catalog order on the tie, leaving room for one painting
        let bag = &bags[0];
        assert_eq!(bag.items[0].kind, LootKind::Cash);
        assert_eq!(bag.items[1].kind, LootKind::Paintings);
        assert_eq!(bag.items[1].units, 1.0);
        assert_eq!(bag.items[1].action_count, 1);
        assert!((bag.capacity_remaining - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_solo_office_paintings_carve_out() {
        let q = LootQuantities::new()
            .with(LootKind::Paintings, 4)
            .with(LootKind::Gold, 2);
        let bags = optimize_bags(&q, 1, true, 1);
        let bag = &bags[0];
        assert_eq!(bag.items.len(), 1);
        assert_eq!(bag.items[0].kind, LootKind::Paintings);
        assert_eq!(bag.items[0].units, 1.0);
        assert_eq!(bag.total_value, 157_500);
    }

    #[test]
    fn test_office_paintings_clamped() {
        let q = LootQuantities::new().with(LootKind::Paintings, 1);
        let bags = optimize_bags(&q, 1, true, 2);
        assert_eq!(bags[0].units_of(LootKind::Paintings), 1.0);
    }

    #[test]
    fn test_slices_below_min_value_dropped() {
        let mut cash = Candidate {
            target: secondary(LootKind::Cash),
            remaining: 1.0,
        };
        // 0.05% of a bag holds 0.002 stacks = 157 GTA$
        assert_eq!(take_fraction(&cash, 0.05, false).map(|i| i.value), Some(157));
        // 0.02% holds 63 GTA$
        assert!(take_fraction(&cash, 0.02, false).is_none());
        cash.remaining = 0.001;
        assert!(take_fraction(&cash, 50.0, false).is_none());
    }

    #[test]
    fn test_player_count_clamped() {
        let q = LootQuantities::new().with(LootKind::Weed, 1);
        assert_eq!(optimize_bags(&q, 0, false, 0).len(), 1);
        assert_eq!(optimize_bags(&q, 9, false, 0).len(), MAX_PLAYERS);
    }

    #[test]
    fn test_empty_quantities() {
        let bags = optimize_bags(&LootQuantities::new(), 3, false, 0);
        assert_eq!(bags.len(), 3);
        for (i, bag) in bags.iter().enumerate() {
            assert_eq!(bag.player_index, i);
            assert!(bag.is_empty());
            assert_eq!(bag.total_value, 0);
            assert_eq!(bag.capacity_remaining, BAG_CAPACITY);
        }
    }
}
