//! Property-based tests for the allocator, shares and payouts.

use proptest::prelude::*;

use cayo::allocator::optimize_bags;
use cayo::catalog::{eligible_quantities, secondary};
use cayo::constants::*;
use cayo::payout::{net_total, player_gains, PayoutRules};
use cayo::report::loot_loss;
use cayo::shares::{default_shares, validate_custom_shares};
use cayo::types::{LootKind, LootQuantities};

/// Strategy: up to 6 units of each loot kind.
fn quantities_strategy() -> impl Strategy<Value = LootQuantities> {
    prop::array::uniform5(0..=6u32).prop_map(|counts| {
        LootKind::ALL
            .into_iter()
            .zip(counts)
            .collect::<LootQuantities>()
    })
}

/// Strategy: a full heist setup (quantities, players, solo, office paintings).
fn setup_strategy() -> impl Strategy<Value = (LootQuantities, usize, bool, u32)> {
    (quantities_strategy(), 1..=MAX_PLAYERS, any::<bool>(), 0..=2u32)
}

proptest! {
    // 1. No bag is ever over-filled
    #[test]
    fn bags_respect_capacity((q, players, solo, office) in setup_strategy()) {
        for bag in optimize_bags(&q, players, solo, office) {
            let used = bag.capacity_used();
            prop_assert!(used <= BAG_CAPACITY + 1e-6, "used={used}");
            prop_assert!(bag.capacity_remaining >= 0.0);
            prop_assert!((bag.capacity_remaining - (BAG_CAPACITY - used).max(0.0)).abs() < 1e-6);
        }
    }

    // 2. Never allocate more than is present (and eligible)
    #[test]
    fn allocation_conserves_stock((q, players, solo, office) in setup_strategy()) {
        let bags = optimize_bags(&q, players, solo, office);
        let eligible = eligible_quantities(&q, solo, office);
        for kind in LootKind::ALL {
            let taken: f64 = bags.iter().map(|b| b.units_of(kind)).sum();
            prop_assert!(taken <= eligible.get(kind) as f64 + 1e-9, "{kind}: {taken}");
            prop_assert!(eligible.get(kind) <= q.get(kind));
        }
    }

    // 3. Paintings are only ever taken whole
    #[test]
    fn paintings_are_whole((q, players, solo, office) in setup_strategy()) {
        for bag in optimize_bags(&q, players, solo, office) {
            for item in bag.items.iter().filter(|i| i.kind == LootKind::Paintings) {
                prop_assert_eq!(item.units.fract(), 0.0);
                prop_assert!(item.units >= 1.0);
                prop_assert_eq!(item.value, item.units as u64 * secondary(LootKind::Paintings).value);
            }
        }
    }

    // 4. Within a bag, items come in non-increasing value density
    #[test]
    fn items_follow_density_order((q, players, solo, office) in setup_strategy()) {
        for bag in optimize_bags(&q, players, solo, office) {
            for pair in bag.items.windows(2) {
                prop_assert!(secondary(pair[0].kind).density() >= secondary(pair[1].kind).density());
            }
        }
    }

    // 5. A bag with room left could not have taken a worthwhile slice of any divisible kind
    #[test]
    fn no_worthwhile_gap_left((q, players, solo, office) in setup_strategy()) {
        let bags = optimize_bags(&q, players, solo, office);
        let eligible = eligible_quantities(&q, solo, office);
        for (i, bag) in bags.iter().enumerate() {
            if bag.capacity_remaining < CAPACITY_EPSILON {
                continue;
            }
            for kind in LootKind::ALL.into_iter().filter(|k| secondary(*k).divisible) {
                let target = secondary(kind);
                let consumed: f64 = bags[..=i].iter().map(|b| b.units_of(kind)).sum();
                let leftover = (eligible.get(kind) as f64 - consumed).max(0.0);
                let slice = (bag.capacity_remaining / target.capacity()).min(leftover);
                prop_assert!(
                    slice * (target.value as f64) < MIN_ITEM_VALUE as f64 + 1e-6,
                    "player {i} left {kind} on the table"
                );
            }
        }
    }

    // 6. Bag values are the sum of their items; output is one bag per player in order
    #[test]
    fn bag_totals_add_up((q, players, solo, office) in setup_strategy()) {
        let bags = optimize_bags(&q, players, solo, office);
        prop_assert_eq!(bags.len(), players);
        for (i, bag) in bags.iter().enumerate() {
            prop_assert_eq!(bag.player_index, i);
            prop_assert_eq!(bag.total_value, bag.items.iter().map(|it| it.value).sum::<u64>());
        }
    }

    // 7. Recoverable never exceeds available
    #[test]
    fn loss_is_consistent((q, players, solo, office) in setup_strategy()) {
        let bags = optimize_bags(&q, players, solo, office);
        let loss = loot_loss(&q, &bags, solo, office);
        prop_assert!(loss.recoverable <= loss.available);
        prop_assert_eq!(loss.amount, loss.available - loss.recoverable);
        prop_assert!((0.0..=100.0).contains(&loss.percent));
    }

    // 8. Accepted custom splits sum to 100
    #[test]
    fn accepted_shares_sum_to_100(
        shares in prop::collection::vec((3..=17u32).prop_map(|x| x * 5), 1..=4)
    ) {
        if let Ok(set) = validate_custom_shares(&shares) {
            prop_assert!((set.total() - 100.0).abs() < 1e-6);
            prop_assert_eq!(set.len(), shares.len());
        } else {
            prop_assert_ne!(shares.iter().sum::<u32>(), 100);
        }
    }

    // 9. Payouts are deterministic and never exceed the net total (bonus aside)
    #[test]
    fn payouts_deterministic(
        gross in 0..5_000_000u64,
        players in 1..=MAX_PLAYERS,
        elite in any::<bool>(),
        hard in any::<bool>(),
    ) {
        let rules = PayoutRules::default();
        let net = net_total(gross, 0, 0, &rules);
        prop_assert!(net <= gross);
        let shares = default_shares(players);
        let a = player_gains(net, shares.as_slice(), elite, hard, &rules);
        let b = player_gains(net, shares.as_slice(), elite, hard, &rules);
        prop_assert_eq!(&a, &b);
        let bonus = if elite { rules.elite_bonus(hard) } else { 0 };
        let paid: u64 = a.iter().map(|g| g - bonus).sum();
        prop_assert!(paid <= net);
    }
}

// 10. Default splits always sum to 100 (non-proptest, small domain)
#[test]
fn default_shares_sum_to_100() {
    for n in 1..=12 {
        let shares = default_shares(n);
        assert_eq!(shares.len(), n);
        assert!((shares.total() - 100.0).abs() < 1e-6, "n={n}");
    }
}
