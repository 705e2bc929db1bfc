//! Heist constants: loot catalog tables, fee and bonus rates, cooldowns.
//!
//! The catalog is plain data. [`SECONDARY_TARGETS`] is indexed by
//! [`LootKind::index`] and [`PRIMARY_TARGETS`] by [`PrimaryKind::index`], so
//! allocation code never branches on a loot name.
//!
//! Money is in whole GTA$. Rates are in basis points (1/100 of a percent) so
//! that every fee and multiplier truncates exactly like integer division.

use crate::types::{ActionCorrection, LootKind, PrimaryKind, PrimaryTarget, SecondaryTarget};

/// Number of secondary loot kinds.
pub const SECONDARY_COUNT: usize = 5;

/// Number of primary targets.
pub const PRIMARY_COUNT: usize = 5;

/// Maximum crew size, leader included.
pub const MAX_PLAYERS: usize = 4;

/// Bag capacity of one player, in percent.
pub const BAG_CAPACITY: f64 = 100.0;

/// A bag with less room than this is treated as full.
pub const CAPACITY_EPSILON: f64 = 0.01;

/// Divisible allocations worth less than this are dropped as noise.
pub const MIN_ITEM_VALUE: u64 = 100;

/// Slack applied before flooring whole-unit fits (50.0 / 50.0 must give 1, not 0).
pub const WHOLE_UNIT_SLACK: f64 = 1e-9;

/// Loot kind whose office copies may be taken solo.
pub const OFFICE_LOOT: LootKind = LootKind::Paintings;

/// Paintings hanging in the office: at most two, always reachable solo.
pub const MAX_OFFICE_PAINTINGS: u32 = 2;

/// Basis-point denominator.
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Hard mode: primary value x1.10.
pub const HARD_MODE_MULTIPLIER_BPS: u64 = 11_000;

/// Upper bound accepted for a configured hard-mode multiplier (x5).
pub const MAX_HARD_MODE_BPS: u64 = 50_000;

/// Pavel's cut (2%).
pub const PAVEL_FEE_BPS: u64 = 200;

/// Fencing fee (10%).
pub const FENCING_FEE_BPS: u64 = 1_000;

/// Elite challenge bonus per player, normal mode.
pub const ELITE_BONUS_NORMAL: u64 = 50_000;

/// Elite challenge bonus per player, hard mode.
pub const ELITE_BONUS_HARD: u64 = 100_000;

/// Safe value used when no observed average exists yet.
pub const DEFAULT_SAFE_VALUE: u64 = 60_000;

/// Largest single amount (bag total, safe value, gain) accepted from callers.
/// Far above any real take, low enough that sums and bps products stay in `u64`.
pub const MAX_AMOUNT: u64 = 10_000_000_000;

/// Solo cooldown before the next heist (2h24).
pub const COOLDOWN_SOLO_MINUTES: u64 = 144;

/// Crew cooldown before the next heist.
pub const COOLDOWN_CREW_MINUTES: u64 = 48;

/// Hard mode stays available this long once the cooldown has elapsed.
pub const HARD_MODE_WINDOW_MINUTES: u64 = 48;

/// Share banding for custom splits.
pub const MIN_SHARE_PERCENT: u32 = 15;
pub const MAX_SHARE_PERCENT: u32 = 85;
pub const SHARE_INCREMENT: u32 = 5;

/// Gain comparisons within this many percent count as on target.
pub const ACCURACY_TOLERANCE_PERCENT: f64 = 5.0;

const TEN_CLICKS: [f64; 10] = [10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0];

/// Gold bars come off the cart in seven uneven grabs.
const GOLD_GRABS: [f64; 7] = [15.0, 29.0, 43.0, 57.0, 71.0, 86.0, 100.0];

const SINGLE_GRAB: [f64; 1] = [100.0];

/// Secondary targets, in [`LootKind`] order.
pub static SECONDARY_TARGETS: [SecondaryTarget; SECONDARY_COUNT] = [
    SecondaryTarget {
        kind: LootKind::Cash,
        name: "Cash",
        value: 78_750,
        weight: 0.25,
        pickup_steps: &TEN_CLICKS,
        solo_eligible: false,
        divisible: true,
        correction: ActionCorrection::Always,
    },
    SecondaryTarget {
        kind: LootKind::Weed,
        name: "Weed",
        value: 130_500,
        weight: 0.375,
        pickup_steps: &TEN_CLICKS,
        solo_eligible: true,
        divisible: true,
        correction: ActionCorrection::Always,
    },
    SecondaryTarget {
        kind: LootKind::Paintings,
        name: "Paintings",
        value: 157_500,
        weight: 0.5,
        pickup_steps: &SINGLE_GRAB,
        solo_eligible: false,
        divisible: false,
        correction: ActionCorrection::None,
    },
    SecondaryTarget {
        kind: LootKind::Cocaine,
        name: "Cocaine",
        value: 200_250,
        weight: 0.5,
        pickup_steps: &TEN_CLICKS,
        solo_eligible: true,
        divisible: true,
        correction: ActionCorrection::CrewOnly,
    },
    SecondaryTarget {
        kind: LootKind::Gold,
        name: "Gold",
        value: 328_333,
        weight: 0.6665,
        pickup_steps: &GOLD_GRABS,
        solo_eligible: false,
        divisible: true,
        correction: ActionCorrection::None,
    },
];

/// Primary targets, in [`PrimaryKind`] order.
pub static PRIMARY_TARGETS: [PrimaryTarget; PRIMARY_COUNT] = [
    PrimaryTarget {
        kind: PrimaryKind::Tequila,
        name: "Sinsimito Tequila",
        value: 630_000,
    },
    PrimaryTarget {
        kind: PrimaryKind::RubyNecklace,
        name: "Ruby Necklace",
        value: 700_000,
    },
    PrimaryTarget {
        kind: PrimaryKind::BearerBonds,
        name: "Bearer Bonds",
        value: 770_000,
    },
    PrimaryTarget {
        kind: PrimaryKind::PinkDiamond,
        name: "Pink Diamond",
        value: 1_300_000,
    },
    PrimaryTarget {
        kind: PrimaryKind::PantherStatue,
        name: "Panther Statue",
        value: 1_900_000,
    },
];
