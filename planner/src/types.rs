//! Core data structures: loot kinds, catalog records, quantities and bag plans.
//!
//! Catalog records ([`SecondaryTarget`], [`PrimaryTarget`]) are `'static`
//! table rows defined in [`crate::constants`]. Everything else is built fresh
//! per computation and owned by the caller.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::PlannerError;

/// Secondary loot kind. Declaration order is catalog order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LootKind {
    Cash,
    Weed,
    Paintings,
    Cocaine,
    Gold,
}

impl LootKind {
    pub const ALL: [LootKind; SECONDARY_COUNT] = [
        LootKind::Cash,
        LootKind::Weed,
        LootKind::Paintings,
        LootKind::Cocaine,
        LootKind::Gold,
    ];

    /// Row of this kind in [`SECONDARY_TARGETS`].
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn id(self) -> &'static str {
        match self {
            LootKind::Cash => "cash",
            LootKind::Weed => "weed",
            LootKind::Paintings => "paintings",
            LootKind::Cocaine => "cocaine",
            LootKind::Gold => "gold",
        }
    }
}

impl fmt::Display for LootKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for LootKind {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LootKind::ALL
            .into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| PlannerError::UnknownLoot(s.to_string()))
    }
}

/// Primary objective. Declaration order is catalog order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryKind {
    Tequila,
    RubyNecklace,
    BearerBonds,
    PinkDiamond,
    PantherStatue,
}

impl PrimaryKind {
    pub const ALL: [PrimaryKind; PRIMARY_COUNT] = [
        PrimaryKind::Tequila,
        PrimaryKind::RubyNecklace,
        PrimaryKind::BearerBonds,
        PrimaryKind::PinkDiamond,
        PrimaryKind::PantherStatue,
    ];

    /// Row of this target in [`PRIMARY_TARGETS`].
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn id(self) -> &'static str {
        match self {
            PrimaryKind::Tequila => "tequila",
            PrimaryKind::RubyNecklace => "ruby_necklace",
            PrimaryKind::BearerBonds => "bearer_bonds",
            PrimaryKind::PinkDiamond => "pink_diamond",
            PrimaryKind::PantherStatue => "panther_statue",
        }
    }
}

impl fmt::Display for PrimaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for PrimaryKind {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrimaryKind::ALL
            .into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| PlannerError::UnknownPrimary(s.to_string()))
    }
}

/// Empirical +1 click adjustment applied when a computed action count is
/// not a multiple of 10.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionCorrection {
    None,
    Always,
    /// Only when more than one player is in the heist.
    CrewOnly,
}

impl ActionCorrection {
    pub fn applies(self, crew: bool) -> bool {
        match self {
            ActionCorrection::None => false,
            ActionCorrection::Always => true,
            ActionCorrection::CrewOnly => crew,
        }
    }
}

/// Static catalog row for a secondary loot kind.
#[derive(Debug, Serialize)]
pub struct SecondaryTarget {
    pub kind: LootKind,
    pub name: &'static str,
    /// GTA$ per full unit (one stack, one painting).
    pub value: u64,
    /// Fraction of a bag consumed by one full unit.
    pub weight: f64,
    /// Percent of one unit collected after each action, strictly increasing, ending at 100.
    pub pickup_steps: &'static [f64],
    /// `false` when a lone player cannot collect this loot.
    pub solo_eligible: bool,
    /// `false` when only whole units can be taken.
    pub divisible: bool,
    pub correction: ActionCorrection,
}

impl SecondaryTarget {
    /// Percent of a bag consumed by one full unit.
    #[inline(always)]
    pub fn capacity(&self) -> f64 {
        self.weight * BAG_CAPACITY
    }

    /// GTA$ per percent of bag: the greedy sort key.
    #[inline(always)]
    pub fn density(&self) -> f64 {
        self.value as f64 / self.weight
    }

    /// Actions needed for one full unit.
    #[inline(always)]
    pub fn actions_per_unit(&self) -> u32 {
        self.pickup_steps.len() as u32
    }
}

/// Static catalog row for a primary objective.
#[derive(Debug, Serialize)]
pub struct PrimaryTarget {
    pub kind: PrimaryKind,
    pub name: &'static str,
    pub value: u64,
}

/// Full units of each secondary loot kind present on the island.
///
/// Kinds absent from the map count as zero. Iteration follows catalog order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LootQuantities(BTreeMap<LootKind, u32>);

impl LootQuantities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, kind: LootKind, count: u32) -> Self {
        self.set(kind, count);
        self
    }

    pub fn get(&self, kind: LootKind) -> u32 {
        self.0.get(&kind).copied().unwrap_or(0)
    }

    pub fn set(&mut self, kind: LootKind, count: u32) {
        self.0.insert(kind, count);
    }

    /// Non-zero entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (LootKind, u32)> + '_ {
        self.0
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(&kind, &count)| (kind, count))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

impl FromIterator<(LootKind, u32)> for LootQuantities {
    fn from_iter<I: IntoIterator<Item = (LootKind, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One allocation line in a player's bag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BagItem {
    pub kind: LootKind,
    /// Units taken; always integral for indivisible kinds.
    pub units: f64,
    /// Clicks or grabs needed in game.
    pub action_count: u32,
    /// Percent of the bag used, exactly `capacity() * units`.
    pub capacity_used: f64,
    pub value: u64,
}

/// Allocation for one player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BagPlan {
    pub player_index: usize,
    pub capacity_remaining: f64,
    pub items: Vec<BagItem>,
    pub total_value: u64,
}

impl BagPlan {
    pub fn empty(player_index: usize) -> Self {
        Self {
            player_index,
            capacity_remaining: BAG_CAPACITY,
            items: Vec::new(),
            total_value: 0,
        }
    }

    /// Append an item, consuming capacity (floored at 0) and adding its value.
    pub fn push(&mut self, item: BagItem) {
        self.capacity_remaining = (self.capacity_remaining - item.capacity_used).max(0.0);
        self.total_value += item.value;
        self.items.push(item);
    }

    pub fn capacity_used(&self) -> f64 {
        self.items.iter().map(|item| item.capacity_used).sum()
    }

    /// Units of `kind` in this bag.
    pub fn units_of(&self, kind: LootKind) -> f64 {
        self.items
            .iter()
            .filter(|item| item.kind == kind)
            .map(|item| item.units)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Percent of the net payout per participant, index-aligned with the crew.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ShareSet(pub Vec<f64>);

impl ShareSet {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }
}
