//! Lookups over the static loot tables in [`crate::constants`].

use crate::constants::*;
use crate::types::{LootKind, LootQuantities, PrimaryKind, PrimaryTarget, SecondaryTarget};

#[inline(always)]
pub fn secondary(kind: LootKind) -> &'static SecondaryTarget {
    &SECONDARY_TARGETS[kind.index()]
}

#[inline(always)]
pub fn primary(kind: PrimaryKind) -> &'static PrimaryTarget {
    &PRIMARY_TARGETS[kind.index()]
}

/// Units of `kind` a lone player may collect out of `count` present.
///
/// Solo-eligible kinds are fully available. For the office kind, only the
/// office copies (capped at [`MAX_OFFICE_PAINTINGS`]) are.
pub fn solo_available(kind: LootKind, count: u32, office_paintings: u32) -> u32 {
    if secondary(kind).solo_eligible {
        count
    } else if kind == OFFICE_LOOT {
        office_paintings.min(MAX_OFFICE_PAINTINGS).min(count)
    } else {
        0
    }
}

/// Units of each kind the crew may collect.
pub fn eligible_quantities(
    quantities: &LootQuantities,
    solo: bool,
    office_paintings: u32,
) -> LootQuantities {
    quantities
        .iter()
        .map(|(kind, count)| {
            let eligible = if solo {
                solo_available(kind, count, office_paintings)
            } else {
                count
            };
            (kind, eligible)
        })
        .filter(|&(_, count)| count > 0)
        .collect()
}
