//! Post-planning reports: loot left behind, and predicted vs real gains.

use serde::Serialize;

use crate::catalog::{eligible_quantities, secondary};
use crate::constants::ACCURACY_TOLERANCE_PERCENT;
use crate::payout::recoverable_value;
use crate::types::{BagPlan, LootQuantities};

/// Secondary value the crew could collect if bags were unlimited.
pub fn available_secondary_value(
    quantities: &LootQuantities,
    solo: bool,
    office_paintings: u32,
) -> u64 {
    eligible_quantities(quantities, solo, office_paintings)
        .iter()
        .map(|(kind, count)| secondary(kind).value * count as u64)
        .sum()
}

/// Eligible loot that does not fit in the crew's bags.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LootLoss {
    pub available: u64,
    pub recoverable: u64,
    pub amount: u64,
    /// Percent of `available` left behind; 0 when nothing is available.
    pub percent: f64,
}

pub fn loot_loss(
    quantities: &LootQuantities,
    bags: &[BagPlan],
    solo: bool,
    office_paintings: u32,
) -> LootLoss {
    let available = available_secondary_value(quantities, solo, office_paintings);
    let recoverable = recoverable_value(bags);
    let amount = available.saturating_sub(recoverable);
    let percent = if available > 0 {
        amount as f64 / available as f64 * 100.0
    } else {
        0.0
    };
    LootLoss {
        available,
        recoverable,
        amount,
        percent,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Accuracy {
    OnTarget,
    Above,
    Below,
}

/// One participant (or the crew total) in a predicted-vs-real comparison.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GainRow {
    pub predicted: u64,
    pub real: u64,
    pub diff: i64,
    /// `diff / predicted x 100`; 0 when nothing was predicted.
    pub diff_percent: f64,
    pub accuracy: Accuracy,
}

impl GainRow {
    pub fn new(predicted: u64, real: u64) -> Self {
        let wide = i128::from(real) - i128::from(predicted);
        let diff = i64::try_from(wide).unwrap_or(if wide > 0 { i64::MAX } else { i64::MIN });
        let diff_percent = if predicted > 0 {
            diff as f64 / predicted as f64 * 100.0
        } else {
            0.0
        };
        let accuracy = if diff_percent.abs() < ACCURACY_TOLERANCE_PERCENT {
            Accuracy::OnTarget
        } else if diff > 0 {
            Accuracy::Above
        } else {
            Accuracy::Below
        };
        Self {
            predicted,
            real,
            diff,
            diff_percent,
            accuracy,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GainComparison {
    pub players: Vec<GainRow>,
    pub total: GainRow,
}

/// Compare index-aligned predicted and real gains. A missing entry on either side counts as 0.
pub fn compare_gains(predicted: &[u64], real: &[u64]) -> GainComparison {
    let n = predicted.len().max(real.len());
    let players: Vec<GainRow> = (0..n)
        .map(|i| {
            GainRow::new(
                predicted.get(i).copied().unwrap_or(0),
                real.get(i).copied().unwrap_or(0),
            )
        })
        .collect();
    let total = GainRow::new(
        players
            .iter()
            .fold(0, |sum: u64, row| sum.saturating_add(row.predicted)),
        players
            .iter()
            .fold(0, |sum: u64, row| sum.saturating_add(row.real)),
    );
    GainComparison { players, total }
}
