//! total weight of each pan and the tri-state tilt of the scale
use crate::balance::ledger::{Side, UnitWeights, WeightedItemLedger};
use log::debug;
use std::cmp::Ordering;
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum BalanceState {
    #[strum(serialize = "Balanced")]
    Balanced,
    #[strum(serialize = "Left Heavier")]
    LeftHeavier,
    #[strum(serialize = "Right Heavier")]
    RightHeavier,
}

impl BalanceState {
    /// side to highlight, None for a level scale
    pub fn heavier_side(self) -> Option<Side> {
        match self {
            BalanceState::Balanced => None,
            BalanceState::LeftHeavier => Some(Side::Left),
            BalanceState::RightHeavier => Some(Side::Right),
        }
    }

    /// state of the mirrored scale
    pub fn swapped(self) -> BalanceState {
        match self {
            BalanceState::Balanced => BalanceState::Balanced,
            BalanceState::LeftHeavier => BalanceState::RightHeavier,
            BalanceState::RightHeavier => BalanceState::LeftHeavier,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            BalanceState::Balanced => "balanced",
            BalanceState::LeftHeavier => "left_heavier",
            BalanceState::RightHeavier => "right_heavier",
        }
    }
}

/// round to `digits` decimal places; non-finite values and values too large to scale pass through
pub fn round_to_digits(value: f64, digits: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(digits as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

// integral weight small enough to be represented exactly in f64
fn exact_integer(weight: f64) -> Option<i128> {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0; // 2^53
    if weight.is_finite() && weight.fract() == 0.0 && weight.abs() <= MAX_EXACT {
        Some(weight as i128)
    } else {
        None
    }
}

/// weighs both pans. `round_digits` makes mathematically equal totals compare equal despite
/// floating point noise in a solved weight like 1/3
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BalanceComparator {
    pub round_digits: Option<u32>,
}

/// totals and outcome of one weighing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weighing {
    pub left_total: f64,
    pub right_total: f64,
    pub state: BalanceState,
}

impl BalanceComparator {
    pub fn new(round_digits: Option<u32>) -> Self {
        BalanceComparator { round_digits }
    }

    /// sum over item types of unit weight * count. Computed exactly in integers when every
    /// weight in play is integral. An item with count 0 contributes 0 even if its weight is
    /// infinite or NaN
    pub fn total_weight(&self, ledger: &WeightedItemLedger, weights: &UnitWeights, side: Side) -> f64 {
        let terms: Vec<(f64, i64)> = ledger
            .counts(side)
            .filter(|(_, count)| *count != 0)
            .map(|(item, count)| (weights.get(item).unwrap_or(0.0), count))
            .collect();

        let exact: Option<i128> = terms.iter().try_fold(0i128, |sum, (w, count)| {
            let w = exact_integer(*w)?;
            sum.checked_add(w.checked_mul(*count as i128)?)
        });
        match exact {
            Some(sum) => sum as f64,
            None => terms.iter().map(|(w, count)| w * *count as f64).sum(),
        }
    }

    /// classify two totals. NaN cannot be ordered: two NaN totals are balanced, a single NaN
    /// total is treated as the heavier pan so that mirroring the scale mirrors the result
    pub fn compare(&self, left: f64, right: f64) -> BalanceState {
        let (left, right) = match self.round_digits {
            Some(digits) => (round_to_digits(left, digits), round_to_digits(right, digits)),
            None => (left, right),
        };
        match left.partial_cmp(&right) {
            Some(Ordering::Equal) => BalanceState::Balanced,
            Some(Ordering::Greater) => BalanceState::LeftHeavier,
            Some(Ordering::Less) => BalanceState::RightHeavier,
            None => match (left.is_nan(), right.is_nan()) {
                (true, true) => BalanceState::Balanced,
                (true, false) => BalanceState::LeftHeavier,
                _ => BalanceState::RightHeavier,
            },
        }
    }

    pub fn weigh(&self, ledger: &WeightedItemLedger, weights: &UnitWeights) -> Weighing {
        let left_total = self.total_weight(ledger, weights, Side::Left);
        let right_total = self.total_weight(ledger, weights, Side::Right);
        let state = self.compare(left_total, right_total);
        debug!("left {} vs right {}: {}", left_total, right_total, state);
        Weighing {
            left_total,
            right_total,
            state,
        }
    }
}
