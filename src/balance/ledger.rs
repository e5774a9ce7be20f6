//! per-side item counts of the scale and the unit weight of every item type
use crate::errors::BalanceError;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

/// +1 or -1 request coming from the item buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum Direction {
    #[strum(serialize = "+")]
    Increment,
    #[strum(serialize = "-")]
    Decrement,
}

impl Direction {
    pub fn delta(self) -> i64 {
        match self {
            Direction::Increment => 1,
            Direction::Decrement => -1,
        }
    }
}

/// Signed count of every item type on both sides. Counts below zero are "negative" items,
/// nothing is bounded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedItemLedger {
    items: Vec<String>,
    // [left, right], each in the order of `items`
    counts: [Vec<i64>; 2],
}

impl WeightedItemLedger {
    pub fn new(items: &[String]) -> Self {
        WeightedItemLedger {
            items: items.to_vec(),
            counts: [vec![0; items.len()], vec![0; items.len()]],
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    fn item_index(&self, item: &str) -> Result<usize, BalanceError> {
        self.items
            .iter()
            .position(|name| name == item)
            .ok_or_else(|| BalanceError::UnknownItem(item.to_string()))
    }

    pub fn count(&self, side: Side, item: &str) -> Option<i64> {
        let i = self.item_index(item).ok()?;
        Some(self.counts[side.index()][i])
    }

    /// (item, count) pairs of one side in item order
    pub fn counts(&self, side: Side) -> impl Iterator<Item = (&str, i64)> {
        self.items
            .iter()
            .map(String::as_str)
            .zip(self.counts[side.index()].iter().copied())
    }

    pub fn set(&mut self, side: Side, item: &str, count: i64) -> Result<(), BalanceError> {
        let i = self.item_index(item)?;
        self.counts[side.index()][i] = count;
        Ok(())
    }

    pub fn apply(&mut self, side: Side, item: &str, direction: Direction) -> Result<(), BalanceError> {
        let i = self.item_index(item)?;
        let count = &mut self.counts[side.index()][i];
        *count = count.saturating_add(direction.delta());
        Ok(())
    }

    pub fn increment(&mut self, side: Side, item: &str) -> Result<(), BalanceError> {
        self.apply(side, item, Direction::Increment)
    }

    pub fn decrement(&mut self, side: Side, item: &str) -> Result<(), BalanceError> {
        self.apply(side, item, Direction::Decrement)
    }

    /// every count on both sides back to zero
    pub fn reset(&mut self) {
        for side in self.counts.iter_mut() {
            side.iter_mut().for_each(|c| *c = 0);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().flatten().all(|c| *c == 0)
    }

    pub fn swapped(&self) -> WeightedItemLedger {
        let [left, right] = self.counts.clone();
        WeightedItemLedger {
            items: self.items.clone(),
            counts: [right, left],
        }
    }
}

/// unit weight of every item type, in display order
#[derive(Debug, Clone, PartialEq)]
pub struct UnitWeights {
    weights: Vec<(String, f64)>,
}

impl UnitWeights {
    pub fn new(weights: Vec<(String, f64)>) -> Self {
        UnitWeights { weights }
    }

    pub fn get(&self, item: &str) -> Option<f64> {
        self.weights
            .iter()
            .find(|(name, _)| name == item)
            .map(|(_, w)| *w)
    }

    pub fn set(&mut self, item: &str, weight: f64) -> Result<(), BalanceError> {
        match self.weights.iter_mut().find(|(name, _)| name == item) {
            Some((_, w)) => {
                *w = weight;
                Ok(())
            }
            None => Err(BalanceError::UnknownItem(item.to_string())),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(name, w)| (name.as_str(), *w))
    }
}
