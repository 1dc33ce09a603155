//! Price vector model.
//!
//! One listed drink price per roster position. The bill for a visit is the
//! sum of all prices and is always paid in full by a single participant.

use serde::{Deserialize, Serialize};

/// Prices used when no valid price list is supplied.
pub const DEFAULT_PRICES: [f64; 7] = [3.0, 4.0, 5.0, 5.0, 5.0, 6.0, 6.0];

/// Ordered drink prices, one per participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceVector(Vec<f64>);

impl PriceVector {
    /// Wraps prices in roster order.
    pub fn new(prices: Vec<f64>) -> Self {
        Self(prices)
    }

    /// Number of prices.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no prices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Price at a roster position.
    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    /// Prices as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Bill total: the sum of all prices.
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Average price per drink. Zero for an empty vector.
    pub fn average(&self) -> f64 {
        if self.0.is_empty() {
            0.0
        } else {
            self.total() / self.0.len() as f64
        }
    }

    /// Position of the priciest drink.
    ///
    /// Scans left to right with a strict `>`, so ties go to the earliest
    /// position. Returns 0 for an empty vector.
    pub fn priciest_index(&self) -> usize {
        let mut max_index = 0;
        let mut max = match self.0.first() {
            Some(&p) => p,
            None => return 0,
        };
        for (i, &price) in self.0.iter().enumerate().skip(1) {
            if price > max {
                max = price;
                max_index = i;
            }
        }
        max_index
    }

    /// Copy sorted ascending.
    pub fn sorted_ascending(&self) -> Self {
        let mut prices = self.0.clone();
        prices.sort_by(|a, b| a.total_cmp(b));
        Self(prices)
    }
}

impl Default for PriceVector {
    fn default() -> Self {
        Self(DEFAULT_PRICES.to_vec())
    }
}

impl From<Vec<f64>> for PriceVector {
    fn from(prices: Vec<f64>) -> Self {
        Self(prices)
    }
}
