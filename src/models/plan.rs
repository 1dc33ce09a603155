//! Plan: the common input contract shared by every allocation strategy.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{PriceVector, Roster};

/// Errors raised while assembling a plan.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    #[error("roster has no participants")]
    EmptyRoster,
    #[error("roster has {roster} participants but {prices} prices were given")]
    LengthMismatch { roster: usize, prices: usize },
}

/// Roster, prices and plan duration for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Participants in roster order.
    pub roster: Roster,
    /// One price per participant, in roster order.
    pub prices: PriceVector,
    /// Number of visit-days to plan.
    pub duration_days: u32,
}

impl Plan {
    /// Creates a plan, checking that every participant has a price.
    pub fn new(roster: Roster, prices: PriceVector, duration_days: u32) -> Result<Self, PlanError> {
        if roster.is_empty() {
            return Err(PlanError::EmptyRoster);
        }
        if roster.len() != prices.len() {
            return Err(PlanError::LengthMismatch {
                roster: roster.len(),
                prices: prices.len(),
            });
        }
        Ok(Self {
            roster,
            prices,
            duration_days,
        })
    }

    /// Number of participants.
    #[inline]
    pub fn participant_count(&self) -> usize {
        self.roster.len()
    }

    /// Bill total for one visit.
    #[inline]
    pub fn bill_total(&self) -> f64 {
        self.prices.total()
    }
}
