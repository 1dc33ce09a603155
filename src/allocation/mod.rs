//! Payment allocation strategies.
//!
//! Decides who pays the group bill on each day of a plan.
//!
//! # Strategies
//!
//! - **Greedy balance** (`GreedyAllocator`): simulates the plan day by day.
//!   The participant with the lowest running credit pays next.
//! - **Proportional** (`ProportionalAllocator`): derives a visit count per
//!   participant from price ratios, then lays the counts out over the days
//!   in a reverse-roster rotation.
//!
//! Both strategies share the same input contract (`Plan`) and produce the
//! same output shape (`Allocation`). Neither performs I/O nor fails: a
//! `Plan` that was constructed successfully is always allocatable.
//!
//! # Usage
//!
//! ```
//! use coffee_rota::allocation::{Allocator, LayoutPolicy, Strategy};
//! use coffee_rota::models::{Plan, PriceVector, Roster};
//!
//! let plan = Plan::new(Roster::default(), PriceVector::default(), 14).unwrap();
//! let allocation = Strategy::Greedy.allocator(LayoutPolicy::default()).allocate(&plan);
//! assert_eq!(allocation.schedule.len(), 14);
//! ```

mod greedy;
mod proportional;
mod summary;

pub use greedy::{CreditLedger, GreedyAllocator};
pub use proportional::{lay_out_days, visit_counts, LayoutPolicy, ProportionalAllocator};
pub use summary::{ParticipantTotals, TotalsSummary};

use std::fmt::{self, Debug};

use serde::{Deserialize, Serialize};

use crate::models::{Plan, Schedule};

/// Strategy selector.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Lowest running credit pays next.
    #[default]
    Greedy,
    /// Visit counts proportional to drink price.
    Proportional,
}

impl Strategy {
    /// Builds the allocator for this strategy.
    ///
    /// `layout` only affects the proportional strategy.
    pub fn allocator(self, layout: LayoutPolicy) -> Box<dyn Allocator> {
        match self {
            Strategy::Greedy => Box::new(GreedyAllocator::new()),
            Strategy::Proportional => Box::new(ProportionalAllocator::new().with_layout(layout)),
        }
    }

    /// Whether prices are sorted ascending before allocation unless the
    /// caller says otherwise.
    pub fn sorts_prices_by_default(self) -> bool {
        matches!(self, Strategy::Proportional)
    }

    /// Short lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Greedy => "greedy",
            Strategy::Proportional => "proportional",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of running an allocator over a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// Strategy that produced this allocation.
    pub strategy: Strategy,
    /// Day-by-day payers.
    pub schedule: Schedule,
    /// Planned visits per participant, in roster order.
    pub visit_counts: Vec<u32>,
    /// Payment totals derived from `visit_counts`.
    pub totals: TotalsSummary,
}

/// An allocation strategy.
///
/// Implementations are pure: the same plan always yields the same
/// allocation.
pub trait Allocator: Send + Sync + Debug {
    /// Strategy implemented by this allocator.
    fn strategy(&self) -> Strategy;

    /// Allocates payers over the plan.
    fn allocate(&self, plan: &Plan) -> Allocation;

    /// Strategy name.
    fn name(&self) -> &'static str {
        self.strategy().as_str()
    }
}
