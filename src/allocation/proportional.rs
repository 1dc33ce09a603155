//! Proportional pre-allocation.
//!
//! # Algorithm
//!
//! Visit counts:
//! 1. `avg = bill_total / n`, `ideal = D / n`.
//! 2. `visits[p] = round(price[p] / avg × ideal)`, rounding half away from
//!    zero.
//!
//! Day layout: participants are visited in reverse roster order, cycling
//! repeatedly. Each slot goes to the next participant with visits left;
//! exhausted participants are skipped.
//!
//! Rounded counts need not sum to D. The drift is reported, never
//! corrected: the totals always use the derived counts.

use serde::{Deserialize, Serialize};

use super::{Allocation, Allocator, Strategy, TotalsSummary};
use crate::models::{DayAssignment, Plan, PriceVector, Schedule};

/// How visit counts are laid out over the days of a plan.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutPolicy {
    /// Contiguous day numbers; stops at D days or when every count is spent.
    #[default]
    Compact,
    /// Every rotation slot consumes a day number, including skipped ones,
    /// and the pass stops once that counter passes D. Leaves gaps in the
    /// day numbering and may drop visits.
    CycleCounter,
}

/// Derives the planned visit count of each participant.
pub fn visit_counts(prices: &PriceVector, days: u32) -> Vec<u32> {
    let n = prices.len();
    if n == 0 {
        return Vec::new();
    }
    let avg = prices.average();
    let ideal = f64::from(days) / n as f64;

    prices
        .as_slice()
        .iter()
        .map(|&price| {
            if avg <= 0.0 {
                return 0;
            }
            let ratio = price / avg;
            // f64::round rounds half away from zero
            (ratio * ideal).round().max(0.0) as u32
        })
        .collect()
}

/// Lays visit counts out over `days` days in reverse roster rotation.
pub fn lay_out_days(counts: &[u32], days: u32, policy: LayoutPolicy) -> Schedule {
    match policy {
        LayoutPolicy::Compact => lay_out_compact(counts, days),
        LayoutPolicy::CycleCounter => lay_out_cycle_counter(counts, days),
    }
}

fn lay_out_compact(counts: &[u32], days: u32) -> Schedule {
    let n = counts.len();
    let mut remaining = counts.to_vec();
    let mut left: u64 = remaining.iter().map(|&c| u64::from(c)).sum();
    let mut schedule = Schedule::with_capacity(left.min(u64::from(days)) as usize);
    if n == 0 {
        return schedule;
    }

    let mut cursor = n - 1;
    let mut day = 1;
    while day <= days && left > 0 {
        if remaining[cursor] > 0 {
            schedule.push(DayAssignment::new(day, cursor));
            remaining[cursor] -= 1;
            left -= 1;
            day += 1;
        }
        cursor = if cursor == 0 { n - 1 } else { cursor - 1 };
    }
    schedule
}

fn lay_out_cycle_counter(counts: &[u32], days: u32) -> Schedule {
    let mut remaining = counts.to_vec();
    let mut left: u64 = remaining.iter().map(|&c| u64::from(c)).sum();
    let days = u64::from(days);
    let mut schedule = Schedule::with_capacity(left.min(days) as usize);

    // Counts past `days` before the rotation stops.
    let mut day: u64 = 0;
    'rotation: while day <= days && left > 0 {
        for i in (0..remaining.len()).rev() {
            day += 1;
            if remaining[i] == 0 {
                continue;
            }
            if day > days {
                break 'rotation;
            }
            // day <= days, which came from a u32
            schedule.push(DayAssignment::new(day as u32, i));
            remaining[i] -= 1;
            left -= 1;
        }
    }
    schedule
}

/// Proportional pre-allocation with a reverse-rotation day layout.
#[derive(Debug, Clone, Default)]
pub struct ProportionalAllocator {
    layout: LayoutPolicy,
}

impl ProportionalAllocator {
    /// Creates an allocator with the compact layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the day-layout policy.
    pub fn with_layout(mut self, layout: LayoutPolicy) -> Self {
        self.layout = layout;
        self
    }

    /// Configured layout policy.
    pub fn layout(&self) -> LayoutPolicy {
        self.layout
    }
}

impl Allocator for ProportionalAllocator {
    fn strategy(&self) -> Strategy {
        Strategy::Proportional
    }

    fn allocate(&self, plan: &Plan) -> Allocation {
        let counts = visit_counts(&plan.prices, plan.duration_days);
        let planned: u64 = counts.iter().map(|&c| u64::from(c)).sum();
        if planned != u64::from(plan.duration_days) {
            tracing::warn!(
                planned,
                days = plan.duration_days,
                "rounded visit counts do not add up to the plan duration"
            );
        }

        let schedule = lay_out_days(&counts, plan.duration_days, self.layout);
        let totals = TotalsSummary::calculate(plan, &counts);

        tracing::debug!(
            days = plan.duration_days,
            populated = schedule.len(),
            layout = ?self.layout,
            "proportional allocation complete"
        );

        Allocation {
            strategy: Strategy::Proportional,
            schedule,
            visit_counts: counts,
            totals,
        }
    }
}
