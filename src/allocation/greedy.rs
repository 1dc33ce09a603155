//! Greedy credit-balancing allocator.
//!
//! # Algorithm
//!
//! 1. Every participant starts with zero credit. The participant with the
//!    priciest drink pays first.
//! 2. Each day the chosen payer covers the whole bill. Every participant's
//!    credit drops by their own drink price; the payer's credit also rises
//!    by the bill total.
//! 3. The participant with the lowest credit after the update pays next.
//!    Ties go to the earliest roster position.
//!
//! Credits always sum to zero after a full day, so a negative credit means
//! "owes the group" and a positive one means "is owed".
//!
//! # Complexity
//! O(D × n) for D days and n participants.

use serde::{Deserialize, Serialize};

use super::{Allocation, Allocator, Strategy, TotalsSummary};
use crate::config::MAX_DURATION_DAYS;
use crate::models::{DayAssignment, Plan, PriceVector, Schedule};

/// Running credit per participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditLedger {
    credits: Vec<f64>,
}

impl CreditLedger {
    /// Creates a ledger with zero credit for `participants` members.
    pub fn new(participants: usize) -> Self {
        Self {
            credits: vec![0.0; participants],
        }
    }

    /// Applies one visit: everyone pays for their own drink, the payer is
    /// credited with the full bill.
    pub fn settle_day(&mut self, payer: usize, prices: &PriceVector, bill_total: f64) {
        for (i, credit) in self.credits.iter_mut().enumerate() {
            *credit -= prices.get(i).unwrap_or(0.0);
            if i == payer {
                *credit += bill_total;
            }
        }
    }

    /// Position of the lowest credit; ties go to the earliest position.
    pub fn lowest(&self) -> usize {
        let mut min_index = 0;
        let mut min = f64::INFINITY;
        for (i, &credit) in self.credits.iter().enumerate() {
            if credit < min {
                min = credit;
                min_index = i;
            }
        }
        min_index
    }

    /// Credit at a roster position.
    pub fn credit(&self, participant: usize) -> Option<f64> {
        self.credits.get(participant).copied()
    }

    /// All credits in roster order.
    pub fn credits(&self) -> &[f64] {
        &self.credits
    }

    /// Sum of all credits.
    pub fn sum(&self) -> f64 {
        self.credits.iter().sum()
    }
}

/// Greedy lowest-credit-pays-next allocator.
///
/// # Example
///
/// ```
/// use coffee_rota::allocation::{Allocator, GreedyAllocator};
/// use coffee_rota::models::{Plan, PriceVector, Roster};
///
/// let plan = Plan::new(Roster::default(), PriceVector::default(), 1).unwrap();
/// let allocation = GreedyAllocator::new().allocate(&plan);
/// // The first of the two 6.00 drinks pays first.
/// assert_eq!(allocation.schedule.payer_on(1), Some(5));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyAllocator {
    initial_payer: Option<usize>,
}

impl GreedyAllocator {
    /// Creates an allocator that starts with the priciest drink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the first payer.
    pub fn with_initial_payer(mut self, participant: usize) -> Self {
        self.initial_payer = Some(participant);
        self
    }

    /// Runs the simulation and returns the schedule and final ledger.
    pub fn simulate(&self, plan: &Plan) -> (Schedule, CreditLedger) {
        let n = plan.participant_count();
        let bill_total = plan.bill_total();
        let mut ledger = CreditLedger::new(n);
        let capacity = plan.duration_days.min(MAX_DURATION_DAYS) as usize;
        let mut schedule = Schedule::with_capacity(capacity);

        let mut next_payer = self
            .initial_payer
            .filter(|&p| p < n)
            .unwrap_or_else(|| plan.prices.priciest_index());

        for day in 1..=plan.duration_days {
            let payer = next_payer;
            schedule.push(DayAssignment::new(day, payer));
            ledger.settle_day(payer, &plan.prices, bill_total);
            next_payer = ledger.lowest();

            tracing::trace!(
                day,
                payer,
                next_payer,
                credit = ledger.credit(payer).unwrap_or_default(),
                "settled visit"
            );
        }

        (schedule, ledger)
    }
}

impl Allocator for GreedyAllocator {
    fn strategy(&self) -> Strategy {
        Strategy::Greedy
    }

    fn allocate(&self, plan: &Plan) -> Allocation {
        let (schedule, ledger) = self.simulate(plan);
        let visit_counts = schedule.visit_counts(plan.participant_count());
        let totals = TotalsSummary::calculate(plan, &visit_counts);

        tracing::debug!(
            days = plan.duration_days,
            participants = plan.participant_count(),
            credit_sum = ledger.sum(),
            "greedy allocation complete"
        );

        Allocation {
            strategy: Strategy::Greedy,
            schedule,
            visit_counts,
            totals,
        }
    }
}
