//! Per-participant payment totals.
//!
//! A read-only view over an allocation, computed once at the end of a run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Visits | Days on which the participant pays the bill |
//! | Total paid | visits × bill total |
//! | Average paid | total paid / plan duration (0 when the plan is empty) |

use serde::{Deserialize, Serialize};

use crate::models::Plan;

/// Payment totals for one participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantTotals {
    /// Roster position.
    pub participant: usize,
    /// Listed price of the participant's own drink.
    pub listed_price: f64,
    /// Number of visits on which this participant pays.
    pub visits: u32,
    /// Total amount paid over the plan.
    pub total_paid: f64,
    /// Amount paid per visit, averaged over the whole plan.
    pub average_paid: f64,
}

/// Payment totals for the whole roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalsSummary {
    /// Plan duration in days.
    pub plan_days: u32,
    /// Bill total for one visit.
    pub bill_total: f64,
    /// One entry per participant, in roster order.
    pub participants: Vec<ParticipantTotals>,
}

impl TotalsSummary {
    /// Computes totals from per-participant visit counts.
    ///
    /// `visit_counts` is indexed by roster position; missing entries count
    /// as zero visits.
    pub fn calculate(plan: &Plan, visit_counts: &[u32]) -> Self {
        let bill_total = plan.bill_total();
        let days = plan.duration_days;

        let participants = plan
            .roster
            .iter()
            .map(|p| {
                let visits = visit_counts.get(p.index).copied().unwrap_or(0);
                let total_paid = f64::from(visits) * bill_total;
                // Empty plan → nothing to average
                let average_paid = if days == 0 {
                    0.0
                } else {
                    total_paid / f64::from(days)
                };
                ParticipantTotals {
                    participant: p.index,
                    listed_price: plan.prices.get(p.index).unwrap_or(0.0),
                    visits,
                    total_paid,
                    average_paid,
                }
            })
            .collect();

        Self {
            plan_days: days,
            bill_total,
            participants,
        }
    }

    /// Sum of all participants' totals.
    pub fn grand_total(&self) -> f64 {
        self.participants.iter().map(|p| p.total_paid).sum()
    }

    /// Sum of all planned visits.
    pub fn total_visits(&self) -> u32 {
        self.participants.iter().map(|p| p.visits).sum()
    }

    /// Totals for one participant.
    pub fn for_participant(&self, participant: usize) -> Option<&ParticipantTotals> {
        self.participants.get(participant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PriceVector, Roster};

    fn make_plan(days: u32) -> Plan {
        Plan::new(
            Roster::new(["A", "B", "C"]),
            PriceVector::new(vec![2.0, 3.0, 5.0]),
            days,
        )
        .unwrap()
    }

    #[test]
    fn test_totals_basic() {
        let summary = TotalsSummary::calculate(&make_plan(10), &[2, 3, 5]);
        assert!((summary.bill_total - 10.0).abs() < 1e-10);

        let c = summary.for_participant(2).unwrap();
        assert_eq!(c.visits, 5);
        assert!((c.total_paid - 50.0).abs() < 1e-10);
        assert!((c.average_paid - 5.0).abs() < 1e-10); // 50 / 10 days
        assert!((c.listed_price - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_grand_total() {
        let summary = TotalsSummary::calculate(&make_plan(10), &[2, 3, 5]);
        assert!((summary.grand_total() - 100.0).abs() < 1e-10);
        assert_eq!(summary.total_visits(), 10);
    }

    #[test]
    fn test_zero_days_no_division() {
        let summary = TotalsSummary::calculate(&make_plan(0), &[0, 0, 0]);
        for p in &summary.participants {
            assert!((p.total_paid - 0.0).abs() < 1e-10);
            assert!((p.average_paid - 0.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_short_visit_counts() {
        let summary = TotalsSummary::calculate(&make_plan(4), &[4]);
        assert_eq!(summary.participants.len(), 3);
        assert_eq!(summary.participants[1].visits, 0);
    }
}
