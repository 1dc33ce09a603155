//! Schedule (solution) model.
//!
//! A schedule is the ordered list of who pays on which day. It is produced
//! once by an allocator, rendered, then discarded.

use serde::{Deserialize, Serialize};

/// A complete payment schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Day assignments in ascending day order.
    pub assignments: Vec<DayAssignment>,
}

/// One paying participant on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAssignment {
    /// Day number (1-based).
    pub day: u32,
    /// Roster position of the payer.
    pub participant: usize,
}

impl DayAssignment {
    /// Creates a new day assignment.
    pub fn new(day: u32, participant: usize) -> Self {
        Self { day, participant }
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty schedule with room for `days` entries.
    pub fn with_capacity(days: usize) -> Self {
        Self {
            assignments: Vec::with_capacity(days),
        }
    }

    /// Appends an assignment.
    pub fn push(&mut self, assignment: DayAssignment) {
        self.assignments.push(assignment);
    }

    /// Number of populated days.
    #[inline]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether no day is populated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Assignments in day order.
    pub fn iter(&self) -> impl Iterator<Item = &DayAssignment> {
        self.assignments.iter()
    }

    /// Payer on a given day, if that day is populated.
    pub fn payer_on(&self, day: u32) -> Option<usize> {
        self.assignments
            .iter()
            .find(|a| a.day == day)
            .map(|a| a.participant)
    }

    /// Days on which a participant pays.
    pub fn visits_for(&self, participant: usize) -> Vec<u32> {
        self.assignments
            .iter()
            .filter(|a| a.participant == participant)
            .map(|a| a.day)
            .collect()
    }

    /// Number of paid visits per participant, for a roster of `participants`.
    ///
    /// Assignments referring to positions outside the roster are ignored.
    pub fn visit_counts(&self, participants: usize) -> Vec<u32> {
        let mut counts = vec![0; participants];
        for a in &self.assignments {
            if let Some(c) = counts.get_mut(a.participant) {
                *c += 1;
            }
        }
        counts
    }

    /// Highest populated day number, or 0 when empty.
    pub fn last_day(&self) -> u32 {
        self.assignments.iter().map(|a| a.day).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> Schedule {
        let mut s = Schedule::new();
        s.push(DayAssignment::new(1, 2));
        s.push(DayAssignment::new(2, 0));
        s.push(DayAssignment::new(4, 2));
        s
    }

    #[test]
    fn test_payer_on() {
        let s = sample_schedule();
        assert_eq!(s.payer_on(1), Some(2));
        assert_eq!(s.payer_on(3), None); // gap
        assert_eq!(s.payer_on(4), Some(2));
    }

    #[test]
    fn test_visits_for() {
        let s = sample_schedule();
        assert_eq!(s.visits_for(2), vec![1, 4]);
        assert!(s.visits_for(1).is_empty());
    }

    #[test]
    fn test_visit_counts() {
        let s = sample_schedule();
        assert_eq!(s.visit_counts(3), vec![1, 0, 2]);
        // Out-of-roster positions are ignored
        assert_eq!(s.visit_counts(1), vec![1]);
    }

    #[test]
    fn test_last_day() {
        assert_eq!(sample_schedule().last_day(), 4);
        assert_eq!(Schedule::new().last_day(), 0);
    }

    #[test]
    fn test_empty_schedule() {
        let s = Schedule::new();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
    }
}
