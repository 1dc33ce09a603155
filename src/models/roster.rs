//! Roster model.
//!
//! A roster is the ordered group of participants who share the bill.
//! A participant's identity is its position in the roster; names are
//! carried for rendering only.

use serde::{Deserialize, Serialize};

/// Names used when no roster is configured.
pub const DEFAULT_ROSTER: [&str; 7] = [
    "Jim",
    "Bob",
    "Batman",
    "Spiderman",
    "Hulk",
    "Wonder Woman",
    "Black Panther",
];

/// A roster member, identified by roster position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Zero-based roster position.
    pub index: usize,
    /// Display name.
    pub name: String,
}

/// Ordered group of participants. Immutable for a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    members: Vec<Participant>,
}

impl Roster {
    /// Builds a roster from names in roster order.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let members = names
            .into_iter()
            .enumerate()
            .map(|(index, name)| Participant {
                index,
                name: name.into(),
            })
            .collect();
        Self { members }
    }

    /// Number of participants.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the roster has no participants.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Participant at a roster position.
    pub fn get(&self, index: usize) -> Option<&Participant> {
        self.members.get(index)
    }

    /// Display name at a roster position, or `"?"` for an unknown index.
    pub fn name(&self, index: usize) -> &str {
        self.members.get(index).map_or("?", |p| p.name.as_str())
    }

    /// Participants in roster order.
    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.members.iter()
    }

    /// Names in roster order.
    pub fn names(&self) -> Vec<&str> {
        self.members.iter().map(|p| p.name.as_str()).collect()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new(DEFAULT_ROSTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_positions() {
        let roster = Roster::new(["Ann", "Ben", "Cy"]);
        assert_eq!(roster.len(), 3);
        assert_eq!(roster.get(1).unwrap().name, "Ben");
        assert_eq!(roster.get(1).unwrap().index, 1);
        assert!(roster.get(3).is_none());
    }

    #[test]
    fn test_default_roster() {
        let roster = Roster::default();
        assert_eq!(roster.len(), 7);
        assert_eq!(roster.name(0), "Jim");
        assert_eq!(roster.name(6), "Black Panther");
    }

    #[test]
    fn test_unknown_name() {
        let roster = Roster::new(["Ann"]);
        assert_eq!(roster.name(5), "?");
    }

    #[test]
    fn test_empty_roster() {
        let roster = Roster::new(Vec::<String>::new());
        assert!(roster.is_empty());
        assert!(roster.names().is_empty());
    }
}
