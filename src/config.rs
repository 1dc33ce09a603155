//! Planner configuration.
//!
//! Collects the values the planner would otherwise hard-code: the roster,
//! the fallback prices and duration, the accepted input ranges and the
//! output file name. Every field has a default, so a configuration file
//! only needs to name what it changes.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;
use crate::models::{PriceVector, Roster, DEFAULT_PRICES, DEFAULT_ROSTER};
use crate::validation::{validate_config, ValidationError};

/// Default plan duration in days.
pub const DEFAULT_DURATION_DAYS: u32 = 68;

/// Hard ceiling on `DurationBounds::max`, one schedule entry per day.
pub const MAX_DURATION_DAYS: u32 = 36_500;

/// Default output file name.
pub const DEFAULT_OUTPUT_FILE: &str = "CoffeeSchedule.txt";

/// Accepted plan durations: `min_exclusive < days <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationBounds {
    /// Largest rejected duration below the range.
    pub min_exclusive: u32,
    /// Largest accepted duration.
    pub max: u32,
}

impl DurationBounds {
    /// Whether `days` is an accepted duration.
    pub fn contains(&self, days: i64) -> bool {
        days > i64::from(self.min_exclusive) && days <= i64::from(self.max)
    }
}

impl Default for DurationBounds {
    fn default() -> Self {
        Self {
            min_exclusive: 7,
            max: 3000,
        }
    }
}

/// Accepted drink prices: `min <= price <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBounds {
    pub min: f64,
    pub max: f64,
}

impl PriceBounds {
    /// Whether `price` is an accepted drink price.
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceBounds {
    fn default() -> Self {
        Self { min: 1.0, max: 20.0 }
    }
}

/// Planner configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerConfig {
    /// Participant names in roster order.
    pub roster: Vec<String>,
    /// Prices used when entered prices are missing or invalid.
    pub default_prices: Vec<f64>,
    /// Duration used when no duration is entered.
    pub default_duration_days: u32,
    /// Accepted durations.
    pub duration_bounds: DurationBounds,
    /// Accepted prices.
    pub price_bounds: PriceBounds,
    /// File written when output goes to a file.
    pub output_file: PathBuf,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            roster: DEFAULT_ROSTER.iter().map(|s| s.to_string()).collect(),
            default_prices: DEFAULT_PRICES.to_vec(),
            default_duration_days: DEFAULT_DURATION_DAYS,
            duration_bounds: DurationBounds::default(),
            price_bounds: PriceBounds::default(),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

impl PlannerConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, PlannerError> {
        let config: Self = serde_json::from_str(json)?;
        config.validated()
    }

    /// Reads and validates a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self, PlannerError> {
        let json = fs::read_to_string(path).map_err(|source| PlannerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Returns the configuration if it passes validation.
    pub fn validated(self) -> Result<Self, PlannerError> {
        validate_config(&self).map_err(PlannerError::InvalidConfig)?;
        Ok(self)
    }

    /// Checks the configuration, collecting every problem found.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        validate_config(self)
    }

    /// Roster built from the configured names.
    pub fn roster(&self) -> Roster {
        Roster::new(self.roster.iter().cloned())
    }

    /// Fallback price vector.
    pub fn default_prices(&self) -> PriceVector {
        PriceVector::new(self.default_prices.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = PlannerConfig::default();
        assert_eq!(config.roster.len(), 7);
        assert_eq!(config.default_prices, vec![3.0, 4.0, 5.0, 5.0, 5.0, 6.0, 6.0]);
        assert_eq!(config.default_duration_days, 68);
        assert_eq!(config.output_file, PathBuf::from("CoffeeSchedule.txt"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_duration_bounds_exclusive_minimum() {
        let bounds = DurationBounds::default();
        assert!(!bounds.contains(7));
        assert!(bounds.contains(8));
        assert!(bounds.contains(3000));
        assert!(!bounds.contains(3001));
        assert!(!bounds.contains(-5));
    }

    #[test]
    fn test_price_bounds_inclusive() {
        let bounds = PriceBounds::default();
        assert!(bounds.contains(1.0));
        assert!(bounds.contains(20.0));
        assert!(!bounds.contains(0.99));
        assert!(!bounds.contains(20.01));
        assert!(!bounds.contains(f64::NAN));
    }

    #[test]
    fn test_partial_json() {
        let config = PlannerConfig::from_json(
            r#"{"roster": ["Ann", "Ben", "Cy"], "default_prices": [2, 3, 4]}"#,
        )
        .unwrap();
        assert_eq!(config.roster().len(), 3);
        assert_eq!(config.default_duration_days, 68);
        assert!((config.default_prices().total() - 9.0).abs() < 1e-10);
    }

    #[test]
    fn test_json_rejects_mismatched_defaults() {
        let err = PlannerConfig::from_json(r#"{"roster": ["Ann", "Ben"]}"#).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidConfig(_)));
    }

    #[test]
    fn test_json_rejects_unbounded_duration() {
        let err = PlannerConfig::from_json(
            r#"{"duration_bounds": {"min_exclusive": 7, "max": 4294967295}}"#,
        )
        .unwrap_err();
        match err {
            PlannerError::InvalidConfig(errors) => assert!(errors
                .iter()
                .any(|e| e.kind == crate::validation::ValidationErrorKind::InvalidBounds)),
            other => panic!("expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn test_json_rejects_unknown_field() {
        let err = PlannerConfig::from_json(r#"{"rooster": []}"#).unwrap_err();
        assert!(matches!(err, PlannerError::Json(_)));
    }
}
