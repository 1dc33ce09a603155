//! Input validation for planner inputs.
//!
//! Checks configuration integrity before a run and parses the raw text
//! entered for the plan duration and the price list. Detects:
//! - Empty rosters and duplicate names
//! - Default prices that do not match the roster or the accepted range
//! - Default durations outside the accepted range
//! - Inverted bounds and duration bounds above `MAX_DURATION_DAYS`
//!
//! Entered values never reach the allocation core unvalidated: a duration
//! is either accepted or rejected, and a price list is either accepted
//! whole or replaced whole by the configured defaults.

use std::collections::HashSet;

use thiserror::Error;

use crate::config::{DurationBounds, PlannerConfig, PriceBounds, MAX_DURATION_DAYS};
use crate::models::PriceVector;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A configuration validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The roster has no participants.
    EmptyRoster,
    /// Two participants share a name, or a name is blank.
    DuplicateName,
    /// Default prices and roster differ in length.
    PriceCountMismatch,
    /// A default price falls outside the price bounds.
    PriceOutOfRange,
    /// The default duration falls outside the duration bounds.
    DurationOutOfRange,
    /// A bound pair admits no value.
    InvalidBounds,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a planner configuration.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_config(config: &PlannerConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.roster.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyRoster,
            "roster has no participants",
        ));
    }

    let mut names = HashSet::new();
    for name in &config.roster {
        if name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                "roster contains a blank name",
            ));
        } else if !names.insert(name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("duplicate participant name: {name}"),
            ));
        }
    }

    let pb = config.price_bounds;
    if !(pb.min > 0.0 && pb.min <= pb.max) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidBounds,
            format!("price bounds [{}, {}] admit no positive price", pb.min, pb.max),
        ));
    }

    let db = config.duration_bounds;
    if db.min_exclusive >= db.max {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidBounds,
            format!(
                "duration bounds ({}, {}] admit no duration",
                db.min_exclusive, db.max
            ),
        ));
    } else if db.max > MAX_DURATION_DAYS {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidBounds,
            format!(
                "duration bound {} exceeds the ceiling of {MAX_DURATION_DAYS} days",
                db.max
            ),
        ));
    }

    if config.default_prices.len() != config.roster.len() {
        errors.push(ValidationError::new(
            ValidationErrorKind::PriceCountMismatch,
            format!(
                "{} default prices for {} participants",
                config.default_prices.len(),
                config.roster.len()
            ),
        ));
    }

    for &price in &config.default_prices {
        if !pb.contains(price) {
            errors.push(ValidationError::new(
                ValidationErrorKind::PriceOutOfRange,
                format!(
                    "default price {price} outside [{}, {}]",
                    pb.min, pb.max
                ),
            ));
        }
    }

    if !db.contains(i64::from(config.default_duration_days)) {
        errors.push(ValidationError::new(
            ValidationErrorKind::DurationOutOfRange,
            format!(
                "default duration {} outside ({}, {}]",
                config.default_duration_days, db.min_exclusive, db.max
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Rejected duration input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("invalid input: {0:?} is not a whole number")]
    NotANumber(String),
    #[error("{value} is outside the accepted range ({min_exclusive}, {max}]")]
    OutOfRange {
        value: i64,
        min_exclusive: u32,
        max: u32,
    },
}

/// Parses an entered plan duration.
///
/// Blank input means "use the default" and yields `Ok(None)`. The lower
/// bound is exclusive: with the default bounds a duration of 7 is rejected.
pub fn parse_duration(input: &str, bounds: DurationBounds) -> Result<Option<u32>, DurationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value: i64 = trimmed
        .parse()
        .map_err(|_| DurationError::NotANumber(trimmed.to_string()))?;
    if !bounds.contains(value) {
        return Err(DurationError::OutOfRange {
            value,
            min_exclusive: bounds.min_exclusive,
            max: bounds.max,
        });
    }
    // contains() guarantees 0 < value <= u32::MAX
    Ok(Some(value as u32))
}

/// Rejected price-list input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PriceError {
    #[error("invalid number of prices: expected {expected}, found {found}")]
    WrongCount { expected: usize, found: usize },
    #[error("price out of bounds: {0}")]
    OutOfBounds(f64),
    #[error("invalid input: {0}")]
    NotANumber(String),
}

/// Outcome of parsing an entered price list.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceEntry {
    /// Nothing entered.
    Default,
    /// A complete, in-range price list in entry order.
    Custom(PriceVector),
}

/// Parses a whitespace-separated price list.
///
/// Every token must be a finite number inside `bounds`, and there must be
/// exactly `expected` tokens.
pub fn parse_prices(
    input: &str,
    expected: usize,
    bounds: PriceBounds,
) -> Result<PriceEntry, PriceError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(PriceEntry::Default);
    }
    if tokens.len() != expected {
        return Err(PriceError::WrongCount {
            expected,
            found: tokens.len(),
        });
    }

    let mut prices = Vec::with_capacity(expected);
    for token in tokens {
        let value: f64 = token
            .parse()
            .ok()
            .filter(|v: &f64| v.is_finite())
            .ok_or_else(|| PriceError::NotANumber(token.to_string()))?;
        if !bounds.contains(value) {
            return Err(PriceError::OutOfBounds(value));
        }
        prices.push(value);
    }
    Ok(PriceEntry::Custom(PriceVector::new(prices)))
}
