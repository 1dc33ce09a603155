//! Rotation planner for shared-cost purchases.
//!
//! A fixed group takes turns paying the whole bill for a recurring purchase
//! (a coffee run). Given each member's usual price and a number of days,
//! the planner decides who pays on which day so that, over the plan, what
//! each member pays tracks what each member consumes.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Roster`, `PriceVector`, `Plan`,
//!   `Schedule`
//! - **`allocation`**: The two strategies (greedy credit balancing and
//!   proportional pre-allocation) and the per-participant totals
//! - **`validation`**: Configuration checks and parsing of entered values
//! - **`input`**: Interactive prompts with local recovery
//! - **`render`**: Text and JSON output to the console or a file
//! - **`config`**: Roster, defaults and accepted ranges
//!
//! # Architecture
//!
//! The allocation core is pure and infallible: it takes a `Plan` and
//! returns an `Allocation`. Everything that can fail (reading input,
//! loading configuration, writing output) lives around it.

pub mod allocation;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod render;
pub mod validation;

pub use error::PlannerError;
