//! Cost-sharing domain models.
//!
//! Provides the data types for describing a rotation problem (who is in the
//! group, what each of them orders, how long the plan runs) and its solution
//! (who pays on which day).
//!
//! # Domain Mappings
//!
//! | coffee-rota | Coffee run | Team lunch | Car pool |
//! |-------------|------------|------------|----------|
//! | Participant | Drinker | Diner | Passenger |
//! | PriceVector | Drink prices | Meal prices | Trip shares |
//! | Plan | Run plan | Lunch plan | Commute plan |
//! | Schedule | Buying rota | Paying rota | Driving rota |

mod plan;
mod prices;
mod roster;
mod schedule;

pub use plan::{Plan, PlanError};
pub use prices::{PriceVector, DEFAULT_PRICES};
pub use roster::{Participant, Roster, DEFAULT_ROSTER};
pub use schedule::{DayAssignment, Schedule};
