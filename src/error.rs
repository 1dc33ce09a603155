//! Error types surfaced by the planner outside the allocation core.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::PlanError;
use crate::validation::ValidationError;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write schedule: {0}")]
    Write(#[source] std::io::Error),
    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid configuration: {}", join_messages(.0))]
    InvalidConfig(Vec<ValidationError>),
    #[error(transparent)]
    Plan(#[from] PlanError),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
