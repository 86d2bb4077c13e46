use crate::chart::types::UnavailableBody;
use thiserror::Error;

/// Errors surfaced by chart assembly and its derived views
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("No body could be resolved ({} provider failures)", .failures.len())]
    NoBodiesResolved { failures: Vec<UnavailableBody> },
    #[error("Unknown analysis step: {0}. Valid steps: 1-A, 1-B, 2-A, 2-B")]
    UnknownStep(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}
