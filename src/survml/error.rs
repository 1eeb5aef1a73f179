//! Error types shared across the transform pipelines

use std::fmt;

/// Error that can occur while transforming a selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// The question header pattern did not match; fatal for the selection
    MissingLabel,
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::MissingLabel => write!(f, "Invalid label / title setup"),
        }
    }
}

impl std::error::Error for TransformError {}
