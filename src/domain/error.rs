//! Errors raised while constructing domain values.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DomainError>;

/// Constructive validation failure for a domain value.
///
/// Every variant is raised synchronously by a smart constructor; the domain
/// never recovers from one on its own.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Negative coordinate or species, non-positive grid size
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Cell whose state and species disagree
    #[error("Invalid cell: {0}")]
    InvalidCell(String),

    /// World with no species or with a non-alive cell in its population
    #[error("Invalid world: {0}")]
    InvalidWorld(String),
}

impl DomainError {
    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }

    pub fn invalid_cell(msg: impl Into<String>) -> Self {
        Self::InvalidCell(msg.into())
    }

    pub fn invalid_world(msg: impl Into<String>) -> Self {
        Self::InvalidWorld(msg.into())
    }
}
