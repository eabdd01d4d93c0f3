//! Ports between the simulation use case and the outside world.
//!
//! Adapters implement these traits; the use case only sees the trait objects.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::SimulationConfig;
use crate::domain::{DomainError, World};

/// Failure while reading an initial world
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Unable to read nonexistent file {}", .0.display())]
    Missing(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot read XML file: {0}")]
    Malformed(String),

    /// Required element absent from the document
    #[error("Missing element '{0}'")]
    MissingElement(String),

    #[error("Value of element 'iterations' must be zero or positive number, got {0}")]
    NegativeIterations(i64),

    #[error("Value of element '{element}' must be between 0 and {bound}, got {value}")]
    OutOfRange {
        element: &'static str,
        value: i64,
        bound: String,
    },

    #[error(transparent)]
    InvalidValue(#[from] DomainError),
}

/// Failure while writing generations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("No generations to write")]
    NoGenerations,

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("Writing output file failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Produces the run configuration and generation zero
pub trait InputReader {
    fn read(&self, path: &Path) -> Result<(SimulationConfig, World), InputError>;
}

/// Consumes the full generation history, oldest first
pub trait OutputWriter {
    fn write(&self, path: &Path, generations: &[World]) -> Result<(), OutputError>;
}
