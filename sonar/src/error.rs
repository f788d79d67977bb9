//! Error types for loading readings

use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a reading sequence
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to open input file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read input file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("Line {line}: {value:?} is not a base-10 integer")]
    Parse {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

impl LoadError {
    /// Line number (1-based) of a parse failure
    pub fn line(&self) -> Option<usize> {
        match self {
            LoadError::Parse { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Check if the input file could not be opened at all
    pub fn is_missing_input(&self) -> bool {
        matches!(self, LoadError::Open { .. })
    }
}
