//! Error types for graph_poet
//!
//! This module defines the error types used throughout the library.
//! Absence of a vertex is never an error: the graph observers return
//! empty maps for unknown labels instead.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, PoetError>;

/// Main error type for graph_poet
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoetError {
    /// An edge from a vertex to itself was requested.
    /// The affinity graph never stores self-loops; attempting one is a
    /// caller bug, not a recoverable condition.
    #[error("Self-loop rejected: {label}")]
    SelfLoop { label: String },

    /// A corpus file could not be read
    #[error("Corpus unreadable: {message}")]
    Io { message: String },
}

impl PoetError {
    /// Create a self-loop error
    pub fn self_loop(label: impl Into<String>) -> Self {
        Self::SelfLoop {
            label: label.into(),
        }
    }

    /// Create an I/O error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Check if this error is a self-loop rejection
    pub fn is_self_loop(&self) -> bool {
        matches!(self, Self::SelfLoop { .. })
    }
}

impl From<std::io::Error> for PoetError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}
