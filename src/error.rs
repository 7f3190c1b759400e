//! Error types for the solver.
//!
//! Only configuration input can fail at runtime. Contract violations inside
//! the engine (occupied squares, unknown handles, malformed rule sets) panic
//! instead, since no correct caller can trigger them.

use thiserror::Error;

use crate::tree::PositionId;

/// Main error type for the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("unknown rule set '{tag}' (expected 'classic' or 'simple')")]
    UnknownVariant { tag: String },

    #[error("unknown player '{tag}' (expected 'x' or 'o')")]
    UnknownPlayer { tag: String },

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("tree invariant violated at {id}: {reason}")]
    Invariant { id: PositionId, reason: String },
}

/// Convenience alias for results using the crate's `Error`.
pub type Result<T> = std::result::Result<T, Error>;
