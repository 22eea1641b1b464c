//! Error type shared by the parse and encode entry points.
//!
//! Typed access never fails; only text parsing and serialization do.

use thiserror::Error;

use crate::value::Kind;

#[derive(Debug, Error)]
pub enum DynJsonError {
    #[error("invalid JSON: {0}")]
    Syntax(#[from] serde_json::Error),
    #[error("expected a top-level {expected}, found {found}")]
    UnexpectedRoot { expected: Kind, found: Kind },
    #[error("cannot encode non-finite number {0}")]
    NonFiniteNumber(f64),
    #[error("cannot encode a container that contains itself")]
    Cycle,
    #[error("failed to encode JSON: {0}")]
    Encode(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DynJsonError>;
