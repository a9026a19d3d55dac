//! Error types surfaced to feed loader callers.
//!
//! # Design
//! The taxonomy is closed: either the exchange never
//! completed (`Connectivity`) or it completed with something that is not a
//! feed (`InvalidData`). Raw transport and JSON errors never reach callers;
//! they are logged and collapsed into one of these two variants.

use thiserror::Error;

/// Classified failure of a single `load` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum LoadError {
    /// The transport failed before a response was received.
    #[error("connectivity error")]
    Connectivity,

    /// A response arrived but its status or body is not a valid feed.
    #[error("invalid data")]
    InvalidData,
}
