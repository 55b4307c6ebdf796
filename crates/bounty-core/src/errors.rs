//! Error types for bounty-core.
//!
//! Parsers in this crate signal malformed input with `None`. `CoreError` is
//! reserved for contract violations, where a caller hands over a value that
//! should never have reached it.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A provider name outside the supported set.
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),
}
