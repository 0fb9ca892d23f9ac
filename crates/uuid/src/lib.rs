//! UUID to shard-path conversion.
//!
//! The storage layer spreads files across a two-level directory tree whose location is derived
//! from a UUID. Each level has [`SHARD_COUNT`] buckets, so a file lives under
//! `<dir1>/<dir2>/` where both components are in `0..=127`.
//!
//! ## Accepted input
//! - Canonical hyphenated form: `123e4567-e89b-12d3-a456-426614174000`
//! - The same 32 hex digits with no hyphens at all: `123e4567e89b12d3a456426614174000`
//! - Hex digits are case-insensitive.
//!
//! An input without any `-` has hyphens inserted at offsets 8, 12, 16 and 20 before parsing.
//! An input containing a `-` anywhere is parsed as given, so a stray hyphen in the wrong
//! position is rejected rather than repaired.
//!
//! ## Shard derivation
//! The 128-bit value is split into its most- and least-significant 64-bit halves (big-endian
//! byte order, matching the text field order) and each half is read as an `i64`:
//!
//! `dir1 = |msb % 128|`, `dir2 = |lsb % 128|`
//!
//! `%` is the truncating signed remainder, so a negative half produces a negative remainder
//! that `abs` folds back. This is not the same as an unsigned modulo: a low half of
//! `0xffff_ffff_ffff_ffff` (`-1`) gives `1`, not `127`.

mod service;
mod shard;

pub use service::{convert, normalise, ShardUuid, Uuid};
pub use shard::{ShardPath, SHARD_COUNT};

/// Error type for UUID conversion.
#[derive(Debug, thiserror::Error)]
pub enum ShardError {
    /// Input without hyphens was too short to split into five groups.
    #[error("malformed input: {0}")]
    MalformedInput(String),
    /// Input does not match the 8-4-4-4-12 hex grammar.
    #[error("failed to parse UUID: {0}")]
    Parse(String),
}

impl ShardError {
    /// Message shown to users for any rejected UUID.
    pub fn user_message(&self) -> &'static str {
        "Invalid UUID"
    }
}

/// Result type for UUID conversion.
pub type ShardResult<T> = Result<T, ShardError>;
