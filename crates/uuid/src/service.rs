//! Normalisation, parsing and shard derivation for UUID strings.

use crate::shard::ShardPath;
use crate::{ShardError, ShardResult};
use std::borrow::Cow;
use std::{fmt, str::FromStr};

/// Re-exported for convenience.
pub use ::uuid::Uuid;

/// Hex digit count of each hyphen-separated group in the canonical text form.
const GROUP_LENGTHS: [usize; 5] = [8, 4, 4, 4, 12];

/// Offsets at which hyphens are inserted into an unhyphenated input.
const HYPHEN_OFFSETS: [usize; 4] = [8, 12, 16, 20];

/// A UUID accepted by the canonical 8-4-4-4-12 grammar.
///
/// Once constructed the value is known to have come from well-formed text, so shard derivation
/// cannot fail.
///
/// # Construction
/// - [`ShardUuid::parse_canonical`] accepts only the hyphenated form.
/// - [`FromStr`] additionally accepts the 32-digit form without hyphens, via [`normalise`].
///
/// # Display format
/// Lowercase hyphenated, e.g. `123e4567-e89b-12d3-a456-426614174000`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ShardUuid(Uuid);

impl ShardUuid {
    /// Parses a UUID in canonical hyphenated text form.
    ///
    /// The input must be five groups of 8, 4, 4, 4 and 12 hex digits separated by `-`. Hex digits
    /// may be upper or lower case. Braced, URN and unhyphenated forms are rejected here.
    ///
    /// # Errors
    ///
    /// Returns [`ShardError::Parse`] if the group count, any group length, or any digit is wrong.
    pub fn parse_canonical(input: &str) -> ShardResult<Self> {
        let groups: Vec<&str> = input.split('-').collect();
        if groups.len() != GROUP_LENGTHS.len() {
            return Err(ShardError::Parse(format!(
                "expected {} hyphen-separated groups, got {}: '{}'",
                GROUP_LENGTHS.len(),
                groups.len(),
                input
            )));
        }

        let mut value: u128 = 0;
        for (index, (group, &expected)) in groups.iter().zip(GROUP_LENGTHS.iter()).enumerate() {
            if group.len() != expected {
                return Err(ShardError::Parse(format!(
                    "group {} must be {} hex digits, got {}: '{}'",
                    index + 1,
                    expected,
                    group.len(),
                    input
                )));
            }
            for byte in group.bytes() {
                let digit = char::from(byte).to_digit(16).ok_or_else(|| {
                    ShardError::Parse(format!(
                        "non-hex character {:?} in group {}: '{}'",
                        char::from(byte),
                        index + 1,
                        input
                    ))
                })?;
                value = (value << 4) | u128::from(digit);
            }
        }

        Ok(Self(Uuid::from_u128(value)))
    }

    /// Returns the underlying `uuid::Uuid`.
    pub fn uuid(&self) -> Uuid {
        self.0
    }

    /// Bytes 0..8 read as a big-endian `i64`.
    pub fn most_significant_bits(&self) -> i64 {
        (self.0.as_u128() >> 64) as u64 as i64
    }

    /// Bytes 8..16 read as a big-endian `i64`.
    pub fn least_significant_bits(&self) -> i64 {
        self.0.as_u128() as u64 as i64
    }

    /// Derives the two-level shard location for this UUID.
    pub fn shard_path(&self) -> ShardPath {
        ShardPath::from_halves(self.most_significant_bits(), self.least_significant_bits())
    }
}

impl fmt::Display for ShardUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for ShardUuid {
    type Err = ShardError;

    /// Normalises then parses, accepting the same inputs as [`convert`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = normalise(s)?;
        ShardUuid::parse_canonical(&normalised)
    }
}

/// Inserts hyphens into an input that has none.
///
/// If `input` contains a `-` anywhere it is returned unchanged, whether or not the hyphens are in
/// the canonical positions. Otherwise it is split at byte offsets 8, 12, 16 and 20 and the five
/// pieces are joined with `-`. The last piece is whatever remains, possibly empty.
///
/// # Errors
///
/// Returns [`ShardError::MalformedInput`] if the input is shorter than 20 bytes, or if an offset
/// falls inside a multi-byte character.
pub fn normalise(input: &str) -> ShardResult<Cow<'_, str>> {
    if input.contains('-') {
        return Ok(Cow::Borrowed(input));
    }

    let mut pieces = Vec::with_capacity(HYPHEN_OFFSETS.len() + 1);
    let mut start = 0;
    for &end in &HYPHEN_OFFSETS {
        let piece = input.get(start..end).ok_or_else(|| {
            ShardError::MalformedInput(format!(
                "cannot split at offset {} to insert hyphens: '{}'",
                end, input
            ))
        })?;
        pieces.push(piece);
        start = end;
    }
    // start is a char boundary here, so this slice always succeeds
    pieces.push(&input[start..]);

    Ok(Cow::Owned(pieces.join("-")))
}

/// Converts a UUID string into its shard location.
///
/// Runs [`normalise`], [`ShardUuid::parse_canonical`] and [`ShardUuid::shard_path`] in turn.
pub fn convert(input: &str) -> ShardResult<ShardPath> {
    let normalised = normalise(input).inspect_err(|e| tracing::debug!(error = %e, "rejected"))?;
    if let Cow::Owned(ref inserted) = normalised {
        tracing::debug!(input, normalised = %inserted, "inserted hyphens");
    }

    let uuid = ShardUuid::parse_canonical(&normalised)
        .inspect_err(|e| tracing::debug!(error = %e, "rejected"))?;
    let shard = uuid.shard_path();
    tracing::debug!(
        uuid = %uuid,
        msb = uuid.most_significant_bits(),
        lsb = uuid.least_significant_bits(),
        %shard,
        "derived shard path"
    );

    Ok(shard)
}
