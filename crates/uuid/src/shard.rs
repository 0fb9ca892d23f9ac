use std::fmt;
use std::path::{Path, PathBuf};

/// Number of buckets at each level of the shard tree.
pub const SHARD_COUNT: i64 = 128;

/// Two-level shard location derived from a UUID.
///
/// Both components are in `0..SHARD_COUNT`. Displays as `"{dir1}/{dir2}"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ShardPath {
    dir1: u8,
    dir2: u8,
}

impl ShardPath {
    /// Folds two signed 64-bit halves into shard indices.
    ///
    /// Uses the truncating remainder followed by `abs`; the remainder is always in
    /// `-127..=127` so neither step can overflow.
    pub(crate) fn from_halves(most_significant: i64, least_significant: i64) -> Self {
        Self {
            dir1: bucket(most_significant),
            dir2: bucket(least_significant),
        }
    }

    /// First-level directory index, from the most-significant half.
    pub fn dir1(&self) -> u8 {
        self.dir1
    }

    /// Second-level directory index, from the least-significant half.
    pub fn dir2(&self) -> u8 {
        self.dir2
    }

    /// Returns `parent_dir/<dir1>/<dir2>`.
    ///
    /// Pure path arithmetic; nothing is created on disk.
    pub fn under(&self, parent_dir: &Path) -> PathBuf {
        parent_dir
            .join(self.dir1.to_string())
            .join(self.dir2.to_string())
    }
}

fn bucket(half: i64) -> u8 {
    // |half % 128| <= 127
    (half % SHARD_COUNT).unsigned_abs() as u8
}

impl fmt::Display for ShardPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.dir1, self.dir2)
    }
}
