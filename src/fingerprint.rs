//! Document fingerprints
//!
//! A fingerprint is the 64-bit FNV-1a hash of a document's raw path bytes. It
//! is stable across restarts for the same path spelling, but two spellings of
//! the same physical file (`a/../b.pdf` vs `b.pdf`) produce two fingerprints.

use std::fmt;
use std::num::ParseIntError;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Deterministic identifier of an archived document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Fingerprint(u64);

impl Fingerprint {
    /// Fingerprint a path by its platform byte encoding
    pub fn of(path: impl AsRef<Path>) -> Self {
        Self::of_bytes(path.as_ref().as_os_str().as_encoded_bytes())
    }

    /// Fingerprint a path string
    pub fn of_str(path: &str) -> Self {
        Self::of_bytes(path.as_bytes())
    }

    fn of_bytes(bytes: &[u8]) -> Self {
        let hash = bytes.iter().fold(FNV_OFFSET_BASIS, |hash, byte| {
            (hash ^ u64::from(*byte)).wrapping_mul(FNV_PRIME)
        });
        Self(hash)
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for Fingerprint {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Fingerprint {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}
