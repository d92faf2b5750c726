//! Strongly-typed identifiers for setup entities.
//!
//! Newtype wrappers prevent accidental mixing of particle indices
//! with registry indices.

use serde::{Deserialize, Serialize};

/// Index into the per-particle arrays of one solid body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticleId(pub u32);

/// Index into the EOS list of a material registry.
///
/// Stable for the registry's lifetime: models are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EosId(pub u16);

impl ParticleId {
    /// Returns the raw index as `usize` for array indexing.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl EosId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for ParticleId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}

impl From<u16> for EosId {
    fn from(val: u16) -> Self {
        Self(val)
    }
}
