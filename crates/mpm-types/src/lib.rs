//! # mpm-types
//!
//! Shared types, identifiers, error types, and constants
//! for the material point method solid setup layer.
//!
//! This crate has zero domain logic. It defines the vocabulary
//! that all other MPM crates share.

pub mod constants;
pub mod error;
pub mod ids;
pub mod scalar;

pub use error::{ErrorKind, MpmError, MpmResult};
pub use ids::{EosId, ParticleId};
pub use scalar::Scalar;
