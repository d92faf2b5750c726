//! # mpm-math
//!
//! Linear algebra primitives for the MPM solid setup layer.
//!
//! Provides:
//! - Re-exports of `glam` double-precision types as `Vec3` / `Mat3`
//! - [`Aabb`], the axis-aligned box a solid hands to its grid

pub mod bounds;

// Per-particle vectors and tensors are f64 value types.
pub use glam::{DMat3 as Mat3, DVec3 as Vec3};

pub use bounds::Aabb;
