//! Scalar type alias for the simulation.
//!
//! Continuum state (deformation gradients, Jacobians, volumes) accumulates
//! over many steps, so the particle fields are stored in double precision.

/// The floating-point type used for every per-particle scalar field.
pub type Scalar = f64;
