//! # mpm-material
//!
//! Equation-of-state abstraction and material registry.
//!
//! ## Design
//!
//! The [`EquationOfState`] trait gives the volumetric pressure response
//! of a material as a function of the Jacobian `J = det F`. Implementors
//! are built from a serializable [`EosSpec`].
//!
//! The [`MaterialRegistry`] owns every model under a unique name. Bodies
//! select a model by name and keep an [`EosHandle`], which shares
//! ownership of the model so it outlives the body.

pub mod eos;
pub mod registry;
pub mod traits;

pub use eos::{EosKind, EosSpec, LinearEos, NeoHookeanEos, TaitEos};
pub use registry::{EosHandle, MaterialRegistry};
pub use traits::EquationOfState;
