//! Equation-of-state trait: the core material abstraction.
//!
//! Every EOS model implements this trait, so a solid body can hold any
//! of them behind one handle.

use std::fmt::Debug;

use crate::eos::EosKind;

/// Trait for equation-of-state models.
///
/// Pressure follows the sign convention `p > 0` in compression, so
/// `pressure(J)` is positive for `J < 1` and zero at the reference state.
/// The Jacobian of a physical deformation is positive; models are only
/// defined for `J > 0`.
pub trait EquationOfState: Debug + Send + Sync {
    /// Which family this model belongs to.
    fn kind(&self) -> EosKind;

    /// Reference density.
    fn rho0(&self) -> f64;

    /// Bulk modulus.
    fn bulk_modulus(&self) -> f64;

    /// Pressure at Jacobian `j > 0`.
    fn pressure(&self, j: f64) -> f64;

    /// Current density for Jacobian `j > 0`: `rho0 / J`.
    fn density(&self, j: f64) -> f64 {
        debug_assert!(j > 0.0, "density needs J > 0, got {j}");
        self.rho0() / j
    }

    /// Returns the name of this model family.
    fn name(&self) -> &str {
        self.kind().name()
    }
}
