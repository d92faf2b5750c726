//! Built-in equation-of-state models.
//!
//! | Kind | Pressure |
//! |---|---|
//! | `linear` | `K (1 − J)` |
//! | `neo_hookean` | `K/2 (1/J − J)` |
//! | `tait` | `K ((1/J)^γ − 1) / γ` |

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use mpm_types::{MpmError, MpmResult};

use crate::traits::EquationOfState;

/// EOS model family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EosKind {
    Linear,
    NeoHookean,
    Tait,
}

impl EosKind {
    pub fn name(self) -> &'static str {
        match self {
            EosKind::Linear => "linear",
            EosKind::NeoHookean => "neo_hookean",
            EosKind::Tait => "tait",
        }
    }
}

/// Serializable description of a named EOS model.
///
/// ```toml
/// [[eos]]
/// name = "water"
/// kind = "tait"
/// rho0 = 1000.0
/// bulk_modulus = 2.2e6
/// gamma = 7.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EosSpec {
    /// Registry name, e.g. `"neo-hookean"`.
    pub name: String,
    pub kind: EosKind,
    /// Reference density (kg/m³).
    pub rho0: f64,
    /// Bulk modulus (Pa).
    pub bulk_modulus: f64,
    /// Tait exponent. Ignored by the other kinds.
    #[serde(default = "default_gamma")]
    pub gamma: f64,
}

fn default_gamma() -> f64 {
    TaitEos::DEFAULT_GAMMA
}

impl EosSpec {
    /// Checks parameter ranges.
    pub fn validate(&self) -> MpmResult<()> {
        if self.name.trim().is_empty() {
            return Err(MpmError::InvalidEos("name must not be empty".into()));
        }
        if !self.rho0.is_finite() || self.rho0 <= 0.0 {
            return Err(MpmError::InvalidEos(format!(
                "{}: rho0 must be positive, got {}",
                self.name, self.rho0
            )));
        }
        if !self.bulk_modulus.is_finite() || self.bulk_modulus < 0.0 {
            return Err(MpmError::InvalidEos(format!(
                "{}: bulk modulus must be non-negative, got {}",
                self.name, self.bulk_modulus
            )));
        }
        if self.kind == EosKind::Tait && (!self.gamma.is_finite() || self.gamma <= 0.0) {
            return Err(MpmError::InvalidEos(format!(
                "{}: gamma must be positive, got {}",
                self.name, self.gamma
            )));
        }
        Ok(())
    }

    /// Validates the spec and builds the model it describes.
    pub fn build(&self) -> MpmResult<Arc<dyn EquationOfState>> {
        self.validate()?;
        let model: Arc<dyn EquationOfState> = match self.kind {
            EosKind::Linear => Arc::new(LinearEos::new(self.rho0, self.bulk_modulus)),
            EosKind::NeoHookean => Arc::new(NeoHookeanEos::new(self.rho0, self.bulk_modulus)),
            EosKind::Tait => Arc::new(TaitEos::new(self.rho0, self.bulk_modulus, self.gamma)),
        };
        Ok(model)
    }
}

// ─── Linear ───────────────────────────────────────────────────────────

/// Small-strain pressure: `p = K (1 − J)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearEos {
    pub rho0: f64,
    pub bulk_modulus: f64,
}

impl LinearEos {
    pub fn new(rho0: f64, bulk_modulus: f64) -> Self {
        Self { rho0, bulk_modulus }
    }
}

impl EquationOfState for LinearEos {
    fn kind(&self) -> EosKind {
        EosKind::Linear
    }

    fn rho0(&self) -> f64 {
        self.rho0
    }

    fn bulk_modulus(&self) -> f64 {
        self.bulk_modulus
    }

    fn pressure(&self, j: f64) -> f64 {
        self.bulk_modulus * (1.0 - j)
    }
}

// ─── Neo-Hookean ──────────────────────────────────────────────────────

/// Volumetric part of compressible neo-Hookean elasticity.
///
/// Derived from `Ψ_vol = K/4 (J² − 1 − 2 ln J)`, so `p = −dΨ/dJ`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeoHookeanEos {
    pub rho0: f64,
    pub bulk_modulus: f64,
}

impl NeoHookeanEos {
    pub fn new(rho0: f64, bulk_modulus: f64) -> Self {
        Self { rho0, bulk_modulus }
    }
}

impl EquationOfState for NeoHookeanEos {
    fn kind(&self) -> EosKind {
        EosKind::NeoHookean
    }

    fn rho0(&self) -> f64 {
        self.rho0
    }

    fn bulk_modulus(&self) -> f64 {
        self.bulk_modulus
    }

    fn pressure(&self, j: f64) -> f64 {
        debug_assert!(j > 0.0, "neo-Hookean pressure needs J > 0, got {j}");
        0.5 * self.bulk_modulus * (1.0 / j - j)
    }
}

// ─── Tait ─────────────────────────────────────────────────────────────

/// Weakly compressible fluid (Tait / Monaghan form).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaitEos {
    pub rho0: f64,
    pub bulk_modulus: f64,
    pub gamma: f64,
}

impl TaitEos {
    /// Exponent commonly used for water.
    pub const DEFAULT_GAMMA: f64 = 7.0;

    pub fn new(rho0: f64, bulk_modulus: f64, gamma: f64) -> Self {
        Self {
            rho0,
            bulk_modulus,
            gamma,
        }
    }
}

impl EquationOfState for TaitEos {
    fn kind(&self) -> EosKind {
        EosKind::Tait
    }

    fn rho0(&self) -> f64 {
        self.rho0
    }

    fn bulk_modulus(&self) -> f64 {
        self.bulk_modulus
    }

    fn pressure(&self, j: f64) -> f64 {
        debug_assert!(j > 0.0, "Tait pressure needs J > 0, got {j}");
        self.bulk_modulus / self.gamma * ((1.0 / j).powf(self.gamma) - 1.0)
    }
}
