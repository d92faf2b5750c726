//! Setup input/output contract types.
//!
//! These types define the I/O boundary of the setup layer. They are
//! serializable for CLI configuration and reporting.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use mpm_material::EosSpec;
use mpm_math::Vec3;
use mpm_solid::{Domain, SolidBody};
use mpm_types::{MpmError, MpmResult};

/// Complete description of the solids to set up.
///
/// ```toml
/// [[eos]]
/// name = "rubber"
/// kind = "neo_hookean"
/// rho0 = 1100.0
/// bulk_modulus = 5.0e6
///
/// [[solid]]
/// id = "block1"
/// eos = "rubber"
/// cell_size = 0.01
/// lo = [0.0, 0.0, 0.0]
/// hi = [0.1, 0.1, 0.1]
/// particles = 1000
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetupInput {
    /// Register the built-in EOS presets before `eos`.
    #[serde(default = "default_true")]
    pub use_presets: bool,

    /// Additional EOS models.
    #[serde(default)]
    pub eos: Vec<EosSpec>,

    /// Solids in creation order.
    #[serde(default)]
    pub solid: Vec<SolidSpec>,
}

fn default_true() -> bool {
    true
}

impl Default for SetupInput {
    fn default() -> Self {
        Self {
            use_presets: true,
            eos: Vec::new(),
            solid: Vec::new(),
        }
    }
}

/// One solid body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolidSpec {
    /// Unique identifier.
    pub id: String,
    /// Registry name of the EOS model.
    pub eos: String,
    /// Grid cell edge length.
    pub cell_size: f64,
    /// Low corner of the bounding box.
    pub lo: [f64; 3],
    /// High corner of the bounding box.
    pub hi: [f64; 3],
    /// Particle count.
    pub particles: usize,
}

impl SolidSpec {
    /// Tokens for [`Domain::add_solid`]: `<id> <eos> <cell_size>`.
    pub fn tokens(&self) -> [String; 3] {
        [self.id.clone(), self.eos.clone(), self.cell_size.to_string()]
    }

    pub fn lo(&self) -> Vec3 {
        Vec3::from_array(self.lo)
    }

    pub fn hi(&self) -> Vec3 {
        Vec3::from_array(self.hi)
    }
}

impl SetupInput {
    /// Reads an input file. `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn from_path(path: impl AsRef<Path>) -> MpmResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_toml(&content)
        }
    }

    pub fn from_toml(content: &str) -> MpmResult<Self> {
        toml::from_str(content).map_err(|e| MpmError::Serialization(e.to_string()))
    }

    pub fn from_json(content: &str) -> MpmResult<Self> {
        serde_json::from_str(content).map_err(|e| MpmError::Serialization(e.to_string()))
    }
}

/// Post-setup report for one solid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolidSummary {
    pub id: String,
    /// Bound EOS name, if any.
    pub eos: Option<String>,
    pub np: usize,
    pub cell_size: Option<f64>,
    /// Grid nodes along x, y, z.
    pub nodes: [usize; 3],
    pub lo: [f64; 3],
    pub hi: [f64; 3],
    /// Live allocations labelled with this solid's prefix.
    pub allocations: usize,
}

impl SolidSummary {
    pub fn from_solid(solid: &SolidBody) -> Self {
        let prefix = format!("{}:", solid.label_prefix());
        Self {
            id: solid.id().to_string(),
            eos: solid.eos().map(|h| h.name().to_string()),
            np: solid.np(),
            cell_size: solid.grid().cellsize(),
            nodes: solid.grid().node_counts(),
            lo: solid.solidlo().to_array(),
            hi: solid.solidhi().to_array(),
            allocations: solid.memory().outstanding_with_prefix(&prefix),
        }
    }
}

/// Post-setup report for a whole domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetupSummary {
    pub solids: Vec<SolidSummary>,
    pub total_particles: usize,
    /// Bytes held by all live particle fields.
    pub allocated_bytes: usize,
}

impl SetupSummary {
    pub fn from_domain(domain: &Domain) -> Self {
        Self {
            solids: domain.solids().iter().map(SolidSummary::from_solid).collect(),
            total_particles: domain.total_particles(),
            allocated_bytes: domain.memory().outstanding_bytes(),
        }
    }
}
