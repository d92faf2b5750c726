//! # mpm-solid
//!
//! Solid bodies for a material point simulation.
//!
//! ## Key Types
//!
//! - [`SolidBody`]: one deformable body with its particles, grid and EOS binding
//! - [`ParticleArrays`]: index-aligned per-particle fields, allocated once
//! - [`Domain`]: the set of solids in a simulation, keyed by identifier
//!
//! ## Lifecycle
//!
//! ```text
//! let mut solid = SolidBody::new("block1");
//! solid.options(&["neo-hookean", "0.01"], 0, &registry)?;
//! solid.set_bounds(lo, hi);
//! solid.init()?;
//! solid.grow(1000)?;
//! ```

pub mod domain;
pub mod particles;
pub mod solid;

pub use domain::Domain;
pub use particles::ParticleArrays;
pub use solid::SolidBody;
