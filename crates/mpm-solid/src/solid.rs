//! A single deformable body.
//!
//! A [`SolidBody`] owns its particle fields and its background grid and
//! holds a shared handle to the EOS model it was bound to. Setup runs
//! once, in order: [`SolidBody::options`], [`SolidBody::init`],
//! [`SolidBody::grow`]. Every step validates its input before touching
//! the body, so a failed call leaves the body exactly as it was.

use mpm_grid::Grid;
use mpm_material::{EosHandle, MaterialRegistry};
use mpm_math::{Aabb, Vec3};
use mpm_memory::Memory;
use mpm_types::constants::{SOLID_LABEL_PREFIX, SOLID_OPTION_TOKENS};
use mpm_types::{MpmError, MpmResult};

use crate::particles::{ParticleArrays, FIELD_NAMES};

/// One deformable body discretized into material points.
#[derive(Debug)]
pub struct SolidBody {
    /// Immutable identifier, e.g. `"block1"`.
    id: String,
    /// Particle count. Zero until `grow` succeeds.
    np: usize,
    /// `solidlo` / `solidhi`.
    bounds: Aabb,
    /// `None` until `grow` succeeds.
    particles: Option<ParticleArrays>,
    /// `None` until `options` succeeds.
    eos: Option<EosHandle>,
    grid: Grid,
    memory: Memory,
}

impl SolidBody {
    /// Creates a body with its own allocation ledger.
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_memory(id, Memory::new())
    }

    /// Creates a body that records its allocations in `memory`.
    pub fn with_memory(id: impl Into<String>, memory: Memory) -> Self {
        let id = id.into();
        tracing::info!(id = %id, "Creating new solid");
        Self {
            id,
            np: 0,
            bounds: Aabb::default(),
            particles: None,
            eos: None,
            grid: Grid::new(),
            memory,
        }
    }

    /// Parses `<eos_name> <cell_size>` from `args[start..]`.
    ///
    /// Binds the named EOS from `registry` and sets the grid cell size.
    /// Exactly two tokens must remain.
    ///
    /// # Errors
    ///
    /// Configuration errors for a wrong token count, an unknown EOS name
    /// or an invalid cell size. The body is unchanged on error.
    pub fn options<S: AsRef<str>>(
        &mut self,
        args: &[S],
        start: usize,
        registry: &MaterialRegistry,
    ) -> MpmResult<()> {
        let remaining = args.len().saturating_sub(start);
        if remaining < SOLID_OPTION_TOKENS {
            return Err(MpmError::NotEnoughArguments {
                expected: SOLID_OPTION_TOKENS,
                found: remaining,
            });
        }

        let eos_name = args[start].as_ref();
        let eos = registry
            .find_eos(eos_name)
            .and_then(|id| registry.handle(id))
            .ok_or_else(|| MpmError::EosNotFound(eos_name.to_string()))?;

        let mut grid = self.grid.clone();
        grid.setup(args[start + 1].as_ref())?;

        if remaining > SOLID_OPTION_TOKENS {
            return Err(MpmError::TooManyArguments {
                expected: SOLID_OPTION_TOKENS,
                found: remaining,
            });
        }

        tracing::info!(
            id = %self.id,
            eos = eos.name(),
            cellsize = ?grid.cellsize(),
            "solid_options"
        );
        self.eos = Some(eos);
        self.grid = grid;
        Ok(())
    }

    /// Sets `solidlo` / `solidhi`. Checked by the grid in [`SolidBody::init`].
    pub fn set_bounds(&mut self, lo: Vec3, hi: Vec3) {
        self.bounds = Aabb::new(lo, hi);
    }

    /// Initializes the grid over the body's bounding box.
    pub fn init(&mut self) -> MpmResult<()> {
        let Aabb { lo, hi } = self.bounds;
        tracing::info!(
            id = %self.id,
            xlo = lo.x,
            xhi = hi.x,
            ylo = lo.y,
            yhi = hi.y,
            zlo = lo.z,
            zhi = hi.z,
            "Bounds for solid"
        );
        self.grid.init(lo, hi)
    }

    /// Allocates every per-particle field with `np` entries.
    ///
    /// Growth happens once. `mask` is 1 for every particle afterwards.
    ///
    /// # Errors
    ///
    /// A state error if the fields already exist; they are left untouched.
    /// Also a state error if another body sharing this ledger holds the
    /// same labels, in which case nothing is allocated.
    pub fn grow(&mut self, np: usize) -> MpmResult<()> {
        let prefix = self.label_prefix();
        if self.particles.is_some() {
            return Err(MpmError::AlreadyAllocated(format!(
                "{prefix}:{}",
                FIELD_NAMES[0]
            )));
        }

        let particles = ParticleArrays::allocate(&self.memory, &prefix, np)?;
        debug_assert!(particles.is_aligned());
        self.particles = Some(particles);
        self.np = np;
        Ok(())
    }

    /// Body identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Particle count. Zero before `grow`.
    #[inline]
    pub fn np(&self) -> usize {
        self.np
    }

    /// Bound EOS model, if `options` has run.
    pub fn eos(&self) -> Option<&EosHandle> {
        self.eos.as_ref()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    #[inline]
    pub fn solidlo(&self) -> Vec3 {
        self.bounds.lo
    }

    #[inline]
    pub fn solidhi(&self) -> Vec3 {
        self.bounds.hi
    }

    /// Per-particle fields, if grown.
    pub fn particles(&self) -> Option<&ParticleArrays> {
        self.particles.as_ref()
    }

    /// Mutable per-particle fields, if grown. Fields are exposed as slices,
    /// so values may change but lengths may not.
    pub fn particles_mut(&mut self) -> Option<&mut ParticleArrays> {
        self.particles.as_mut()
    }

    pub fn is_grown(&self) -> bool {
        self.particles.is_some()
    }

    /// Allocation ledger this body reports into.
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Prefix of every allocation label: `solid-<id>`.
    pub fn label_prefix(&self) -> String {
        format!("{SOLID_LABEL_PREFIX}{}", self.id)
    }
}

impl Drop for SolidBody {
    fn drop(&mut self) {
        tracing::debug!(id = %self.id, np = self.np, "Destroying solid");
    }
}
