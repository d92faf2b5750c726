//! The set of solid bodies in a simulation.

use mpm_material::MaterialRegistry;
use mpm_memory::Memory;
use mpm_types::constants::SOLID_OPTION_TOKENS;
use mpm_types::{MpmError, MpmResult};

use crate::solid::SolidBody;

/// Solid bodies keyed by identifier, sharing one allocation ledger.
#[derive(Debug, Default)]
pub struct Domain {
    solids: Vec<SolidBody>,
    memory: Memory,
}

impl Domain {
    /// Creates an empty domain with its own ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty domain reporting into `memory`.
    pub fn with_memory(memory: Memory) -> Self {
        Self {
            solids: Vec::new(),
            memory,
        }
    }

    /// Adds a solid from `<id> <eos_name> <cell_size>`.
    ///
    /// The body is created from the first token and configured with the
    /// rest through [`SolidBody::options`]. On error the domain is
    /// unchanged.
    pub fn add_solid<S: AsRef<str>>(
        &mut self,
        args: &[S],
        registry: &MaterialRegistry,
    ) -> MpmResult<&mut SolidBody> {
        let Some(first) = args.first() else {
            return Err(MpmError::NotEnoughArguments {
                expected: 1 + SOLID_OPTION_TOKENS,
                found: 0,
            });
        };
        let id: &str = first.as_ref();
        if self.find_solid(id).is_some() {
            return Err(MpmError::DuplicateSolid(id.to_string()));
        }

        let mut solid = SolidBody::with_memory(id, self.memory.clone());
        solid.options(args, 1, registry)?;

        self.solids.push(solid);
        let last = self.solids.len() - 1;
        Ok(&mut self.solids[last])
    }

    /// Index of the solid named `id`. Returns `None` if not found.
    pub fn find_solid(&self, id: &str) -> Option<usize> {
        self.solids.iter().position(|s| s.id() == id)
    }

    pub fn solid(&self, id: &str) -> Option<&SolidBody> {
        self.solids.iter().find(|s| s.id() == id)
    }

    pub fn solid_mut(&mut self, id: &str) -> Option<&mut SolidBody> {
        self.solids.iter_mut().find(|s| s.id() == id)
    }

    /// Like [`Domain::solid_mut`], but an unknown id is an error.
    pub fn require_solid_mut(&mut self, id: &str) -> MpmResult<&mut SolidBody> {
        self.solid_mut(id)
            .ok_or_else(|| MpmError::SolidNotFound(id.to_string()))
    }

    /// All solids in insertion order.
    pub fn solids(&self) -> &[SolidBody] {
        &self.solids
    }

    /// Total particle count across all solids.
    pub fn total_particles(&self) -> usize {
        self.solids.iter().map(SolidBody::np).sum()
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn len(&self) -> usize {
        self.solids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solids.is_empty()
    }
}
