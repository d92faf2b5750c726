//! Material registry with named EOS models.
//!
//! Models are appended and never removed, so an [`EosId`] stays valid
//! for the registry's lifetime and names map to exactly one model.

use std::collections::HashMap;
use std::sync::Arc;

use mpm_types::{EosId, MpmError, MpmResult};

use crate::eos::{EosKind, EosSpec, TaitEos};
use crate::traits::EquationOfState;

/// Shared reference to a registered EOS model.
///
/// Holding a handle keeps the model alive even if the registry is
/// dropped first; the body that holds it never frees the model itself.
#[derive(Debug, Clone)]
pub struct EosHandle {
    id: EosId,
    name: String,
    model: Arc<dyn EquationOfState>,
}

impl EosHandle {
    /// Registry index of the model.
    #[inline]
    pub fn id(&self) -> EosId {
        self.id
    }

    /// Registry name of the model.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn model(&self) -> &dyn EquationOfState {
        self.model.as_ref()
    }

    /// Returns true if this handle points at `model`.
    pub fn is(&self, model: &Arc<dyn EquationOfState>) -> bool {
        Arc::as_ptr(&self.model).cast::<()>() == Arc::as_ptr(model).cast::<()>()
    }
}

/// A named collection of EOS models.
#[derive(Debug, Clone)]
pub struct MaterialRegistry {
    eos: Vec<(String, Arc<dyn EquationOfState>)>,
    index: HashMap<String, EosId>,
}

impl MaterialRegistry {
    /// Creates a registry with the built-in presets
    /// `linear`, `neo-hookean` and `water`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        for spec in presets() {
            if let Err(e) = registry.register_spec(&spec) {
                tracing::warn!(name = %spec.name, error = %e, "preset_rejected");
            }
        }
        registry
    }

    /// Creates an empty registry.
    pub fn empty() -> Self {
        Self {
            eos: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Registers `model` under `name` and returns its index.
    ///
    /// Names are unique; reusing one is a configuration error.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        model: Arc<dyn EquationOfState>,
    ) -> MpmResult<EosId> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(MpmError::DuplicateEos(name));
        }
        let id = u16::try_from(self.eos.len())
            .map(EosId)
            .map_err(|_| MpmError::InvalidConfig("EOS registry is full".into()))?;

        tracing::debug!(name = %name, kind = model.name(), id = id.0, "eos_registered");
        self.index.insert(name.clone(), id);
        self.eos.push((name, model));
        Ok(id)
    }

    /// Builds the model described by `spec` and registers it.
    pub fn register_spec(&mut self, spec: &EosSpec) -> MpmResult<EosId> {
        let model = spec.build()?;
        self.register(spec.name.clone(), model)
    }

    /// Looks up a model index by name. Returns `None` if not found.
    pub fn find_eos(&self, name: &str) -> Option<EosId> {
        self.index.get(name).copied()
    }

    /// Model at `id`.
    pub fn eos(&self, id: EosId) -> Option<&Arc<dyn EquationOfState>> {
        self.eos.get(id.index()).map(|(_, model)| model)
    }

    /// Model registered under `name`.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn EquationOfState>> {
        self.find_eos(name).and_then(|id| self.eos(id))
    }

    /// Shared handle to the model at `id`.
    pub fn handle(&self, id: EosId) -> Option<EosHandle> {
        self.eos.get(id.index()).map(|(name, model)| EosHandle {
            id,
            name: name.clone(),
            model: Arc::clone(model),
        })
    }

    /// Registered names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.eos.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Iterates over `(id, name, model)` in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (EosId, &str, &dyn EquationOfState)> {
        self.eos
            .iter()
            .enumerate()
            .map(|(i, (name, model))| (EosId(i as u16), name.as_str(), model.as_ref()))
    }

    /// Returns the number of registered models.
    pub fn len(&self) -> usize {
        self.eos.len()
    }

    /// Returns true if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.eos.is_empty()
    }
}

impl Default for MaterialRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ─── Built-in Presets ─────────────────────────────────────────────────

fn presets() -> [EosSpec; 3] {
    [
        EosSpec {
            name: "linear".into(),
            kind: EosKind::Linear,
            rho0: 1000.0,
            bulk_modulus: 1.0e6,
            gamma: TaitEos::DEFAULT_GAMMA,
        },
        // Soft rubber-like solid.
        EosSpec {
            name: "neo-hookean".into(),
            kind: EosKind::NeoHookean,
            rho0: 1100.0,
            bulk_modulus: 5.0e6,
            gamma: TaitEos::DEFAULT_GAMMA,
        },
        // Weakly compressible water.
        EosSpec {
            name: "water".into(),
            kind: EosKind::Tait,
            rho0: 1000.0,
            bulk_modulus: 2.2e6,
            gamma: TaitEos::DEFAULT_GAMMA,
        },
    ]
}

