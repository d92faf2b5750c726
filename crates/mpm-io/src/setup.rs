//! Runs the setup lifecycle for every solid in an input.

use mpm_material::MaterialRegistry;
use mpm_solid::Domain;
use mpm_types::MpmResult;

use crate::contract::SetupInput;
use crate::validator::validate_input;

/// Builds the material registry an input describes.
pub fn build_registry(input: &SetupInput) -> MpmResult<MaterialRegistry> {
    let mut registry = if input.use_presets {
        MaterialRegistry::with_defaults()
    } else {
        MaterialRegistry::empty()
    };
    for spec in &input.eos {
        registry.register_spec(spec)?;
    }
    Ok(registry)
}

/// Validates `input`, then creates, configures, initializes and grows
/// each solid in order.
///
/// Returns the registry alongside the domain so the EOS models stay
/// reachable by name.
pub fn build_domain(input: &SetupInput) -> MpmResult<(MaterialRegistry, Domain)> {
    validate_input(input)?;
    let registry = build_registry(input)?;
    let mut domain = Domain::new();

    for spec in &input.solid {
        let solid = domain.add_solid(&spec.tokens(), &registry)?;
        solid.set_bounds(spec.lo(), spec.hi());
        solid.init()?;
        solid.grow(spec.particles)?;
        tracing::info!(id = %spec.id, np = spec.particles, "solid_ready");
    }

    Ok((registry, domain))
}
