//! Setup input validation.
//!
//! Validates a setup input before any solid is created, catching
//! data-level errors early with clear diagnostics.

use std::collections::HashSet;

use mpm_math::Aabb;
use mpm_types::{MpmError, MpmResult};

use crate::contract::SetupInput;
use crate::setup::build_registry;

/// Validates a complete setup input.
///
/// Checks:
/// - EOS specs are in range and their names are unique (presets included)
/// - Solid identifiers are non-empty and unique
/// - Every solid names a known EOS
/// - Cell sizes are finite and positive
/// - Bounding boxes are finite with `lo <= hi`
pub fn validate_input(input: &SetupInput) -> MpmResult<()> {
    let registry = build_registry(input)?;

    let mut seen = HashSet::new();
    for spec in &input.solid {
        if spec.id.trim().is_empty() {
            return Err(MpmError::InvalidConfig("solid id must not be empty".into()));
        }
        if spec.id.chars().any(char::is_whitespace) {
            return Err(MpmError::InvalidConfig(format!(
                "solid id '{}' must be a single token",
                spec.id
            )));
        }
        if !seen.insert(spec.id.as_str()) {
            return Err(MpmError::DuplicateSolid(spec.id.clone()));
        }
        if registry.find_eos(&spec.eos).is_none() {
            return Err(MpmError::EosNotFound(spec.eos.clone()));
        }
        if !spec.cell_size.is_finite() || spec.cell_size <= 0.0 {
            return Err(MpmError::InvalidCellSize(spec.cell_size.to_string()));
        }
        Aabb::try_new(spec.lo(), spec.hi()).map_err(|e| {
            MpmError::InvalidBounds(format!("solid {}: {}", spec.id, e))
        })?;
    }

    Ok(())
}
