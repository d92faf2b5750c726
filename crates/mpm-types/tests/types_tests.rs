//! Integration tests for mpm-types.

use mpm_types::{EosId, ErrorKind, MpmError, ParticleId};

// ─── ID Tests ──────────────────────────────────────────────────

#[test]
fn particle_id_index() {
    let id = ParticleId(42);
    assert_eq!(id.index(), 42);
}

#[test]
fn eos_id_index() {
    let id = EosId::from(7u16);
    assert_eq!(id.index(), 7);
}

#[test]
fn ids_are_serializable() {
    let id = EosId(3);
    let json = serde_json::to_string(&id).unwrap();
    let deserialized: EosId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, deserialized);
}

// ─── Error Tests ──────────────────────────────────────────────

#[test]
fn argument_count_errors_are_configuration() {
    let few = MpmError::NotEnoughArguments { expected: 2, found: 1 };
    let many = MpmError::TooManyArguments { expected: 2, found: 3 };
    assert_eq!(few.kind(), ErrorKind::Configuration);
    assert_eq!(many.kind(), ErrorKind::Configuration);
    assert!(few.to_string().contains("not enough arguments"));
    assert!(many.to_string().contains("too many arguments"));
}

#[test]
fn eos_not_found_display() {
    let err = MpmError::EosNotFound("steel".into());
    assert!(err.is_configuration());
    assert_eq!(err.to_string(), "could not find EOS named steel");
}

#[test]
fn regrow_is_state_error() {
    let err = MpmError::AlreadyAllocated("solid-block1:x0".into());
    assert!(err.is_state());
    assert!(!err.is_configuration());
    assert_eq!(err.to_string(), "solid-block1:x0 already exists, cannot grow");
}

#[test]
fn live_label_clash_is_state_error() {
    let err = MpmError::DuplicateAllocation("solid-b:x0".into());
    assert!(err.is_state());
    assert_eq!(err.to_string(), "allocation solid-b:x0 is already live");
}

#[test]
fn io_errors_convert() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "setup.toml");
    let err: MpmError = io.into();
    assert_eq!(err.kind(), ErrorKind::Io);
}
