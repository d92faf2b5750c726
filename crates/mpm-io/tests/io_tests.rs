//! Integration tests for mpm-io.

use std::io::Write;

use mpm_io::{build_domain, build_registry, validate_input, SetupInput, SetupSummary, SolidSpec};
use mpm_material::{EosKind, EosSpec};

fn block(id: &str, eos: &str) -> SolidSpec {
    SolidSpec {
        id: id.into(),
        eos: eos.into(),
        cell_size: 0.01,
        lo: [0.0, 0.0, 0.0],
        hi: [0.1, 0.1, 0.1],
        particles: 1000,
    }
}

fn input_with(solids: Vec<SolidSpec>) -> SetupInput {
    SetupInput {
        solid: solids,
        ..Default::default()
    }
}

const SETUP_TOML: &str = r#"
[[eos]]
name = "rubber"
kind = "neo_hookean"
rho0 = 1100.0
bulk_modulus = 5.0e6

[[solid]]
id = "block1"
eos = "rubber"
cell_size = 0.01
lo = [0.0, 0.0, 0.0]
hi = [0.1, 0.1, 0.1]
particles = 1000

[[solid]]
id = "pool"
eos = "water"
cell_size = 0.05
lo = [-1.0, 0.0, 0.0]
hi = [1.0, 0.5, 0.5]
particles = 64
"#;

// ─── Contract Tests ───────────────────────────────────────────

#[test]
fn parses_toml_input() {
    let input = SetupInput::from_toml(SETUP_TOML).unwrap();
    assert!(input.use_presets);
    assert_eq!(input.eos.len(), 1);
    assert_eq!(input.eos[0].kind, EosKind::NeoHookean);
    assert_eq!(input.solid.len(), 2);
    assert_eq!(input.solid[1].id, "pool");
}

#[test]
fn input_json_roundtrip() {
    let input = SetupInput::from_toml(SETUP_TOML).unwrap();
    let json = serde_json::to_string(&input).unwrap();
    let recovered = SetupInput::from_json(&json).unwrap();
    assert_eq!(input, recovered);
}

#[test]
fn malformed_input_is_serialization_error() {
    let err = SetupInput::from_toml("[[solid]]\nid = 3").unwrap_err();
    assert_eq!(err.kind(), mpm_types::ErrorKind::Io);
}

#[test]
fn reads_input_from_path() {
    let dir = std::env::temp_dir();
    let path = dir.join(format!("mpm_io_setup_{}.toml", std::process::id()));
    {
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(SETUP_TOML.as_bytes()).unwrap();
    }
    let input = SetupInput::from_path(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(input.solid.len(), 2);
}

#[test]
fn missing_file_is_io_error() {
    let err = SetupInput::from_path("/nonexistent/mpm/setup.toml").unwrap_err();
    assert_eq!(err.kind(), mpm_types::ErrorKind::Io);
}

#[test]
fn solid_tokens_follow_command_grammar() {
    let spec = block("block1", "neo-hookean");
    assert_eq!(spec.tokens(), ["block1", "neo-hookean", "0.01"]);
}

// ─── Validator Tests ──────────────────────────────────────────

#[test]
fn valid_input_passes() {
    let input = SetupInput::from_toml(SETUP_TOML).unwrap();
    assert!(validate_input(&input).is_ok());
}

#[test]
fn unknown_eos_is_rejected() {
    let err = validate_input(&input_with(vec![block("a", "steel")])).unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("steel"));
}

#[test]
fn presets_can_be_disabled() {
    let mut input = input_with(vec![block("a", "linear")]);
    input.use_presets = false;
    assert!(validate_input(&input).is_err());
    assert!(build_registry(&input).unwrap().is_empty());
}

#[test]
fn duplicate_solid_ids_are_rejected() {
    let input = input_with(vec![block("a", "linear"), block("a", "water")]);
    assert!(validate_input(&input).is_err());
}

#[test]
fn eos_clashing_with_preset_is_rejected() {
    let mut input = input_with(vec![]);
    input.eos.push(EosSpec {
        name: "water".into(),
        kind: EosKind::Linear,
        rho0: 1.0,
        bulk_modulus: 1.0,
        gamma: 7.0,
    });
    assert!(validate_input(&input).is_err());
}

#[test]
fn bad_solid_values_are_rejected() {
    let mut spec = block("a", "linear");
    spec.cell_size = 0.0;
    assert!(validate_input(&input_with(vec![spec])).is_err());

    let mut spec = block("a", "linear");
    spec.lo = [1.0, 0.0, 0.0];
    spec.hi = [0.0, 1.0, 1.0];
    let err = validate_input(&input_with(vec![spec])).unwrap_err();
    assert!(err.to_string().contains("solid a"));

    let spec = block("two words", "linear");
    assert!(validate_input(&input_with(vec![spec])).is_err());

    let spec = block("", "linear");
    assert!(validate_input(&input_with(vec![spec])).is_err());
}

// ─── Setup Tests ──────────────────────────────────────────────

#[test]
fn build_domain_runs_full_lifecycle() {
    let input = SetupInput::from_toml(SETUP_TOML).unwrap();
    let (registry, domain) = build_domain(&input).unwrap();

    assert_eq!(registry.len(), 4);
    assert_eq!(domain.len(), 2);

    let block1 = domain.solid("block1").unwrap();
    assert_eq!(block1.np(), 1000);
    assert!(block1.eos().unwrap().is(registry.get("rubber").unwrap()));
    assert_eq!(block1.grid().cellsize(), Some(0.01));
    assert_eq!(block1.grid().node_counts(), [11, 11, 11]);
    assert!(block1.particles().unwrap().mask().iter().all(|&m| m == 1));

    let pool = domain.solid("pool").unwrap();
    assert_eq!(pool.np(), 64);
    assert_eq!(pool.grid().node_counts(), [41, 11, 11]);
}

#[test]
fn build_domain_stops_on_invalid_input() {
    let input = input_with(vec![block("a", "linear"), block("b", "steel")]);
    assert!(build_domain(&input).is_err());
}

#[test]
fn summary_reports_each_solid() {
    let input = SetupInput::from_toml(SETUP_TOML).unwrap();
    let (_registry, domain) = build_domain(&input).unwrap();
    let summary = SetupSummary::from_domain(&domain);

    assert_eq!(summary.total_particles, 1064);
    assert!(summary.allocated_bytes > 0);
    assert_eq!(summary.solids.len(), 2);
    assert_eq!(summary.solids[0].id, "block1");
    assert_eq!(summary.solids[0].eos.as_deref(), Some("rubber"));
    assert_eq!(summary.solids[0].allocations, 20);
    assert_eq!(summary.solids[1].hi, [1.0, 0.5, 0.5]);

    let json = serde_json::to_string(&summary).unwrap();
    let recovered: SetupSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(summary, recovered);
}
