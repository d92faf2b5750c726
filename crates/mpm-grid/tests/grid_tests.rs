//! Integration tests for mpm-grid.

use mpm_grid::Grid;
use mpm_math::Vec3;

// ─── Setup Tests ──────────────────────────────────────────────

#[test]
fn new_grid_is_empty() {
    let grid = Grid::new();
    assert!(grid.cellsize().is_none());
    assert!(grid.bounds().is_none());
    assert!(!grid.is_initialized());
    assert_eq!(grid.nnodes(), 0);
}

#[test]
fn setup_parses_token() {
    let mut grid = Grid::new();
    grid.setup("0.01").unwrap();
    assert_eq!(grid.cellsize(), Some(0.01));
    grid.setup(" 2.5e-1 ").unwrap();
    assert_eq!(grid.cellsize(), Some(0.25));
}

#[test]
fn setup_rejects_bad_tokens() {
    let mut grid = Grid::new();
    for token in ["abc", "", "0", "-0.1", "inf", "NaN"] {
        let err = grid.setup(token).unwrap_err();
        assert!(err.is_configuration(), "token {token:?}");
    }
    assert!(grid.cellsize().is_none());
}

#[test]
fn failed_setup_keeps_previous_cellsize() {
    let mut grid = Grid::new();
    grid.setup("0.5").unwrap();
    assert!(grid.setup("oops").is_err());
    assert_eq!(grid.cellsize(), Some(0.5));
}

// ─── Init Tests ───────────────────────────────────────────────

#[test]
fn init_requires_setup() {
    let mut grid = Grid::new();
    let err = grid.init(Vec3::ZERO, Vec3::ONE).unwrap_err();
    assert!(err.is_state());
    assert!(!grid.is_initialized());
}

#[test]
fn init_counts_nodes() {
    let mut grid = Grid::new();
    grid.setup("0.1").unwrap();
    grid.init(Vec3::ZERO, Vec3::new(1.0, 0.5, 0.2)).unwrap();
    assert_eq!(grid.node_counts(), [11, 6, 3]);
    assert_eq!(grid.nnodes(), 11 * 6 * 3);
    let bounds = grid.bounds().unwrap();
    assert_eq!(bounds.lo, Vec3::ZERO);
    assert_eq!(bounds.hi, Vec3::new(1.0, 0.5, 0.2));
}

#[test]
fn flat_region_has_one_node_layer() {
    let mut grid = Grid::new();
    grid.setup("1").unwrap();
    grid.init(Vec3::ZERO, Vec3::new(2.0, 2.0, 0.0)).unwrap();
    assert_eq!(grid.node_counts(), [3, 3, 1]);
}

#[test]
fn init_rejects_inverted_bounds() {
    let mut grid = Grid::new();
    grid.setup("0.1").unwrap();
    let err = grid.init(Vec3::ONE, Vec3::ZERO).unwrap_err();
    assert!(err.is_configuration());
    assert!(!grid.is_initialized());
}

#[test]
fn init_rejects_cellsize_too_fine_for_an_axis() {
    let mut grid = Grid::new();
    grid.setup("1e-300").unwrap();
    let err = grid.init(Vec3::ZERO, Vec3::ONE).unwrap_err();
    assert!(err.is_configuration());
    assert!(!grid.is_initialized());
    assert_eq!(grid.node_counts(), [0, 0, 0]);
    assert_eq!(grid.nnodes(), 0);
}

#[test]
fn init_rejects_node_total_past_usize() {
    let mut grid = Grid::new();
    grid.setup("1e-7").unwrap();
    // 10^7 + 1 nodes per axis fits, their cube does not.
    let err = grid.init(Vec3::ZERO, Vec3::ONE).unwrap_err();
    assert!(err.is_configuration());
    assert!(!grid.is_initialized());
    assert_eq!(grid.nnodes(), 0);
}

#[test]
fn failed_init_keeps_previous_lattice() {
    let mut grid = Grid::new();
    grid.setup("0.5").unwrap();
    grid.init(Vec3::ZERO, Vec3::ONE).unwrap();
    grid.setup("1e-300").unwrap();
    assert!(grid.init(Vec3::ZERO, Vec3::ONE).is_err());
    assert_eq!(grid.node_counts(), [3, 3, 3]);
    assert_eq!(grid.nnodes(), 27);
}

#[test]
fn fine_grid_on_flat_region_is_accepted() {
    let mut grid = Grid::new();
    grid.setup("1e-7").unwrap();
    grid.init(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)).unwrap();
    let [nx, ny, nz] = grid.node_counts();
    assert_eq!((ny, nz), (1, 1));
    assert_eq!(grid.nnodes(), nx);
}
