//! Uniform background grid.

use mpm_math::{Aabb, Vec3};
use mpm_types::constants::{MAX_CELLS_PER_AXIS, MIN_NODES_PER_AXIS};
use mpm_types::{MpmError, MpmResult};

/// Uniform grid with cubic cells of edge `cellsize`.
///
/// Created empty; [`Grid::setup`] must run before [`Grid::init`].
#[derive(Debug, Clone, Default)]
pub struct Grid {
    /// Cell edge length. `None` until `setup` succeeds.
    cellsize: Option<f64>,
    /// Region covered by the lattice. `None` until `init` succeeds.
    bounds: Option<Aabb>,
    /// Nodes along x, y, z.
    node_counts: [usize; 3],
    /// Product of `node_counts`, checked for overflow in `init`.
    nnodes: usize,
}

impl Grid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the cell size from a setup token.
    ///
    /// The token must parse as a finite number greater than zero.
    /// On failure the previous cell size is kept.
    pub fn setup(&mut self, token: &str) -> MpmResult<()> {
        let cellsize: f64 = token
            .trim()
            .parse()
            .map_err(|_| MpmError::InvalidCellSize(token.to_string()))?;
        self.set_cellsize(cellsize)
            .map_err(|_| MpmError::InvalidCellSize(token.to_string()))
    }

    /// Sets the cell size directly.
    pub fn set_cellsize(&mut self, cellsize: f64) -> MpmResult<()> {
        if !cellsize.is_finite() || cellsize <= 0.0 {
            return Err(MpmError::InvalidCellSize(cellsize.to_string()));
        }
        tracing::debug!(cellsize, "grid_setup");
        self.cellsize = Some(cellsize);
        Ok(())
    }

    /// Lays the node lattice over `[lo, hi]`.
    ///
    /// Node count per axis is the nearest whole number of cells plus one,
    /// never less than one.
    ///
    /// # Errors
    ///
    /// A state error before [`Grid::setup`]. A configuration error for
    /// invalid bounds, or when the cell size is too fine for the region:
    /// more than [`MAX_CELLS_PER_AXIS`] cells along an axis, or a total
    /// node count that does not fit in `usize`. The grid is unchanged on
    /// error.
    pub fn init(&mut self, lo: Vec3, hi: Vec3) -> MpmResult<()> {
        let cellsize = self.cellsize.ok_or_else(|| {
            MpmError::GridNotSetUp("cell size must be set before init".into())
        })?;
        let bounds = Aabb::try_new(lo, hi)?;

        let cells = bounds.extent() / cellsize;
        let mut node_counts = [MIN_NODES_PER_AXIS; 3];
        for (axis, count) in node_counts.iter_mut().enumerate() {
            let whole = (cells[axis] + 0.5).floor();
            if !whole.is_finite() || whole > MAX_CELLS_PER_AXIS as f64 {
                return Err(MpmError::InvalidConfig(format!(
                    "cell size {cellsize} gives {} cells along axis {axis}, limit is {MAX_CELLS_PER_AXIS}",
                    cells[axis]
                )));
            }
            *count = (whole as usize)
                .checked_add(1)
                .ok_or_else(|| too_many_nodes(cellsize))?
                .max(MIN_NODES_PER_AXIS);
        }
        let nnodes = node_counts
            .iter()
            .try_fold(1usize, |total, &n| total.checked_mul(n))
            .ok_or_else(|| too_many_nodes(cellsize))?;

        tracing::debug!(
            nx = node_counts[0],
            ny = node_counts[1],
            nz = node_counts[2],
            "grid_init"
        );

        self.bounds = Some(bounds);
        self.node_counts = node_counts;
        self.nnodes = nnodes;
        Ok(())
    }

    /// Cell edge length, if set.
    #[inline]
    pub fn cellsize(&self) -> Option<f64> {
        self.cellsize
    }

    /// Region covered by the lattice, if initialized.
    #[inline]
    pub fn bounds(&self) -> Option<&Aabb> {
        self.bounds.as_ref()
    }

    /// Nodes along x, y, z. All zero before `init`.
    #[inline]
    pub fn node_counts(&self) -> [usize; 3] {
        self.node_counts
    }

    /// Total node count. Zero before `init`.
    #[inline]
    pub fn nnodes(&self) -> usize {
        self.nnodes
    }

    pub fn is_initialized(&self) -> bool {
        self.bounds.is_some()
    }
}

fn too_many_nodes(cellsize: f64) -> MpmError {
    MpmError::InvalidConfig(format!("cell size {cellsize} gives more grid nodes than fit in memory"))
}
