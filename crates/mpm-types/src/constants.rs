//! Setup-layer constants.

/// Value written to every `mask` entry when particle storage is grown.
pub const MASK_INITIAL: i32 = 1;

/// Number of tokens consumed by a solid's `options` call: `<eos> <cellsize>`.
pub const SOLID_OPTION_TOKENS: usize = 2;

/// Prefix for the labels of every allocation owned by a solid body.
pub const SOLID_LABEL_PREFIX: &str = "solid-";

/// Node counts never drop below this along any axis.
pub const MIN_NODES_PER_AXIS: usize = 1;

/// Upper bound on whole cells along one grid axis.
pub const MAX_CELLS_PER_AXIS: usize = u32::MAX as usize;
