//! Error types for the MPM setup layer.
//!
//! All crates return `MpmResult<T>` from fallible operations. Setup
//! failures are never recovered locally; the embedding engine (or the
//! CLI) decides whether to abort.

use thiserror::Error;

/// Unified error type for solid setup.
#[derive(Debug, Error)]
pub enum MpmError {
    /// Fewer setup tokens remain than the command consumes.
    #[error("not enough arguments: expected {expected}, found {found}")]
    NotEnoughArguments { expected: usize, found: usize },

    /// More setup tokens remain than the command consumes.
    #[error("too many arguments: expected {expected}, found {found}")]
    TooManyArguments { expected: usize, found: usize },

    /// No EOS is registered under the requested name.
    #[error("could not find EOS named {0}")]
    EosNotFound(String),

    /// An EOS name is registered twice.
    #[error("reusing EOS name {0}")]
    DuplicateEos(String),

    /// A solid identifier is used twice in the same domain.
    #[error("reusing solid ID {0}")]
    DuplicateSolid(String),

    /// No solid is registered under the requested identifier.
    #[error("could not find solid with ID {0}")]
    SolidNotFound(String),

    /// The grid cell size token is not a finite positive number.
    #[error("invalid cell size '{0}'")]
    InvalidCellSize(String),

    /// Bounding box is non-finite or inverted.
    #[error("invalid bounds: {0}")]
    InvalidBounds(String),

    /// EOS parameter is out of its valid range.
    #[error("invalid EOS parameter: {0}")]
    InvalidEos(String),

    /// Setup input value is invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A per-particle field is already allocated.
    #[error("{0} already exists, cannot grow")]
    AlreadyAllocated(String),

    /// An allocation label is already held by a live field.
    #[error("allocation {0} is already live")]
    DuplicateAllocation(String),

    /// The grid was initialized before its resolution was set.
    #[error("grid is not set up: {0}")]
    GridNotSetUp(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Coarse classification of an [`MpmError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or inconsistent setup input.
    Configuration,
    /// An operation invoked in a state that violates the one-shot lifecycle.
    State,
    /// Reading or decoding setup input failed.
    Io,
}

impl MpmError {
    /// Returns the class this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MpmError::AlreadyAllocated(_)
            | MpmError::DuplicateAllocation(_)
            | MpmError::GridNotSetUp(_) => ErrorKind::State,
            MpmError::Io(_) | MpmError::Serialization(_) => ErrorKind::Io,
            _ => ErrorKind::Configuration,
        }
    }

    /// True for malformed setup input.
    pub fn is_configuration(&self) -> bool {
        self.kind() == ErrorKind::Configuration
    }

    /// True for lifecycle violations.
    pub fn is_state(&self) -> bool {
        self.kind() == ErrorKind::State
    }
}

/// Convenience alias for `Result<T, MpmError>`.
pub type MpmResult<T> = Result<T, MpmError>;
