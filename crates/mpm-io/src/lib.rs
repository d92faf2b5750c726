//! # mpm-io
//!
//! Setup input contract and validation.
//!
//! Defines the boundary types that external systems (CLI, scripts,
//! config files) use to describe solids, and runs the setup lifecycle
//! for each of them.

pub mod contract;
pub mod setup;
pub mod validator;

pub use contract::{SetupInput, SetupSummary, SolidSpec, SolidSummary};
pub use setup::{build_domain, build_registry};
pub use validator::validate_input;
