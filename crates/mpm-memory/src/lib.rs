//! # mpm-memory
//!
//! Storage for per-particle data.
//!
//! ## Design
//!
//! A [`Field`] is a fixed-length, contiguous, owned buffer. It has no
//! resize API and no public constructor: the only way to get a field of
//! a different length is to ask [`Memory`] for a new one. Owners that
//! hand out `&mut [T]` views instead of `&mut Field<T>` therefore keep
//! every length fixed.
//!
//! Every field handed out by [`Memory`] is recorded in a shared ledger
//! under a label such as `solid-block1:mass`, and removed from it when
//! the field is dropped. A label is held by at most one live field.

pub mod field;
mod ledger;
pub mod memory;

pub use field::Field;
pub use memory::{AllocationRecord, Memory};
