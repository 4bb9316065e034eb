//! Growable typed arrays over raw allocation primitives.
//!
//! The centerpiece is [`TypedArray`]: a homogeneous, dynamically-resizable
//! array that owns one contiguous heap allocation and tracks the
//! allocation's capacity separately from its live-element count. On top of
//! bounds-checked access it provides the less usual semantics of a
//! dynamically-typed host sequence:
//!
//! - **Sparse writes.** Writing past the live range is not an error; the
//!   gap is filled with default-constructed elements, never raw storage.
//! - **Exactly-once destruction.** An optional per-array finalizer destroys
//!   owned elements on overwrite, [`clear`](TypedArray::clear), or
//!   teardown; `pop`/`remove` hand ownership back to the caller instead.
//! - **Index-style `length()`.** The highest populated index as a signed
//!   value (`-1` when empty), *not* the element count.
//!
//! [`registry`] adds the bookkeeping layer: one cached [`ArrayCtor`] per
//! element type, so every consumer gets the same constructor (and
//! finalizer) for a given type.
//!
//! # Fatal-allocation policy
//!
//! Allocator failure during growth or shrink aborts the process instead of
//! surfacing a recoverable error: the container cannot guarantee any useful
//! post-condition once the allocator is exhausted. The buffer prior to the
//! failed call is never touched. Out-of-range access is the non-fatal
//! failure mode and yields `None`.
//!
//! This crate contains `unsafe` code, all of it confined to the private
//! `raw` module.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod array;
mod raw;
pub mod registry;

pub use array::TypedArray;
pub use registry::{ArrayCtor, CtorRegistry};
