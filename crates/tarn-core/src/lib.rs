//! Core contracts for the Tarn typed-array workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! [`Element`] trait — the contract a type must satisfy to be stored in a
//! typed array — and the [`Finalizer`] callback type an array uses to
//! destroy the elements it owns.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod element;

pub use element::{Element, Finalizer};
