//! Tarn: growable typed arrays with manual capacity control.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Tarn sub-crates. For most users, adding `tarn` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tarn::prelude::*;
//!
//! // One constructor per element type, cached by the registry.
//! let mut registry = CtorRegistry::new();
//! let ctor = registry.ctor::<i32>(None);
//!
//! let mut values = ctor.build(Some(2));
//! values.push(1);
//! values.push(2);
//! values.push(3);
//! // length() is the highest populated index, not the element count.
//! assert_eq!(values.length(), 2);
//! assert_eq!(values.count(), 3);
//!
//! // Writing past the live range default-fills the gap.
//! values.set(5, 9);
//! assert_eq!(values.as_slice(), [1, 2, 3, 0, 0, 9]);
//!
//! // Removal hands the value back and closes the gap.
//! assert_eq!(values.remove(0), Some(1));
//! assert_eq!(values.as_slice(), [2, 3, 0, 0, 9]);
//!
//! // Out-of-range reads are absent, never garbage.
//! assert_eq!(values.get(10), None);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`array`] | `tarn-array` | `TypedArray`, constructor registry |
//! | [`types`] | `tarn-core` | `Element` contract, `Finalizer` type |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Typed arrays and the constructor registry (`tarn-array`).
///
/// Most users only need [`array::TypedArray`] and [`array::CtorRegistry`]
/// from this module — they are also available in the [`prelude`].
pub use tarn_array as array;

/// Core contracts (`tarn-core`).
///
/// Contains the [`types::Element`] trait bounding what arrays may store and
/// the [`types::Finalizer`] destruction callback type.
pub use tarn_core as types;

/// Common imports for typical Tarn usage.
///
/// ```rust
/// use tarn::prelude::*;
/// ```
pub mod prelude {
    pub use tarn_array::{ArrayCtor, CtorRegistry, TypedArray};
    pub use tarn_core::{Element, Finalizer};
}
