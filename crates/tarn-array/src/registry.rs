//! Per-element-type constructor cache.
//!
//! The registry is pure bookkeeping on top of the container: it maps an
//! element type to the one [`ArrayCtor`] built for it, so every consumer
//! asking for arrays of that type gets the same constructor (and therefore
//! the same finalizer) instead of building a fresh one each time.

use std::any::{Any, TypeId};

use indexmap::IndexMap;

use tarn_core::{Element, Finalizer};

use crate::array::TypedArray;

/// Builds [`TypedArray`] instances for one element type.
///
/// Obtained from [`CtorRegistry::ctor`], or built directly for one-off use.
/// Every array built by a given constructor carries the constructor's
/// finalizer, so all of them destroy their elements the same way.
pub struct ArrayCtor<T: Element> {
    finalizer: Option<Finalizer<T>>,
}

impl<T: Element> ArrayCtor<T> {
    /// Create a constructor with an optional destruction callback.
    pub fn new(finalizer: Option<Finalizer<T>>) -> Self {
        Self { finalizer }
    }

    /// Build an array, reserving `initial_capacity` elements when given.
    ///
    /// `None` builds an empty array that has not allocated.
    pub fn build(&self, initial_capacity: Option<usize>) -> TypedArray<T> {
        let capacity = initial_capacity.unwrap_or(0);
        match self.finalizer.clone() {
            Some(finalizer) => TypedArray::with_finalizer(capacity, finalizer),
            None => TypedArray::with_capacity(capacity),
        }
    }

    /// Whether built arrays carry a finalizer.
    pub fn has_finalizer(&self) -> bool {
        self.finalizer.is_some()
    }
}

impl<T: Element> Clone for ArrayCtor<T> {
    // Manual impl: `#[derive(Clone)]` would demand `T: Clone` for no reason.
    fn clone(&self) -> Self {
        Self {
            finalizer: self.finalizer.clone(),
        }
    }
}

/// Maps element types to their cached [`ArrayCtor`].
///
/// The first `ctor::<T>()` call builds and caches the constructor for `T`;
/// later calls return the cached one and ignore their finalizer argument —
/// a cache hit means the implementation for that type already exists.
/// Backed by an `IndexMap` so iteration-order-dependent diagnostics stay
/// deterministic.
pub struct CtorRegistry {
    entries: IndexMap<TypeId, Box<dyn Any>>,
}

impl CtorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Get or build the constructor for element type `T`.
    ///
    /// `finalizer` takes effect only on the first registration of `T`; on a
    /// cache hit the existing constructor wins and the argument is dropped.
    pub fn ctor<T: Element>(&mut self, finalizer: Option<Finalizer<T>>) -> ArrayCtor<T> {
        self.entries
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(ArrayCtor::new(finalizer)))
            .downcast_ref::<ArrayCtor<T>>()
            .expect("registry entry downcasts to the constructor type it was keyed by")
            .clone()
    }

    /// Whether element type `T` already has a cached constructor.
    pub fn contains<T: Element>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<T>())
    }

    /// Number of cached constructors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no constructor has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CtorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
