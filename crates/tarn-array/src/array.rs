//! The growable typed array.
//!
//! [`TypedArray`] reproduces value-semantics container behavior — insert,
//! remove, random access, capacity growth and shrink — directly on top of
//! the raw allocation primitives in `raw`. It tracks two sizes separately:
//! `capacity`, what the allocation can hold, and `count`, how many slots
//! currently hold live elements. The live elements always occupy the
//! contiguous prefix `[0, count)`.
//!
//! Two ownership rules shape the API:
//!
//! - Writes past the live range are not errors. The gap they open is filled
//!   with `T::default()` ("implicit initialization"), never left as raw
//!   storage.
//! - A value moved into the array is owned by it from that moment, and the
//!   array destroys each owned element exactly once — via the configured
//!   [`Finalizer`] if one was supplied, by plain drop otherwise. The moves
//!   themselves make the prior binding inaccessible, so no value can be
//!   destroyed both by its old owner and by the array.

use std::any::type_name;
use std::fmt;

use tarn_core::{Element, Finalizer};

use crate::raw::RawBuf;

/// A growable, homogeneous array with manual capacity control.
///
/// Storage is a single contiguous heap allocation sized for `capacity`
/// elements; the first `count` slots hold live values. Capacity only grows,
/// never shrinks, except through an explicit [`shrink`](TypedArray::shrink).
///
/// # Ownership
///
/// Values enter by move and are array-owned until the array destroys them
/// (on overwrite by [`set`](TypedArray::set), on [`clear`](TypedArray::clear),
/// or at teardown) or hands them back ([`pop`](TypedArray::pop),
/// [`remove`](TypedArray::remove) — no finalizer runs for those).
///
/// # Allocation failures
///
/// Fatal by policy: growth and shrink abort the process when the allocator
/// fails, rather than returning an error. Out-of-range *reads* are the
/// non-fatal failure mode and yield `None`.
pub struct TypedArray<T: Element> {
    buf: RawBuf<T>,
    count: usize,
    finalizer: Option<Finalizer<T>>,
}

impl<T: Element> TypedArray<T> {
    /// Create an empty array. Never allocates.
    pub fn new() -> Self {
        Self {
            buf: RawBuf::new(),
            count: 0,
            finalizer: None,
        }
    }

    /// Create an empty array with room for at least `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut array = Self::new();
        array.reserve(capacity);
        array
    }

    /// Create an empty array with a destruction callback and room for at
    /// least `capacity` elements.
    ///
    /// The finalizer is invoked exactly once per element the array
    /// destroys; see the type-level ownership notes.
    pub fn with_finalizer(capacity: usize, finalizer: Finalizer<T>) -> Self {
        let mut array = Self::new();
        array.finalizer = Some(finalizer);
        array.reserve(capacity);
        array
    }

    /// Number of live elements.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of elements the current allocation can hold without
    /// reallocating.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Highest populated index, or `-1` when the array is empty.
    ///
    /// Deliberately *not* the element count: this mirrors 1-based sequence
    /// semantics where "length" names the last index. Use
    /// [`count`](TypedArray::count) for the element count.
    pub fn length(&self) -> isize {
        self.count as isize - 1
    }

    /// Ensure capacity for at least `min_capacity` elements.
    ///
    /// No-op when the buffer is already large enough; otherwise the
    /// allocation grows to the requested byte size rounded up to the next
    /// power of two. Reallocation failure aborts the process; the old
    /// buffer remains valid up to that point.
    pub fn reserve(&mut self, min_capacity: usize) {
        self.buf.grow_to(min_capacity);
    }

    /// Append `value` after the last live element.
    pub fn push(&mut self, value: T) {
        self.buf.grow_to(self.count + 1);
        self.buf.write(self.count, value);
        self.count += 1;
    }

    /// Insert `value` at `position`.
    ///
    /// Three regimes:
    ///
    /// - `position == count`: plain append.
    /// - `position < count`: the elements at `[position, count)` are
    ///   block-moved one slot toward higher indices — displaced, never
    ///   destroyed — and `value` lands at `position`.
    /// - `position > count`: the gap `[count, position)` is filled with
    ///   `T::default()`, `value` lands at `position`, and `count` becomes
    ///   `position + 1`.
    pub fn insert(&mut self, position: usize, value: T) {
        if position < self.count {
            self.buf.grow_to(self.count + 1);
            self.buf.shift_up(position, self.count - position);
            self.buf.write(position, value);
            self.count += 1;
        } else if position == self.count {
            self.push(value);
        } else {
            self.sparse_fill(position);
            self.buf.write(position, value);
            self.count = position + 1;
        }
    }

    /// Remove and return the last element, or `None` when empty.
    ///
    /// O(1). Ownership passes back to the caller; the finalizer does not
    /// run.
    pub fn pop(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }
        self.count -= 1;
        Some(self.buf.take(self.count))
    }

    /// Remove and return the element at `position`, or `None` when
    /// `position >= count` (the array is left unchanged in that case).
    ///
    /// Elements at `[position + 1, count)` are block-moved one slot toward
    /// lower indices; relative order is preserved. Ownership of the removed
    /// value passes back to the caller; the finalizer does not run.
    pub fn remove(&mut self, position: usize) -> Option<T> {
        if position >= self.count {
            return None;
        }
        if position == self.count - 1 {
            return self.pop();
        }
        let value = self.buf.take(position);
        self.buf.shift_down(position + 1, self.count - position - 1);
        self.count -= 1;
        Some(value)
    }

    /// The element at `index`, or `None` when `index >= count`.
    ///
    /// Never yields uninitialized storage: the slots in
    /// `[count, capacity)` are unreachable through this accessor.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.count {
            Some(&self.buf.slice(self.count)[index])
        } else {
            None
        }
    }

    /// Mutable access to the element at `index`, or `None` when
    /// `index >= count`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.count {
            Some(&mut self.buf.slice_mut(self.count)[index])
        } else {
            None
        }
    }

    /// Write `value` at `index`, replacing, appending, or sparse-filling.
    ///
    /// - `index < count`: the existing element is destroyed first —
    ///   finalizer if configured, plain drop otherwise — then `value` takes
    ///   the slot.
    /// - `index == count`: plain append.
    /// - `index > count`: the gap `[count, index)` is filled with
    ///   `T::default()` and `count` becomes `index + 1`.
    pub fn set(&mut self, index: usize, value: T) {
        if index < self.count {
            let previous = self.buf.replace(index, value);
            self.finalize(previous);
        } else if index == self.count {
            self.push(value);
        } else {
            self.sparse_fill(index);
            self.buf.write(index, value);
            self.count = index + 1;
        }
    }

    /// Reallocate the buffer down to exactly `count` elements.
    ///
    /// Releases the buffer entirely when the array is empty. Reallocation
    /// failure is fatal, as for [`reserve`](TypedArray::reserve).
    pub fn shrink(&mut self) {
        self.buf.shrink_to(self.count);
    }

    /// Destroy every live element and release the buffer.
    ///
    /// Elements are destroyed from the highest index down to zero, through
    /// the configured finalizer when one exists. Afterwards
    /// `count == capacity == 0`; the array remains usable and the next
    /// insert reallocates.
    pub fn clear(&mut self) {
        for index in (0..self.count).rev() {
            let value = self.buf.take(index);
            self.finalize(value);
        }
        self.count = 0;
        self.buf.release();
    }

    /// [`clear`](TypedArray::clear) with a one-off finalizer override.
    ///
    /// The override replaces the configured finalizer for this call only;
    /// it receives every live element, highest index first.
    pub fn clear_with(&mut self, finalizer: &dyn Fn(T)) {
        for index in (0..self.count).rev() {
            finalizer(self.buf.take(index));
        }
        self.count = 0;
        self.buf.release();
    }

    /// View the live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        self.buf.slice(self.count)
    }

    /// View the live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.buf.slice_mut(self.count)
    }

    /// Grow for `position + 1` elements and default-fill `[count, position)`.
    fn sparse_fill(&mut self, position: usize) {
        let needed = position
            .checked_add(1)
            .expect("requested capacity overflows usize");
        self.buf.grow_to(needed);
        for index in self.count..position {
            self.buf.write(index, T::default());
        }
    }

    /// Destroy a value the array owns: configured finalizer, else drop.
    fn finalize(&self, value: T) {
        match &self.finalizer {
            Some(finalizer) => finalizer(value),
            None => drop(value),
        }
    }
}

impl<T: Element> Default for TypedArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> Drop for TypedArray<T> {
    /// Teardown behaves exactly like [`clear`](TypedArray::clear): every
    /// live element is destroyed through the configured finalizer, then the
    /// buffer is released.
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Element> fmt::Display for TypedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TypedArray<{}>(count={}, capacity={})",
            type_name::<T>(),
            self.count,
            self.capacity()
        )
    }
}

impl<T: Element> fmt::Debug for TypedArray<T> {
    // Manual impl: the finalizer field has no Debug representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedArray")
            .field("element", &type_name::<T>())
            .field("count", &self.count)
            .field("capacity", &self.capacity())
            .field("finalizer", &self.finalizer.is_some())
            .finish()
    }
}
