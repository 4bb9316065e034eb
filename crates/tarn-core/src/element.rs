//! The element contract and the per-array finalizer type.

use std::sync::Arc;

/// Contract for types storable in a typed array.
///
/// An element is a plain value with a fixed, non-zero byte layout. The
/// `Default` bound is the implicit-initialization hook: index gaps created
/// by out-of-range writes are filled with `T::default()`, never left as raw
/// storage. `'static` lets a constructor registry key instantiations by
/// [`TypeId`](std::any::TypeId).
///
/// Blanket-implemented for every eligible type; there is nothing to opt
/// into beyond `Default`.
pub trait Element: Default + 'static {}

impl<T: Default + 'static> Element for T {}

/// Destruction callback an array invokes on elements it owns.
///
/// Configured once per array at construction, and invoked exactly once per
/// logical element: when an indexed write replaces it, when the array is
/// cleared, or at teardown. Elements handed back to the caller by `pop` or
/// `remove` are never finalized — ownership passes back with the value.
///
/// `Arc` so a constructor registry can stamp the same callback into every
/// array it builds for a given element type.
pub type Finalizer<T> = Arc<dyn Fn(T)>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finalizer_consumes_by_value() {
        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let finalizer: Finalizer<u32> = Arc::new(move |v| sink.lock().unwrap().push(v));
        finalizer(7);
        finalizer(9);
        assert_eq!(*seen.lock().unwrap(), vec![7, 9]);
    }

    #[test]
    fn heap_owning_types_are_elements() {
        fn assert_element<T: Element>() {}
        assert_element::<u8>();
        assert_element::<i64>();
        assert_element::<String>();
        assert_element::<Vec<f32>>();
    }
}
