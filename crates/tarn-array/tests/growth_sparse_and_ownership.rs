use std::sync::Arc;

use tarn_array::{CtorRegistry, TypedArray};
use tarn_test_utils::{logged, tracked_finalizer, Tracked};

#[test]
fn four_byte_elements_grow_write_sparse_and_remove_end_to_end() {
    // 4-byte integers, initial capacity 2.
    let mut array = TypedArray::<i32>::with_capacity(2);
    assert_eq!(array.capacity(), 2);

    // Three appends: 12 bytes rounds to a 16-byte allocation, 4 elements.
    array.push(1);
    array.push(2);
    array.push(3);
    assert_eq!(array.capacity(), 4);
    assert_eq!(array.count(), 3);
    assert_eq!(array.length(), 2);

    // Far write: the gap gets zero values, count jumps past it.
    array.set(5, 9);
    assert_eq!(array.count(), 6);
    assert_eq!(array.get(3), Some(&0));
    assert_eq!(array.get(4), Some(&0));
    assert_eq!(array.get(5), Some(&9));
    assert_eq!(array.length(), 5);

    // Front removal hands back the original head and shifts the rest left.
    assert_eq!(array.remove(0), Some(1));
    assert_eq!(array.count(), 5);
    assert_eq!(array.as_slice(), [2, 3, 0, 0, 9]);
}

#[test]
fn reserve_shrink_clear_cycle_keeps_array_usable() {
    let mut array = TypedArray::<u32>::new();
    array.reserve(10);
    let reserved = array.capacity();
    assert!(reserved >= 10);

    for i in 0..6 {
        array.push(i);
    }
    assert_eq!(array.capacity(), reserved);

    array.shrink();
    assert_eq!(array.capacity(), 6);
    assert_eq!(array.as_slice(), [0, 1, 2, 3, 4, 5]);

    array.clear();
    assert_eq!((array.count(), array.capacity()), (0, 0));

    // Cleared, not dead: mutation reallocates from scratch.
    array.insert(3, 7);
    assert_eq!(array.as_slice(), [0, 0, 0, 7]);
}

#[test]
fn array_built_by_registry_destroys_elements_exactly_once() {
    let (finalizer, log) = tracked_finalizer();

    let mut registry = CtorRegistry::new();
    let ctor = registry.ctor::<Tracked>(Some(finalizer));

    let mut array = ctor.build(Some(4));
    for id in [11, 22, 33] {
        // The value moves in; from here only the array may destroy it.
        array.push(Tracked(id));
    }
    assert_eq!(logged(&log), Vec::<u32>::new());

    // Removal passes ownership back out — still nothing destroyed.
    let removed = array.remove(1).unwrap();
    assert_eq!(removed, Tracked(22));
    assert_eq!(logged(&log), Vec::<u32>::new());

    // Overwrite destroys exactly the replaced element.
    array.set(0, Tracked(44));
    assert_eq!(logged(&log), vec![11]);

    // Teardown destroys the rest, highest index first.
    drop(array);
    assert_eq!(logged(&log), vec![11, 33, 44]);
}

#[test]
fn registry_hands_every_consumer_the_same_finalizer() {
    let (finalizer, log) = tracked_finalizer();

    let mut registry = CtorRegistry::new();
    let first = registry.ctor::<Tracked>(Some(Arc::clone(&finalizer)));
    let second = registry.ctor::<Tracked>(None);

    let mut a = first.build(None);
    let mut b = second.build(None);
    a.push(Tracked(1));
    b.push(Tracked(2));
    a.clear();
    b.clear();

    // Both arrays came from the one cached constructor.
    assert_eq!(logged(&log), vec![1, 2]);
}

#[test]
fn clear_override_applies_to_every_live_element_in_descending_order() {
    let (configured, configured_log) = tracked_finalizer();
    let (replacement, replacement_log) = tracked_finalizer();

    let mut array = TypedArray::with_finalizer(0, configured);
    array.set(3, Tracked(99));
    assert_eq!(array.count(), 4);

    array.clear_with(replacement.as_ref());
    assert_eq!(logged(&replacement_log), vec![99, 0, 0, 0]);
    assert_eq!(logged(&configured_log), Vec::<u32>::new());
    assert_eq!((array.count(), array.capacity()), (0, 0));
}

#[test]
fn heap_owning_elements_survive_shifts_without_corruption() {
    let mut array = TypedArray::<String>::new();
    for word in ["delta", "echo", "golf"] {
        array.push(word.to_string());
    }
    array.insert(2, "foxtrot".to_string());
    array.insert(0, "charlie".to_string());
    assert_eq!(
        array.as_slice(),
        ["charlie", "delta", "echo", "foxtrot", "golf"]
    );

    assert_eq!(array.remove(2), Some("echo".to_string()));
    assert_eq!(array.pop(), Some("golf".to_string()));
    assert_eq!(array.as_slice(), ["charlie", "delta", "foxtrot"]);
}
