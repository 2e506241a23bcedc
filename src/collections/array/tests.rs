use super::*;
use crate::Searchable;

#[test]
fn test_length_is_fixed() {
    let array = Array::new([1u8, 2, 3, 4]);
    assert_eq!(array.len(), 4);
    assert_eq!(Container::len(&array), 4);
    assert!(!array.is_empty());

    let empty: Array<u8, 0> = Array::default();
    assert_eq!(empty.len(), 0);
    assert!(empty.is_empty());
}

#[test]
fn test_default_constructs_every_slot() {
    let array: Array<u32, 5> = Array::default();
    assert!(array.iter().all(|value| *value == 0));
}

#[test]
fn test_read_write_in_place() {
    let mut array = Array::from([10, 20, 30]);
    array[1] = 21;
    *array.get_mut(2).expect("index 2 is live") += 1;

    assert_eq!(array[0], 10);
    assert_eq!(array[1], 21);
    assert_eq!(array.get(2), Some(&31));
    assert_eq!(array.get(3), None);
    assert_eq!(array.into_inner(), [10, 21, 31]);
}

#[test]
#[should_panic(expected = "index 3 out of range for length 3")]
fn test_index_past_end_faults() {
    let array = Array::new(['a', 'b', 'c']);
    let _value = &array[3];
}

#[test]
#[should_panic(expected = "index 7 out of range for length 2")]
fn test_index_mut_past_end_faults() {
    let mut array = Array::new([0i64; 2]);
    array[7] = 1;
}

#[test]
fn test_contains_index() {
    let array = Array::new([0u8; 3]);
    assert!(array.contains_index(0));
    assert!(array.contains_index(2));
    assert!(!array.contains_index(3));
    assert!(!array.contains_index(usize::MAX));
}

#[test]
fn test_search() {
    let array = Array::new([5, 7, 5, 9, 7]);

    assert!(array.contains(&9));
    assert!(!array.contains(&4));
    assert_eq!(array.index_of(&5), Some(0));
    assert_eq!(array.last_index_of(&5), Some(2));
    assert_eq!(array.index_of(&7), Some(1));
    assert_eq!(array.last_index_of(&7), Some(4));
    assert_eq!(array.index_of(&4), None);
    assert_eq!(array.last_index_of(&4), None);
}

#[test]
fn test_last_index_of_reaches_first_slot() {
    let array = Array::new([3, 1, 1]);
    assert_eq!(array.last_index_of(&3), Some(0));

    let empty: Array<i32, 0> = Array::new([]);
    assert_eq!(empty.last_index_of(&3), None);
}
