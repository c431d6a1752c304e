use crate::error::ErrorKind;
use crate::{List, Tag, Value};

#[test]
fn first_push_fixes_intern_kind() {
    let mut list = List::new();
    assert_eq!(list.intern_kind(), Tag::End);

    list.push(1i32).unwrap();
    assert_eq!(list.intern_kind(), Tag::Int);
    assert_eq!(list.len(), 1);
}

#[test]
fn mismatched_push_fails() {
    let mut list = List::new();
    list.push(1i32).unwrap();

    let err = list.push("nope").unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::TypeMismatch);
    assert_eq!(list.len(), 1);
}

#[test]
fn clear_retains_intern_kind() {
    let mut list = List::new();
    list.push(1i16).unwrap();
    list.clear();

    assert!(list.is_empty());
    assert_eq!(list.intern_kind(), Tag::Short);
}

#[test]
fn push_after_clear_starts_over() {
    let mut list = List::new();
    list.push(1i16).unwrap();
    list.clear();

    // the emptied list accepts a new kind
    list.push("fresh").unwrap();
    assert_eq!(list.intern_kind(), Tag::String);
}

#[test]
fn set_checks_kind() {
    let mut list = List::new();
    list.push(1i32).unwrap();
    list.push(2i32).unwrap();

    let old = list.set(0, 9i32).unwrap();
    assert_eq!(old, Value::Int(1));

    let err = list.set(1, 1.0f64).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::TypeMismatch);
    assert_eq!(list.get(1), Some(&Value::Int(2)));
}

#[test]
fn remove_shifts() {
    let mut list = List::new();
    list.push(1i32).unwrap();
    list.push(2i32).unwrap();
    list.push(3i32).unwrap();

    assert_eq!(list.remove(0), Value::Int(1));
    assert_eq!(list.get(0), Some(&Value::Int(2)));
    assert_eq!(list.len(), 2);
}

#[test]
fn from_values_checks_homogeneity() {
    let ok = List::from_values(vec![Value::Byte(1), Value::Byte(2)]).unwrap();
    assert_eq!(ok.intern_kind(), Tag::Byte);

    let err = List::from_values(vec![Value::Byte(1), Value::Int(2)]).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::TypeMismatch);

    let empty = List::from_values(vec![]).unwrap();
    assert_eq!(empty.intern_kind(), Tag::End);
}

#[test]
fn empty_lists_compare_equal_regardless_of_kind() {
    let mut cleared = List::new();
    cleared.push(1i32).unwrap();
    cleared.clear();

    assert_eq!(cleared, List::new());
    assert_eq!(List::with_kind(Tag::Double), List::new());
}

#[test]
fn nonempty_lists_compare_elements() {
    let mut a = List::new();
    a.push(1i32).unwrap();
    let mut b = List::new();
    b.push(1i32).unwrap();
    assert_eq!(a, b);

    b.push(2i32).unwrap();
    assert_ne!(a, b);
}

#[test]
fn lists_nest() {
    let mut inner = List::new();
    inner.push(1i32).unwrap();

    let mut outer = List::new();
    outer.push(inner.clone()).unwrap();
    assert_eq!(outer.intern_kind(), Tag::List);

    // a list of lists does not constrain the inner element kinds
    let mut other = List::new();
    other.push("text").unwrap();
    outer.push(other).unwrap();
    assert_eq!(outer.len(), 2);
}
