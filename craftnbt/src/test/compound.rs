use crate::error::ErrorKind;
use crate::{Compound, Tag, Value};

fn sample() -> Compound {
    let mut c = Compound::new();
    c.put("a", 1i32);
    c.put("b", 2i32);
    c.put("c", 3i32);
    c.put("d", 4i32);
    c
}

#[test]
fn put_and_get() {
    let mut c = Compound::new();
    assert_eq!(c.put("health", 20i32), None);
    assert_eq!(c.get("health"), Some(&Value::Int(20)));
    assert_eq!(c.get("mana"), None);
    assert_eq!(c.len(), 1);
}

#[test]
fn put_replaces_and_keeps_ordinal() {
    let mut c = sample();
    let old = c.put("b", "replaced");
    assert_eq!(old, Some(Value::Int(2)));

    // still exactly one entry named "b", still at ordinal 1
    assert_eq!(c.len(), 4);
    assert_eq!(c.get_at(1), Some(("b", &Value::String("replaced".into()))));
    assert_eq!(c.get("b"), Some(&Value::String("replaced".into())));
}

#[test]
fn iteration_is_insertion_order() {
    let c = sample();
    let keys: Vec<_> = c.keys().collect();
    assert_eq!(keys, ["a", "b", "c", "d"]);
}

#[test]
fn get_at_matches_iteration() {
    let c = sample();
    for (i, (name, value)) in c.iter().enumerate() {
        assert_eq!(c.get_at(i), Some((name, value)));
    }
    assert_eq!(c.get_at(4), None);
}

#[test]
fn remove_swaps_last_into_slot() {
    let mut c = sample();
    assert_eq!(c.remove("b"), Some(Value::Int(2)));

    // "d" was last and takes the vacated ordinal 1
    let keys: Vec<_> = c.keys().collect();
    assert_eq!(keys, ["a", "d", "c"]);

    // every lookup still lands
    assert_eq!(c.get("a"), Some(&Value::Int(1)));
    assert_eq!(c.get("c"), Some(&Value::Int(3)));
    assert_eq!(c.get("d"), Some(&Value::Int(4)));
    assert_eq!(c.get("b"), None);
}

#[test]
fn remove_last_entry() {
    let mut c = sample();
    assert_eq!(c.remove("d"), Some(Value::Int(4)));
    let keys: Vec<_> = c.keys().collect();
    assert_eq!(keys, ["a", "b", "c"]);
}

#[test]
fn remove_missing() {
    let mut c = sample();
    assert_eq!(c.remove("nope"), None);
    assert_eq!(c.len(), 4);
}

#[test]
fn remove_then_put_appends() {
    let mut c = sample();
    c.remove("a");
    c.put("e", 5i32);
    let keys: Vec<_> = c.keys().collect();
    assert_eq!(keys, ["d", "b", "c", "e"]);
}

#[test]
fn strict_accessors() {
    let mut c = Compound::new();
    c.put("byte", 7i8);
    c.put("int", 300i32);
    c.put("double", 2.5f64);
    c.put("name", "Steve");
    c.put("nested", Compound::new());

    assert_eq!(c.get_byte("byte").unwrap(), 7);
    assert_eq!(c.get_int("int").unwrap(), 300);
    assert_eq!(c.get_double("double").unwrap(), 2.5);
    assert_eq!(c.get_string("name").unwrap(), "Steve");
    assert_eq!(c.get_compound("nested").unwrap().len(), 0);
}

#[test]
fn strict_accessors_narrow() {
    let mut c = Compound::new();
    c.put("n", 300i32);

    // any numeric scalar narrows to the requested width
    assert_eq!(c.get_byte("n").unwrap(), 44);
    assert_eq!(c.get_long("n").unwrap(), 300);
    assert_eq!(c.get_float("n").unwrap(), 300.0);
}

#[test]
fn strict_accessors_render_numbers_as_strings() {
    let mut c = Compound::new();
    c.put("id", 35i32);
    assert_eq!(c.get_string("id").unwrap(), "35");
}

#[test]
fn missing_key_errors() {
    let c = Compound::new();
    assert_eq!(c.get_int("gone").unwrap_err().kind(), &ErrorKind::Missing);
    assert_eq!(
        c.get_compound("gone").unwrap_err().kind(),
        &ErrorKind::Missing
    );
    assert_eq!(
        c.get_string("gone").unwrap_err().kind(),
        &ErrorKind::Missing
    );
}

#[test]
fn wrong_kind_errors() {
    let mut c = Compound::new();
    c.put("s", "text");
    c.put("list", crate::List::new());

    assert_eq!(c.get_int("s").unwrap_err().kind(), &ErrorKind::TypeMismatch);
    assert_eq!(
        c.get_compound("s").unwrap_err().kind(),
        &ErrorKind::TypeMismatch
    );
    assert_eq!(
        c.get_string("list").unwrap_err().kind(),
        &ErrorKind::TypeMismatch
    );
}

#[test]
fn default_accessors() {
    let mut c = Compound::new();
    c.put("n", 5i16);
    c.put("s", "text");

    assert_eq!(c.get_int_or("n", -1), 5);
    assert_eq!(c.get_int_or("gone", -1), -1);
    assert_eq!(c.get_int_or("s", -1), -1);
    assert_eq!(c.get_string_or("s", "fallback"), "text");
    assert_eq!(c.get_string_or("gone", "fallback"), "fallback");

    let fallback = Compound::new();
    assert!(c.get_compound_or("gone", &fallback).is_empty());
}

#[test]
fn kind_of() {
    let mut c = Compound::new();
    c.put("x", 1.0f32);
    assert_eq!(c.kind_of("x"), Some(Tag::Float));
    assert_eq!(c.kind_of("y"), None);
}

#[test]
fn equality_is_order_sensitive() {
    let mut a = Compound::new();
    a.put("x", 1i32);
    a.put("y", 2i32);

    let mut b = Compound::new();
    b.put("y", 2i32);
    b.put("x", 1i32);

    assert_ne!(a, b);

    let mut c = Compound::new();
    c.put("x", 1i32);
    c.put("y", 2i32);
    assert_eq!(a, c);
}
