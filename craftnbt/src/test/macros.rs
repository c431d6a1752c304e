use crate::{nbt, Tag, Value};

#[test]
fn scalars() {
    assert_eq!(nbt!(5), Value::Int(5));
    assert_eq!(nbt!(5i8), Value::Byte(5));
    assert_eq!(nbt!(5i64), Value::Long(5));
    assert_eq!(nbt!(1.5f32), Value::Float(1.5));
    assert_eq!(nbt!(true), Value::Byte(1));
    assert_eq!(nbt!("hi"), Value::String("hi".to_owned()));
}

#[test]
fn compounds() {
    let tag = nbt!({
        "id": "minecraft:stone",
        "Count": 64i8,
        "tag": {
            "Damage": 0i16,
        },
    });

    let c = tag.as_compound().unwrap();
    assert_eq!(c.get_string("id").unwrap(), "minecraft:stone");
    assert_eq!(c.get_byte("Count").unwrap(), 64);
    assert_eq!(c.get_compound("tag").unwrap().get_short("Damage").unwrap(), 0);

    // written order is kept
    let keys: Vec<_> = c.keys().collect();
    assert_eq!(keys, ["id", "Count", "tag"]);
}

#[test]
fn lists() {
    let tag = nbt!(["a", "b"]);
    let list = tag.as_list().unwrap();
    assert_eq!(list.intern_kind(), Tag::String);
    assert_eq!(list.len(), 2);

    assert_eq!(nbt!([]), Value::List(crate::List::new()));

    let nested = nbt!([[1, 2], [3]]);
    assert_eq!(nested.as_list().unwrap().intern_kind(), Tag::List);
}

#[test]
fn typed_arrays() {
    assert_eq!(
        nbt!([B; 1, 2]),
        Value::ByteArray(vec![1i8, 2].into())
    );
    assert_eq!(
        nbt!([I; 1, 2, 3]),
        Value::IntArray(vec![1i32, 2, 3].into())
    );
    assert_eq!(nbt!([L; 9]), Value::LongArray(vec![9i64].into()));
    assert_eq!(nbt!([I;]), Value::IntArray(vec![].into()));
}

#[test]
#[should_panic(expected = "share one tag kind")]
fn mixed_list_panics() {
    let _ = nbt!([1, "two"]);
}

#[test]
fn expressions_as_values() {
    let count = 3i8;
    let tag = nbt!({
        "Count": count,
        "Slots": [I; 0, 9, 18],
    });
    assert_eq!(tag.as_compound().unwrap().get_byte("Count").unwrap(), 3);
}
