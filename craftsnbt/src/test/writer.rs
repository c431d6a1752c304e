use craftnbt::builder::{CompoundBuilder, ListBuilder};
use craftnbt::{Compound, List, Value};

use crate::{to_string, Syntax};

#[test]
fn scalar_suffixes() {
    assert_eq!(to_string(&Value::Byte(1), Syntax::V1_21_5), "1b");
    assert_eq!(to_string(&Value::Short(-2), Syntax::V1_21_5), "-2s");
    assert_eq!(to_string(&Value::Int(3), Syntax::V1_21_5), "3");
    assert_eq!(to_string(&Value::Long(4), Syntax::V1_21_5), "4L");
    assert_eq!(to_string(&Value::Float(5.0), Syntax::V1_21_5), "5.0f");
    assert_eq!(to_string(&Value::Double(6.0), Syntax::V1_21_5), "6.0d");
}

#[test]
fn fractional_floats() {
    assert_eq!(to_string(&Value::Float(0.5), Syntax::V1_21_5), "0.5f");
    assert_eq!(to_string(&Value::Double(-0.25), Syntax::V1_21_5), "-0.25d");
}

#[test]
fn arrays() {
    assert_eq!(
        to_string(&Value::ByteArray(vec![1i8, -2].into()), Syntax::V1_21_5),
        "[B;1b,-2b]"
    );
    assert_eq!(
        to_string(&Value::IntArray(vec![1i32, 2, 3].into()), Syntax::V1_21_5),
        "[I;1,2,3]"
    );
    assert_eq!(
        to_string(&Value::LongArray(vec![5i64].into()), Syntax::V1_21_5),
        "[L;5L]"
    );
    assert_eq!(
        to_string(&Value::IntArray(vec![].into()), Syntax::V1_21_5),
        "[I;]"
    );
}

#[test]
fn lists_and_compounds() {
    let list = ListBuilder::new().int(1).int(2).build().unwrap();
    assert_eq!(to_string(&Value::List(list), Syntax::V1_21_5), "[1,2]");

    assert_eq!(to_string(&Value::List(List::new()), Syntax::V1_21_5), "[]");
    assert_eq!(
        to_string(&Value::Compound(Compound::new()), Syntax::V1_21_5),
        "{}"
    );
}

#[test]
fn compound_entries_in_iteration_order() {
    let c = CompoundBuilder::new()
        .int("z", 1)
        .int("a", 2)
        .build();
    assert_eq!(to_string(&Value::Compound(c), Syntax::V1_21_5), "{z:1,a:2}");
}

#[test]
fn safe_keys_are_bare_under_modern_profiles() {
    let c = CompoundBuilder::new().int("safe_key.1+-", 1).build();
    let value = Value::Compound(c);

    for syntax in [Syntax::V1_12, Syntax::V1_13, Syntax::V1_14, Syntax::V1_21_5] {
        assert_eq!(to_string(&value, syntax), "{safe_key.1+-:1}");
    }
}

#[test]
fn unsafe_keys_are_quoted_under_modern_profiles() {
    let c = CompoundBuilder::new().int("two words", 1).build();
    assert_eq!(
        to_string(&Value::Compound(c), Syntax::V1_12),
        r#"{"two words":1}"#
    );
}

#[test]
fn legacy_keys_are_raw() {
    let c = CompoundBuilder::new().int("two words", 1).build();
    assert_eq!(
        to_string(&Value::Compound(c), Syntax::V1_8),
        "{two words:1}"
    );
}

#[test]
fn string_values_are_always_quoted() {
    let value = Value::String("safe".to_owned());
    assert_eq!(to_string(&value, Syntax::V1_12), r#""safe""#);
    assert_eq!(to_string(&value, Syntax::V1_21_5), r#""safe""#);
    assert_eq!(to_string(&value, Syntax::V1_8), r#""safe""#);
}

#[test]
fn escaping() {
    let value = Value::String(r#"back\slash and "quote""#.to_owned());
    assert_eq!(
        to_string(&value, Syntax::V1_12),
        r#""back\\slash and \"quote\"""#
    );
}

#[test]
fn single_quotes_avoid_escaping_when_allowed() {
    let value = Value::String(r#"say "hi""#.to_owned());

    // 1.14+ may switch to single quotes when the text has none
    assert_eq!(to_string(&value, Syntax::V1_14), r#"'say "hi"'"#);
    // 1.12 has no single quotes and must escape
    assert_eq!(to_string(&value, Syntax::V1_12), r#""say \"hi\"""#);

    // text containing both quote kinds stays double quoted
    let both = Value::String(r#"it's "fine""#.to_owned());
    assert_eq!(to_string(&both, Syntax::V1_21_5), r#""it's \"fine\"""#);
}

#[test]
fn output_is_deterministic() {
    let c = CompoundBuilder::new()
        .string("name", "Dinnerbone")
        .byte("flag", 1)
        .build();
    let value = Value::Compound(c);

    let first = to_string(&value, Syntax::V1_21_5);
    let second = to_string(&value, Syntax::V1_21_5);
    assert_eq!(first, second);
}
