use craftnbt::{Tag, Value};

use crate::{from_str_with, Result, SnbtErrorKind, Syntax};

fn parse(input: &str) -> Result<Value> {
    from_str_with(input, Syntax::V1_8)
}

#[test]
fn item_stack_compound() -> Result<()> {
    let value = parse("{id:35,Damage:0s}")?;
    let c = value.as_compound().unwrap();
    assert_eq!(c.get("id"), Some(&Value::Int(35)));
    assert_eq!(c.get("Damage"), Some(&Value::Short(0)));
    Ok(())
}

#[test]
fn suffix_classification() -> Result<()> {
    let value = parse("{a:1b,b:2s,c:3L,d:4.5f,e:6.5d,f:7,g:8.25}")?;
    let c = value.as_compound().unwrap();
    assert_eq!(c.get("a"), Some(&Value::Byte(1)));
    assert_eq!(c.get("b"), Some(&Value::Short(2)));
    assert_eq!(c.get("c"), Some(&Value::Long(3)));
    assert_eq!(c.get("d"), Some(&Value::Float(4.5)));
    assert_eq!(c.get("e"), Some(&Value::Double(6.5)));
    assert_eq!(c.get("f"), Some(&Value::Int(7)));
    assert_eq!(c.get("g"), Some(&Value::Double(8.25)));
    Ok(())
}

#[test]
fn booleans_become_bytes() -> Result<()> {
    let value = parse("{a:true,b:FALSE}")?;
    let c = value.as_compound().unwrap();
    assert_eq!(c.get("a"), Some(&Value::Byte(1)));
    assert_eq!(c.get("b"), Some(&Value::Byte(0)));
    Ok(())
}

#[test]
fn unquoted_text_is_a_string() -> Result<()> {
    let value = parse("{id:minecraft:stone}")?;
    let c = value.as_compound().unwrap();
    // everything after the first colon is the value
    assert_eq!(c.get("id"), Some(&Value::String("minecraft:stone".to_owned())));
    Ok(())
}

#[test]
fn quoted_values_are_unescaped() -> Result<()> {
    let value = parse(r#"{Name:"say \"hi\""}"#)?;
    let c = value.as_compound().unwrap();
    assert_eq!(c.get("Name"), Some(&Value::String(r#"say "hi""#.to_owned())));
    Ok(())
}

#[test]
fn quoted_commas_do_not_split_pairs() -> Result<()> {
    let value = parse(r#"{a:"x,y",b:2}"#)?;
    let c = value.as_compound().unwrap();
    assert_eq!(c.get("a"), Some(&Value::String("x,y".to_owned())));
    assert_eq!(c.get("b"), Some(&Value::Int(2)));
    Ok(())
}

#[test]
fn bracketed_integers_are_an_int_array() -> Result<()> {
    let value = parse("{xs:[1,2,3]}")?;
    let c = value.as_compound().unwrap();
    match c.get("xs") {
        Some(Value::IntArray(a)) => assert_eq!(a.as_slice(), &[1, 2, 3]),
        other => panic!("expected int array, got {:?}", other),
    }
    Ok(())
}

#[test]
fn modern_array_spelling_is_tolerated() -> Result<()> {
    // [I;1,2,3] predates this parser but shows up in ported data
    match parse("[I;1,2,3]")? {
        Value::IntArray(a) => assert_eq!(a.as_slice(), &[1, 2, 3]),
        other => panic!("expected int array, got {:?}", other),
    }
    match parse("{xs:[I;4,5]}")?.as_compound().unwrap().get("xs") {
        Some(Value::IntArray(a)) => assert_eq!(a.as_slice(), &[4, 5]),
        other => panic!("expected int array, got {:?}", other),
    }
    Ok(())
}

#[test]
fn non_numeric_brackets_are_a_list() -> Result<()> {
    let value = parse("{xs:[a,b]}")?;
    let c = value.as_compound().unwrap();
    let list = c.get("xs").unwrap().as_list().unwrap();
    assert_eq!(list.intern_kind(), Tag::String);
    assert_eq!(list.len(), 2);
    Ok(())
}

#[test]
fn index_prefixed_list_entries() -> Result<()> {
    // 1.7/1.8 wrote list entries as index:value; the index is discarded
    let value = parse("{xs:[0:first,1:second]}")?;
    let list = value.as_compound().unwrap().get("xs").unwrap().as_list().unwrap();
    assert_eq!(list.get(0), Some(&Value::String("first".to_owned())));
    assert_eq!(list.get(1), Some(&Value::String("second".to_owned())));
    Ok(())
}

#[test]
fn nested_compounds() -> Result<()> {
    let value = parse("{display:{Name:Sword,Lore:[0:sharp]}}")?;
    let display = value.as_compound().unwrap().get_compound("display").unwrap();
    assert_eq!(display.get("Name"), Some(&Value::String("Sword".to_owned())));
    Ok(())
}

#[test]
fn lists_of_compounds() -> Result<()> {
    let value = parse("{ench:[{id:16,lvl:5s},{id:17,lvl:1s}]}")?;
    let list = value.as_compound().unwrap().get("ench").unwrap().as_list().unwrap();
    assert_eq!(list.len(), 2);
    let first = list.get(0).unwrap().as_compound().unwrap();
    assert_eq!(first.get_int("id").unwrap(), 16);
    assert_eq!(first.get_short("lvl").unwrap(), 5);
    Ok(())
}

#[test]
fn malformed_list_elements_are_skipped() -> Result<()> {
    // the nested compound has no separator and is dropped; the rest of the
    // list survives
    let value = parse("{xs:[{nosep},5,6]}")?;
    let list = value.as_compound().unwrap().get("xs").unwrap().as_list().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list.get(0), Some(&Value::Int(5)));

    // index prefixes never count as malformed
    let parsed = parse("{xs:[1,stray:2,3]}")?;
    let list = parsed.as_compound().unwrap().get("xs").unwrap().as_list().unwrap();
    assert_eq!(list.len(), 3);
    Ok(())
}

#[test]
fn mixed_kind_list_elements_are_dropped_or_error() {
    // elements that parse but disagree on kind surface as a mismatch
    let err = from_str_with("{xs:[a,5]}", Syntax::V1_7).unwrap_err();
    assert_eq!(err.kind(), &SnbtErrorKind::TypeMismatch);
}

#[test]
fn missing_separator_errors() {
    let err = parse("{no_separator}").unwrap_err();
    assert_eq!(err.kind(), &SnbtErrorKind::Parse);
    assert!(err.to_string().contains("No separator found"));
}

#[test]
fn unbalanced_brackets_error() {
    assert!(parse("{a:{b:1}").is_err());
    let err = parse("{a:1]}").unwrap_err();
    assert_eq!(err.kind(), &SnbtErrorKind::Parse);
}

#[test]
fn non_compound_root_falls_back_to_primitive() -> Result<()> {
    assert_eq!(parse("5")?, Value::Int(5));
    assert_eq!(parse("5.5")?, Value::Double(5.5));
    assert_eq!(parse("hello")?, Value::String("hello".to_owned()));
    Ok(())
}

#[test]
fn overflow_falls_back_to_string() -> Result<()> {
    assert_eq!(
        parse("{n:99999999999999999999}")?
            .as_compound()
            .unwrap()
            .get("n"),
        Some(&Value::String("99999999999999999999".to_owned()))
    );
    Ok(())
}

#[test]
fn v1_7_and_v1_8_share_the_parser() -> Result<()> {
    let a = from_str_with("{id:35}", Syntax::V1_7)?;
    let b = from_str_with("{id:35}", Syntax::V1_8)?;
    assert_eq!(a, b);
    Ok(())
}

#[test]
fn whitespace_around_pairs() -> Result<()> {
    let value = parse("{ a : 1 , b : two }")?;
    let c = value.as_compound().unwrap();
    assert_eq!(c.get("a"), Some(&Value::Int(1)));
    assert_eq!(c.get("b"), Some(&Value::String("two".to_owned())));
    Ok(())
}
