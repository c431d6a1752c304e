//! Deserialization of binary NBT into [`Value`] trees.
//!
//! The wire format is fully big-endian: a named tag is a 1-byte kind id,
//! a length-prefixed UTF-8 name, then the payload. See [`read_named`] for
//! the entry point used on compound entries and the root tag.

use std::io::Read;

use crate::{
    error::{Error, Result},
    input::{try_size, Input, Reader, Slice},
    ByteArray, Compound, IntArray, List, LongArray, Tag, Value,
};

/// Read a named root tag from a byte slice.
///
/// The slice must start directly with the uncompressed tag frame; if the
/// data came from a world save or the network, the caller decompresses
/// first. Trailing bytes after the root tag are left untouched.
pub fn from_bytes(data: &[u8]) -> Result<(String, Value)> {
    let mut input = Slice::new(data);
    match read_named(&mut input)? {
        Some(named) => Ok(named),
        None => Err(Error::bespoke("invalid nbt: no root tag".to_owned())),
    }
}

/// Read a named root tag from any [`std::io::Read`]. Does not buffer, so
/// wrap large file handles in a `BufReader`.
pub fn from_reader<R: Read>(reader: R) -> Result<(String, Value)> {
    let mut input = Reader::new(reader);
    match read_named(&mut input)? {
        Some(named) => Ok(named),
        None => Err(Error::bespoke("invalid nbt: no root tag".to_owned())),
    }
}

/// Read one named tag frame: kind id, name, payload.
///
/// Returns `None` when the frame is a lone end marker, which terminates
/// compound iteration.
pub fn read_named<I: Input>(input: &mut I) -> Result<Option<(String, Value)>> {
    let tag = input.consume_tag()?;
    if tag == Tag::End {
        return Ok(None);
    }
    let name = input.consume_str()?;
    let value = read_payload(input, tag)?;
    Ok(Some((name, value)))
}

/// Read the payload of a tag whose kind is already known, e.g. a list
/// element.
pub fn read_payload<I: Input>(input: &mut I, tag: Tag) -> Result<Value> {
    Ok(match tag {
        Tag::End => return Err(Error::unknown_tag(0)),
        Tag::Byte => Value::Byte(input.consume_byte()? as i8),
        Tag::Short => Value::Short(input.consume_i16()?),
        Tag::Int => Value::Int(input.consume_i32()?),
        Tag::Long => Value::Long(input.consume_i64()?),
        Tag::Float => Value::Float(input.consume_f32()?),
        Tag::Double => Value::Double(input.consume_f64()?),
        Tag::String => Value::String(input.consume_str()?),
        Tag::ByteArray => {
            let len = checked_len(input.consume_i32()?)?;
            let bytes = input.consume_bytes(len)?;
            Value::ByteArray(ByteArray::new(vec_u8_into_i8(bytes)))
        }
        Tag::IntArray => {
            let len = input.consume_i32()?;
            let bytes = input.consume_bytes(try_size(len, std::mem::size_of::<i32>())?)?;
            let data: IntArray = bytes
                .chunks_exact(4)
                .map(|c| i32::from_be_bytes([c[0], c[1], c[2], c[3]]))
                .collect();
            Value::IntArray(data)
        }
        Tag::LongArray => {
            let len = input.consume_i32()?;
            let bytes = input.consume_bytes(try_size(len, std::mem::size_of::<i64>())?)?;
            let data: LongArray = bytes
                .chunks_exact(8)
                .map(|c| i64::from_be_bytes([c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7]]))
                .collect();
            Value::LongArray(data)
        }
        Tag::List => {
            let element_tag = input.consume_tag()?;
            let len = input.consume_i32()?;
            if element_tag == Tag::End {
                // The game sometimes writes a nonzero (or garbage) length
                // with an End element kind; tolerate it and produce an
                // empty list.
                return Ok(Value::List(List::new()));
            }
            let len = checked_len(len)?;
            let mut list = List::with_kind(element_tag);
            for _ in 0..len {
                list.push(read_payload(input, element_tag)?)?;
            }
            Value::List(list)
        }
        Tag::Compound => {
            let mut compound = Compound::new();
            while let Some((name, value)) = read_named(input)? {
                compound.put(name, value);
            }
            Value::Compound(compound)
        }
    })
}

fn checked_len(len: i32) -> Result<usize> {
    usize::try_from(len).map_err(|_| Error::negative_length(len))
}

// Thanks to https://stackoverflow.com/a/59707887
fn vec_u8_into_i8(v: Vec<u8>) -> Vec<i8> {
    // ideally we'd use Vec::into_raw_parts, but it's unstable,
    // so we have to do it manually:

    // first, make sure v's destructor doesn't free the data
    // it thinks it owns when it goes out of scope
    let mut v = std::mem::ManuallyDrop::new(v);

    // then, pick apart the existing Vec
    let p = v.as_mut_ptr();
    let len = v.len();
    let cap = v.capacity();

    // finally, adopt the data into a new Vec
    unsafe { Vec::from_raw_parts(p as *mut i8, len, cap) }
}
