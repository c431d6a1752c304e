//! Serialization of [`Value`] trees into binary NBT.
//!
//! Mirrors [`crate::de`] exactly: everything multibyte is big-endian, names
//! and strings are u16-length-prefixed UTF-8, compounds end with a single
//! zero byte.

use std::convert::TryInto;
use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};

use crate::error::{Error, Result};
use crate::{size, Tag, Value};

pub(crate) trait WriteNbt: Write {
    fn write_tag(&mut self, tag: Tag) -> Result<()> {
        self.write_u8(tag as u8)?;
        Ok(())
    }

    fn write_size_prefixed_str(&mut self, s: &str) -> Result<()> {
        let bytes = s.as_bytes();
        if bytes.len() > u16::MAX as usize {
            return Err(Error::string_too_long(bytes.len()));
        }
        self.write_u16::<BigEndian>(bytes.len() as u16)?;
        self.write_all(bytes)?;
        Ok(())
    }

    fn write_len(&mut self, len: usize) -> Result<()> {
        self.write_i32::<BigEndian>(
            len.try_into()
                .map_err(|_| Error::bespoke("len too large".to_owned()))?,
        )?;

        Ok(())
    }
}

impl<T> WriteNbt for T where T: Write {}

/// Serialize a named root tag to a fresh byte vector.
///
/// The vector is pre-sized from [`size::named_size`], so no reallocation
/// happens while writing.
pub fn to_bytes(name: &str, value: &Value) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(size::named_size(name, value));
    write_named(&mut out, name, value)?;
    Ok(out)
}

/// Serialize a named root tag to any [`std::io::Write`].
pub fn to_writer<W: Write>(writer: &mut W, name: &str, value: &Value) -> Result<()> {
    write_named(writer, name, value)
}

/// Write one named tag frame: kind id, name, payload. Used for the root
/// tag and for every compound entry.
pub fn write_named<W: Write>(writer: &mut W, name: &str, value: &Value) -> Result<()> {
    writer.write_tag(value.kind())?;
    writer.write_size_prefixed_str(name)?;
    write_payload(writer, value)
}

/// Write the payload of a value without id or name, e.g. a list element.
pub fn write_payload<W: Write>(writer: &mut W, value: &Value) -> Result<()> {
    match value {
        Value::Byte(v) => writer.write_i8(*v)?,
        Value::Short(v) => writer.write_i16::<BigEndian>(*v)?,
        Value::Int(v) => writer.write_i32::<BigEndian>(*v)?,
        Value::Long(v) => writer.write_i64::<BigEndian>(*v)?,
        Value::Float(v) => writer.write_f32::<BigEndian>(*v)?,
        Value::Double(v) => writer.write_f64::<BigEndian>(*v)?,
        Value::String(s) => writer.write_size_prefixed_str(s)?,
        Value::ByteArray(a) => {
            writer.write_len(a.len())?;
            writer.write_all(i8_slice_as_u8(a.as_slice()))?;
        }
        Value::IntArray(a) => {
            writer.write_len(a.len())?;
            for v in a.iter() {
                writer.write_i32::<BigEndian>(*v)?;
            }
        }
        Value::LongArray(a) => {
            writer.write_len(a.len())?;
            for v in a.iter() {
                writer.write_i64::<BigEndian>(*v)?;
            }
        }
        Value::List(list) => {
            if list.is_empty() {
                // An empty list is always written with an End element kind,
                // even when a cleared list still remembers its old kind.
                writer.write_tag(Tag::End)?;
                writer.write_len(0)?;
            } else {
                writer.write_tag(list.intern_kind())?;
                writer.write_len(list.len())?;
                for element in list {
                    write_payload(writer, element)?;
                }
            }
        }
        Value::Compound(compound) => {
            for (name, value) in compound.iter() {
                write_named(writer, name, value)?;
            }
            writer.write_tag(Tag::End)?;
        }
    }

    Ok(())
}

// i8 and u8 have identical layout, so a byte array payload can go out in
// one write.
fn i8_slice_as_u8(s: &[i8]) -> &[u8] {
    unsafe { std::slice::from_raw_parts(s.as_ptr() as *const u8, s.len()) }
}
