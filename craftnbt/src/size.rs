//! Conservative upper bound of the serialized size of a tree.
//!
//! [`named_size`] reports at least as many bytes as [`crate::ser`] will
//! emit for the same tree, so `Vec::with_capacity(named_size(..))` followed
//! by [`crate::ser::write_named`] never reallocates. Scalars, arrays, lists
//! and compounds are counted exactly; strings are counted from their UTF-8
//! byte length, which is also exact here since that is what the writer
//! emits.

use crate::Value;

/// Maximum size in bytes of a serialized named tag: 1-byte id, name
/// payload, value payload.
pub fn named_size(name: &str, value: &Value) -> usize {
    1 + string_payload_size(name) + payload_size(value)
}

/// Maximum size in bytes of a serialized payload, excluding id and name.
pub fn payload_size(value: &Value) -> usize {
    match value {
        Value::Byte(_) => 1,
        Value::Short(_) => 2,
        Value::Int(_) => 4,
        Value::Long(_) => 8,
        Value::Float(_) => 4,
        Value::Double(_) => 8,
        Value::String(s) => string_payload_size(s),
        Value::ByteArray(a) => 4 + a.len(),
        Value::IntArray(a) => 4 + a.len() * 4,
        Value::LongArray(a) => 4 + a.len() * 8,
        // element kind + length, then the payloads
        Value::List(list) => {
            1 + 4
                + list
                    .iter()
                    .map(payload_size)
                    .sum::<usize>()
        }
        // named entries, then the end marker
        Value::Compound(compound) => {
            compound
                .iter()
                .map(|(name, value)| named_size(name, value))
                .sum::<usize>()
                + 1
        }
    }
}

// 2-byte length prefix plus the UTF-8 bytes.
fn string_payload_size(s: &str) -> usize {
    2 + s.len()
}
