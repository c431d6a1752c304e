use std::collections::HashMap;

use crate::{
    error::{Error, Result},
    Tag, Value,
};

/// An NBT compound: an insertion-ordered set of uniquely named tags.
///
/// The compound keeps a name-to-index map next to an ordered entry vector,
/// giving O(1) lookup by name, O(1) access by ordinal and O(1) removal.
/// Replacing an entry by name keeps its ordinal position. Removal swaps the
/// last entry into the vacated slot, so iteration order changes on delete;
/// between deletions, iteration order is insertion order.
#[derive(Debug, Clone, Default)]
pub struct Compound {
    indices: HashMap<String, usize>,
    entries: Vec<(String, Value)>,
}

impl Compound {
    pub fn new() -> Self {
        Compound::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Compound {
            indices: HashMap::with_capacity(capacity),
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add or replace an entry. Replacing keeps the entry's original
    /// ordinal and returns the value it displaced; a new name appends.
    pub fn put(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let name = name.into();
        let value = value.into();
        match self.indices.get(&name) {
            Some(&index) => Some(std::mem::replace(&mut self.entries[index].1, value)),
            None => {
                let index = self.entries.len();
                self.entries.push((name.clone(), value));
                self.indices.insert(name, index);
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.indices.get(name).map(|&i| &self.entries[i].1)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        match self.indices.get(name) {
            Some(&i) => Some(&mut self.entries[i].1),
            None => None,
        }
    }

    /// The entry at ordinal `index` in the current iteration order.
    pub fn get_at(&self, index: usize) -> Option<(&str, &Value)> {
        self.entries.get(index).map(|(n, v)| (n.as_str(), v))
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.indices.contains_key(name)
    }

    /// The kind of the entry with the given name, if present.
    pub fn kind_of(&self, name: &str) -> Option<Tag> {
        self.get(name).map(Value::kind)
    }

    /// Remove the entry with the given name, returning its value.
    ///
    /// Removal is O(1): the last entry is swapped into the vacated slot and
    /// its index patched in the map. Iteration order of the remaining
    /// entries therefore changes.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        let index = self.indices.remove(name)?;
        let (_, value) = self.entries.swap_remove(index);
        if index < self.entries.len() {
            // patch the moved entry's slot in the map
            if let Some(slot) = self.indices.get_mut(self.entries[index].0.as_str()) {
                *slot = index;
            }
        }
        Some(value)
    }

    pub fn clear(&mut self) {
        self.indices.clear();
        self.entries.clear();
    }

    /// Iterate entries in insertion order (subject to removal swaps).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }

    // --- Typed accessors ---
    //
    // Strict variants fail with Missing/TypeMismatch, the `_or` variants
    // fall back to the supplied default on either condition, and plain
    // `get` returns the uncoerced value. Numeric accessors accept any
    // numeric scalar and narrow to the requested width, which is how
    // Mojang-era save data expects to be read back.

    pub fn get_compound(&self, key: &str) -> Result<&Compound> {
        match self.get(key) {
            None => Err(Error::missing(key)),
            Some(Value::Compound(c)) => Ok(c),
            Some(other) => Err(Error::type_mismatch("compound", other.kind())),
        }
    }

    pub fn get_compound_or<'a>(&'a self, key: &str, default: &'a Compound) -> &'a Compound {
        match self.get(key) {
            Some(Value::Compound(c)) => c,
            _ => default,
        }
    }

    pub fn get_byte(&self, key: &str) -> Result<i8> {
        self.numeric(key, "byte").map(narrow(Value::as_i8))
    }

    pub fn get_byte_or(&self, key: &str, default: i8) -> i8 {
        self.numeric_opt(key).and_then(Value::as_i8).unwrap_or(default)
    }

    pub fn get_short(&self, key: &str) -> Result<i16> {
        self.numeric(key, "short").map(narrow(Value::as_i16))
    }

    pub fn get_short_or(&self, key: &str, default: i16) -> i16 {
        self.numeric_opt(key).and_then(Value::as_i16).unwrap_or(default)
    }

    pub fn get_int(&self, key: &str) -> Result<i32> {
        self.numeric(key, "int").map(narrow(Value::as_i32))
    }

    pub fn get_int_or(&self, key: &str, default: i32) -> i32 {
        self.numeric_opt(key).and_then(Value::as_i32).unwrap_or(default)
    }

    pub fn get_long(&self, key: &str) -> Result<i64> {
        self.numeric(key, "long").map(narrow(Value::as_i64))
    }

    pub fn get_long_or(&self, key: &str, default: i64) -> i64 {
        self.numeric_opt(key).and_then(Value::as_i64).unwrap_or(default)
    }

    pub fn get_float(&self, key: &str) -> Result<f32> {
        self.numeric(key, "float").map(narrow(Value::as_f32))
    }

    pub fn get_float_or(&self, key: &str, default: f32) -> f32 {
        self.numeric_opt(key).and_then(Value::as_f32).unwrap_or(default)
    }

    pub fn get_double(&self, key: &str) -> Result<f64> {
        self.numeric(key, "double").map(narrow(Value::as_f64))
    }

    pub fn get_double_or(&self, key: &str, default: f64) -> f64 {
        self.numeric_opt(key).and_then(Value::as_f64).unwrap_or(default)
    }

    /// Strict string access. Any primitive renders: numbers stringify, so
    /// save data that stores e.g. an id as an int still reads back.
    pub fn get_string(&self, key: &str) -> Result<String> {
        match self.get(key) {
            None => Err(Error::missing(key)),
            Some(v) => v
                .as_string()
                .ok_or_else(|| Error::type_mismatch("string", v.kind())),
        }
    }

    pub fn get_string_or(&self, key: &str, default: &str) -> String {
        match self.get(key).and_then(|v| v.as_string()) {
            Some(s) => s,
            None => default.to_owned(),
        }
    }

    fn numeric(&self, key: &str, expected: &str) -> Result<&Value> {
        match self.get(key) {
            None => Err(Error::missing(key)),
            Some(v) if v.kind().is_number() => Ok(v),
            Some(v) => Err(Error::type_mismatch(expected, v.kind())),
        }
    }

    fn numeric_opt(&self, key: &str) -> Option<&Value> {
        self.get(key).filter(|v| v.kind().is_number())
    }
}

// The narrowing accessors are total over numeric values, which is all that
// numeric() hands out.
fn narrow<T: Default>(f: impl Fn(&Value) -> Option<T>) -> impl Fn(&Value) -> T {
    move |v| f(v).unwrap_or_default()
}

// The index map is fully determined by the entry vector, so equality only
// needs to look at the entries.
impl PartialEq for Compound {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl FromIterator<(String, Value)> for Compound {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut compound = Compound::new();
        for (name, value) in iter {
            compound.put(name, value);
        }
        compound
    }
}
