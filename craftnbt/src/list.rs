use crate::{
    error::{Error, Result},
    Tag, Value,
};

/// An NBT list: an ordered sequence of unnamed values sharing one element
/// kind (the intern kind).
///
/// An empty list has an intern kind of [`Tag::End`]. The kind is fixed by
/// the first insertion; pushing a value of a different kind fails.
/// [`List::clear`] keeps the intern kind for inspection, but the next push
/// into the emptied list starts the kind over.
#[derive(Debug, Clone)]
pub struct List {
    items: Vec<Value>,
    kind: Tag,
}

impl Default for List {
    fn default() -> Self {
        List {
            items: Vec::new(),
            kind: Tag::End,
        }
    }
}

impl List {
    pub fn new() -> Self {
        List::default()
    }

    /// An empty list whose intern kind is already decided.
    pub fn with_kind(kind: Tag) -> Self {
        List {
            items: Vec::new(),
            kind,
        }
    }

    /// Build a list from values, which must all share one kind.
    pub fn from_values(values: Vec<Value>) -> Result<Self> {
        let kind = match values.first() {
            Some(first) => first.kind(),
            None => Tag::End,
        };
        for value in &values {
            if value.kind() != kind {
                return Err(Error::type_mismatch(
                    kind.name().unwrap_or("end"),
                    value.kind(),
                ));
            }
        }
        Ok(List {
            items: values,
            kind,
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The element kind this list admits. [`Tag::End`] until something has
    /// been inserted.
    pub fn intern_kind(&self) -> Tag {
        self.kind
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.items.get_mut(index)
    }

    /// Append a value. The first value into an empty list decides the
    /// intern kind; anything of a different kind afterwards is rejected.
    pub fn push(&mut self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        if self.items.is_empty() {
            self.kind = value.kind();
        } else if value.kind() != self.kind {
            return Err(Error::type_mismatch(
                self.kind.name().unwrap_or("end"),
                value.kind(),
            ));
        }
        self.items.push(value);
        Ok(())
    }

    /// Replace the element at `index`, returning the old value. The new
    /// value must match the intern kind.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn set(&mut self, index: usize, value: impl Into<Value>) -> Result<Value> {
        let value = value.into();
        if value.kind() != self.kind {
            return Err(Error::type_mismatch(
                self.kind.name().unwrap_or("end"),
                value.kind(),
            ));
        }
        Ok(std::mem::replace(&mut self.items[index], value))
    }

    /// Remove and return the element at `index`, shifting later elements
    /// left.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> Value {
        self.items.remove(index)
    }

    /// Drop all elements. The intern kind is retained until the next push.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }
}

// Two empty lists are equal even when one of them still remembers a kind
// from before a clear; the wire format cannot tell them apart.
impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items && (self.items.is_empty() || self.kind == other.kind)
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
