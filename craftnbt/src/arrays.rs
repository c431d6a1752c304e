use std::ops::Deref;

/// Generates the three NBT array containers. Element storage is the plain
/// primitive vector, so chunk-scale payloads carry no per-element overhead.
macro_rules! array_type {
    ($(#[$doc:meta])* $name:ident, $elem:ty) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Default)]
        pub struct $name {
            data: Vec<$elem>,
        }

        impl $name {
            pub fn new(data: Vec<$elem>) -> Self {
                Self { data }
            }

            /// An empty array with room for `capacity` elements.
            pub fn with_capacity(capacity: usize) -> Self {
                Self {
                    data: Vec::with_capacity(capacity),
                }
            }

            pub fn len(&self) -> usize {
                self.data.len()
            }

            pub fn is_empty(&self) -> bool {
                self.data.is_empty()
            }

            pub fn get(&self, index: usize) -> Option<$elem> {
                self.data.get(index).copied()
            }

            /// Overwrite the element at `index`.
            ///
            /// # Panics
            /// Panics if `index` is out of bounds.
            pub fn set(&mut self, index: usize, value: $elem) {
                self.data[index] = value;
            }

            pub fn push(&mut self, value: $elem) {
                self.data.push(value);
            }

            /// Insert `value` at `index`, shifting later elements right.
            ///
            /// # Panics
            /// Panics if `index > len`.
            pub fn insert(&mut self, index: usize, value: $elem) {
                self.data.insert(index, value);
            }

            /// Remove and return the element at `index`, shifting later
            /// elements left.
            ///
            /// # Panics
            /// Panics if `index` is out of bounds.
            pub fn remove_at(&mut self, index: usize) -> $elem {
                self.data.remove(index)
            }

            pub fn clear(&mut self) {
                self.data.clear();
            }

            pub fn reserve(&mut self, additional: usize) {
                self.data.reserve(additional);
            }

            pub fn iter(&self) -> std::slice::Iter<'_, $elem> {
                self.data.iter()
            }

            pub fn as_slice(&self) -> &[$elem] {
                &self.data
            }

            pub fn into_inner(self) -> Vec<$elem> {
                self.data
            }
        }

        impl Deref for $name {
            type Target = Vec<$elem>;

            fn deref(&self) -> &Self::Target {
                &self.data
            }
        }

        impl From<Vec<$elem>> for $name {
            fn from(data: Vec<$elem>) -> Self {
                Self { data }
            }
        }

        impl From<$name> for Vec<$elem> {
            fn from(array: $name) -> Self {
                array.data
            }
        }

        impl From<&[$elem]> for $name {
            fn from(data: &[$elem]) -> Self {
                Self {
                    data: data.to_vec(),
                }
            }
        }

        impl FromIterator<$elem> for $name {
            fn from_iter<I: IntoIterator<Item = $elem>>(iter: I) -> Self {
                Self {
                    data: iter.into_iter().collect(),
                }
            }
        }
    };
}

array_type!(
    /// An NBT byte array: a sequence of i8 stored unboxed.
    ByteArray,
    i8
);
array_type!(
    /// An NBT int array: a sequence of i32 stored unboxed.
    IntArray,
    i32
);
array_type!(
    /// An NBT long array: a sequence of i64 stored unboxed. Blockstate
    /// packing in chunk payloads makes this the largest array kind in
    /// practice.
    LongArray,
    i64
);
