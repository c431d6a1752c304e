//! Fluent construction of NBT trees.
//!
//! ```
//! use craftnbt::builder::CompoundBuilder;
//!
//! let pos = CompoundBuilder::new()
//!     .compound("Pos", |b| b.double("x", 1.5).double("y", 64.0).double("z", -7.25))
//!     .string("Dimension", "minecraft:overworld")
//!     .byte("OnGround", 1)
//!     .build();
//! assert_eq!(pos.get_byte("OnGround").unwrap(), 1);
//! ```

use crate::{
    error::Result, ByteArray, Compound, IntArray, List, LongArray, Value,
};

/// Builder for [`Compound`]. Entries land in insertion order, exactly as
/// [`Compound::put`] would place them.
#[derive(Debug, Default)]
pub struct CompoundBuilder {
    compound: Compound,
}

impl CompoundBuilder {
    pub fn new() -> Self {
        CompoundBuilder::default()
    }

    pub fn byte(mut self, name: impl Into<String>, value: i8) -> Self {
        self.compound.put(name, value);
        self
    }

    pub fn short(mut self, name: impl Into<String>, value: i16) -> Self {
        self.compound.put(name, value);
        self
    }

    pub fn int(mut self, name: impl Into<String>, value: i32) -> Self {
        self.compound.put(name, value);
        self
    }

    pub fn long(mut self, name: impl Into<String>, value: i64) -> Self {
        self.compound.put(name, value);
        self
    }

    pub fn float(mut self, name: impl Into<String>, value: f32) -> Self {
        self.compound.put(name, value);
        self
    }

    pub fn double(mut self, name: impl Into<String>, value: f64) -> Self {
        self.compound.put(name, value);
        self
    }

    pub fn string(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.compound.put(name, value.into());
        self
    }

    /// Any value, including pre-built containers.
    pub fn put(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.compound.put(name, value);
        self
    }

    /// A nested compound built inside the closure.
    pub fn compound(
        mut self,
        name: impl Into<String>,
        build: impl FnOnce(CompoundBuilder) -> CompoundBuilder,
    ) -> Self {
        self.compound.put(name, build(CompoundBuilder::new()).build());
        self
    }

    /// A nested list built inside the closure. The list's homogeneity is
    /// checked when the outer builder finishes the element.
    pub fn list(
        mut self,
        name: impl Into<String>,
        build: impl FnOnce(ListBuilder) -> ListBuilder,
    ) -> Result<Self> {
        let list = build(ListBuilder::new()).build()?;
        self.compound.put(name, list);
        Ok(self)
    }

    pub fn byte_array(mut self, name: impl Into<String>, values: impl Into<ByteArray>) -> Self {
        self.compound.put(name, values.into());
        self
    }

    pub fn int_array(mut self, name: impl Into<String>, values: impl Into<IntArray>) -> Self {
        self.compound.put(name, values.into());
        self
    }

    pub fn long_array(mut self, name: impl Into<String>, values: impl Into<LongArray>) -> Self {
        self.compound.put(name, values.into());
        self
    }

    pub fn build(self) -> Compound {
        self.compound
    }
}

/// Builder for [`List`]. Elements accumulate unchecked; [`ListBuilder::build`]
/// enforces that they all share one kind.
#[derive(Debug, Default)]
pub struct ListBuilder {
    items: Vec<Value>,
}

impl ListBuilder {
    pub fn new() -> Self {
        ListBuilder::default()
    }

    pub fn byte(mut self, value: i8) -> Self {
        self.items.push(Value::Byte(value));
        self
    }

    pub fn short(mut self, value: i16) -> Self {
        self.items.push(Value::Short(value));
        self
    }

    pub fn int(mut self, value: i32) -> Self {
        self.items.push(Value::Int(value));
        self
    }

    pub fn long(mut self, value: i64) -> Self {
        self.items.push(Value::Long(value));
        self
    }

    pub fn float(mut self, value: f32) -> Self {
        self.items.push(Value::Float(value));
        self
    }

    pub fn double(mut self, value: f64) -> Self {
        self.items.push(Value::Double(value));
        self
    }

    pub fn string(mut self, value: impl Into<String>) -> Self {
        self.items.push(Value::String(value.into()));
        self
    }

    pub fn add(mut self, value: impl Into<Value>) -> Self {
        self.items.push(value.into());
        self
    }

    pub fn compound(
        mut self,
        build: impl FnOnce(CompoundBuilder) -> CompoundBuilder,
    ) -> Self {
        self.items
            .push(Value::Compound(build(CompoundBuilder::new()).build()));
        self
    }

    pub fn list(mut self, build: impl FnOnce(ListBuilder) -> ListBuilder) -> Result<Self> {
        let list = build(ListBuilder::new()).build()?;
        self.items.push(Value::List(list));
        Ok(self)
    }

    /// Finish the list, failing with a type mismatch if the accumulated
    /// elements do not share one kind.
    pub fn build(self) -> Result<List> {
        List::from_values(self.items)
    }
}

/// Generates capacity-aware builders for the primitive array containers.
/// `build` hands the accumulated storage to the finished node without
/// copying.
macro_rules! array_builder {
    ($(#[$doc:meta])* $name:ident, $array:ident, $elem:ty) => {
        $(#[$doc])*
        #[derive(Debug, Default)]
        pub struct $name {
            data: Vec<$elem>,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            pub fn with_capacity(capacity: usize) -> Self {
                Self {
                    data: Vec::with_capacity(capacity),
                }
            }

            pub fn add(mut self, value: $elem) -> Self {
                self.data.push(value);
                self
            }

            pub fn add_all(mut self, values: &[$elem]) -> Self {
                self.data.extend_from_slice(values);
                self
            }

            pub fn build(self) -> crate::$array {
                crate::$array::new(self.data)
            }
        }
    };
}

array_builder!(
    /// Builder for [`ByteArray`].
    ByteArrayBuilder,
    ByteArray,
    i8
);
array_builder!(
    /// Builder for [`IntArray`].
    IntArrayBuilder,
    IntArray,
    i32
);
array_builder!(
    /// Builder for [`LongArray`].
    LongArrayBuilder,
    LongArray,
    i64
);
