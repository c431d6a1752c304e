use crate::{ByteArray, Compound, IntArray, List, LongArray, Tag};

/// Value is a complete NBT value. It owns its data. Compounds and Lists are
/// recursively owned. This type takes care to preserve all the information
/// from the original NBT, with the exception of the name of the root tag
/// (which travels separately, and is usually the empty string).
///
/// ```
/// # use craftnbt::{Compound, Value};
/// let mut root = Compound::new();
/// root.put("DataVersion", 3465);
/// match root.get("DataVersion") {
///     Some(Value::Int(ver)) => println!("Version: {}", ver),
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    ByteArray(ByteArray),
    IntArray(IntArray),
    LongArray(LongArray),
    List(List),
    Compound(Compound),
}

impl Value {
    /// The tag kind of this value. Never [`Tag::End`], which is a wire
    /// marker rather than a value kind.
    pub fn kind(&self) -> Tag {
        match self {
            Value::Byte(_) => Tag::Byte,
            Value::Short(_) => Tag::Short,
            Value::Int(_) => Tag::Int,
            Value::Long(_) => Tag::Long,
            Value::Float(_) => Tag::Float,
            Value::Double(_) => Tag::Double,
            Value::String(_) => Tag::String,
            Value::ByteArray(_) => Tag::ByteArray,
            Value::IntArray(_) => Tag::IntArray,
            Value::LongArray(_) => Tag::LongArray,
            Value::List(_) => Tag::List,
            Value::Compound(_) => Tag::Compound,
        }
    }

    /// Narrow to an i8. Integers truncate two's-complement style, floats
    /// go through an i32 first (saturating, like a Java `byteValue()`), and
    /// strings parse decimally or yield 0. `None` for containers.
    pub fn as_i8(&self) -> Option<i8> {
        match self {
            Value::Byte(v) => Some(*v),
            Value::Short(v) => Some(*v as i8),
            Value::Int(v) => Some(*v as i8),
            Value::Long(v) => Some(*v as i8),
            Value::Float(v) => Some((*v as i32) as i8),
            Value::Double(v) => Some((*v as i32) as i8),
            Value::String(s) => Some(s.parse().unwrap_or(0)),
            _ => None,
        }
    }

    pub fn as_i16(&self) -> Option<i16> {
        match self {
            Value::Byte(v) => Some(*v as i16),
            Value::Short(v) => Some(*v),
            Value::Int(v) => Some(*v as i16),
            Value::Long(v) => Some(*v as i16),
            Value::Float(v) => Some((*v as i32) as i16),
            Value::Double(v) => Some((*v as i32) as i16),
            Value::String(s) => Some(s.parse().unwrap_or(0)),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Byte(v) => Some(*v as i32),
            Value::Short(v) => Some(*v as i32),
            Value::Int(v) => Some(*v),
            Value::Long(v) => Some(*v as i32),
            Value::Float(v) => Some(*v as i32),
            Value::Double(v) => Some(*v as i32),
            Value::String(s) => Some(s.parse().unwrap_or(0)),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Byte(v) => Some(*v as i64),
            Value::Short(v) => Some(*v as i64),
            Value::Int(v) => Some(*v as i64),
            Value::Long(v) => Some(*v),
            Value::Float(v) => Some(*v as i64),
            Value::Double(v) => Some(*v as i64),
            Value::String(s) => Some(s.parse().unwrap_or(0)),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Value::Byte(v) => Some(*v as f32),
            Value::Short(v) => Some(*v as f32),
            Value::Int(v) => Some(*v as f32),
            Value::Long(v) => Some(*v as f32),
            Value::Float(v) => Some(*v),
            Value::Double(v) => Some(*v as f32),
            Value::String(s) => Some(s.parse().unwrap_or(0.0)),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Byte(v) => Some(*v as f64),
            Value::Short(v) => Some(*v as f64),
            Value::Int(v) => Some(*v as f64),
            Value::Long(v) => Some(*v as f64),
            Value::Float(v) => Some(*v as f64),
            Value::Double(v) => Some(*v),
            Value::String(s) => Some(s.parse().unwrap_or(0.0)),
            _ => None,
        }
    }

    /// Byte doubles as a boolean by Mojang convention: any non-zero number
    /// is true. Strings are true when non-empty.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::String(s) => Some(!s.is_empty()),
            _ => self.as_i32().map(|v| v != 0),
        }
    }

    /// Borrow the text of a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    /// Render any primitive (number or string) as text. `None` for arrays,
    /// lists and compounds.
    pub fn as_string(&self) -> Option<String> {
        match self {
            Value::Byte(v) => Some(v.to_string()),
            Value::Short(v) => Some(v.to_string()),
            Value::Int(v) => Some(v.to_string()),
            Value::Long(v) => Some(v.to_string()),
            Value::Float(v) => Some(v.to_string()),
            Value::Double(v) => Some(v.to_string()),
            Value::String(v) => Some(v.clone()),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Value::Compound(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_compound_mut(&mut self) -> Option<&mut Compound> {
        match self {
            Value::Compound(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut List> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }
}

// ------------- From<T> impls -------------

macro_rules! from {
    ($type:ty, $variant:ident $(, $($part:tt)+)?) => {
        impl From<$type> for Value {
            fn from(val: $type) -> Self {
                Self::$variant(val$($($part)+)?)
            }
        }
        impl From<&$type> for Value {
            fn from(val: &$type) -> Self {
                Self::$variant(val.to_owned()$($($part)+)?)
            }
        }
    };
}
from!(i8, Byte);
from!(u8, Byte, as i8);
from!(i16, Short);
from!(u16, Short, as i16);
from!(i32, Int);
from!(u32, Int, as i32);
from!(i64, Long);
from!(u64, Long, as i64);
from!(f32, Float);
from!(f64, Double);
from!(String, String);
from!(&str, String, .to_owned());
from!(ByteArray, ByteArray);
from!(IntArray, IntArray);
from!(LongArray, LongArray);
from!(List, List);
from!(Compound, Compound);

impl From<bool> for Value {
    fn from(val: bool) -> Self {
        Self::Byte(i8::from(val))
    }
}
impl From<&bool> for Value {
    fn from(val: &bool) -> Self {
        Self::Byte(i8::from(*val))
    }
}

impl From<Vec<i8>> for Value {
    fn from(val: Vec<i8>) -> Self {
        Self::ByteArray(ByteArray::from(val))
    }
}
impl From<Vec<i32>> for Value {
    fn from(val: Vec<i32>) -> Self {
        Self::IntArray(IntArray::from(val))
    }
}
impl From<Vec<i64>> for Value {
    fn from(val: Vec<i64>) -> Self {
        Self::LongArray(LongArray::from(val))
    }
}
