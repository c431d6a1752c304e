//! craftnbt is a tree-model library for NBT data from *Minecraft: Java
//! Edition*. This format is used by the game to store various things, such as
//! world data, item stacks and player inventories, and is also exchanged on
//! the network protocol.
//!
//! * For the owned tree type see [`Value`], [`Compound`] and [`List`].
//! * For NBT array types see [`ByteArray`], [`IntArray`], and [`LongArray`].
//! * For reading and writing the binary wire format see [`de`] and [`ser`].
//! * For pre-sizing output buffers see [`size`].
//! * For fluent construction of trees see [`builder`].
//!
//! ```toml
//! [dependencies]
//! craftnbt = "0.1"
//! ```
//!
//! # Quick example
//!
//! This example reads a [player dat
//! file](https://minecraft.gamepedia.com/Player.dat_format) found in worlds
//! and prints the whole structure. Compression of the byte stream is the
//! caller's business; player dat files happen to be GZip compressed.
//!
//! ```no_run
//! use craftnbt::de::from_bytes;
//! use flate2::read::GzDecoder;
//! use std::io::Read;
//!
//! fn main() {
//!     let args: Vec<_> = std::env::args().skip(1).collect();
//!     let file = std::fs::File::open(args[0].clone()).unwrap();
//!
//!     let mut decoder = GzDecoder::new(file);
//!     let mut data = vec![];
//!     decoder.read_to_end(&mut data).unwrap();
//!
//!     let (name, root) = from_bytes(data.as_slice()).unwrap();
//!     println!("{}: {:#?}", name, root);
//! }
//! ```
//!
//! # Byte, Int and Long array types
//!
//! The three NBT array tags are stored in [`ByteArray`], [`IntArray`] and
//! [`LongArray`], thin wrappers over `Vec<i8>`/`Vec<i32>`/`Vec<i64>`. Chunk
//! payloads routinely carry millions of packed longs, so the element storage
//! is always the plain primitive vector, never boxed elements.

pub mod builder;
pub mod de;
pub mod error;
pub mod input;
pub mod ser;
pub mod size;

mod arrays;
mod compound;
mod list;
mod macros;
mod value;

pub use arrays::*;
pub use compound::*;
pub use list::*;
pub use value::*;

#[cfg(test)]
mod test;

use std::convert::TryFrom;

/// An NBT tag kind. This does not carry the value or the name of the data.
///
/// The numeric ids 0 to 12 match the wire format. Id 0 ([`Tag::End`]) is a
/// structural marker rather than a value kind: it terminates compounds and
/// doubles as the element kind of an empty list.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[repr(u8)]
pub enum Tag {
    /// Represents the end of a Compound object.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64.
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// Represents an array of Byte (i8).
    ByteArray = 7,
    /// Represents a Unicode string.
    String = 8,
    /// Represents a list of other objects, all sharing one element kind.
    List = 9,
    /// Represents a struct-like structure of uniquely named tags.
    Compound = 10,
    /// Represents an array of Int (i32).
    IntArray = 11,
    /// Represents an array of Long (i64).
    LongArray = 12,
}

// Crates exist to generate this code for us, but would add to our compile
// times, so we instead write it out manually, the tags will very rarely
// change so isn't a massive burden, but saves a significant amount of
// compile time.
impl TryFrom<u8> for Tag {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        use Tag::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12 => LongArray,
            13..=u8::MAX => return Err(()),
        })
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        tag as u8
    }
}

impl Tag {
    /// The numeric wire id of this kind, 0 to 12.
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Look a kind up by wire id. Ids outside 0..=12 return `None`.
    pub fn from_id(id: u8) -> Option<Tag> {
        Tag::try_from(id).ok()
    }

    /// The stable lowercase token for this kind, e.g. `"byte"` or
    /// `"long_array"`. [`Tag::End`] has no name and returns `None`.
    pub fn name(self) -> Option<&'static str> {
        Some(match self {
            Tag::End => return None,
            Tag::Byte => "byte",
            Tag::Short => "short",
            Tag::Int => "int",
            Tag::Long => "long",
            Tag::Float => "float",
            Tag::Double => "double",
            Tag::ByteArray => "byte_array",
            Tag::String => "string",
            Tag::List => "list",
            Tag::Compound => "compound",
            Tag::IntArray => "int_array",
            Tag::LongArray => "long_array",
        })
    }

    /// Inverse of [`Tag::name`]. The comparison is case-sensitive, and
    /// `End` is never returned since it has no name.
    pub fn by_name(name: &str) -> Option<Tag> {
        Some(match name {
            "byte" => Tag::Byte,
            "short" => Tag::Short,
            "int" => Tag::Int,
            "long" => Tag::Long,
            "float" => Tag::Float,
            "double" => Tag::Double,
            "byte_array" => Tag::ByteArray,
            "string" => Tag::String,
            "list" => Tag::List,
            "compound" => Tag::Compound,
            "int_array" => Tag::IntArray,
            "long_array" => Tag::LongArray,
            _ => return None,
        })
    }

    /// True for the six numeric scalar kinds. Byte doubles as a boolean by
    /// Mojang convention, so this also covers booleans.
    pub fn is_number(self) -> bool {
        matches!(
            self,
            Tag::Byte | Tag::Short | Tag::Int | Tag::Long | Tag::Float | Tag::Double
        )
    }

    /// True for numbers and strings.
    pub fn is_primitive(self) -> bool {
        self.is_number() || self == Tag::String
    }

    /// True for the three fixed-width array kinds.
    pub fn is_array(self) -> bool {
        matches!(self, Tag::ByteArray | Tag::IntArray | Tag::LongArray)
    }

    pub fn is_list(self) -> bool {
        self == Tag::List
    }

    pub fn is_compound(self) -> bool {
        self == Tag::Compound
    }

    /// True for every kind that can contain multiple elements: arrays,
    /// lists and compounds.
    pub fn is_iterable(self) -> bool {
        self.is_array() || self.is_list() || self.is_compound()
    }
}
