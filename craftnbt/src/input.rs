//! Abstract byte cursors for the binary reader.
//!
//! The reader in [`crate::de`] is generic over [`Input`], which supplies
//! big-endian primitive reads and bulk byte reads. Two implementations are
//! provided: [`Slice`] for in-memory data and [`Reader`] for anything
//! implementing [`std::io::Read`].

use std::{io::Read, ops::Range};

use byteorder::{BigEndian, ReadBytesExt};

use crate::{
    error::{Error, Result},
    Tag,
};

mod private {
    // Only this crate can implement this trait. Other traits can inherit from
    // Sealed in order to prevent other crates from creating implementations.
    pub trait Sealed {}
}

pub(crate) fn try_size(size: i32, multiplier: usize) -> Result<usize> {
    let size: usize = size.try_into().map_err(|_| Error::negative_length(size))?;

    size.checked_mul(multiplier)
        .ok_or_else(|| Error::bespoke("size too large".to_string()))
}

pub trait Input: private::Sealed {
    fn consume_byte(&mut self) -> Result<u8>;

    fn consume_bytes(&mut self, n: usize) -> Result<Vec<u8>>;

    fn consume_i16(&mut self) -> Result<i16>;
    fn consume_u16(&mut self) -> Result<u16>;
    fn consume_i32(&mut self) -> Result<i32>;
    fn consume_i64(&mut self) -> Result<i64>;
    fn consume_f32(&mut self) -> Result<f32>;
    fn consume_f64(&mut self) -> Result<f64>;

    fn consume_tag(&mut self) -> Result<Tag> {
        let tag = self.consume_byte()?;
        Tag::try_from(tag).map_err(|_| Error::unknown_tag(tag))
    }

    /// A length-prefixed NBT string: unsigned 16-bit big-endian byte count,
    /// then that many UTF-8 bytes.
    fn consume_str(&mut self) -> Result<String> {
        let len = self.consume_u16()? as usize;
        let bytes = self.consume_bytes(len)?;
        String::from_utf8(bytes).map_err(|e| Error::invalid_utf8(e.as_bytes()))
    }
}

/// An [`Input`] over a borrowed byte slice. The number of bytes consumed so
/// far is tracked, so callers can tell where a root tag ended.
pub struct Slice<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> Slice<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Slice { data, position: 0 }
    }

    /// Number of bytes consumed from the original slice.
    pub fn position(&self) -> usize {
        self.position
    }

    fn consume(&mut self, r: Range<usize>) -> Result<&'a [u8]> {
        if r.end <= self.data.len() {
            let ret = &self.data[r.start..r.end];
            self.data = &self.data[r.end..];
            self.position += r.end;
            Ok(ret)
        } else {
            Err(Error::unexpected_eof())
        }
    }
}

impl<'a> private::Sealed for Slice<'a> {}

impl<'a> Input for Slice<'a> {
    fn consume_byte(&mut self) -> Result<u8> {
        Ok(self.consume(0..1)?[0])
    }

    fn consume_bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        Ok(self.consume(0..n)?.to_vec())
    }

    fn consume_i16(&mut self) -> Result<i16> {
        let mut bs = self.consume(0..std::mem::size_of::<i16>())?;
        Ok(bs.read_i16::<BigEndian>()?)
    }

    fn consume_u16(&mut self) -> Result<u16> {
        let mut bs = self.consume(0..std::mem::size_of::<u16>())?;
        Ok(bs.read_u16::<BigEndian>()?)
    }

    fn consume_i32(&mut self) -> Result<i32> {
        let mut bs = self.consume(0..std::mem::size_of::<i32>())?;
        Ok(bs.read_i32::<BigEndian>()?)
    }

    fn consume_i64(&mut self) -> Result<i64> {
        let mut bs = self.consume(0..std::mem::size_of::<i64>())?;
        Ok(bs.read_i64::<BigEndian>()?)
    }

    fn consume_f32(&mut self) -> Result<f32> {
        let mut bs = self.consume(0..std::mem::size_of::<f32>())?;
        Ok(bs.read_f32::<BigEndian>()?)
    }

    fn consume_f64(&mut self) -> Result<f64> {
        let mut bs = self.consume(0..std::mem::size_of::<f64>())?;
        Ok(bs.read_f64::<BigEndian>()?)
    }
}

/// An [`Input`] over any [`std::io::Read`].
pub struct Reader<R: Read> {
    reader: R,
}

impl<R: Read> Reader<R> {
    pub fn new(reader: R) -> Self {
        Reader { reader }
    }

    /// Consumes this cursor, returning the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> private::Sealed for Reader<R> {}

impl<R: Read> Input for Reader<R> {
    fn consume_byte(&mut self) -> Result<u8> {
        Ok(self.reader.read_u8()?)
    }

    fn consume_bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0; n];
        self.reader.read_exact(&mut buf)?;
        Ok(buf)
    }

    fn consume_i16(&mut self) -> Result<i16> {
        Ok(self.reader.read_i16::<BigEndian>()?)
    }

    fn consume_u16(&mut self) -> Result<u16> {
        Ok(self.reader.read_u16::<BigEndian>()?)
    }

    fn consume_i32(&mut self) -> Result<i32> {
        Ok(self.reader.read_i32::<BigEndian>()?)
    }

    fn consume_i64(&mut self) -> Result<i64> {
        Ok(self.reader.read_i64::<BigEndian>()?)
    }

    fn consume_f32(&mut self) -> Result<f32> {
        Ok(self.reader.read_f32::<BigEndian>()?)
    }

    fn consume_f64(&mut self) -> Result<f64> {
        Ok(self.reader.read_f64::<BigEndian>()?)
    }
}
