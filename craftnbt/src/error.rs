//! Contains the Error and Result type used by the codecs and the typed
//! compound accessors.

/// An error from reading, writing or navigating NBT data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    msg: String,
    kind: ErrorKind,
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The reader encountered a tag id outside 0..=12. Contains the
    /// offending id.
    UnknownTag(u8),

    /// The reader ran out of bytes part way through a value.
    UnexpectedEof,

    /// An array or list declared a negative length on the wire.
    NegativeLength,

    /// String bytes on the wire are not valid UTF-8.
    InvalidUtf8,

    /// The writer saw a string whose UTF-8 encoding exceeds 65,535 bytes.
    StringTooLong,

    /// A list received an element of the wrong kind, or a typed compound
    /// accessor found the wrong kind.
    TypeMismatch,

    /// A strict compound accessor was called with an absent key.
    Missing,

    /// Any other errors. Users should not match on this variant and should
    /// instead use a wildcard `_`. Errors in this category may be moved to
    /// new variants.
    Other,
}

impl Error {
    /// Get the kind of error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub(crate) fn unknown_tag(id: u8) -> Error {
        Error {
            msg: format!("unknown nbt tag id: {}", id),
            kind: ErrorKind::UnknownTag(id),
        }
    }

    pub(crate) fn unexpected_eof() -> Error {
        Error {
            msg: "eof: unexpectedly ran out of input".to_owned(),
            kind: ErrorKind::UnexpectedEof,
        }
    }

    pub(crate) fn negative_length(len: i32) -> Error {
        Error {
            msg: format!("negative length on wire: {}", len),
            kind: ErrorKind::NegativeLength,
        }
    }

    pub(crate) fn invalid_utf8(data: &[u8]) -> Error {
        Error {
            msg: format!(
                "invalid nbt string: nonunicode: {}",
                String::from_utf8_lossy(data)
            ),
            kind: ErrorKind::InvalidUtf8,
        }
    }

    pub(crate) fn string_too_long(len: usize) -> Error {
        Error {
            msg: format!("string too long for nbt (max 65535 bytes): {} bytes", len),
            kind: ErrorKind::StringTooLong,
        }
    }

    pub(crate) fn type_mismatch(expected: &str, actual: crate::Tag) -> Error {
        Error {
            msg: format!(
                "type mismatch: expected {}, found {}",
                expected,
                actual.name().unwrap_or("end")
            ),
            kind: ErrorKind::TypeMismatch,
        }
    }

    pub(crate) fn missing(key: &str) -> Error {
        Error {
            msg: format!("no entry named '{}' in compound", key),
            kind: ErrorKind::Missing,
        }
    }

    pub(crate) fn bespoke(msg: impl Into<String>) -> Error {
        Error {
            msg: msg.into(),
            kind: ErrorKind::Other,
        }
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::UnexpectedEof => Error {
                msg: e.to_string(),
                kind: ErrorKind::UnexpectedEof,
            },
            _ => Error {
                msg: format!("io error: {}", e),
                kind: ErrorKind::Other,
            },
        }
    }
}
