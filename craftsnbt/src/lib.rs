//! craftsnbt parses and serializes stringified NBT (SNBT), the textual
//! dialect Minecraft uses in commands and debug output, to and from
//! [`craftnbt::Value`] trees.
//!
//! The dialect has drifted across game versions. A [`Syntax`] profile picks
//! the rules for one version family; notably, 1.7/1.8 era strings go
//! through a separate, far more tolerant parser than everything from 1.12
//! onwards.
//!
//! ```
//! use craftsnbt::{from_str, to_string, Syntax};
//!
//! let value = from_str(r#"{id:"minecraft:stone",Count:64b}"#).unwrap();
//! let text = to_string(&value, Syntax::V1_21_5);
//! assert_eq!(text, r#"{id:"minecraft:stone",Count:64b}"#);
//! ```

pub mod error;

mod legacy;
mod modern;
mod reader;
mod writer;

pub use error::{Result, SnbtError, SnbtErrorKind};

use craftnbt::Value;

use legacy::LegacyParser;
use modern::ModernParser;

/// Syntax profiles for parsing/serializing SNBT across Minecraft versions.
///
/// Each profile is a bundle of four flags:
///
/// | Profile | legacy parser | single quotes | type suffixes | modern arrays |
/// |---------|---------------|---------------|---------------|---------------|
/// | V1_7    | yes           | no            | no            | no            |
/// | V1_8    | yes           | no            | no            | no            |
/// | V1_12   | no            | no            | yes           | no            |
/// | V1_13   | no            | no            | yes           | no            |
/// | V1_14   | no            | yes           | yes           | no            |
/// | V1_21_5 | no            | yes           | yes           | yes           |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum Syntax {
    /// Every version from 1.7 until 1.8.
    V1_7,
    /// Every version from 1.8 until 1.12.
    V1_8,
    /// Every version from 1.12 until 1.13.
    V1_12,
    /// Every version from 1.13 until 1.14. Parsing is mostly 1.12 but
    /// strictly without the legacy quirks.
    V1_13,
    /// Every version from 1.14 until 1.21.5.
    V1_14,
    /// Every version from 1.21.5 going onward.
    V1_21_5,
}

impl Syntax {
    /// Whether this profile uses the old 1.7/1.8 string-splitting parser.
    pub fn legacy_parser(self) -> bool {
        matches!(self, Syntax::V1_7 | Syntax::V1_8)
    }

    /// Whether single quotes are recognised around strings.
    pub fn allow_single_quotes(self) -> bool {
        matches!(self, Syntax::V1_14 | Syntax::V1_21_5)
    }

    /// Whether numeric type suffixes like `5b`, `12s`, `1L` are in use.
    pub fn use_type_suffix(self) -> bool {
        !self.legacy_parser()
    }

    /// Whether strict `[I; ...]` array notation is enforced.
    pub fn modern_arrays(self) -> bool {
        matches!(self, Syntax::V1_21_5)
    }
}

/// Parse an SNBT string using the latest supported syntax rules
/// (currently 1.21.5+).
pub fn from_str(input: &str) -> Result<Value> {
    from_str_with(input, Syntax::V1_21_5)
}

/// Parse an SNBT string using a specific profile's rules.
pub fn from_str_with(input: &str, syntax: Syntax) -> Result<Value> {
    if syntax.legacy_parser() {
        LegacyParser::new(input).parse()
    } else {
        ModernParser::new(input, syntax).parse()
    }
}

/// Serialize a value to SNBT under the given profile. For a fixed value
/// and profile the output is a single fixed string.
pub fn to_string(value: &Value, syntax: Syntax) -> String {
    writer::to_string(value, syntax)
}

#[cfg(test)]
mod test;
