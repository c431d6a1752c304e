//! Contains the Error and Result type used by the SNBT parsers.

/// An error raised while parsing SNBT.
///
/// Errors that occur at a known cursor position carry a trimmed excerpt of
/// the preceding input with a `<--[HERE]` marker, e.g.
/// `Expected value at: ...me long input{id:<--[HERE]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnbtError {
    msg: String,
    cursor: Option<usize>,
    kind: SnbtErrorKind,
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, SnbtError>;

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SnbtErrorKind {
    /// Malformed input: bad structure, bad escape, unclosed quote and so
    /// on.
    Parse,

    /// A typed array element or a list element had the wrong kind.
    TypeMismatch,

    /// Non-whitespace input remained after a complete root value.
    TrailingData,
}

// how much of the input before the cursor the excerpt keeps
const EXCERPT_LEN: usize = 35;

impl SnbtError {
    /// Get the kind of error.
    pub fn kind(&self) -> &SnbtErrorKind {
        &self.kind
    }

    /// The character index the error was raised at, for errors that carry
    /// one.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub(crate) fn parse(message: &str, content: &[char], cursor: usize) -> Self {
        SnbtError {
            msg: format!("{} at: {}", message, excerpt(content, cursor)),
            cursor: Some(cursor),
            kind: SnbtErrorKind::Parse,
        }
    }

    pub(crate) fn type_mismatch(message: &str, content: &[char], cursor: usize) -> Self {
        SnbtError {
            msg: format!("{} at: {}", message, excerpt(content, cursor)),
            cursor: Some(cursor),
            kind: SnbtErrorKind::TypeMismatch,
        }
    }

    pub(crate) fn trailing(content: &[char], cursor: usize) -> Self {
        SnbtError {
            msg: format!("Trailing data found at: {}", excerpt(content, cursor)),
            cursor: Some(cursor),
            kind: SnbtErrorKind::TrailingData,
        }
    }

    /// A structural error with no useful cursor, as raised by the legacy
    /// parser.
    pub(crate) fn bare(message: impl Into<String>) -> Self {
        SnbtError {
            msg: message.into(),
            cursor: None,
            kind: SnbtErrorKind::Parse,
        }
    }

    pub(crate) fn bare_mismatch(message: impl Into<String>) -> Self {
        SnbtError {
            msg: message.into(),
            cursor: None,
            kind: SnbtErrorKind::TypeMismatch,
        }
    }
}

/// The last [`EXCERPT_LEN`] characters before the cursor, an ellipsis when
/// trimmed, and the cursor marker. Test suites assert on this exact form.
fn excerpt(content: &[char], cursor: usize) -> String {
    let end = cursor.min(content.len());
    let start = end.saturating_sub(EXCERPT_LEN);

    let mut out = String::new();
    if end > EXCERPT_LEN {
        out.push_str("...");
    }
    out.extend(&content[start..end]);
    out.push_str("<--[HERE]");
    out
}

impl std::error::Error for SnbtError {}

impl std::fmt::Display for SnbtError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}
