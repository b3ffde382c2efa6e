//! Error types for value access and parsing.
//!
//! Every failure surfaces immediately to the caller. Parsing is
//! all-or-nothing: a [`ParseError`] anywhere abandons the whole tree.

use thiserror::Error;

use crate::value::JsonType;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while reading, navigating, or parsing a [`Value`](crate::Value).
#[derive(Debug, Error)]
pub enum Error {
    /// A typed accessor was used against a value holding another variant.
    #[error("tried to read json value of type '{actual}' as '{requested}'")]
    TypeMismatch {
        /// Variant the caller asked for.
        requested: JsonType,
        /// Variant the value actually holds.
        actual: JsonType,
    },
    /// Array position was not below the array length.
    #[error("index {index} out of range for array of length {length}")]
    IndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Element count at the time of access.
        length: usize,
    },
    /// Read-only object access for a key that is not present.
    #[error("key '{0}' not found")]
    KeyNotFound(String),
    /// Malformed or truncated input text.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    pub(crate) fn mismatch(requested: JsonType, actual: JsonType) -> Self {
        Error::TypeMismatch { requested, actual }
    }
}

/// Error codes for parse errors.
///
/// Kept as a fieldless enum so a [`ParseError`] carries no heap-allocated
/// message of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ParseErrorCode {
    /// No production starts with this character
    UnexpectedChar = 0,
    /// Input ended where a value was expected
    UnexpectedEof,
    /// `null`, `true` or `false` misspelled
    InvalidLiteral,
    /// Number scanner rejected the text
    InvalidNumber,
    /// End of input before the closing quote
    UnclosedString,
    /// Array not closed by `]`
    UnclosedArray,
    /// Object not closed by `}`
    UnclosedObject,
    /// Object key not followed by `:`
    ExpectedColon,
    /// Object member does not start with a quoted key
    ExpectedKey,
    /// Array element does not match the rule picked by the first element
    MixedArray,
    /// Top-level value is neither an array nor an object
    NotAContainer,
    /// Nesting deeper than the configured maximum
    DepthExceeded,
}

impl ParseErrorCode {
    /// Get a human-readable message for this error code.
    pub fn message(self) -> &'static str {
        match self {
            Self::UnexpectedChar => "unexpected character",
            Self::UnexpectedEof => "unexpected end of input",
            Self::InvalidLiteral => "invalid literal",
            Self::InvalidNumber => "invalid number",
            Self::UnclosedString => "unclosed string",
            Self::UnclosedArray => "unclosed array",
            Self::UnclosedObject => "unclosed object",
            Self::ExpectedColon => "expected ':'",
            Self::ExpectedKey => "expected quoted key",
            Self::MixedArray => "array element does not match first element",
            Self::NotAContainer => "top-level value must be an array or object",
            Self::DepthExceeded => "nesting too deep",
        }
    }
}

/// Malformed or truncated input, located by byte offset.
#[derive(Debug)]
pub struct ParseError {
    /// What went wrong.
    pub code: ParseErrorCode,
    /// The offending character, or `None` at end of input.
    pub found: Option<char>,
    /// Byte offset of the offending character.
    pub offset: usize,
    /// Underlying number scanner failure, for [`ParseErrorCode::InvalidNumber`].
    pub source: Option<lexical_core::Error>,
}

impl ParseError {
    pub(crate) fn new(code: ParseErrorCode, found: Option<char>, offset: usize) -> Self {
        ParseError { code, found, offset, source: None }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.found {
            Some(c) => write!(f, "invalid symbol '{}'", c.escape_debug())?,
            None => f.write_str("invalid symbol <eof>")?,
        }
        write!(f, " at offset {} ({})", self.offset, self.code.message())
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e as &(dyn std::error::Error + 'static))
    }
}
