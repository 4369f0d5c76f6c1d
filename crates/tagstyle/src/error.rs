//! Error types for markup, color, and stylesheet parsing.

use thiserror::Error;

/// Errors that can occur when parsing tag markup.
///
/// Offsets are byte offsets into the markup input and point at the `<` of
/// the offending tag.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A close tag does not match the innermost open tag, or nothing is open.
    #[error("close tag </{0}> at byte {1} does not match the innermost open tag")]
    UnmatchedCloseTag(String, usize),

    /// Input ended while this tag was still open.
    #[error("tag <{0}> opened at byte {1} is never closed")]
    UnclosedTag(String, usize),
}

impl ParseError {
    /// Name of the tag the error refers to.
    pub fn tag(&self) -> &str {
        match self {
            ParseError::UnmatchedCloseTag(name, _) | ParseError::UnclosedTag(name, _) => name,
        }
    }

    /// Byte offset of the offending tag in the markup.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::UnmatchedCloseTag(_, offset) | ParseError::UnclosedTag(_, offset) => {
                *offset
            }
        }
    }
}

/// Errors that can occur when parsing a color.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Unknown color name.
    #[error("unknown color name: {0}")]
    UnknownName(String),

    /// Invalid hex color format.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    /// Invalid `rgb()` / `rgba()` color format.
    #[error("invalid RGB color: {0}")]
    InvalidRgb(String),
}

/// Errors that can occur when parsing a stylesheet.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SheetError {
    /// The stylesheet is not syntactically valid.
    #[error("stylesheet syntax error: {0}")]
    InvalidSyntax(String),

    /// A known property was given a value it cannot hold.
    #[error("invalid value for `{property}`: {value}")]
    InvalidValue { property: String, value: String },
}
