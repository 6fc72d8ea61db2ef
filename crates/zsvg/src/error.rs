//! Error types for zsvg

use std::fmt;
use thiserror::Error;

/// Position in source markup
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub offset: usize,
    pub line: u32,
    pub col: u32,
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.offset, self.line, self.col)
    }
}

impl Pos {
    pub const fn new(offset: usize, line: u32, col: u32) -> Self {
        Self { offset, line, col }
    }
}

/// Span representing a range in source markup
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    pub start: Pos,
    pub end: Pos,
}

impl Span {
    pub const fn new(start: Pos, end: Pos) -> Self {
        Self { start, end }
    }

    pub const fn empty() -> Self {
        Self {
            start: Pos::new(0, 0, 0),
            end: Pos::new(0, 0, 0),
        }
    }

    pub const fn at(pos: Pos) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }
}

/// Error kind for detailed categorization
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The markup could not be read from its source
    Io(String),
    /// The tokenizer hit a syntax break
    MalformedTokenStream,
    /// The stream ended before any element was opened
    NoRootElement,
    UnsupportedElementType { tag: String },
    MissingOrInvalidAttribute { tag: String, attribute: String },
    /// The stream ended before the element's close token
    UnterminatedElement { tag: String },
    MaxDepthExceeded { max: u16 },
    MaxSizeExceeded { max: usize },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(reason) => write!(f, "i/o error: {reason}"),
            Self::MalformedTokenStream => write!(f, "malformed markup"),
            Self::NoRootElement => write!(f, "no root element found"),
            Self::UnsupportedElementType { tag } => {
                write!(f, "element type not supported: {tag}")
            }
            Self::MissingOrInvalidAttribute { tag, attribute } => {
                write!(f, "missing or invalid attribute {attribute:?} on <{tag}>")
            }
            Self::UnterminatedElement { tag } => write!(f, "element <{tag}> never closed"),
            Self::MaxDepthExceeded { max } => write!(f, "max depth exceeded: {max}"),
            Self::MaxSizeExceeded { max } => write!(f, "max size exceeded: {max}"),
        }
    }
}

/// Main error type for zsvg
#[derive(Error, Clone, Debug, PartialEq)]
#[error("error at {}: {}", .span.start, .message)]
pub struct Error {
    kind: ErrorKind,
    span: Span,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, span: Span) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            span,
            message,
        }
    }

    pub fn with_message(kind: ErrorKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether a parent element may drop the failing subtree and carry on.
    ///
    /// Only construction failures of a single element qualify; anything
    /// that says the stream itself is broken aborts the whole parse.
    pub const fn is_contained(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::UnsupportedElementType { .. } | ErrorKind::MissingOrInvalidAttribute { .. }
        )
    }

    pub(crate) fn io(path: &std::path::Path, err: &std::io::Error) -> Self {
        Self::with_message(
            ErrorKind::Io(err.to_string()),
            Span::empty(),
            format!("failed to read {}: {err}", path.display()),
        )
    }
}

/// Result type alias for zsvg
pub type Result<T> = std::result::Result<T, Error>;
