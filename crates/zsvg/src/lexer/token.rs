//! Markup token types and the pull-based stream seam

use indexmap::IndexMap;

use crate::error::{Error, ErrorKind, Result, Span};

/// Raw attribute values of one element, keyed by local name
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attributes(IndexMap<String, String>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an attribute; a repeated name replaces the earlier value
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// An element-open token
#[derive(Clone, Debug, PartialEq)]
pub struct OpenTag {
    pub name: String,
    pub attributes: Attributes,
    pub span: Span,
}

impl OpenTag {
    pub fn new(name: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            name: name.into(),
            attributes,
            span: Span::empty(),
        }
    }

    pub const fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

/// An element-close token
#[derive(Clone, Debug, PartialEq)]
pub struct CloseTag {
    pub name: String,
    pub span: Span,
}

impl CloseTag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            span: Span::empty(),
        }
    }

    pub const fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

/// Lexical events of a markup document
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Open(OpenTag),
    Close(CloseTag),
    Text(String),
    Comment(String),
    ProcessingInstruction(String),
    /// `<?xml ...?>` prolog
    Declaration(String),
    /// DOCTYPE, CDATA and anything else without structure
    Other(String),
}

impl Token {
    /// Get token name for diagnostics
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Open(_) => "element-open",
            Self::Close(_) => "element-close",
            Self::Text(_) => "text",
            Self::Comment(_) => "comment",
            Self::ProcessingInstruction(_) => "processing-instruction",
            Self::Declaration(_) => "declaration",
            Self::Other(_) => "other",
        }
    }

    /// Check if token affects the element tree
    pub const fn is_structural(&self) -> bool {
        matches!(self, Self::Open(_) | Self::Close(_))
    }
}

/// Forward-only source of markup tokens
pub trait TokenStream {
    /// Pull the next token; `Ok(None)` once the stream is exhausted
    fn next_token(&mut self) -> Result<Option<Token>>;

    /// Consume tokens up to and including the close token matching `open`,
    /// which has already been pulled from the stream.
    fn skip_element(&mut self, open: &OpenTag) -> Result<()> {
        let mut depth = 1_usize;
        while depth > 0 {
            match self.next_token()? {
                Some(Token::Open(_)) => depth += 1,
                Some(Token::Close(_)) => depth -= 1,
                Some(_) => {}
                None => {
                    return Err(Error::new(
                        ErrorKind::UnterminatedElement {
                            tag: open.name.clone(),
                        },
                        open.span,
                    ))
                }
            }
        }
        Ok(())
    }
}

impl<S: TokenStream + ?Sized> TokenStream for &mut S {
    fn next_token(&mut self) -> Result<Option<Token>> {
        (**self).next_token()
    }

    fn skip_element(&mut self, open: &OpenTag) -> Result<()> {
        (**self).skip_element(open)
    }
}
