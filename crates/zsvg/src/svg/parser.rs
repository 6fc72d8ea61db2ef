//! Recursive tree builder over a markup token stream

use tracing::{debug, warn};

use crate::error::{Error, ErrorKind, Result, Span};
use crate::lexer::token::{OpenTag, Token, TokenStream};
use crate::svg::factory;
use crate::svg::model::Node;

/// Configuration for the tree builder
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Maximum element nesting depth (0 means unlimited)
    pub max_depth: u16,
    /// Maximum input size in bytes (0 means unlimited)
    pub max_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: 128,
            max_size: 10 * 1024 * 1024, // 10 MB default
        }
    }
}

impl Config {
    /// Create a new config with unlimited depth and size
    pub const fn unlimited() -> Self {
        Self {
            max_depth: 0,
            max_size: 0,
        }
    }

    /// Create a new config with specific limits
    pub const fn new(max_depth: u16, max_size: usize) -> Self {
        Self {
            max_depth,
            max_size,
        }
    }

    /// Fail when `len` bytes exceed the size limit
    pub fn check_size(&self, len: usize) -> Result<()> {
        if self.max_size > 0 && len > self.max_size {
            return Err(Error::new(
                ErrorKind::MaxSizeExceeded { max: self.max_size },
                Span::empty(),
            ));
        }
        Ok(())
    }
}

/// A child subtree that was dropped while building the tree
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// Tag of the dropped element
    pub tag: String,
    /// Nesting depth of the dropped element (the root is depth 0)
    pub depth: usize,
    pub error: Error,
}

/// A successfully built tree plus every containment decision made on the way
#[derive(Clone, Debug, PartialEq)]
pub struct Parsed {
    pub root: Node,
    pub diagnostics: Vec<Diagnostic>,
}

impl Parsed {
    /// Whether every element in the markup made it into the tree
    pub fn is_complete(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Tree builder driving a token stream
#[derive(Debug)]
pub struct Parser<S> {
    stream: S,
    config: Config,
    diagnostics: Vec<Diagnostic>,
}

impl<S: TokenStream> Parser<S> {
    /// Create a new parser with default configuration
    pub fn new(stream: S) -> Self {
        Self::with_config(stream, Config::default())
    }

    /// Create a new parser with custom configuration
    pub const fn with_config(stream: S, config: Config) -> Self {
        Self {
            stream,
            config,
            diagnostics: Vec::new(),
        }
    }

    /// Find the first element-open token and build the tree rooted there.
    ///
    /// Tokens before the root are ignored; tokens after its close are left
    /// in the stream.
    pub fn parse(mut self) -> Result<Parsed> {
        loop {
            match self.stream.next_token()? {
                Some(Token::Open(open)) => {
                    debug!(root = %open.name, "root element found");
                    let root = self.parse_element(&open, 0)?;
                    debug!(
                        nodes = root.count(),
                        skipped = self.diagnostics.len(),
                        "tree built"
                    );
                    return Ok(Parsed {
                        root,
                        diagnostics: self.diagnostics,
                    });
                }
                Some(_) => {}
                None => return Err(Error::new(ErrorKind::NoRootElement, Span::empty())),
            }
        }
    }

    /// Build the element for `open` and consume its body up to the
    /// matching close token.
    fn parse_element(&mut self, open: &OpenTag, depth: usize) -> Result<Node> {
        self.check_depth(open, depth)?;
        let mut node = factory::build(open)?;

        loop {
            match self.stream.next_token()? {
                Some(Token::Open(child)) => match self.parse_element(&child, depth + 1) {
                    Ok(built) => node.element_mut().children.push(built),
                    Err(err) if err.is_contained() => self.skip_child(&child, depth + 1, err)?,
                    Err(err) => return Err(err),
                },
                Some(Token::Close(close)) if close.name == open.name => return Ok(node),
                Some(Token::Close(close)) => {
                    return Err(Error::with_message(
                        ErrorKind::MalformedTokenStream,
                        close.span,
                        format!(
                            "malformed markup: expected </{}>, found </{}>",
                            open.name, close.name
                        ),
                    ))
                }
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
    }

    fn skip_child(&mut self, child: &OpenTag, depth: usize, err: Error) -> Result<()> {
        warn!(tag = %child.name, depth, error = %err, "skipping element");
        self.stream.skip_element(child)?;
        self.diagnostics.push(Diagnostic {
            tag: child.name.clone(),
            depth,
            error: err,
        });
        Ok(())
    }

    fn check_depth(&self, open: &OpenTag, depth: usize) -> Result<()> {
        let max = self.config.max_depth;
        if max > 0 && depth >= usize::from(max) {
            return Err(Error::new(ErrorKind::MaxDepthExceeded { max }, open.span));
        }
        Ok(())
    }
}
