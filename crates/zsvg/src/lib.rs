//! zsvg - typed shape trees from a restricted SVG dialect
//!
//! Markup is tokenized, each supported tag (`svg`, `rect`, `line`,
//! `polygon`, `polyline`) becomes a typed [`Node`], and child elements that
//! cannot be built are dropped and reported as [`Diagnostic`]s instead of
//! failing the whole document.
//!
//! # Quick Start
//!
//! ```
//! use zsvg::{from_str, AsElement};
//! # fn main() -> Result<(), zsvg::Error> {
//! let parsed = from_str(
//!     r#"<svg viewBox="0 0 10 10">
//!          <rect width="4" height="2" style="fill:#606060"/>
//!          <circle r="3"/>
//!        </svg>"#,
//! )?;
//! let rect = parsed.root.children().first().and_then(|n| n.as_rect());
//! assert_eq!(rect.map(|r| r.width), Some(4.0));
//! assert_eq!(parsed.diagnostics.len(), 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

use std::path::Path;

use tracing::{debug, instrument};

pub mod error;
pub use error::{Error, ErrorKind, Pos, Result, Span};

pub mod input;
pub use input::Input;

pub mod lexer;
pub use lexer::{Attributes, OpenTag, Token, TokenQueue, TokenStream, XmlTokens};

pub mod svg;
pub use svg::{
    AsElement, Config, Diagnostic, Document, Element, Line, Node, Parsed, Parser, Point, Points,
    PolyLine, Polygon, Rect, Style,
};

/// Parse SVG markup from string
pub fn from_str(s: &str) -> Result<Parsed> {
    from_input(Input::from_str(s), Config::default())
}

/// Parse SVG markup from bytes
pub fn from_bytes(bytes: &[u8]) -> Result<Parsed> {
    from_input(Input::from_bytes(bytes), Config::default())
}

/// Parse with custom configuration
pub fn from_bytes_with_config(bytes: &[u8], config: Config) -> Result<Parsed> {
    from_input(Input::from_bytes(bytes), config)
}

/// Parse an [`Input`], enforcing the configured size limit before tokenizing
pub fn from_input(input: Input<'_>, config: Config) -> Result<Parsed> {
    config.check_size(input.len())?;
    debug!(source = input.display_name(), bytes = input.len(), "parsing svg");
    from_tokens(XmlTokens::new(input.as_bytes()), config)
}

/// Build the tree from any token source
pub fn from_tokens<S: TokenStream>(stream: S, config: Config) -> Result<Parsed> {
    Parser::with_config(stream, config).parse()
}

/// Read and parse an SVG file
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn from_file(path: impl AsRef<Path>) -> Result<Parsed> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|err| Error::io(path, &err))?;
    let name = path.to_string_lossy();
    from_input(
        Input::from_bytes(&bytes).with_filename(&name),
        Config::default(),
    )
}
