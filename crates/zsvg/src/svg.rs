//! SVG shape tree: model, attribute decoders, element factory and builder

pub mod decode;
pub mod factory;
pub mod model;
pub mod parser;

pub use model::{
    AsElement, Document, Element, Line, Node, Point, Points, PolyLine, Polygon, Rect, Style,
};
pub use parser::{Config, Diagnostic, Parsed, Parser};
