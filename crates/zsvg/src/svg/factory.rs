//! Tag-name dispatch from open tokens to typed nodes

use crate::error::{Error, ErrorKind, Result};
use crate::lexer::token::OpenTag;
use crate::svg::decode;
use crate::svg::model::{Document, Element, Line, Node, Points, PolyLine, Polygon, Rect};

type Constructor = fn(&OpenTag) -> Result<Node>;

/// Every supported tag and how to build it
const CONSTRUCTORS: &[(&str, Constructor)] = &[
    ("svg", build_document),
    ("rect", build_rect),
    ("polygon", build_polygon),
    ("polyline", build_polyline),
    ("line", build_line),
];

/// Tags `build` knows how to construct
pub fn supported_tags() -> impl Iterator<Item = &'static str> {
    CONSTRUCTORS.iter().map(|(tag, _)| *tag)
}

pub fn is_supported(tag: &str) -> bool {
    supported_tags().any(|known| known == tag)
}

/// Build the node for an open token. The returned node has no children yet.
pub fn build(open: &OpenTag) -> Result<Node> {
    let constructor = CONSTRUCTORS
        .iter()
        .find(|(tag, _)| *tag == open.name)
        .map(|(_, constructor)| constructor)
        .ok_or_else(|| {
            Error::new(
                ErrorKind::UnsupportedElementType {
                    tag: open.name.clone(),
                },
                open.span,
            )
        })?;
    constructor(open)
}

/// Fields shared by every element: `id`, `style`, `data-name`
pub fn base_element(open: &OpenTag) -> Element {
    let attrs = &open.attributes;
    Element {
        name: attrs.get("data-name").map(str::to_string),
        id: attrs.get("id").map(str::to_string),
        style: decode::style(attrs.get("style")),
        children: Vec::new(),
    }
}

fn optional_number(open: &OpenTag, attribute: &str) -> f32 {
    decode::number(open.attributes.get(attribute)).unwrap_or(0.0)
}

fn required_number(open: &OpenTag, attribute: &str) -> Result<f32> {
    decode::number(open.attributes.get(attribute)).ok_or_else(|| missing(open, attribute))
}

fn required_points(open: &OpenTag) -> Result<Points> {
    let points = open
        .attributes
        .get("points")
        .map(decode::points)
        .ok_or_else(|| missing(open, "points"))?;
    if points.is_empty() {
        return Err(missing(open, "points"));
    }
    Ok(points)
}

fn missing(open: &OpenTag, attribute: &str) -> Error {
    Error::new(
        ErrorKind::MissingOrInvalidAttribute {
            tag: open.name.clone(),
            attribute: attribute.to_string(),
        },
        open.span,
    )
}

fn build_document(open: &OpenTag) -> Result<Node> {
    Ok(Node::Document(Document {
        element: base_element(open),
        version: optional_number(open, "version"),
        view_box: open.attributes.get("viewBox").map(str::to_string),
    }))
}

fn build_rect(open: &OpenTag) -> Result<Node> {
    let element = base_element(open);
    Ok(Node::Rect(Rect {
        x: optional_number(open, "x"),
        y: optional_number(open, "y"),
        width: required_number(open, "width")?,
        height: required_number(open, "height")?,
        element,
    }))
}

fn build_line(open: &OpenTag) -> Result<Node> {
    let element = base_element(open);
    Ok(Node::Line(Line {
        x1: required_number(open, "x1")?,
        y1: required_number(open, "y1")?,
        x2: required_number(open, "x2")?,
        y2: required_number(open, "y2")?,
        element,
    }))
}

fn build_polygon(open: &OpenTag) -> Result<Node> {
    let element = base_element(open);
    Ok(Node::Polygon(Polygon {
        points: required_points(open)?,
        element,
    }))
}

fn build_polyline(open: &OpenTag) -> Result<Node> {
    let element = base_element(open);
    Ok(Node::PolyLine(PolyLine {
        points: required_points(open)?,
        element,
    }))
}
