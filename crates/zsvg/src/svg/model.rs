//! Typed shape tree

use std::fmt;

use indexmap::IndexMap;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Capability shared by every node kind: view it as its base element
pub trait AsElement {
    fn element(&self) -> &Element;

    fn into_element(self) -> Element;

    fn children(&self) -> &[Node] {
        &self.element().children
    }

    fn is_leaf(&self) -> bool {
        self.element().children.is_empty()
    }
}

/// Decoded `style` property list
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Style(IndexMap<String, String>);

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    pub(crate) fn insert(&mut self, property: String, value: String) {
        self.0.insert(property, value);
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

/// A 2-D coordinate
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Ordered vertex list of a polygon-like shape, without a closing duplicate
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Points(Vec<Point>);

impl Points {
    pub const fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<Point> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Points {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, point) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{point}")?;
        }
        write!(f, "]")
    }
}

/// Fields every element carries
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Element {
    /// `data-name`
    pub name: Option<String>,
    pub id: Option<String>,
    pub style: Style,
    pub children: Vec<Node>,
}

impl AsElement for Element {
    fn element(&self) -> &Self {
        self
    }

    fn into_element(self) -> Self {
        self
    }
}

/// `<svg>` root
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Document {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub element: Element,
    pub version: f32,
    pub view_box: Option<String>,
}

/// `<rect>`
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Rect {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub element: Element,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rect{{x:{}, y:{}, w:{}, h:{}}}",
            self.x, self.y, self.width, self.height
        )
    }
}

/// `<line>`
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Line {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub element: Element,
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line{{x1:{}, y1:{}, x2:{}, y2:{}}}",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

/// `<polygon>`
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Polygon {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub element: Element,
    pub points: Points,
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "polygon{{{}}}", self.points)
    }
}

/// `<polyline>`: same shape as a polygon, drawn open
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PolyLine {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub element: Element,
    pub points: Points,
}

impl fmt::Display for PolyLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "polyline{{{}}}", self.points)
    }
}

macro_rules! impl_as_element {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AsElement for $ty {
                fn element(&self) -> &Element {
                    &self.element
                }

                fn into_element(self) -> Element {
                    self.element
                }
            }
        )*
    };
}

impl_as_element!(Document, Rect, Line, Polygon, PolyLine);

/// A node of the shape tree
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum Node {
    #[cfg_attr(feature = "serde", serde(rename = "svg"))]
    Document(Document),
    Rect(Rect),
    Line(Line),
    Polygon(Polygon),
    PolyLine(PolyLine),
}

impl Node {
    /// Markup tag this node was built from
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Document(_) => "svg",
            Self::Rect(_) => "rect",
            Self::Line(_) => "line",
            Self::Polygon(_) => "polygon",
            Self::PolyLine(_) => "polyline",
        }
    }

    pub const fn as_document(&self) -> Option<&Document> {
        match self {
            Self::Document(doc) => Some(doc),
            _ => None,
        }
    }

    pub const fn as_rect(&self) -> Option<&Rect> {
        match self {
            Self::Rect(rect) => Some(rect),
            _ => None,
        }
    }

    pub const fn as_line(&self) -> Option<&Line> {
        match self {
            Self::Line(line) => Some(line),
            _ => None,
        }
    }

    pub const fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Self::Polygon(polygon) => Some(polygon),
            _ => None,
        }
    }

    pub const fn as_polyline(&self) -> Option<&PolyLine> {
        match self {
            Self::PolyLine(polyline) => Some(polyline),
            _ => None,
        }
    }

    /// Total number of nodes in this subtree, itself included
    pub fn count(&self) -> usize {
        1 + self.children().iter().map(Self::count).sum::<usize>()
    }

    pub(crate) fn element_mut(&mut self) -> &mut Element {
        match self {
            Self::Document(doc) => &mut doc.element,
            Self::Rect(rect) => &mut rect.element,
            Self::Line(line) => &mut line.element,
            Self::Polygon(polygon) => &mut polygon.element,
            Self::PolyLine(polyline) => &mut polyline.element,
        }
    }
}

impl AsElement for Node {
    fn element(&self) -> &Element {
        match self {
            Self::Document(doc) => doc.element(),
            Self::Rect(rect) => rect.element(),
            Self::Line(line) => line.element(),
            Self::Polygon(polygon) => polygon.element(),
            Self::PolyLine(polyline) => polyline.element(),
        }
    }

    fn into_element(self) -> Element {
        match self {
            Self::Document(doc) => doc.into_element(),
            Self::Rect(rect) => rect.into_element(),
            Self::Line(line) => line.into_element(),
            Self::Polygon(polygon) => polygon.into_element(),
            Self::PolyLine(polyline) => polyline.into_element(),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Document(doc) => match &doc.view_box {
                Some(view_box) => write!(f, "svg{{version:{}, viewBox:{view_box}}}", doc.version),
                None => write!(f, "svg{{version:{}}}", doc.version),
            },
            Self::Rect(rect) => fmt::Display::fmt(rect, f),
            Self::Line(line) => fmt::Display::fmt(line, f),
            Self::Polygon(polygon) => fmt::Display::fmt(polygon, f),
            Self::PolyLine(polyline) => fmt::Display::fmt(polyline, f),
        }
    }
}
