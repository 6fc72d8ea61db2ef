//! Attribute value decoders
//!
//! Each decoder turns one raw attribute string into a typed value. None of
//! them fail: whether a missing or unusable value is an error is decided by
//! the element factory, per field.

use crate::svg::model::{Point, Points, Style};

/// Parse a numeric attribute as `f32`, `None` when absent or unparsable
pub fn number(raw: Option<&str>) -> Option<f32> {
    raw.and_then(|value| value.trim().parse::<f32>().ok())
}

/// Decode a `style` attribute such as `fill:#ff0000; stroke:none`.
///
/// Segments without exactly one `:` or with an empty side are dropped.
pub fn style(raw: Option<&str>) -> Style {
    let mut style = Style::new();
    let Some(raw) = raw else {
        return style;
    };

    for segment in raw.split(';') {
        let mut parts = segment.split(':');
        let (Some(key), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
            continue;
        };
        let key = key.trim();
        let value = value.trim_matches(' ');
        if key.is_empty() || value.is_empty() {
            continue;
        }
        style.insert(key.to_string(), value.to_string());
    }

    style
}

/// Decode a `points` attribute such as `10,20 30,40 50,60`.
///
/// Commas, tabs and newlines all separate coordinates. A coordinate that
/// does not parse counts as `0`, a trailing unpaired coordinate is
/// dropped, and a closing vertex equal to the first one is removed.
pub fn points(raw: &str) -> Points {
    let normalized: String = raw
        .trim_matches(' ')
        .chars()
        .map(|c| match c {
            ',' | '\n' | '\r' | '\t' => ' ',
            other => other,
        })
        .collect();

    let coords: Vec<f32> = normalized
        .split_whitespace()
        .map(|token| token.parse::<f32>().unwrap_or(0.0))
        .collect();

    let mut vertices: Vec<Point> = coords
        .chunks_exact(2)
        .filter_map(|pair| match pair {
            [x, y] => Some(Point::new(*x, *y)),
            _ => None,
        })
        .collect();

    if vertices.len() >= 2 && vertices.first() == vertices.last() {
        vertices.pop();
    }

    Points::new(vertices)
}
