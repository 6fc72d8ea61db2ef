use zsvg::{from_bytes_with_config, from_str, AsElement, Config, ErrorKind, Node, Point};

fn error_kind(input: &str) -> Option<ErrorKind> {
    from_str(input).err().map(|err| err.kind().clone())
}

#[test]
fn test_illustrator_export() -> Result<(), Box<dyn std::error::Error>> {
    let input = include_str!("fixtures/valid/illustrator_export.svg");
    let parsed = from_str(input)?;

    let doc = parsed.root.as_document().ok_or("root should be <svg>")?;
    assert_eq!(doc.version, 1.1);
    assert_eq!(doc.view_box.as_deref(), Some("0 0 216 215.75"));
    assert_eq!(doc.element.id.as_deref(), Some("Layer_1"));
    assert_eq!(
        doc.element.style.get("enable-background"),
        Some("new 0 0 216 215.75")
    );

    let children = parsed.root.children();
    assert_eq!(children.len(), 2);

    let rect = children.first().and_then(Node::as_rect).ok_or("first child should be a rect")?;
    assert_eq!((rect.x, rect.y, rect.width, rect.height), (72.0, 72.0, 72.0, 72.0));
    assert_eq!(rect.element.style.get("fill"), Some("#606060"));

    let polygon = children
        .get(1)
        .and_then(Node::as_polygon)
        .ok_or("second child should be a polygon")?;
    assert_eq!(polygon.points.len(), 8);
    assert_eq!(polygon.points.as_slice().first(), Some(&Point::new(108.5, 132.4289)));
    assert_eq!(polygon.element.style.get("stroke"), Some("#DDB34A"));
    assert_eq!(polygon.element.style.len(), 4);

    assert!(parsed.is_complete());
    Ok(())
}

#[test]
fn test_lines_and_polylines() -> Result<(), Box<dyn std::error::Error>> {
    let parsed = from_str(include_str!("fixtures/valid/lines_and_polylines.svg"))?;
    let tags: Vec<&str> = parsed.root.children().iter().map(Node::tag).collect();
    assert_eq!(tags, ["line", "polyline", "polygon"]);

    let line = parsed.root.children().first().and_then(Node::as_line).ok_or("line")?;
    assert_eq!(line.element.name.as_deref(), Some("axis"));
    assert_eq!((line.x1, line.y1, line.x2, line.y2), (0.0, 50.0, 100.0, 50.0));

    let polyline = parsed.root.children().get(1).and_then(Node::as_polyline).ok_or("polyline")?;
    assert_eq!(polyline.points.len(), 3);

    let polygon = parsed.root.children().get(2).and_then(Node::as_polygon).ok_or("polygon")?;
    assert_eq!(polygon.points.len(), 3);
    Ok(())
}

#[test]
fn test_rect_missing_x_defaults_to_zero() -> Result<(), Box<dyn std::error::Error>> {
    let parsed = from_str(r#"<rect y="3" width="4" height="5"/>"#)?;
    let rect = parsed.root.as_rect().ok_or("root should be a rect")?;
    assert_eq!((rect.x, rect.y), (0.0, 3.0));
    Ok(())
}

#[test]
fn test_rect_missing_width_as_root_fails() {
    assert_eq!(
        error_kind(r#"<rect height="4"/>"#),
        Some(ErrorKind::MissingOrInvalidAttribute {
            tag: "rect".to_string(),
            attribute: "width".to_string()
        })
    );
}

#[test]
fn test_rect_missing_width_as_child_is_dropped() -> Result<(), Box<dyn std::error::Error>> {
    let parsed = from_str(r#"<svg><rect height="4"/><rect width="1" height="4"/></svg>"#)?;
    assert_eq!(parsed.root.children().len(), 1);
    let diagnostic = parsed.diagnostics.first().ok_or("expected a diagnostic")?;
    assert_eq!(diagnostic.tag, "rect");
    assert_eq!(
        diagnostic.error.kind(),
        &ErrorKind::MissingOrInvalidAttribute {
            tag: "rect".to_string(),
            attribute: "width".to_string()
        }
    );
    Ok(())
}

#[test]
fn test_malformed_polygon_is_not_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let parsed = from_str(
        r#"<svg>
             <rect width="10" height="10"/>
             <polygon points="  "/>
           </svg>"#,
    )?;
    assert_eq!(parsed.root.children().len(), 1);
    assert_eq!(parsed.root.children().first().map(Node::tag), Some("rect"));
    assert_eq!(parsed.diagnostics.len(), 1);
    assert_eq!(parsed.diagnostics.first().map(|d| d.tag.as_str()), Some("polygon"));
    Ok(())
}

#[test]
fn test_unknown_child_skipped_with_its_subtree() -> Result<(), Box<dyn std::error::Error>> {
    let parsed = from_str(include_str!("fixtures/valid/partially_supported.svg"))?;
    let children = parsed.root.children();
    assert_eq!(children.len(), 1);
    assert_eq!(children.first().and_then(Node::as_rect).map(|r| r.width), Some(10.0));

    let skipped: Vec<&str> = parsed.diagnostics.iter().map(|d| d.tag.as_str()).collect();
    assert_eq!(skipped, ["g", "circle"]);
    assert!(parsed.diagnostics.iter().all(|d| d.depth == 1));
    Ok(())
}

#[test]
fn test_unknown_root_aborts() {
    assert_eq!(
        error_kind("<circle/>"),
        Some(ErrorKind::UnsupportedElementType {
            tag: "circle".to_string()
        })
    );
}

#[test]
fn test_unclosed_root_aborts() {
    assert_eq!(
        error_kind(include_str!("fixtures/invalid/unterminated_root.svg")),
        Some(ErrorKind::UnterminatedElement {
            tag: "svg".to_string()
        })
    );
}

#[test]
fn test_no_root_element() {
    assert_eq!(
        error_kind("<?xml version=\"1.0\"?><!-- empty -->"),
        Some(ErrorKind::NoRootElement)
    );
    assert_eq!(error_kind(""), Some(ErrorKind::NoRootElement));
}

#[test]
fn test_mismatched_close_is_malformed() {
    assert_eq!(
        error_kind(include_str!("fixtures/invalid/mismatched_close.svg")),
        Some(ErrorKind::MalformedTokenStream)
    );
}

#[test]
fn test_namespaced_tags_resolve_by_local_name() -> Result<(), Box<dyn std::error::Error>> {
    let parsed = from_str(
        r#"<svg:svg xmlns:svg="http://www.w3.org/2000/svg"><svg:rect width="2" height="3"/></svg:svg>"#,
    )?;
    assert_eq!(parsed.root.children().first().map(Node::tag), Some("rect"));
    Ok(())
}

#[test]
fn test_nested_shapes_keep_their_children() -> Result<(), Box<dyn std::error::Error>> {
    let parsed = from_str(
        r#"<svg><rect width="1" height="1"><line x1="0" y1="0" x2="1" y2="1"/></rect></svg>"#,
    )?;
    let rect = parsed.root.children().first().ok_or("rect")?;
    assert_eq!(rect.children().first().map(Node::tag), Some("line"));
    assert_eq!(parsed.root.count(), 3);
    Ok(())
}

#[test]
fn test_size_and_depth_limits() {
    let input = b"<svg><svg><svg/></svg></svg>";

    let too_small = from_bytes_with_config(input, Config::new(0, 4));
    assert_eq!(
        too_small.err().map(|e| e.kind().clone()),
        Some(ErrorKind::MaxSizeExceeded { max: 4 })
    );

    let too_shallow = from_bytes_with_config(input, Config::new(2, 0));
    assert_eq!(
        too_shallow.err().map(|e| e.kind().clone()),
        Some(ErrorKind::MaxDepthExceeded { max: 2 })
    );

    assert!(from_bytes_with_config(input, Config::new(3, 0)).is_ok());
}

#[test]
fn test_error_reports_position() {
    let err = from_str("<svg>\n  <svg>\n    <circle/>\n</svg>").err();
    let pos = err.map(|e| e.span().start);
    // the unterminated outer <svg> is reported where it opened
    assert_eq!(pos.map(|p| (p.line, p.col)), Some((1, 1)));
}
