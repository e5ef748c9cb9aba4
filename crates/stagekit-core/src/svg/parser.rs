use std::fs;
use std::path::Path;

use roxmltree::{Document, Node, ParsingOptions};
use tracing::debug;

use super::error::SvgError;
use super::points::parse_points;
use crate::geometry::Polygon;

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
pub const DEFAULT_WIDTH: f64 = 1920.0;
pub const DEFAULT_HEIGHT: f64 = 1080.0;

/// Polygons and canvas size extracted from an SVG file.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    /// Polygons with at least three vertices, in document order.
    pub polygons: Vec<Polygon>,
    pub width: f64,
    pub height: f64,
}

/// Read and parse an SVG file.
///
/// # Examples
/// ```no_run
/// use std::path::Path;
///
/// use stagekit_core::parse_svg;
///
/// let doc = parse_svg(Path::new("dragonfly.svg"))?;
/// println!("{} polygons on {}x{}", doc.polygons.len(), doc.width, doc.height);
/// # Ok::<(), stagekit_core::SvgError>(())
/// ```
pub fn parse_svg(path: &Path) -> Result<SvgDocument, SvgError> {
    let text = fs::read_to_string(path).map_err(|source| SvgError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_svg_str(&text)
}

/// Parse SVG markup held in memory.
///
/// `<polygon>` elements are looked up in the SVG namespace first; only when
/// that yields no usable polygon are un-namespaced elements considered.
///
/// # Examples
/// ```
/// use stagekit_core::parse_svg_str;
///
/// let doc = parse_svg_str(r#"<svg width="20" height="20"><polygon points="0,0 10,0 10,10"/></svg>"#)?;
/// assert_eq!(doc.polygons.len(), 1);
/// assert_eq!(doc.width, 20.0);
/// # Ok::<(), stagekit_core::SvgError>(())
/// ```
pub fn parse_svg_str(text: &str) -> Result<SvgDocument, SvgError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(text, options)?;
    let root = doc.root_element();

    let width = dimension(root, "width", DEFAULT_WIDTH)?;
    let height = dimension(root, "height", DEFAULT_HEIGHT)?;

    let mut polygons = collect_polygons(root, Some(SVG_NAMESPACE))?;
    if polygons.is_empty() {
        polygons = collect_polygons(root, None)?;
    }
    debug!(polygons = polygons.len(), width, height, "parsed SVG");

    Ok(SvgDocument {
        polygons,
        width,
        height,
    })
}

fn dimension(root: Node<'_, '_>, name: &'static str, default: f64) -> Result<f64, SvgError> {
    let Some(value) = root.attribute(name) else {
        return Ok(default);
    };
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| SvgError::InvalidDimension {
            name,
            value: value.to_string(),
        })
}

fn collect_polygons(root: Node<'_, '_>, namespace: Option<&str>) -> Result<Vec<Polygon>, SvgError> {
    let mut polygons = Vec::new();
    let elements = root.descendants().skip(1).filter(|node| {
        node.is_element()
            && node.tag_name().name() == "polygon"
            && node.tag_name().namespace() == namespace
    });
    for element in elements {
        let Some(points) = element.attribute("points").filter(|p| !p.is_empty()) else {
            continue;
        };
        let points = parse_points(points)?;
        if points.len() < 3 {
            debug!(vertices = points.len(), "skipping polygon with fewer than 3 vertices");
            continue;
        }
        polygons.push(points);
    }
    Ok(polygons)
}
