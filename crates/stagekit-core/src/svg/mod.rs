//! Polygon extraction from SVG documents.
//!
//! Only `<polygon>` elements are read. Their `points` are scanned for
//! numeric tokens rather than parsed with the full SVG grammar, and
//! polygons with fewer than three vertices are dropped without error.

pub mod error;
mod parser;
mod points;

pub use error::SvgError;
pub use parser::{DEFAULT_HEIGHT, DEFAULT_WIDTH, SVG_NAMESPACE, SvgDocument, parse_svg, parse_svg_str};
pub use points::parse_points;
