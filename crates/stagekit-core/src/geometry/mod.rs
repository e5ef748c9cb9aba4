//! 2D points and fan triangulation.

mod triangulate;

pub use triangulate::{Triangle, polygon_to_triangles};

/// A vertex in SVG user space (origin top-left, y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Mirror into a bottom-left origin canvas of the given height.
    pub fn flip_y(self, height: f64) -> Self {
        Self {
            x: self.x,
            y: height - self.y,
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Ordered vertex list of one `<polygon>`.
pub type Polygon = Vec<Point>;
