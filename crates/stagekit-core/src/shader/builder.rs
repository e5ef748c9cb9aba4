use std::fmt;

use tracing::debug;

use super::metadata::polygon_alpha_name;
use crate::geometry::{Point, polygon_to_triangles};

/// One point-in-triangle check in the emitted chain.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleTest {
    /// Index of the polygon (and its `poly{i}_alpha` input).
    pub polygon: usize,
    /// Vertices in canvas space (y up).
    pub vertices: [Point; 3],
}

/// Accumulates triangle tests in polygon-then-triangle order.
///
/// # Examples
/// ```
/// use stagekit_core::{Point, ShaderBuilder};
///
/// let mut builder = ShaderBuilder::new(20.0);
/// builder.add_polygon(&[Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(10.0, 10.0)]);
/// assert_eq!(builder.tests().len(), 1);
/// assert_eq!(builder.tests()[0].vertices[0], Point::new(0.0, 20.0));
/// ```
#[derive(Debug, Clone)]
pub struct ShaderBuilder {
    height: f64,
    polygons: usize,
    tests: Vec<TriangleTest>,
}

impl ShaderBuilder {
    pub fn new(height: f64) -> Self {
        Self {
            height,
            polygons: 0,
            tests: Vec::new(),
        }
    }

    /// Triangulate `polygon` and append its tests. Returns the polygon index.
    pub fn add_polygon(&mut self, polygon: &[Point]) -> usize {
        let index = self.polygons;
        self.polygons += 1;
        let height = self.height;
        let before = self.tests.len();
        self.tests
            .extend(polygon_to_triangles(polygon).into_iter().map(|triangle| TriangleTest {
                polygon: index,
                vertices: triangle.map(|p| p.flip_y(height)),
            }));
        debug!(
            polygon = index,
            triangles = self.tests.len() - before,
            "triangulated polygon"
        );
        index
    }

    pub fn polygon_count(&self) -> usize {
        self.polygons
    }

    pub fn tests(&self) -> &[TriangleTest] {
        &self.tests
    }

    /// The `if` / `else if` chain, one statement per line.
    pub fn chain(&self) -> TestChain<'_> {
        TestChain { tests: &self.tests }
    }
}

/// Renders the test chain; later tests are `else if` on their own line.
pub struct TestChain<'a> {
    tests: &'a [TriangleTest],
}

impl TestChain<'_> {
    pub(crate) fn write_indented(&self, f: &mut fmt::Formatter<'_>, indent: &str) -> fmt::Result {
        for (i, test) in self.tests.iter().enumerate() {
            if i > 0 {
                write!(f, "\n{indent}else ")?;
            }
            let [a, b, c] = test.vertices;
            write!(
                f,
                "if (pointInTriangle(pixelCoord, {}, {}, {})) {{ alpha = {}; }}",
                Vec2(a),
                Vec2(b),
                Vec2(c),
                polygon_alpha_name(test.polygon)
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for TestChain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, "")
    }
}

/// GLSL `vec2` literal with three decimals.
struct Vec2(Point);

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vec2({:.3}, {:.3})", self.0.x, self.0.y)
    }
}
