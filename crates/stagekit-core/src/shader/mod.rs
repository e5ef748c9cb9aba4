//! ISF/GLSL fragment shader generation.
//!
//! Each polygon is fan-triangulated and every triangle becomes one
//! point-in-triangle check. Checks form a single `if` / `else if` chain in
//! polygon-then-triangle order, so where polygons overlap the earliest one
//! wins. The ISF JSON header is always emitted; `OutputMode` only chooses
//! the file extension.

mod builder;
pub mod metadata;
mod template;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::geometry::Polygon;

pub use builder::{ShaderBuilder, TestChain, TriangleTest};
pub use metadata::{IsfInput, IsfInputKind, IsfMetadata, IsfValue};
pub use template::POINT_IN_TRIANGLE;

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("failed to serialize ISF metadata: {0}")]
    Metadata(#[from] serde_json::Error),
    #[error("failed to write shader: {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Target file flavour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    Glsl,
    Isf,
}

impl OutputMode {
    /// Extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputMode::Glsl => "glsl",
            OutputMode::Isf => "isf",
        }
    }
}

/// Counts reported after generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShaderSummary {
    pub polygons: usize,
    pub triangle_tests: usize,
    /// Per-polygon alphas plus `globalAlpha`, `polygonColor`, `backgroundColor`.
    pub parameters: usize,
}

#[derive(Debug, Clone)]
pub struct RenderedShader {
    pub text: String,
    pub summary: ShaderSummary,
}

/// Render the shader text for `polygons` on a `width` x `height` canvas.
///
/// # Examples
/// ```
/// use stagekit_core::{Point, render_shader};
///
/// let square = vec![
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(10.0, 10.0),
///     Point::new(0.0, 10.0),
/// ];
/// let shader = render_shader(&[square], 20.0, 20.0)?;
/// assert_eq!(shader.summary.triangle_tests, 2);
/// assert!(shader.text.contains("\"NAME\": \"poly0_alpha\""));
/// # Ok::<(), stagekit_core::ShaderError>(())
/// ```
pub fn render_shader(
    polygons: &[Polygon],
    width: f64,
    height: f64,
) -> Result<RenderedShader, ShaderError> {
    let mut builder = ShaderBuilder::new(height);
    for polygon in polygons {
        builder.add_polygon(polygon);
    }

    let metadata = IsfMetadata::for_polygons(builder.polygon_count());
    let metadata_json = serde_json::to_string_pretty(&metadata)?;
    let text = template::ShaderSource {
        metadata_json: &metadata_json,
        width,
        height,
        chain: builder.chain(),
    }
    .to_string();

    Ok(RenderedShader {
        text,
        summary: ShaderSummary {
            polygons: builder.polygon_count(),
            triangle_tests: builder.tests().len(),
            parameters: metadata.inputs.len(),
        },
    })
}

/// Render the shader and write it to `output_path`.
pub fn generate_isf_shader(
    polygons: &[Polygon],
    width: f64,
    height: f64,
    output_path: &Path,
) -> Result<ShaderSummary, ShaderError> {
    let shader = render_shader(polygons, width, height)?;
    fs::write(output_path, &shader.text).map_err(|source| ShaderError::Write {
        path: output_path.to_path_buf(),
        source,
    })?;
    info!(
        path = %output_path.display(),
        polygons = shader.summary.polygons,
        triangle_tests = shader.summary.triangle_tests,
        "shader written"
    );
    Ok(shader.summary)
}

#[cfg(test)]
mod tests {
    use super::{OutputMode, generate_isf_shader, render_shader};
    use crate::geometry::{Point, Polygon};

    fn square() -> Polygon {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    #[test]
    fn square_yields_two_tests_and_one_alpha() {
        let shader = render_shader(&[square()], 20.0, 20.0).unwrap();
        assert_eq!(shader.summary.polygons, 1);
        assert_eq!(shader.summary.triangle_tests, 2);
        assert_eq!(shader.summary.parameters, 4);
        assert_eq!(shader.text.matches("pointInTriangle(pixelCoord").count(), 2);
        assert_eq!(shader.text.matches("\"poly0_alpha\"").count(), 1);
        assert!(!shader.text.contains("poly1_alpha"));
        assert!(shader.text.contains("vec2(0.000, 20.000)"));
        assert!(shader.text.contains("vec2 pixelCoord = uv * vec2(20.0, 20.0);"));
    }

    #[test]
    fn header_and_helper_are_always_present() {
        let shader = render_shader(&[], 1920.0, 1080.0).unwrap();
        assert!(shader.text.starts_with("/*{\n"));
        assert!(shader.text.contains("}*/\n"));
        assert!(shader.text.contains("\"ISFVSN\": \"2\""));
        assert!(shader.text.contains("if (abs(denom) < 0.0001) return false;"));
        assert!(shader.text.contains("(u + v <= 1.0001)"));
        assert!(shader.text.contains("gl_FragColor = color;"));
    }

    #[test]
    fn overlapping_polygons_resolve_to_earliest() {
        let shader = render_shader(&[square(), square()], 20.0, 20.0).unwrap();
        let chain: Vec<_> = shader
            .text
            .lines()
            .map(str::trim)
            .filter(|l| l.contains("pointInTriangle(pixelCoord"))
            .collect();
        assert_eq!(chain.len(), 4);
        assert!(chain[0].starts_with("if "));
        assert!(chain[0].ends_with("alpha = poly0_alpha; }"));
        assert!(chain[1].starts_with("else if "));
        assert!(chain[2].ends_with("alpha = poly1_alpha; }"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let triangle = vec![
            Point::new(1.5, 2.25),
            Point::new(8.0, 3.0),
            Point::new(4.0, 9.0),
        ];
        let polygons = [square(), triangle];
        let a = render_shader(&polygons, 640.0, 480.0).unwrap();
        let b = render_shader(&polygons, 640.0, 480.0).unwrap();
        assert_eq!(a.text, b.text);
    }

    #[test]
    fn writes_file_and_reports_counts() {
        let temp = tempfile::tempdir().unwrap();
        let out = temp.path().join(format!("square.{}", OutputMode::Isf.extension()));
        let summary = generate_isf_shader(&[square()], 20.0, 20.0, &out).unwrap();
        assert_eq!(summary.triangle_tests, 2);
        let written = std::fs::read_to_string(&out).unwrap();
        assert_eq!(written, render_shader(&[square()], 20.0, 20.0).unwrap().text);
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let temp = tempfile::tempdir().unwrap();
        let out = temp.path().join("missing-dir").join("out.glsl");
        let err = generate_isf_shader(&[square()], 20.0, 20.0, &out).unwrap_err();
        assert!(err.to_string().contains("out.glsl"));
    }

    #[test]
    fn default_mode_is_glsl() {
        assert_eq!(OutputMode::default(), OutputMode::Glsl);
        assert_eq!(OutputMode::Glsl.extension(), "glsl");
    }
}
