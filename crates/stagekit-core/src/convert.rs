//! SVG file → shader file pipeline.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::shader::{OutputMode, ShaderError, ShaderSummary, generate_isf_shader};
use crate::svg::{SvgError, parse_svg};

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("SVG parsing failed")]
    Svg(#[from] SvgError),
    #[error("no polygons found in {}", path.display())]
    NoPolygons { path: PathBuf },
    #[error("shader generation failed")]
    Shader(#[from] ShaderError),
}

/// Result of a successful conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub input: PathBuf,
    pub output: PathBuf,
    pub width: f64,
    pub height: f64,
    pub summary: ShaderSummary,
}

/// `input` with its extension replaced by the mode's.
///
/// # Examples
/// ```
/// use std::path::{Path, PathBuf};
///
/// use stagekit_core::{OutputMode, output_path_for};
///
/// let out = output_path_for(Path::new("art/dragonfly.svg"), OutputMode::Isf);
/// assert_eq!(out, PathBuf::from("art/dragonfly.isf"));
/// ```
pub fn output_path_for(input: &Path, mode: OutputMode) -> PathBuf {
    input.with_extension(mode.extension())
}

/// Parse `input`, then write the shader next to it.
///
/// Nothing is written when the document has no usable polygon.
pub fn convert_svg_file(input: &Path, mode: OutputMode) -> Result<Conversion, ConvertError> {
    let output = output_path_for(input, mode);
    let doc = parse_svg(input)?;
    if doc.polygons.is_empty() {
        return Err(ConvertError::NoPolygons {
            path: input.to_path_buf(),
        });
    }
    debug!(input = %input.display(), output = %output.display(), ?mode, "converting");

    let summary = generate_isf_shader(&doc.polygons, doc.width, doc.height, &output)?;
    Ok(Conversion {
        input: input.to_path_buf(),
        output,
        width: doc.width,
        height: doc.height,
        summary,
    })
}
