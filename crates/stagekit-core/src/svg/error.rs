use std::path::PathBuf;

use thiserror::Error;

/// Errors returned while reading polygons out of an SVG document.
///
/// # Examples
/// ```
/// use stagekit_core::SvgError;
///
/// let err = SvgError::InvalidNumber { token: "1.2.3".to_string() };
/// assert!(err.to_string().contains("1.2.3"));
/// ```
#[derive(Debug, Error)]
pub enum SvgError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed XML: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("invalid {name} attribute on root element: '{value}'")]
    InvalidDimension { name: &'static str, value: String },
    #[error("invalid number '{token}' in polygon points")]
    InvalidNumber { token: String },
}
