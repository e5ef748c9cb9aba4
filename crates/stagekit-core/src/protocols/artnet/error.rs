use thiserror::Error;

/// Errors returned by ArtDMX encoding and decoding.
///
/// # Examples
/// ```
/// use stagekit_core::ArtNetError;
///
/// let err = ArtNetError::InvalidLength { length: 600 };
/// assert!(err.to_string().contains("invalid ArtDMX length"));
/// ```
#[derive(Debug, Error)]
pub enum ArtNetError {
    #[error("payload too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
    #[error("invalid ArtDMX length: {length}")]
    InvalidLength { length: u16 },
    #[error("write out of bounds: need {needed} bytes, buffer holds {capacity}")]
    OutOfBounds { needed: usize, capacity: usize },
}
