//! Error types for Panorama

use thiserror::Error;

/// Main error type for Panorama configuration and loading.
///
/// Navigation itself never fails: out-of-range indices and unknown
/// fragments are ignored and reported as `None` by the navigator.
#[derive(Error, Debug)]
pub enum PanoramaError {
    /// Configuration is structurally invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// No panels were configured
    #[error("Configuration must declare at least one panel")]
    EmptyPanels,

    /// Two panels share the same identifier
    #[error("Duplicate panel id: {0}")]
    DuplicatePanelId(String),

    /// Panel identifier was not found in the configured list
    #[error("Unknown panel: {0}")]
    UnknownPanel(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using PanoramaError
pub type PanoramaResult<T> = Result<T, PanoramaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PanoramaError::DuplicatePanelId("gallery".to_string());
        assert_eq!(format!("{}", err), "Duplicate panel id: gallery");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PanoramaError = io_err.into();
        assert!(matches!(err, PanoramaError::Io(_)));
    }
}
