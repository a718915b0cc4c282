//! Error types for icon generation
//!
//! Font lookup failures are not here: they are absorbed by the fallback chain
//! in `font` and only show up in the debug log.

use std::path::PathBuf;
use thiserror::Error;

/// Shown when the crate was built without its raster backend
pub const INSTALL_HINT: &str =
    "Rebuild with the raster backend enabled: cargo run --features render --bin generate_icons";

#[derive(Debug, Error)]
pub enum IconError {
    /// The image/font backend was not compiled in
    #[error("image rendering backend is not available. {hint}")]
    MissingDependency { hint: String },

    #[error("failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "render")]
    #[error("failed to save {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[cfg(feature = "render")]
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error(
        "invalid icon dimensions for {}: {width}x{height} (expected {expected}x{expected})",
        .path.display()
    )]
    InvalidDimensions {
        path: PathBuf,
        width: u32,
        height: u32,
        expected: u32,
    },
}

/// Fails with [`IconError::MissingDependency`] unless the raster backend is built in
pub fn ensure_backend() -> Result<(), IconError> {
    if cfg!(feature = "render") {
        Ok(())
    } else {
        Err(IconError::MissingDependency {
            hint: INSTALL_HINT.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "render")]
    #[test]
    fn test_backend_available() {
        assert!(ensure_backend().is_ok());
    }

    #[cfg(not(feature = "render"))]
    #[test]
    fn test_backend_missing_reports_hint() {
        let err = ensure_backend().unwrap_err();
        assert!(err.to_string().contains("--features render"));
    }

    #[test]
    fn test_invalid_dimensions_message() {
        let err = IconError::InvalidDimensions {
            path: PathBuf::from("icon-192x192.png"),
            width: 100,
            height: 100,
            expected: 192,
        };
        assert_eq!(
            err.to_string(),
            "invalid icon dimensions for icon-192x192.png: 100x100 (expected 192x192)"
        );
    }
}
