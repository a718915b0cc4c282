//! Checks on icons already written to disk

use crate::error::IconError;
use image::GenericImageView;
use std::path::Path;

fn open_icon(path: &Path) -> Result<image::DynamicImage, IconError> {
    image::open(path).map_err(|source| IconError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Validate that the icon at `path` decodes and is `size`x`size` pixels
pub fn validate_icon(path: &Path, size: u32) -> Result<(), IconError> {
    let (width, height) = open_icon(path)?.dimensions();

    if width != size || height != size {
        return Err(IconError::InvalidDimensions {
            path: path.to_path_buf(),
            width,
            height,
            expected: size,
        });
    }

    Ok(())
}

/// RGB value of the top-left pixel
pub fn corner_pixel(path: &Path) -> Result<[u8; 3], IconError> {
    let image = open_icon(path)?.to_rgb8();
    if image.width() == 0 || image.height() == 0 {
        return Err(IconError::InvalidDimensions {
            path: path.to_path_buf(),
            width: image.width(),
            height: image.height(),
            expected: 1,
        });
    }
    Ok(image.get_pixel(0, 0).0)
}
