//! PNG decoding into RGB buffers and atomic atlas export

use crate::io::configuration::TEMP_EXTENSION;
use crate::io::error::{FlipTileError, Result, invariant_violation};
use crate::spatial::buffer::PixelBuffer;
use image::{ImageFormat, RgbImage};
use std::path::{Path, PathBuf};

/// Load an image as 8-bit RGB
///
/// Palettes are expanded, grayscale is widened to RGB, and alpha and 16-bit
/// precision are dropped.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded
pub fn load_rgb_image<P: AsRef<Path>>(path: P) -> Result<PixelBuffer> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| FlipTileError::ImageLoad {
        path: path_buf,
        source: e,
    })?;
    let rgb = img.to_rgb8();
    let (width, height) = (rgb.width() as usize, rgb.height() as usize);
    PixelBuffer::from_raw(width, height, rgb.into_raw())
}

/// Write a buffer as an RGB PNG without leaving partial output behind
///
/// The image is encoded into a sibling scratch file which replaces
/// `output_path` only once encoding succeeded.
///
/// # Errors
///
/// Returns an error if:
/// - The buffer is empty
/// - The parent directory cannot be created
/// - Encoding fails or the scratch file cannot be moved into place
pub fn save_rgb_png<P: AsRef<Path>>(buffer: &PixelBuffer, output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();
    if buffer.width() == 0 || buffer.height() == 0 {
        return Err(FlipTileError::InvalidSourceData {
            reason: "Refusing to write an empty atlas".to_string(),
        });
    }

    let width = u32::try_from(buffer.width()).map_err(|e| invariant_violation("export", &e))?;
    let height = u32::try_from(buffer.height()).map_err(|e| invariant_violation("export", &e))?;
    let img = RgbImage::from_raw(width, height, buffer.to_raw_vec()).ok_or_else(|| {
        invariant_violation("export", &"pixel count does not match image size")
    })?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| FlipTileError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let scratch = scratch_path(output_path);
    if let Err(e) = img.save_with_format(&scratch, ImageFormat::Png) {
        let _ = std::fs::remove_file(&scratch);
        return Err(FlipTileError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        });
    }

    std::fs::rename(&scratch, output_path).map_err(|e| {
        let _ = std::fs::remove_file(&scratch);
        FlipTileError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "rename",
            source: e,
        }
    })
}

/// Scratch file used while encoding `output_path`
pub fn scratch_path(output_path: &Path) -> PathBuf {
    output_path.with_extension(TEMP_EXTENSION)
}
