//! Reading canvases from and writing them to image files.
//!
//! Neither function is called while a paragraph is being laid out or painted.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use image::{DynamicImage, RgbaImage, codecs::jpeg::JpegEncoder};

use crate::error::{Error, Result};

/// Quality used when no other is requested.
pub const DEFAULT_JPEG_QUALITY: u8 = 100;

/// Decodes the image at `path` into an RGBA canvas. The format is guessed
/// from the file contents.
pub fn load_image(path: impl AsRef<Path>) -> Result<RgbaImage> {
    let path = path.as_ref();
    let io_error = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };
    let reader = image::ImageReader::open(path)
        .map_err(io_error)?
        .with_guessed_format()
        .map_err(io_error)?;

    Ok(reader.decode()?.to_rgba8())
}

/// Encodes `canvas` as a JPEG at `path`. Alpha is dropped.
///
/// `quality` is clamped to `1..=100`.
pub fn save_jpeg(path: impl AsRef<Path>, canvas: &RgbaImage, quality: u8) -> Result<()> {
    let path = path.as_ref();
    let io_error = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = BufWriter::new(File::create(path).map_err(io_error)?);

    let rgb = DynamicImage::ImageRgba8(canvas.clone()).to_rgb8();
    JpegEncoder::new_with_quality(&mut writer, quality.clamp(1, 100)).encode_image(&rgb)?;
    writer.flush().map_err(io_error)?;

    log::debug!(
        "wrote {}x{} JPEG to {}",
        canvas.width(),
        canvas.height(),
        path.display()
    );
    Ok(())
}
