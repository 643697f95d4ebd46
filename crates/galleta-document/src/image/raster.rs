// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Raster adapters — decode captured pages into software `RasterImage`
// buffers and encode processed rasters back out, using the `image` crate.

use std::path::Path;

use galleta_core::error::{Result, ScanError};
use galleta_core::types::{Argb, RasterImage};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use tracing::{debug, info, instrument};

/// Decode encoded page bytes (JPEG, PNG, TIFF, ...) into an ARGB raster.
#[instrument(skip(data), fields(data_len = data.len()))]
pub fn decode_raster(data: &[u8]) -> Result<RasterImage> {
    let image = image::load_from_memory(data).map_err(|err| {
        ScanError::ImageError(format!("failed to decode scanned page: {}", err))
    })?;
    debug!(
        width = image.width(),
        height = image.height(),
        "Page decoded from bytes"
    );
    raster_from_dynamic(&image)
}

/// Read and decode an image file.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn open_raster(path: impl AsRef<Path>) -> Result<RasterImage> {
    let image = image::open(path.as_ref()).map_err(|err| {
        ScanError::ImageError(format!(
            "failed to open {}: {}",
            path.as_ref().display(),
            err
        ))
    })?;
    info!(width = image.width(), height = image.height(), "Image loaded");
    raster_from_dynamic(&image)
}

/// Copy an RGBA buffer into a raster.
pub fn raster_from_rgba(rgba: &RgbaImage) -> Result<RasterImage> {
    let pixels = rgba
        .pixels()
        .map(|&Rgba([r, g, b, a])| Argb::new(a, r, g, b))
        .collect();
    RasterImage::from_pixels(rgba.width(), rgba.height(), pixels)
}

/// Copy a raster into an RGBA buffer.
///
/// Fails with [`ScanError::ImageError`] if the buffer does not cover
/// `width * height` pixels.
pub fn raster_to_rgba(raster: &RasterImage) -> Result<RgbaImage> {
    let (width, height) = raster.dimensions();
    let mut buffer = Vec::with_capacity(raster.len() * 4);
    for px in raster.pixels() {
        buffer.extend_from_slice(&[px.r, px.g, px.b, px.a]);
    }
    RgbaImage::from_raw(width, height, buffer).ok_or_else(|| {
        ScanError::ImageError(format!(
            "RGBA buffer does not fit a {}x{} image",
            width, height
        ))
    })
}

/// Encode a raster as PNG bytes.
pub fn encode_png(raster: &RasterImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut buffer);
    DynamicImage::ImageRgba8(raster_to_rgba(raster)?)
        .write_to(&mut cursor, ImageFormat::Png)
        .map_err(|err| ScanError::ImageError(format!("PNG encoding failed: {}", err)))?;
    Ok(buffer)
}

/// Write a raster to `path` as PNG.
#[instrument(skip(raster), fields(path = %path.as_ref().display()))]
pub fn save_png(raster: &RasterImage, path: impl AsRef<Path>) -> Result<()> {
    let bytes = encode_png(raster)?;
    std::fs::write(path.as_ref(), &bytes)?;
    info!(bytes = bytes.len(), "Wrote PNG");
    Ok(())
}

fn raster_from_dynamic(image: &DynamicImage) -> Result<RasterImage> {
    raster_from_rgba(&image.to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    fn png_bytes(image: DynamicImage) -> Vec<u8> {
        let mut buffer = Vec::new();
        image
            .write_to(&mut std::io::Cursor::new(&mut buffer), ImageFormat::Png)
            .unwrap();
        buffer
    }

    #[test]
    fn decodes_channels_into_argb_order() {
        let rgba = RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 40]));
        let raster = decode_raster(&png_bytes(DynamicImage::ImageRgba8(rgba))).unwrap();
        assert_eq!(raster.dimensions(), (3, 2));
        assert!(
            raster
                .pixels()
                .iter()
                .all(|&px| px == Argb::new(40, 10, 20, 30))
        );
    }

    #[test]
    fn grayscale_pages_become_opaque_gray() {
        let gray = GrayImage::from_pixel(2, 2, Luma([77u8]));
        let raster = decode_raster(&png_bytes(DynamicImage::ImageLuma8(gray))).unwrap();
        assert!(raster.pixels().iter().all(|&px| px == Argb::gray(77)));
    }

    #[test]
    fn garbage_bytes_are_an_image_error() {
        assert!(matches!(
            decode_raster(b"definitely not an image"),
            Err(ScanError::ImageError(_))
        ));
    }

    #[test]
    fn png_output_preserves_pixels() {
        let raster = RasterImage::from_fn(4, 4, |x, y| {
            if (x + y) % 2 == 0 {
                Argb::BLACK
            } else {
                Argb::WHITE
            }
        })
        .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("checker.png");
        save_png(&raster, &path).unwrap();
        assert_eq!(open_raster(&path).unwrap(), raster);
    }

    #[test]
    fn rgba_copy_keeps_channel_order_and_layout() {
        let raster = RasterImage::from_fn(3, 2, |x, y| {
            Argb::new(200, (x * 10) as u8, (y * 10) as u8, 7)
        })
        .unwrap();
        let rgba = raster_to_rgba(&raster).unwrap();
        assert_eq!(rgba.dimensions(), (3, 2));
        assert_eq!(rgba.get_pixel(2, 1), &Rgba([20, 10, 7, 200]));
        assert_eq!(raster_from_rgba(&rgba).unwrap(), raster);
    }

    #[test]
    fn missing_file_is_an_image_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            open_raster(dir.path().join("absent.jpg")),
            Err(ScanError::ImageError(_))
        ));
    }
}
