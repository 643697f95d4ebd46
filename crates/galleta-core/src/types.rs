// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types: the raster buffer passed between capture, binarization,
// and export.

use crate::error::{Result, ScanError};

/// One 8-bit-per-channel pixel in alpha, red, green, blue order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Argb {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Argb {
    pub const BLACK: Self = Self::opaque(0, 0, 0);
    pub const WHITE: Self = Self::opaque(255, 255, 255);

    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// A fully opaque pixel.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { a: 255, r, g, b }
    }

    /// A fully opaque gray pixel with all color channels set to `value`.
    pub const fn gray(value: u8) -> Self {
        Self::opaque(value, value, value)
    }

    /// Unpack a `0xAARRGGBB` word.
    pub const fn from_u32(packed: u32) -> Self {
        Self {
            a: (packed >> 24) as u8,
            r: (packed >> 16) as u8,
            g: (packed >> 8) as u8,
            b: packed as u8,
        }
    }

    /// Pack into a `0xAARRGGBB` word.
    pub const fn to_u32(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

/// A dense row-major ARGB raster.
///
/// The buffer always holds exactly `width * height` pixels and both
/// dimensions are non-zero; every constructor enforces this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Vec<Argb>,
}

impl RasterImage {
    /// Wrap an existing pixel buffer.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Argb>) -> Result<Self> {
        let expected = pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(ScanError::InvalidInput(format!(
                "{width}x{height} raster needs {expected} pixels, got {}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A raster filled with a single pixel value.
    pub fn filled(width: u32, height: u32, pixel: Argb) -> Result<Self> {
        let count = pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![pixel; count],
        })
    }

    /// Build a raster by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Argb) -> Result<Self> {
        let count = pixel_count(width, height)?;
        let mut pixels = Vec::with_capacity(count);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of pixels, always `width * height`.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Always false for a constructed raster; kept for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[Argb] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<Argb> {
        self.pixels
    }

    /// Pixel at column `x`, row `y`, or `None` when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<Argb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }
}

fn pixel_count(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(ScanError::InvalidInput(format!(
            "raster must have a positive area, got {width}x{height}"
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| ScanError::InvalidInput(format!("{width}x{height} raster is too large")))
}
