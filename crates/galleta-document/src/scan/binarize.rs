// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Black-and-white scan transform — luma conversion, 256-bucket histogram,
// global Otsu threshold, and step-function classification.

use galleta_core::error::{Result, ScanError};
use galleta_core::types::{Argb, RasterImage};
use tracing::{debug, info, instrument};

use super::parallel::{PARALLEL_THRESHOLD, fold_reduce, map_collect};

/// Number of gray levels in an 8-bit histogram.
pub const LEVELS: usize = 256;

/// Threshold used when no level yields a defined between-class variance,
/// i.e. when every pixel shares one gray level.
pub const DEFAULT_THRESHOLD: Threshold = Threshold(128);

/// Perceptual gray level of a pixel: `round(0.299 R + 0.587 G + 0.114 B)`.
///
/// Alpha is ignored.
pub fn gray_level(pixel: Argb) -> u8 {
    let luma = 0.299 * pixel.r as f64 + 0.587 * pixel.g as f64 + 0.114 * pixel.b as f64;
    luma.round().clamp(0.0, 255.0) as u8
}

/// Pixel counts per gray level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    buckets: [u64; LEVELS],
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new()
    }
}

impl Histogram {
    /// An empty histogram.
    pub fn new() -> Self {
        Self {
            buckets: [0; LEVELS],
        }
    }

    /// Count every level in `levels`.
    pub fn from_levels(levels: &[u8]) -> Self {
        Self::collect(levels, PARALLEL_THRESHOLD)
    }

    fn collect(levels: &[u8], cutoff: usize) -> Self {
        fold_reduce(
            levels,
            cutoff,
            Self::new,
            |mut hist, chunk| {
                for &level in chunk {
                    hist.add(level);
                }
                hist
            },
            Self::merge,
        )
    }

    /// Record one pixel at `level`.
    pub fn add(&mut self, level: u8) {
        self.buckets[level as usize] += 1;
    }

    /// Combine the counts of two histograms.
    pub fn merge(mut self, other: Self) -> Self {
        for (mine, theirs) in self.buckets.iter_mut().zip(other.buckets.iter()) {
            *mine += theirs;
        }
        self
    }

    pub fn count(&self, level: u8) -> u64 {
        self.buckets[level as usize]
    }

    /// Total number of recorded pixels.
    pub fn total(&self) -> u64 {
        self.buckets.iter().sum()
    }

    pub fn buckets(&self) -> &[u64; LEVELS] {
        &self.buckets
    }

    /// Σ level × count over all buckets.
    fn moment(&self) -> f64 {
        self.buckets
            .iter()
            .enumerate()
            .map(|(level, &count)| level as f64 * count as f64)
            .sum()
    }
}

/// A global gray-level cutoff. Levels above it are white, the rest black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Threshold(pub u8);

impl Threshold {
    pub fn level(self) -> u8 {
        self.0
    }

    /// Classify a gray level. Equal to the threshold counts as black.
    pub fn classify(self, gray: u8) -> Argb {
        if gray > self.0 {
            Argb::WHITE
        } else {
            Argb::BLACK
        }
    }
}

/// Select the level maximizing between-class variance (Otsu's method).
///
/// The first level reaching the maximum wins. Levels with an empty
/// background class are skipped and the scan stops once the foreground class
/// is empty. An empty histogram is rejected.
pub fn otsu_threshold(histogram: &Histogram) -> Result<Threshold> {
    let total = histogram.total();
    if total == 0 {
        return Err(ScanError::InvalidInput(
            "cannot compute a threshold for an empty histogram".into(),
        ));
    }
    let total = total as f64;
    let sum = histogram.moment();

    let mut sum_b = 0.0f64;
    let mut weight_b = 0.0f64;
    let mut max_variance = -1.0f64;
    let mut threshold = DEFAULT_THRESHOLD;

    for (level, &count) in histogram.buckets.iter().enumerate() {
        let count = count as f64;
        weight_b += count;
        if weight_b == 0.0 {
            continue;
        }
        let weight_f = total - weight_b;
        if weight_f == 0.0 {
            break;
        }

        sum_b += level as f64 * count;
        let mean_b = sum_b / weight_b;
        let mean_f = (sum - sum_b) / weight_f;
        let variance = weight_b * weight_f * (mean_b - mean_f) * (mean_b - mean_f);

        if variance > max_variance {
            max_variance = variance;
            threshold = Threshold(level as u8);
        }
    }

    Ok(threshold)
}

/// Output of [`binarize`]: the black/white raster and the cutoff that made it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binarization {
    pub image: RasterImage,
    pub threshold: Threshold,
}

/// Convert a color raster into an opaque black/white raster of the same size.
///
/// Two passes over the pixels: gray levels plus histogram, then
/// classification against the Otsu threshold. The input is not modified.
#[instrument(skip(image), fields(width = image.width(), height = image.height()))]
pub fn binarize(image: &RasterImage) -> Result<Binarization> {
    binarize_with_cutoff(image, PARALLEL_THRESHOLD)
}

/// [`binarize`] without the threshold.
pub fn to_black_and_white(image: &RasterImage) -> Result<RasterImage> {
    binarize(image).map(|result| result.image)
}

fn binarize_with_cutoff(image: &RasterImage, cutoff: usize) -> Result<Binarization> {
    if image.is_empty() {
        return Err(ScanError::InvalidInput(
            "cannot binarize a zero-pixel image".into(),
        ));
    }

    let grays = map_collect(image.pixels(), cutoff, |&px| gray_level(px));
    let histogram = Histogram::collect(&grays, cutoff);
    let threshold = otsu_threshold(&histogram)?;
    debug!(threshold = threshold.level(), "Otsu threshold computed");

    let pixels = map_collect(&grays, cutoff, |&gray| threshold.classify(gray));
    let output = RasterImage::from_pixels(image.width(), image.height(), pixels)?;

    info!(
        threshold = threshold.level(),
        pixels = output.len(),
        "Binarization complete"
    );
    Ok(Binarization {
        image: output,
        threshold,
    })
}

// -- Tests --------------------------------------------------------------------
