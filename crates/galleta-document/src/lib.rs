// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// galleta-document — Document processing for Galleta Scanner.
//
// Provides the black-and-white scan transform (luma conversion, histogram,
// Otsu threshold) and adapters between `RasterImage` and the `image` crate.

pub mod image;
pub mod scan;

// Re-export the primary entry points so callers can use `galleta_document::binarize` etc.
pub use crate::image::raster::{decode_raster, encode_png, open_raster, save_png};
pub use scan::binarize::{Binarization, Histogram, Threshold, binarize, to_black_and_white};
