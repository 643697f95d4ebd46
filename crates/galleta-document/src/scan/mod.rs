// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scanning pipeline — luma conversion, histogram, Otsu threshold selection,
// and black/white classification.

pub mod binarize;
mod parallel;

pub use binarize::{Binarization, Histogram, Threshold, binarize, otsu_threshold};
