// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image module — decode captured pages into rasters and encode results.

pub mod raster;

pub use raster::{
    decode_raster, encode_png, open_raster, raster_from_rgba, raster_to_rgba, save_png,
};
