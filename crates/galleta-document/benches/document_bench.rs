// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the black-and-white scan transform. Covers one
// image below the rayon cutoff and one phone-camera-sized page above it.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use galleta_core::types::{Argb, RasterImage};
use galleta_document::binarize;

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Dark text-like stripes on an uneven light background.
fn synthetic_page(width: u32, height: u32) -> RasterImage {
    RasterImage::from_fn(width, height, |x, y| {
        if y % 24 < 4 && x % 40 < 30 {
            Argb::opaque(35, 30, 40)
        } else {
            let shade = 200 + ((x + y) % 40) as u8;
            Argb::opaque(shade, shade - 5, shade - 12)
        }
    })
    .expect("synthetic page has positive area")
}

fn bench_binarize(c: &mut Criterion) {
    let small = synthetic_page(200, 200);
    c.bench_function("binarize (200x200)", |b| {
        b.iter(|| black_box(binarize(black_box(&small)).unwrap()));
    });

    let page = synthetic_page(1240, 1754);
    c.bench_function("binarize (1240x1754)", |b| {
        b.iter(|| black_box(binarize(black_box(&page)).unwrap()));
    });
}

criterion_group!(benches, bench_binarize);
criterion_main!(benches);
