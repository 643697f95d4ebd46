// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Size-gated dispatch between rayon and plain iteration. Both paths produce
// identical results; small images skip the thread pool entirely.

use rayon::prelude::*;

/// Pixel count at which the per-pixel passes switch to rayon.
pub(crate) const PARALLEL_THRESHOLD: usize = 64 * 1024;

/// Elements per work item in fold/reduce passes.
const CHUNK_LEN: usize = 4096;

/// Map every element, in parallel once `data.len() >= cutoff`.
pub(crate) fn map_collect<T, U, F>(data: &[T], cutoff: usize, f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    if data.len() >= cutoff {
        data.par_iter().map(f).collect()
    } else {
        data.iter().map(f).collect()
    }
}

/// Fold chunks into accumulators and combine them, in parallel once
/// `data.len() >= cutoff`.
pub(crate) fn fold_reduce<T, A, I, F, R>(
    data: &[T],
    cutoff: usize,
    init: I,
    fold_fn: F,
    reduce_fn: R,
) -> A
where
    T: Sync,
    A: Send,
    I: Fn() -> A + Sync + Send,
    F: Fn(A, &[T]) -> A + Sync + Send,
    R: Fn(A, A) -> A + Sync + Send,
{
    if data.len() >= cutoff {
        data.par_chunks(CHUNK_LEN)
            .fold(&init, &fold_fn)
            .reduce(&init, &reduce_fn)
    } else {
        data.chunks(CHUNK_LEN).fold(init(), &fold_fn)
    }
}
