// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Galleta Scanner.

use thiserror::Error;

/// Top-level error type for all scanner operations.
#[derive(Debug, Error)]
pub enum ScanError {
    // -- Core transform --
    #[error("invalid input: {0}")]
    InvalidInput(String),

    // -- Document errors --
    #[error("image processing failed: {0}")]
    ImageError(String),

    #[error("PDF export failed: {0}")]
    PdfError(String),

    // -- Collaborators --
    #[error("document capture failed: {0}")]
    Capture(String),

    #[error("sharing failed: {0}")]
    Share(String),

    #[error("platform bridge error: {0}")]
    Bridge(String),

    #[error("feature not available on this platform")]
    PlatformUnavailable,

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ScanError>;
