// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for the capabilities around the scan
// transform: capture, PDF export, and sharing.

use std::path::{Path, PathBuf};

use galleta_core::ScannerConfig;
use galleta_core::error::Result;
use galleta_core::types::RasterImage;

/// What the platform document scanner handed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The user backed out of the scanner.
    Cancelled,
    /// Encoded page images in capture order. May be empty.
    Pages(Vec<Vec<u8>>),
}

/// Unified bridge that groups the native capabilities a scan session needs.
pub trait PlatformBridge: DocumentScanner + PdfEncoder + NativeShare {
    /// Human-readable platform name (e.g. "Android 14").
    fn platform_name(&self) -> &str;
}

/// Capture a document with the platform scanner.
pub trait DocumentScanner {
    /// Launch the scanner and wait for its result.
    fn scan_document(&self, config: &ScannerConfig) -> Result<ScanOutcome>;
}

/// Wrap a processed raster in a single-page PDF.
pub trait PdfEncoder {
    /// Write a PDF whose page matches the raster's pixel dimensions and
    /// return its location.
    fn encode_pdf(&self, image: &RasterImage, file_prefix: &str) -> Result<PathBuf>;
}

/// Share content via the OS share sheet.
pub trait NativeShare {
    /// Offer `path` to other apps. Returns once the chooser is shown.
    fn share_file(&self, path: &Path, mime_type: &str, chooser_title: &str) -> Result<()>;
}
