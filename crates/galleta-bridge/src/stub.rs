// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub bridge for desktop/CI builds where the native scanner, PDF writer,
// and share sheet are unavailable.
//
// With a source file configured, scanning behaves like a gallery import of
// that file, capped at the configured page limit. Everything else returns
// `PlatformUnavailable`.

use std::path::{Path, PathBuf};

use galleta_core::ScannerConfig;
use galleta_core::error::{Result, ScanError};
use galleta_core::types::RasterImage;
use tracing::{info, warn};

use crate::traits::*;

/// Bridge returned on non-mobile platforms.
#[derive(Debug, Default)]
pub struct StubBridge {
    source: Option<PathBuf>,
}

impl StubBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `path` as the single scanned page.
    pub fn with_source(path: impl Into<PathBuf>) -> Self {
        Self {
            source: Some(path.into()),
        }
    }
}

impl PlatformBridge for StubBridge {
    fn platform_name(&self) -> &str {
        "Desktop (stub)"
    }
}

impl DocumentScanner for StubBridge {
    fn scan_document(&self, config: &ScannerConfig) -> Result<ScanOutcome> {
        let Some(path) = &self.source else {
            warn!("DocumentScanner::scan_document called on stub bridge without a source");
            return Err(ScanError::PlatformUnavailable);
        };
        if !config.gallery_import_allowed {
            warn!("gallery import disabled; stub bridge has no camera");
            return Err(ScanError::PlatformUnavailable);
        }
        let bytes = std::fs::read(path).map_err(|err| {
            ScanError::Capture(format!("failed to read {}: {}", path.display(), err))
        })?;
        info!(
            path = %path.display(),
            bytes = bytes.len(),
            "page imported from file"
        );

        let mut pages = vec![bytes];
        pages.truncate(config.page_limit as usize);
        if pages.is_empty() {
            warn!(page_limit = config.page_limit, "page limit allows no pages");
        }
        Ok(ScanOutcome::Pages(pages))
    }
}

impl PdfEncoder for StubBridge {
    fn encode_pdf(&self, _image: &RasterImage, _file_prefix: &str) -> Result<PathBuf> {
        warn!("PdfEncoder::encode_pdf called on stub bridge");
        Err(ScanError::PlatformUnavailable)
    }
}

impl NativeShare for StubBridge {
    fn share_file(&self, _path: &Path, _mime_type: &str, _chooser_title: &str) -> Result<()> {
        warn!("NativeShare::share_file called on stub bridge");
        Err(ScanError::PlatformUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn without_source_scanning_is_unavailable() {
        let bridge = StubBridge::new();
        assert!(matches!(
            bridge.scan_document(&ScannerConfig::default()),
            Err(ScanError::PlatformUnavailable)
        ));
    }

    #[test]
    fn source_file_is_returned_as_one_page() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.jpg");
        std::fs::write(&path, b"jpeg bytes").unwrap();

        let outcome = StubBridge::with_source(&path)
            .scan_document(&ScannerConfig::default())
            .unwrap();
        assert_eq!(outcome, ScanOutcome::Pages(vec![b"jpeg bytes".to_vec()]));
    }

    #[test]
    fn unreadable_source_is_a_capture_error() {
        let dir = tempfile::tempdir().unwrap();
        let bridge = StubBridge::with_source(dir.path().join("missing.jpg"));
        assert!(matches!(
            bridge.scan_document(&ScannerConfig::default()),
            Err(ScanError::Capture(_))
        ));
    }

    #[test]
    fn gallery_import_can_be_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.jpg");
        std::fs::write(&path, b"x").unwrap();
        let config = ScannerConfig {
            gallery_import_allowed: false,
            ..ScannerConfig::default()
        };
        assert!(matches!(
            StubBridge::with_source(&path).scan_document(&config),
            Err(ScanError::PlatformUnavailable)
        ));
    }

    #[test]
    fn page_limit_caps_returned_pages() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.png");
        std::fs::write(&path, b"png bytes").unwrap();
        let bridge = StubBridge::with_source(&path);

        let none = ScannerConfig {
            page_limit: 0,
            ..ScannerConfig::default()
        };
        assert_eq!(
            bridge.scan_document(&none).unwrap(),
            ScanOutcome::Pages(Vec::new())
        );

        let many = ScannerConfig {
            page_limit: 5,
            ..ScannerConfig::default()
        };
        assert_eq!(
            bridge.scan_document(&many).unwrap(),
            ScanOutcome::Pages(vec![b"png bytes".to_vec()])
        );
    }

    #[test]
    fn pdf_and_share_are_unavailable() {
        let bridge = StubBridge::new();
        let image = RasterImage::filled(1, 1, galleta_core::Argb::WHITE).unwrap();
        assert!(matches!(
            bridge.encode_pdf(&image, "scan_"),
            Err(ScanError::PlatformUnavailable)
        ));
        assert!(matches!(
            bridge.share_file(Path::new("scan.pdf"), "application/pdf", "Share PDF"),
            Err(ScanError::PlatformUnavailable)
        ));
        assert_eq!(bridge.platform_name(), "Desktop (stub)");
    }
}
