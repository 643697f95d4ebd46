// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scanner configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;

/// How much of the platform scanner UI is offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScannerMode {
    /// Capture only, no in-scanner editing.
    Base,
    /// Capture plus crop/rotate.
    BaseWithFilter,
    /// Full editing flow including cleanup tools.
    Full,
}

/// Encoded format the platform scanner hands back for each page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultFormat {
    Jpeg,
    Png,
}

/// Persistent scanner settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Allow importing a page from the photo gallery instead of the camera.
    pub gallery_import_allowed: bool,
    /// Maximum number of pages a scanner may return. Only the first page is
    /// processed.
    pub page_limit: u32,
    /// Scanner UI level. Read by native bridges only; the desktop stub has
    /// no scanner UI.
    pub scanner_mode: ScannerMode,
    /// Page encoding requested from native bridges. The stub hands back the
    /// source file as it is.
    pub result_format: ResultFormat,
    /// MIME type announced to the share mechanism.
    pub share_mime_type: String,
    /// Title of the platform share chooser.
    pub share_chooser_title: String,
    /// Prefix for exported PDF file names.
    pub pdf_file_prefix: String,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            gallery_import_allowed: true,
            page_limit: 1,
            scanner_mode: ScannerMode::Full,
            result_format: ResultFormat::Jpeg,
            share_mime_type: "application/pdf".into(),
            share_chooser_title: "Share PDF".into(),
            pdf_file_prefix: "scan_".into(),
        }
    }
}

impl ScannerConfig {
    /// Load settings from a JSON file. A missing file yields the defaults;
    /// a malformed one is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            warn!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&data)?;
        debug!(path = %path.display(), ?config, "config loaded");
        Ok(config)
    }

    /// Write settings as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_single_page_pdf_flow() {
        let config = ScannerConfig::default();
        assert_eq!(config.page_limit, 1);
        assert!(config.gallery_import_allowed);
        assert_eq!(config.scanner_mode, ScannerMode::Full);
        assert_eq!(config.result_format, ResultFormat::Jpeg);
        assert_eq!(config.share_mime_type, "application/pdf");
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: ScannerConfig =
            serde_json::from_str(r#"{ "share_chooser_title": "Send scan" }"#).unwrap();
        assert_eq!(config.share_chooser_title, "Send scan");
        assert_eq!(config.page_limit, 1);
        assert_eq!(config.pdf_file_prefix, "scan_");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ScannerConfig::load(dir.path().join("nope.json")).unwrap();
        assert_eq!(config, ScannerConfig::default());
    }

    #[test]
    fn save_then_load_preserves_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scanner.json");
        let config = ScannerConfig {
            gallery_import_allowed: false,
            scanner_mode: ScannerMode::Base,
            ..ScannerConfig::default()
        };
        config.save(&path).unwrap();
        assert_eq!(ScannerConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            ScannerConfig::load(&path),
            Err(crate::ScanError::Serialization(_))
        ));
    }
}
