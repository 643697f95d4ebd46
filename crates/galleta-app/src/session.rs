// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scan session — the state behind the scan screen.
//
// Owns the captured black/white page, the status line, error details, and
// the cached PDF. Capture, PDF export, and sharing are injected through the
// bridge traits so the same flow runs against the native bridge, the desktop
// stub, or a test double.

use std::path::{Path, PathBuf};

use galleta_bridge::{DocumentScanner, NativeShare, PdfEncoder, ScanOutcome};
use galleta_core::ScannerConfig;
use galleta_core::error::ScanError;
use galleta_core::human_errors::{HumanError, StatusMessage, humanize_error};
use galleta_core::types::RasterImage;
use galleta_document::decode_raster;
use galleta_document::scan::binarize::{Threshold, binarize};
use tracing::{error, info, instrument, warn};

/// State for one scan screen.
#[derive(Debug, Clone)]
pub struct ScanSession {
    config: ScannerConfig,
    /// Binarized page currently on screen.
    captured_image: Option<RasterImage>,
    /// Threshold chosen for `captured_image`.
    threshold: Option<Threshold>,
    /// Short status line for the user.
    status_message: Option<String>,
    /// Full error report behind the last failure.
    error_details: Option<String>,
    /// PDF exported from `captured_image`, reused across share attempts.
    pdf_file: Option<PathBuf>,
}

impl ScanSession {
    pub fn new(config: ScannerConfig) -> Self {
        Self {
            config,
            captured_image: None,
            threshold: None,
            status_message: None,
            error_details: None,
            pdf_file: None,
        }
    }

    pub fn captured_image(&self) -> Option<&RasterImage> {
        self.captured_image.as_ref()
    }

    pub fn threshold(&self) -> Option<Threshold> {
        self.threshold
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn error_details(&self) -> Option<&str> {
        self.error_details.as_deref()
    }

    pub fn pdf_file(&self) -> Option<&Path> {
        self.pdf_file.as_deref()
    }

    /// Sharing needs a captured page.
    pub fn can_share(&self) -> bool {
        self.captured_image.is_some()
    }

    /// Text for the status area: the last message, or a prompt when nothing
    /// has been captured yet.
    pub fn status_line(&self) -> Option<String> {
        match (&self.status_message, &self.captured_image) {
            (Some(message), _) => Some(message.clone()),
            (None, None) => Some(StatusMessage::NoScanYet.text().to_string()),
            (None, Some(_)) => None,
        }
    }

    // -- Capture --------------------------------------------------------------

    /// Run the platform scanner and binarize the first returned page.
    #[instrument(skip_all)]
    pub fn start_scan<S>(&mut self, scanner: &S)
    where
        S: DocumentScanner + ?Sized,
    {
        let outcome = match scanner.scan_document(&self.config) {
            Ok(outcome) => outcome,
            Err(err) => {
                self.report_error(&err);
                return;
            }
        };

        let page = match outcome {
            ScanOutcome::Cancelled => {
                info!("scan cancelled by user");
                self.set_status(StatusMessage::ScanCancelled);
                return;
            }
            ScanOutcome::Pages(pages) => match pages.into_iter().next() {
                Some(page) => page,
                None => {
                    warn!("scanner returned no pages");
                    self.set_status(StatusMessage::NoScannedPages);
                    return;
                }
            },
        };

        let raster = match decode_raster(&page) {
            Ok(raster) => raster,
            Err(err) => {
                warn!(error = %err, "scanned page could not be decoded");
                self.set_status(StatusMessage::UnableToLoadScannedImage);
                return;
            }
        };

        match binarize(&raster) {
            Ok(result) => {
                info!(
                    width = result.image.width(),
                    height = result.image.height(),
                    threshold = result.threshold.level(),
                    "page captured"
                );
                self.captured_image = Some(result.image);
                self.threshold = Some(result.threshold);
                self.status_message = None;
                self.error_details = None;
                self.pdf_file = None;
            }
            Err(err) => self.report_error(&err),
        }
    }

    // -- Share ----------------------------------------------------------------

    /// Export the captured page as PDF (once) and open the share sheet.
    #[instrument(skip_all)]
    pub fn share_pdf<B>(&mut self, bridge: &B)
    where
        B: PdfEncoder + NativeShare + ?Sized,
    {
        let Some(image) = &self.captured_image else {
            self.set_status(StatusMessage::NoScanYet);
            return;
        };

        if self.pdf_file.is_none() {
            match bridge.encode_pdf(image, &self.config.pdf_file_prefix) {
                Ok(path) => {
                    info!(path = %path.display(), "PDF exported");
                    self.pdf_file = Some(path);
                }
                Err(err) => {
                    warn!(error = %err, "PDF export failed");
                    self.error_details = Some(details_report(&err, &humanize_error(&err)));
                    self.set_status(StatusMessage::PdfCreateFailed);
                    return;
                }
            }
        }

        let Some(path) = self.pdf_file.clone() else {
            self.set_status(StatusMessage::PdfCreateFailed);
            return;
        };

        match bridge.share_file(
            &path,
            &self.config.share_mime_type,
            &self.config.share_chooser_title,
        ) {
            Ok(()) => {
                info!(path = %path.display(), "share sheet opened");
                self.status_message = None;
            }
            Err(err) => self.report_error(&err),
        }
    }

    // -- Helpers --------------------------------------------------------------

    fn set_status(&mut self, message: StatusMessage) {
        self.status_message = Some(message.text().to_string());
    }

    fn report_error(&mut self, err: &ScanError) {
        let human = humanize_error(err);
        error!(
            error = %err,
            severity = ?human.severity,
            retriable = human.retriable,
            "scan session error"
        );
        self.error_details = Some(details_report(err, &human));
        self.status_message = Some(human.message);
    }
}

/// Error report kept behind the status line: the error, its debug form, the
/// suggestion, and whether retrying can help.
fn details_report(err: &ScanError, human: &HumanError) -> String {
    format!(
        "{err}\n{err:?}\n{}\n{:?}, retriable: {}",
        human.suggestion, human.severity, human.retriable
    )
}

// -- Tests --------------------------------------------------------------------
