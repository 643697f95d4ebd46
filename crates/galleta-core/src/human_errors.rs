// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable status and error messages shown on the scan screen.
//
// Technical errors are mapped to plain English with a suggestion. Fixed
// status lines (cancelled scan, empty result, ...) live in `StatusMessage`.

use std::fmt;

use crate::error::ScanError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Something flaky happened; trying again may work.
    Transient,
    /// The user must do something first (pick another image, grant access).
    ActionRequired,
    /// Retrying will not help on this device or with this input.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary.
    pub message: String,
    /// What the user should try.
    pub suggestion: String,
    pub retriable: bool,
    pub severity: Severity,
}

/// Fixed status lines for the outcomes of the capture and share flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMessage {
    ScanCancelled,
    NoScannedPages,
    UnableToLoadScannedImage,
    UnableToStartScanner,
    NoScanYet,
    PdfCreateFailed,
    UnableToStartShare,
    UnexpectedError,
}

impl StatusMessage {
    pub fn text(self) -> &'static str {
        match self {
            Self::ScanCancelled => "Scan cancelled.",
            Self::NoScannedPages => "No scanned pages were returned.",
            Self::UnableToLoadScannedImage => "Unable to load the scanned image.",
            Self::UnableToStartScanner => "Unable to start the scanner.",
            Self::NoScanYet => "No scan yet. Tap Scan to capture a document.",
            Self::PdfCreateFailed => "Could not create the PDF.",
            Self::UnableToStartShare => "Unable to open the share menu.",
            Self::UnexpectedError => "Something unexpected went wrong.",
        }
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Convert a `ScanError` into a `HumanError` for the status line.
pub fn humanize_error(err: &ScanError) -> HumanError {
    match err {
        ScanError::InvalidInput(_) => HumanError {
            message: "The scanned picture is empty.".into(),
            suggestion: "Scan the document again and make sure the page is in view.".into(),
            retriable: true,
            severity: Severity::ActionRequired,
        },

        ScanError::ImageError(_) => HumanError {
            message: "There's a problem with this image.".into(),
            suggestion: "The image may be damaged or in an unsupported format.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        ScanError::PdfError(_) => HumanError {
            message: StatusMessage::PdfCreateFailed.text().into(),
            suggestion: "Check that the device has free storage, then try sharing again.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        ScanError::Capture(detail) => HumanError {
            message: StatusMessage::UnableToStartScanner.text().into(),
            suggestion: format!("Close other camera apps and try again. ({detail})"),
            retriable: true,
            severity: Severity::Transient,
        },

        ScanError::Share(_) => HumanError {
            message: StatusMessage::UnableToStartShare.text().into(),
            suggestion: "Try again, or save the PDF and share it from another app.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        ScanError::Io(io_err) => match io_err.kind() {
            std::io::ErrorKind::NotFound => HumanError {
                message: "The file couldn't be found.".into(),
                suggestion: "It may have been moved or deleted. Try choosing it again.".into(),
                retriable: false,
                severity: Severity::ActionRequired,
            },
            std::io::ErrorKind::PermissionDenied => HumanError {
                message: "The app doesn't have permission to use that file.".into(),
                suggestion: "Check the file permissions and try again.".into(),
                retriable: false,
                severity: Severity::ActionRequired,
            },
            _ => HumanError {
                message: "There was a problem reading or writing a file.".into(),
                suggestion: "Try again. If this keeps happening, your storage may be full.".into(),
                retriable: true,
                severity: Severity::Transient,
            },
        },

        ScanError::Serialization(_) => HumanError {
            message: "The scanner settings could not be read.".into(),
            suggestion: "Delete the settings file to go back to the defaults.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        ScanError::Bridge(_) => HumanError {
            message: "A device-specific feature didn't work.".into(),
            suggestion: "Try restarting the app.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        ScanError::PlatformUnavailable => HumanError {
            message: "This feature isn't available on your device.".into(),
            suggestion: "Document scanning and sharing need the mobile app.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },
    }
}
