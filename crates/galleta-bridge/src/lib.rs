// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! Galleta Scanner — platform capability bridge.
//!
//! The document scanner, PDF encoder, and share sheet are owned by the host
//! platform. This crate only defines the traits the scan session talks to
//! and the desktop stub used for non-mobile builds and CI.

pub mod stub;
pub mod traits;

pub use traits::{DocumentScanner, NativeShare, PdfEncoder, PlatformBridge, ScanOutcome};

/// Bridge for the current target.
///
/// Mobile hosts inject their own `PlatformBridge`; every other target gets
/// the stub, optionally fed with an image file standing in for the camera.
pub fn platform_bridge(source: Option<std::path::PathBuf>) -> Box<dyn PlatformBridge> {
    match source {
        Some(path) => Box::new(stub::StubBridge::with_source(path)),
        None => Box::new(stub::StubBridge::new()),
    }
}
