// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-aware data directory resolution.

use std::path::{Path, PathBuf};

/// Name of the scanner settings file inside the data directory.
pub const CONFIG_FILE: &str = "scanner.json";

/// Return the application data directory, creating it if needed.
///
/// On desktop this uses a conventional location. On mobile the host app
/// owns storage and passes paths in explicitly.
pub fn data_dir() -> PathBuf {
    let dir = dirs_fallback().join("galleta-scanner");
    std::fs::create_dir_all(&dir).ok();
    dir
}

/// Default location of the scanner settings file.
pub fn config_path() -> PathBuf {
    data_dir().join(CONFIG_FILE)
}

/// Sibling of `input` named `<stem>_bw.png`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "scan".into());
    input.with_file_name(format!("{stem}_bw.png"))
}

fn dirs_fallback() -> PathBuf {
    // Try XDG data dir, then fallback to home
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(xdg);
    }
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".local").join("share");
    }
    std::env::temp_dir()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_sits_next_to_input() {
        let out = default_output_path(Path::new("/tmp/docs/receipt.jpg"));
        assert_eq!(out, PathBuf::from("/tmp/docs/receipt_bw.png"));
    }

    #[test]
    fn settings_file_round_trips_in_a_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let config = galleta_core::ScannerConfig {
            share_chooser_title: "Send scan".into(),
            ..Default::default()
        };
        config.save(&path).unwrap();
        assert_eq!(galleta_core::ScannerConfig::load(&path).unwrap(), config);

        let output = default_output_path(&dir.path().join("page.jpeg"));
        assert_eq!(output, dir.path().join("page_bw.png"));
    }
}
