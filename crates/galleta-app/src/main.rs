// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Galleta Scanner — desktop entry point.
//
// Initialises logging and configuration, imports an image file through the
// stub bridge, runs the scan session, and writes the black/white page as PNG.

mod services;
mod session;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use galleta_core::ScannerConfig;
use galleta_document::save_png;

use services::data_dir;
use session::ScanSession;

/// Turn a document photo into a clean black-and-white scan.
#[derive(Debug, Parser)]
#[command(name = "galleta", version, about)]
struct Cli {
    /// Photo of the document (JPEG, PNG, TIFF, ...).
    input: PathBuf,

    /// Where to write the black/white PNG. Defaults to `<input>_bw.png`.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Scanner settings JSON. Defaults to the file in the data directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also try to export and share the page as PDF.
    #[arg(long)]
    share: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    tracing::info!("Galleta Scanner starting");

    let config_path = cli.config.clone().unwrap_or_else(data_dir::config_path);
    let config = match ScannerConfig::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(
                error = %e,
                path = %config_path.display(),
                "invalid config, using defaults"
            );
            ScannerConfig::default()
        }
    };

    let bridge = galleta_bridge::platform_bridge(Some(cli.input.clone()));
    tracing::info!(platform = bridge.platform_name(), "bridge ready");

    let mut session = ScanSession::new(config);
    session.start_scan(&*bridge);

    let Some(image) = session.captured_image() else {
        report(&session);
        return ExitCode::FAILURE;
    };

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| data_dir::default_output_path(&cli.input));
    if let Err(e) = save_png(image, &output) {
        tracing::error!(error = %e, "failed to write output");
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    println!(
        "{} -> {} (threshold {})",
        cli.input.display(),
        output.display(),
        session.threshold().map(|t| t.level()).unwrap_or_default()
    );

    if cli.share && session.can_share() {
        session.share_pdf(&*bridge);
        if session.status_message().is_some() {
            report(&session);
            return ExitCode::FAILURE;
        }
        if let Some(pdf) = session.pdf_file() {
            println!("shared {}", pdf.display());
        }
    }

    ExitCode::SUCCESS
}

fn report(session: &ScanSession) {
    if let Some(line) = session.status_line() {
        eprintln!("{line}");
    }
    if let Some(details) = session.error_details() {
        tracing::debug!(details, "last error");
    }
}
