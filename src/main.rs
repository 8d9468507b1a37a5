use clap::Parser;
use docx_linkcheck::core::report;
use docx_linkcheck::utils::{logger, validation::Validate};
use docx_linkcheck::{AuditEngine, AuditError, CliConfig, ScanPipeline};
use std::path::Path;

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting docx-linkcheck");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // The output file is claimed up front so an unwritable destination
    // aborts the run before any verification begins.
    if let Err(e) = report::prepare_output(Path::new(&config.output), config.force) {
        tracing::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let output = config.output.clone();

    let pipeline = match ScanPipeline::new(config) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            tracing::error!("Failed to build HTTP client: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let engine = AuditEngine::new(pipeline);

    // Ctrl-C drops the scan future, cancelling in-flight requests. The CSV
    // is only written after a completed scan, so no partial file is left.
    let scan_report = tokio::select! {
        result = engine.run() => match result {
            Ok(scan_report) => scan_report,
            Err(e) => {
                tracing::error!("Scan failed: {}", e);
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        _ = tokio::signal::ctrl_c() => {
            tracing::warn!("interrupted, cancelling in-flight checks");
            std::process::exit(130);
        }
    };

    let write_result = std::fs::File::create(&output)
        .map_err(AuditError::from)
        .and_then(|file| report::write_csv(&scan_report.rows, file));

    if let Err(e) = write_result {
        tracing::error!("Failed to write report: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("checked {} link(s)", scan_report.total_links);
    tracing::info!("found {} error(s)", scan_report.failure_count());
    tracing::info!("saved results to \"{}\"", output);
    println!(
        "Checked {} link(s), {} broken. Results saved to {}",
        scan_report.total_links,
        scan_report.failure_count(),
        output
    );
}
