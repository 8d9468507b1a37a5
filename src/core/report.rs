use crate::domain::model::{FailureKind, LinkRecord, ReportRow, ScanReport, VerificationOutcome};
use crate::utils::error::{AuditError, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Projects failed verifications into report rows, preserving input
/// order. Successes contribute nothing but still count toward the total.
pub fn collect(outcomes: Vec<(LinkRecord, VerificationOutcome)>) -> ScanReport {
    let total_links = outcomes.len();

    let rows = outcomes
        .into_iter()
        .filter_map(|(record, outcome)| match outcome {
            VerificationOutcome::Success => None,
            VerificationOutcome::Failure { kind, detail } => Some(ReportRow {
                file: record.source.display().to_string(),
                url: record.target,
                error: format_error(kind, &detail),
            }),
        })
        .collect();

    ScanReport { rows, total_links }
}

fn format_error(kind: FailureKind, detail: &str) -> String {
    match kind {
        FailureKind::HttpStatus => format!("HTTPError: {detail} response code"),
        FailureKind::Transport => format!("URLError: {detail}"),
        FailureKind::Unexpected => format!("Unexpected error: {detail}"),
    }
}

/// Settles the output file's fate before any verification begins: an
/// existing file is refused without the overwrite flag, and an uncreatable
/// path (missing parent directory, no write permission) fails here rather
/// than after a full scan has burned every network request. The rows are
/// written only after the scan completes, so an interrupted run leaves at
/// most this empty file behind.
pub fn prepare_output(path: &Path, force: bool) -> Result<()> {
    if path.is_file() && !force {
        return Err(AuditError::OutputExists {
            path: path.to_path_buf(),
        });
    }

    File::create(path)?;
    Ok(())
}

/// Serializes rows as CSV. The header row is written unconditionally so a
/// clean scan still produces a well-formed report.
pub fn write_csv<W: Write>(rows: &[ReportRow], writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(["file", "url", "error"])?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;

    Ok(())
}
