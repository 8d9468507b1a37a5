use serde::Serialize;
use std::path::PathBuf;

/// One hyperlink found inside one document. The target is kept exactly as
/// stored in the relationship entry: not normalized, not deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    pub source: PathBuf,
    pub target: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The server answered with a 4xx/5xx status.
    HttpStatus,
    /// The exchange never completed: DNS failure, refused connection,
    /// timeout, TLS failure.
    Transport,
    /// Anything else. Targets are author-controlled free text, so the
    /// catch-all keeps a bad entry from taking down the scan.
    Unexpected,
}

/// Result of verifying one link, assigned exactly once per record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
    Success,
    Failure { kind: FailureKind, detail: String },
}

impl VerificationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, VerificationOutcome::Success)
    }
}

/// Externally visible projection of a failed link, one CSV row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub file: String,
    pub url: String,
    pub error: String,
}

/// Failure rows in verification order, plus the totals the orchestrator
/// logs at the end of a run.
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub rows: Vec<ReportRow>,
    pub total_links: usize,
}

impl ScanReport {
    pub fn failure_count(&self) -> usize {
        self.rows.len()
    }
}
