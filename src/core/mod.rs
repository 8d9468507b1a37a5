pub mod engine;
pub mod extractor;
pub mod pipeline;
pub mod report;
pub mod selector;
pub mod verifier;

pub use crate::domain::model::{
    FailureKind, LinkRecord, ReportRow, ScanReport, VerificationOutcome,
};
pub use crate::domain::ports::{AuditPipeline, ScanOptions};
pub use crate::utils::error::Result;
