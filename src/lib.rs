pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::{engine::AuditEngine, pipeline::ScanPipeline};
pub use domain::model::{FailureKind, LinkRecord, ReportRow, ScanReport, VerificationOutcome};
pub use utils::error::{AuditError, Result};
