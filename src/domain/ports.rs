use crate::domain::model::{LinkRecord, VerificationOutcome};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;

pub trait ScanOptions: Send + Sync {
    fn target(&self) -> &str;
    fn user_agent(&self) -> &str;
    fn timeout(&self) -> Duration;
    fn include_suffixes(&self) -> &[String];
    fn exclude_prefixes(&self) -> &[String];
    fn concurrent_requests(&self) -> usize;
}

#[async_trait]
pub trait AuditPipeline: Send + Sync {
    async fn select(&self) -> Result<Vec<PathBuf>>;
    async fn extract(&self, files: Vec<PathBuf>) -> Result<Vec<LinkRecord>>;
    async fn verify(
        &self,
        links: Vec<LinkRecord>,
    ) -> Result<Vec<(LinkRecord, VerificationOutcome)>>;
}
