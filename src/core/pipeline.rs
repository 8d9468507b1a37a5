use crate::core::{extractor, selector, verifier};
use crate::domain::model::{LinkRecord, VerificationOutcome};
use crate::domain::ports::{AuditPipeline, ScanOptions};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::path::{Path, PathBuf};

/// Default scan pipeline: filesystem selection, OPC extraction, HTTP
/// verification. One client instance serves every request so connections
/// are pooled and the timeout and User-Agent are set in a single place.
pub struct ScanPipeline<C: ScanOptions> {
    config: C,
    client: Client,
}

impl<C: ScanOptions> ScanPipeline<C> {
    pub fn new(config: C) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent().to_string())
            .build()?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl<C: ScanOptions> AuditPipeline for ScanPipeline<C> {
    async fn select(&self) -> Result<Vec<PathBuf>> {
        selector::select(
            Path::new(self.config.target()),
            self.config.include_suffixes(),
            self.config.exclude_prefixes(),
        )
    }

    async fn extract(&self, files: Vec<PathBuf>) -> Result<Vec<LinkRecord>> {
        let mut links = Vec::new();
        for file in &files {
            links.extend(extractor::extract(file));
        }
        Ok(links)
    }

    async fn verify(
        &self,
        links: Vec<LinkRecord>,
    ) -> Result<Vec<(LinkRecord, VerificationOutcome)>> {
        Ok(verifier::verify_all(&self.client, links, self.config.concurrent_requests()).await)
    }
}
