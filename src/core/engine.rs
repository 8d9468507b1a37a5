use crate::core::report;
use crate::domain::model::ScanReport;
use crate::domain::ports::AuditPipeline;
use crate::utils::error::Result;

/// Drives the stages in order: select files, extract links, verify links,
/// collect failures. Only stage-level failures (bad target, empty
/// selection) propagate; per-document and per-link problems have already
/// been folded into the stage outputs by the time they reach here.
pub struct AuditEngine<P: AuditPipeline> {
    pipeline: P,
}

impl<P: AuditPipeline> AuditEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<ScanReport> {
        let files = self.pipeline.select().await?;
        tracing::debug!("found {} file(s)", files.len());

        let links = self.pipeline.extract(files).await?;
        tracing::debug!("found {} link(s)", links.len());

        let outcomes = self.pipeline.verify(links).await?;
        let report = report::collect(outcomes);

        tracing::debug!("checked {} link(s)", report.total_links);
        tracing::debug!("found {} error(s)", report.failure_count());

        Ok(report)
    }
}
