use crate::core::{FetchReport, Pipeline, Source};
use crate::utils::error::Result;
use chrono::Utc;

pub struct DownloadEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> DownloadEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Downloads each source in order. The first failure aborts the run; files
    /// already written stay on disk and later sources are never requested.
    pub async fn run(&self, sources: &[Source]) -> Result<Vec<FetchReport>> {
        tracing::info!("Starting download of {} feed(s)", sources.len());

        let mut reports = Vec::with_capacity(sources.len());
        for source in sources {
            reports.push(self.run_one(source).await?);
        }

        Ok(reports)
    }

    pub async fn run_one(&self, source: &Source) -> Result<FetchReport> {
        let payload = self.pipeline.extract(source).await?;
        let fetched_at = Utc::now();

        let destination = self.pipeline.load(source, &payload).await?;
        tracing::info!(
            "Saved {} ({} bytes, HTTP {}) to {}",
            source.kind,
            payload.body.len(),
            payload.status,
            destination
        );

        Ok(FetchReport {
            kind: source.kind,
            url: source.url.clone(),
            destination,
            status: payload.status,
            content_type: payload.content_type.clone(),
            bytes: payload.body.len(),
            fetched_at,
        })
    }
}
