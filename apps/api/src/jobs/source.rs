use async_trait::async_trait;

use crate::jobs::models::{JobPosting, JobQuery};

/// Where job postings come from. Implement this to plug in a live scraper
/// without touching the handlers.
///
/// Carried in `AppState` as `Arc<dyn JobSource>`.
#[async_trait]
pub trait JobSource: Send + Sync {
    async fn fetch(&self, query: &JobQuery) -> anyhow::Result<Vec<JobPosting>>;

    /// Short label for logs.
    fn name(&self) -> &'static str;
}
