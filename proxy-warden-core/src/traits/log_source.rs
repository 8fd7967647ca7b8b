//! Decision log source abstract Trait

use async_trait::async_trait;
use proxy_warden_api::LogClient;

use crate::error::CoreResult;
use crate::types::LogEntry;

/// Source of the recent decision-log window
#[async_trait]
pub trait LogSource: Send + Sync {
    /// Fetch the full recent window (newest first)
    async fn fetch_logs(&self) -> CoreResult<Vec<LogEntry>>;
}

#[async_trait]
impl LogSource for LogClient {
    async fn fetch_logs(&self) -> CoreResult<Vec<LogEntry>> {
        Ok(self.fetch().await?)
    }
}
