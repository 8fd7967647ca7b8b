//! 访问日志轮询
//!
//! 固定间隔拉取最近的日志窗口。首轮立即执行；某一轮失败不会中断轮询，
//! 下一轮照常进行。结果交给回调（通常转发给界面线程，再由
//! [`LogTable::apply_fetch`](crate::table::LogTable::apply_fetch) 应用）。

use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use futures::FutureExt;
use tokio::time::MissedTickBehavior;

use crate::error::CoreResult;
use crate::traits::LogSource;
use crate::types::LogEntry;

/// 默认轮询间隔
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// 日志轮询器
#[derive(Clone)]
pub struct LogPoller {
    source: Arc<dyn LogSource>,
    interval: Duration,
}

impl LogPoller {
    /// `interval` 为零时使用 [`DEFAULT_POLL_INTERVAL`]
    pub fn new(source: Arc<dyn LogSource>, interval: Duration) -> Self {
        let interval = if interval.is_zero() {
            DEFAULT_POLL_INTERVAL
        } else {
            interval
        };
        Self { source, interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// 单次拉取（用于手动刷新）
    pub fn fetch_task(&self) -> BoxFuture<'static, CoreResult<Vec<LogEntry>>> {
        let source = Arc::clone(&self.source);
        async move { source.fetch_logs().await }.boxed()
    }

    /// 持续轮询，直到回调返回 `ControlFlow::Break`
    ///
    /// 慢请求会推迟下一轮，而不是让多轮请求堆叠。
    pub async fn run<F>(&self, mut on_cycle: F)
    where
        F: FnMut(CoreResult<Vec<LogEntry>>) -> ControlFlow<()>,
    {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut cycle: u64 = 0;

        loop {
            ticker.tick().await;
            cycle += 1;

            let result = self.source.fetch_logs().await;
            match &result {
                Ok(entries) => log::debug!("Log poll #{cycle}: {} entries", entries.len()),
                Err(e) => log::warn!("Log poll #{cycle} failed, retrying next tick: {e}"),
            }

            if on_cycle(result).is_break() {
                log::debug!("Log poller stopped after {cycle} cycles");
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ApiError, CoreError};
    use crate::table::{LogBanner, LogTable};
    use crate::test_utils::{log_entry, MockLogSource};
    use crate::types::Decision;

    fn http_500() -> CoreError {
        CoreError::Api(ApiError::HttpStatus {
            resource: "logs".into(),
            status: 500,
            raw_message: None,
        })
    }

    #[tokio::test(start_paused = true)]
    async fn failed_cycle_does_not_stop_polling() {
        let source = MockLogSource::scripted(vec![
            Ok(vec![log_entry("10.0.0.5", Decision::Allow, "2024-01-05 10:00:00")]),
            Err(http_500()),
            Ok(vec![
                log_entry("10.0.0.5", Decision::Allow, "2024-01-05 10:00:00"),
                log_entry("10.0.0.6", Decision::Deny, "2024-01-05 10:00:05"),
            ]),
        ]);
        let poller = LogPoller::new(source.clone(), Duration::from_secs(5));
        let mut table = LogTable::default();
        let mut snapshots = Vec::new();

        poller
            .run(|result| {
                table.apply_fetch(result);
                snapshots.push((table.rows().len(), table.banner().cloned()));
                if snapshots.len() == 3 {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            })
            .await;

        assert_eq!(
            snapshots,
            vec![
                (1, None),
                (1, Some(LogBanner::FetchFailed { message: None })),
                (2, None),
            ]
        );
        assert_eq!(source.calls(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_at_configured_interval() {
        let source = MockLogSource::scripted(Vec::new());
        let poller = LogPoller::new(source, Duration::from_secs(5));
        let started = tokio::time::Instant::now();
        let mut ticks = Vec::new();

        poller
            .run(|_| {
                ticks.push(started.elapsed());
                if ticks.len() == 3 {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            })
            .await;

        assert_eq!(
            ticks,
            vec![
                Duration::ZERO,
                Duration::from_secs(5),
                Duration::from_secs(10)
            ]
        );
    }

    #[tokio::test]
    async fn empty_window_is_no_data() {
        let source = MockLogSource::scripted(vec![Ok(Vec::new())]);
        let poller = LogPoller::new(source, DEFAULT_POLL_INTERVAL);
        let mut table = LogTable::default();
        table.apply_fetch(poller.fetch_task().await);
        assert_eq!(table.banner(), Some(&LogBanner::NoData));
    }

    #[test]
    fn zero_interval_falls_back_to_default() {
        let poller = LogPoller::new(MockLogSource::scripted(Vec::new()), Duration::ZERO);
        assert_eq!(poller.interval(), DEFAULT_POLL_INTERVAL);
    }
}
