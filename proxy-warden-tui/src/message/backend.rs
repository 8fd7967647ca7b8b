//! 后台任务消息
//!
//! 由 tokio 上的任务发出，经 mpsc 通道回到主循环。

use proxy_warden_core::services::ListOutcome;
use proxy_warden_core::types::{LogEntry, ResourceKind};
use proxy_warden_core::CoreResult;

use crate::backend::ConfirmRequest;

/// 后台消息
#[derive(Debug)]
pub enum BackendMessage {
    /// 规则列表任务完成
    List {
        kind: ResourceKind,
        outcome: ListOutcome,
    },
    /// 一轮日志拉取结果
    Logs(CoreResult<Vec<LogEntry>>),
    /// 任务在等待用户确认
    Confirm(ConfirmRequest),
}
