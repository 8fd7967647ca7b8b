//! 确认提示抽象
//!
//! 删除和启用/停用之前必须得到用户确认。控制器只 await 一个是/否结果，
//! 由宿主决定怎么问（终端弹窗、测试中的固定回答等）。

use async_trait::async_trait;
use serde::Serialize;

use crate::types::ResourceKind;

/// 需要用户确认的操作
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ConfirmPrompt {
    /// 删除一条规则
    Delete {
        kind: ResourceKind,
        idx: i64,
        value: String,
    },
    /// 启用（`activate == true`）或停用一条规则
    Toggle {
        kind: ResourceKind,
        idx: i64,
        value: String,
        activate: bool,
    },
}

impl ConfirmPrompt {
    /// 规则主体（CIDR 或域名）
    pub fn value(&self) -> &str {
        match self {
            Self::Delete { value, .. } | Self::Toggle { value, .. } => value,
        }
    }
}

/// 确认能力
#[async_trait]
pub trait Confirmer: Send + Sync {
    /// 返回 `true` 表示用户同意继续
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool;
}
