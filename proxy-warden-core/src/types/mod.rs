//! 类型定义
//!
//! 列表项、日志条目等线上数据类型直接复用 API 库的定义。

pub use proxy_warden_api::{
    Decision, ItemFields, ListItem, ListType, LogEntry, MutationReply, ResourceKind,
};

pub use crate::utils::datetime::Timestamp;
pub use crate::utils::validation::{FormField, ValidationIssue};
