//! 服务层
//!
//! - [`ListController`]：规则列表（CIDR / 域名 / 隐藏域名）的增删改查与启停
//! - [`LogPoller`]：访问日志定时拉取

mod list_controller;
mod log_poller;

pub use list_controller::{
    DialogError, DialogMode, ItemDialog, ListController, ListOutcome, MutationKind, Notice,
    NoticeAction,
};
pub use log_poller::{LogPoller, DEFAULT_POLL_INTERVAL};
