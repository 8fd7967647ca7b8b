//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦，负责所有的网络操作和持久化。
//! 规则管理和日志轮询由 proxy-warden-core 实现，这里只负责把它们接到
//! tokio 运行时和主循环上。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置文件（TOML）
//!         mod confirm_service;    // 基于通道的确认器
//!         mod core_service;       // 核心服务入口
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、核心服务（CoreService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/core_service.rs 中定义：
//!
//!         CoreService 持有 ApiClient、tokio 运行时句柄和结果通道的发送端。
//!
//!         提供：
//!             - list_controller(kind, renderer)   为一种资源创建 ListController
//!             - spawn_list(kind, task)            执行控制器的 *_task()
//!             - refresh_logs()                    立即拉取一次日志
//!             - start_polling()                   启动后台日志轮询
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、确认（ChannelConfirmer）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/confirm_service.rs 中定义：
//!
//!         实现 proxy-warden-core 的 Confirmer trait。
//!         任务需要确认时，发送 BackendMessage::Confirm(ConfirmRequest)，
//!         然后等待 oneshot 回答。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户按 Alt+d 删除
//!         ↓
//!     Update 层调用 controller.delete_task(idx)，交给 CoreService::spawn_list
//!         ↓
//!     任务在 tokio 上运行，ChannelConfirmer 发送 ConfirmRequest
//!         ↓
//!     主循环收到 BackendMessage::Confirm，弹出确认框
//!         ↓
//!     用户回答 → oneshot → 任务继续：DELETE + 重新加载
//!         ↓
//!     主循环收到 BackendMessage::List，controller.apply(outcome)
//!         ↓
//!     View 层重新渲染
//!

mod config_service;
mod confirm_service;
mod core_service;

pub use config_service::{
    AppConfig, ConfigError, ConfigService, LoggingConfig, TomlConfigService, BASE_URL_ENV,
};
pub use confirm_service::{ChannelConfirmer, ConfirmRequest};
pub use core_service::CoreService;
