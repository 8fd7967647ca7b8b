//! Proxy Warden TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 服务端访问和配置 (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     TomlConfigService::load()   // 读取配置（文件损坏时直接退出）
//!     init_logging()              // 日志写入文件
//!     Runtime::new()              // 后台任务跑在 tokio 多线程运行时上
//!     model::App::new()           // 创建 APP 实例，开始加载和轮询
//!     init_terminal()
//!     app::run()                  // 运行 app.rs 主循环
//!     restore_terminal()          // 无论成功与否，都恢复终端
//!
//! }
//!
//!
//! 主循环本身是同步的：后台任务把结果发到通道，主循环每轮取出处理。

mod app;
mod backend;
mod event;
mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use anyhow::{Context, Result};
use proxy_warden_api::ApiClient;
use tokio::sync::mpsc;

use backend::{ConfigService, CoreService, TomlConfigService, BASE_URL_ENV};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. 配置
    // 文件损坏时不能回退到默认值，否则下次保存设置会覆盖用户的文件
    let config_service = Arc::new(TomlConfigService::from_env());
    let config = config_service.load()?;

    // 2. 日志（guard 存活到 main 结束）
    let _log_guard = init_logging(&config.logging, &config.log_directory())?;
    log::info!(
        "Proxy Warden TUI v{} starting, config: {}",
        env!("CARGO_PKG_VERSION"),
        config_service.path().display()
    );

    // 3. 运行时和结果通道
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("proxy-warden-worker")
        .build()
        .context("Failed to start the async runtime")?;
    let (tx, mut rx) = mpsc::unbounded_channel();

    // 4. 服务端
    let base_url = config.resolve_base_url(std::env::var(BASE_URL_ENV).ok());
    let client = ApiClient::new(&base_url)
        .with_context(|| format!("Invalid server address: {base_url}"))?;
    log::info!("Server: {}", client.base_url());

    // 5. 界面设置要在创建渲染器之前生效
    i18n::set_language(config.language());
    view::theme::set_theme(config.ui.theme);

    let core = CoreService::new(client, runtime.handle().clone(), tx, config.poll_interval());
    let mut app = model::App::new(core, config, config_service);
    let poller = app.start();

    // 6. 主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &mut rx);
    restore_terminal(&mut terminal)?;

    // 7. 停止后台任务
    poller.abort();
    drop(app);
    runtime.shutdown_background();
    log::info!("Proxy Warden TUI stopped");

    result
}
