//！┌─────────────────────────────────────────────────────────────────────────┐
//！│                           主循环 (app.rs)                                │
//！│                                                                         │
//！│    ┌─────────┐     ┌─────────┐     ┌──────────┐     ┌─────────┐         │
//！│    │ 用户按键 │ ─▶ │  Event  │ ─▶ │ Message  │ ──▶ │ Update  │         │
//！│    └─────────┘     │  层     │     │   层     │     │   层    │          │
//！│         ▲          └─────────┘     └──────────┘     └────┬────┘         │
//！│         │                                                │              │
//！│         │          ┌─────────┐     ┌──────────┐          ▼              │
//！│         │          │  Util   │     │  Model   │ ◀───────────           │
//！│         │          │  层     │     │   层     │                         │
//！│         │          └─────────┘     └────┬─────┘                         │
//！│         │                               │                               │
//！│         │          ┌─────────┐          ▼                               │
//！│         └──────────│  View   │ ◀── 读取状态                             │
//！│           屏幕输出  │   层    │                                          │
//！│                    └─────────┘                                          │
//！└─────────────────────────────────────────────────────────────────────────┘

//!
//! src/util/mod.rs
//! Util 层：基础设施
//!
//! 与业务逻辑无关，负责终端的初始化和恢复，以及日志文件。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // tracing 订阅者 + 按天滚动的日志文件
//!         mod terminal;       // 终端初始化和恢复
//!
//!
//!     终端：
//!         init_terminal()     启用原始模式，进入备用屏幕，安装 panic hook
//!         restore_terminal()  关闭原始模式，离开备用屏幕，显示光标
//!
//!         · Raw Mode（原始模式）
//!             - 关闭行缓冲和回显，每个按键立即生效
//!             - Ctrl+C 不再产生信号，由 Event 层当作按键处理
//!
//!         · Alternate Screen（备用屏幕）
//!             - 退出后恢复主屏幕内容，类似 vim、htop
//!
//!         无论主循环是否出错都必须恢复终端；panic 时由 hook 恢复。
//!
//!
//!     日志：
//!         init_logging(&config.logging, &dir)
//!
//!         终端被界面占用，所以日志只写文件。
//!         返回的 WorkerGuard 由 main 持有到退出。
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
