//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ ModalMsg  │               ▼               │   │
//！│  │   ┌─────────┐          │ ContentMsg│          ┌──────────┐         │   │
//！│  │   │  View   │          │ NavMsg    │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          │ BackendMsg│   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀────────└─────▲─────┘───┘      └────┬─────┘         │   │
//！│  │        │                     │ mpsc                │ spawn         │   │
//！│  └────────│─────────────────────│─────────────────────│───────────────┘   │
//！│           ▼                     │                     ▼                   │
//！│      ┌─────────┐                │               ┌──────────┐              │
//！│      │  终端   │                └────────────── │ Backend  │              │
//！│      │ (Util)  │                                │ (tokio)  │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │ proxy-warden-core │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘

//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event / Backend —→ Update 之间的桥梁。
//! 所有的用户操作和后台结果都通过 Message 来表达，
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息 AppMessage
//!         mod backend;        // 后台任务结果
//!         mod content;        // 内容面板子消息
//!         mod modal;          // 弹窗子消息
//!         mod navigation;     // 导航栏子消息
//!
//!
//!     消息来源有两个：
//!         · src/event/handler.rs 把按键翻译成 AppMessage
//!         · tokio 上的后台任务把结果包装成 BackendMessage，经 mpsc 通道送回，
//!           主循环（src/app.rs）用 AppMessage::Backend(..) 交给 update
//!
//!     BackendMessage 有三种：
//!         List { kind, outcome }  规则列表任务完成（加载 / 增删改 / 启停）
//!         Logs(result)            一轮日志拉取结果
//!         Confirm(request)        任务在等待用户确认，需要弹出确认框
//!
//! 最后，所有消息都进入 Update 层处理。
//!     —— 去往 src/update/mod.rs 吧
//!

mod app;
mod backend;
mod content;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use backend::BackendMessage;
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
