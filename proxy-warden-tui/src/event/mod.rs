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
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ 异步调用          │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │proxy-warden-core  │           │
//！│                                           │                   │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘


//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event , poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用，最长阻塞 timeout
//!
//!         · handle_event    事件分发
//!
//!             当接收到键盘事件时，按以下顺序判断：
//!                 - 有弹窗打开时，调用 handle_modal_keys 处理
//!                 - 正在输入日志过滤文本时，调用 handle_filter_input_keys 处理
//!                   （此时 q 等字母是输入内容，不是快捷键）
//!                 - 全局快捷键，就地处理
//!                 - 焦点位于导航面板，调用 handle_navigation_keys 处理
//!                 - 焦点位于内容面板，按页面调用 handle_rules_keys / handle_logs_keys
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 快捷键
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     全局：
//!         q / Ctrl+C      退出
//!         Alt+h / ?       帮助
//!         Alt+r           重新加载当前页面
//!         Alt+l           切换语言
//!         Alt+s           切换主题
//!         Tab             切换面板
//!
//!     表格（规则页 / 日志页）：
//!         ↑↓ / jk         移动光标
//!         Home / End      第一行 / 最后一行
//!         1..5 / 1..4     按列排序，再按一次反向
//!
//!     规则页：
//!         Alt+a           添加
//!         Enter / Alt+e   编辑
//!         Alt+d           删除（需确认）
//!         Alt+t           启用 / 停用（需确认）
//!
//!     日志页：
//!         Enter           查看决策原因
//!         /               全文过滤（实时生效，Enter / Esc 结束输入）
//!         Alt+f           只看选中行的客户端 IP
//!         Alt+c           清除过滤
//!
//!     弹窗：
//!         Esc             关闭（确认框关闭等同于“否”）
//!         Tab / ↑↓        切换字段
//!         ← → / 空格      切换 allow / deny，或确认框的“是 / 否”
//!         Enter           提交 / 回答
//!
//!
//!     handler.rs 只负责“翻译”：返回一个 AppMessage，不修改任何状态。
//!     在 src/app.rs 中，有：
//!         update::update(app , msg);
//!     —— 去往 src/message/mod.rs 吧
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
