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
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod navigation;     // 导航栏与焦点（Navigation / Content）
//!         mod page;           // 页面路由
//!
//!         pub mod state;      // 页面数据状态
//!
//!     page.rs 只是门牌号（Cidrs / Domains / Hides / Logs），
//!     state/ 才是房间里的东西：表格、光标、弹窗。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/app.rs 中定义：
//!
//!         pub struct App {
//!             pub should_quit: bool,
//!             pub focus: FocusPanel,
//!             pub navigation: NavigationState,
//!             pub current_page: Page,
//!             pub status_message: Option<StatusMessage>,
//!
//!             pub cidrs / domains / hides: RulesState,   // 三个规则页
//!             pub logs: LogsState,                       // 访问日志
//!             pub settings: SettingsState,               // 语言 / 主题 / 时间格式
//!             pub modal: ModalState,
//!
//!             pub core: CoreService,                     // 后台任务入口
//!             pub config: AppConfig,
//!             pub config_service: Arc<dyn ConfigService>,
//!         }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、规则页面（RulesState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     三个规则页共用 RulesState，区别只在 ResourceKind。
//!     表格、添加/编辑表单、失败提示都由 proxy-warden-core 的 ListController
//!     维护，RulesState 只多一个光标，并保证重新加载后光标仍指向同一条规则。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、访问日志（LogsState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     LogsState {
//!         table: LogTable,                // 排序、过滤、NoData / FetchFailed 提示
//!         cursor: Cursor,                 // 光标在“可见行”中的位置
//!         filter_input: Option<String>,   // 正在输入的过滤文本
//!     }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 四、弹窗状态（ModalState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Modal 枚举：
//!         - ItemForm { kind }          添加 / 编辑规则
//!         - Confirm { request, .. }    删除 / 启停确认（后台任务在等回答）
//!         - Reason(row)                日志决策原因
//!         - Help, Error { title, message }
//!
//!     数据流：
//!         后台任务需要确认
//!             ↓
//!         BackendMessage::Confirm(request) → app.modal.push_confirm(request)
//!             ↓
//!         用户回答 → app.modal.answer_confirm() → oneshot 送回任务
//!
//!
//! Model 层的数据被 Update 层修改，然后被 View 层读取并渲染成 UI。
//!

mod app;
mod navigation;
mod page;
pub mod state;

pub use app::{App, StatusLevel, StatusMessage};
pub use navigation::{FocusPanel, NavigationState};
pub use page::Page;
pub use state::{LogsState, Modal, ModalState, RulesState, SettingsState};
