//! 应用主消息枚举

use super::{BackendMessage, ContentMessage, ModalMessage, NavigationMessage};

/// 应用主消息
///
/// 后台结果里带着 `CoreError`（不可 Clone），因此这里只派生 `Debug`。
#[derive(Debug)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板（导航 ↔ 内容）
    ToggleFocus,

    /// 导航相关消息
    Navigation(NavigationMessage),

    /// 内容面板相关消息
    Content(ContentMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 后台任务结果
    Backend(BackendMessage),

    /// 重新加载当前页面
    Refresh,

    /// 显示帮助
    ShowHelp,

    /// 切换界面语言
    SwitchLanguage,

    /// 切换主题
    SwitchTheme,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
