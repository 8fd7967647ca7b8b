//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**：所有弹窗（Modal）的内容都放在 modal 下
//! 3. **页面内容归对应页面**：如 `rules.*`, `logs.*`
//! 4. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 5. **键盘提示归 `hints.*`**：按键名称和操作提示
//!
//! 带 `{value}` / `{shown}` 等占位符的文本用 [`fill`](super::fill) 填充。

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 导航栏文本
    pub nav: NavTexts,
    /// 规则页面文本（CIDR / 域名 / 隐藏域名共用）
    pub rules: RulesTexts,
    /// 访问日志页面文本
    pub logs: LogsTexts,
    /// 弹窗文本（所有弹窗的内容）
    pub modal: ModalTexts,
    /// 状态栏文本
    pub status_bar: StatusBarTexts,
    /// 帮助页面文本
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub loading: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
    pub error: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本
pub struct HintTexts {
    pub select: &'static str,
    pub sort: &'static str,
    pub switch_panel: &'static str,
    pub open: &'static str,
    pub add: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub toggle: &'static str,
    pub reload: &'static str,
    pub filter: &'static str,
    pub filter_ip: &'static str,
    pub clear_filter: &'static str,
    pub reason: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
    pub done: &'static str,
    pub cancel: &'static str,
}

// ============================================================================
// 导航栏
// ============================================================================

/// 导航栏文本
pub struct NavTexts {
    pub title: &'static str,
    pub cidrs: &'static str,
    pub domains: &'static str,
    pub hides: &'static str,
    pub logs: &'static str,
}

// ============================================================================
// 页面文本
// ============================================================================

/// 规则页面文本
pub struct RulesTexts {
    pub columns: RuleColumnTexts,
    /// 状态标签
    pub status: RuleStatusTexts,
    /// 停用标记
    pub inactive: &'static str,
    pub enable: &'static str,
    pub disable: &'static str,
    pub empty: &'static str,
    pub empty_hint: &'static str,
}

/// 规则表头
pub struct RuleColumnTexts {
    pub status: &'static str,
    pub cidr: &'static str,
    pub domain: &'static str,
    pub description: &'static str,
    pub updated: &'static str,
    pub actions: &'static str,
}

pub struct RuleStatusTexts {
    pub allow: &'static str,
    pub deny: &'static str,
    pub success: &'static str,
}

/// 访问日志页面文本
pub struct LogsTexts {
    pub columns: LogColumnTexts,
    pub decision: LogDecisionTexts,
    pub no_reason: &'static str,
    pub no_data: &'static str,
    pub waiting: &'static str,
    /// 拉取失败（保留上一次的内容）
    pub fetch_failed: &'static str,
    pub filter_label: &'static str,
    pub filter_ip_label: &'static str,
    /// `{shown}` / `{total}`
    pub shown_count: &'static str,
}

pub struct LogColumnTexts {
    pub decision: &'static str,
    pub client_ip: &'static str,
    pub url: &'static str,
    pub time: &'static str,
}

pub struct LogDecisionTexts {
    pub allow: &'static str,
    pub deny: &'static str,
    pub unknown: &'static str,
}

// ============================================================================
// 弹窗文本
// ============================================================================

/// 弹窗文本（所有弹窗的内容都在这里）
pub struct ModalTexts {
    /// 添加 / 编辑规则弹窗
    pub item_form: ItemFormTexts,
    /// 确认弹窗
    pub confirm: ConfirmTexts,
    /// 日志原因弹窗
    pub reason: ReasonTexts,
}

/// 添加 / 编辑规则弹窗
pub struct ItemFormTexts {
    pub add_title: &'static str,
    pub edit_title: &'static str,
    pub list_type: &'static str,
    pub list_type_hint: &'static str,
    pub cidr: &'static str,
    pub domain: &'static str,
    pub description: &'static str,
    pub cidr_placeholder: &'static str,
    pub domain_placeholder: &'static str,
    pub submitting: &'static str,
    pub errors: FormErrorTexts,
}

/// 表单校验错误
pub struct FormErrorTexts {
    pub required: &'static str,
    pub invalid_domain: &'static str,
    pub invalid_cidr: &'static str,
    /// `{max}`
    pub too_long: &'static str,
}

/// 确认弹窗
pub struct ConfirmTexts {
    pub title: &'static str,
    /// `{value}`
    pub delete_message: &'static str,
    /// `{value}`
    pub enable_message: &'static str,
    /// `{value}`
    pub disable_message: &'static str,
}

/// 日志原因弹窗
pub struct ReasonTexts {
    pub allow_title: &'static str,
    pub deny_title: &'static str,
    pub unknown_title: &'static str,
    pub client_ip: &'static str,
    pub url: &'static str,
    pub method: &'static str,
    pub score: &'static str,
    pub time: &'static str,
}

// ============================================================================
// 其他组件
// ============================================================================

/// 状态栏文本（包括操作失败时的通用提示）
pub struct StatusBarTexts {
    pub load_failed: &'static str,
    pub create_failed: &'static str,
    pub update_failed: &'static str,
    pub delete_failed: &'static str,
    pub toggle_failed: &'static str,
    /// 服务端没有给出原因时，弹窗内显示
    pub submit_failed: &'static str,
    pub reloading: &'static str,
    /// `{value}`
    pub language_changed: &'static str,
    /// `{value}`
    pub theme_changed: &'static str,
    pub config_save_failed: &'static str,
    pub theme_dark: &'static str,
    pub theme_light: &'static str,
}

/// 帮助页面文本
pub struct HelpTexts {
    pub title: &'static str,
    pub global: &'static str,
    pub rules: &'static str,
    pub logs: &'static str,
    pub close_hint: &'static str,
    pub actions: HelpActionTexts,
}

/// 帮助页面快捷键动作描述
pub struct HelpActionTexts {
    pub switch_panel: &'static str,
    pub move_up_down: &'static str,
    pub sort: &'static str,
    pub language: &'static str,
    pub theme: &'static str,
    pub quit: &'static str,
    pub add: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub toggle: &'static str,
    pub reload: &'static str,
    pub filter: &'static str,
    pub filter_ip: &'static str,
    pub clear_filter: &'static str,
    pub reason: &'static str,
}
