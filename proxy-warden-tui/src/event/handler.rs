//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use proxy_warden_core::types::FormField;

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::{App, Modal, Page};

/// 规则表格列数（状态 | 主体 | 描述 | 更新时间 | 操作）
const RULE_COLUMNS: u32 = 5;
/// 日志表格列数（决策 | 客户端 IP | URL | 时间）
const LOG_COLUMNS: u32 = 4;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变，下一帧自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 正在输入过滤文本时，按键都交给输入框
    if app.current_page == Page::Logs && app.logs.is_editing_filter() {
        return handle_filter_input_keys(key);
    }

    // 全局快捷键
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) || is_plain_char(&key, '?') {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::LANGUAGE.matches(&key) {
        return AppMessage::SwitchLanguage;
    }
    if DefaultKeymap::THEME.matches(&key) {
        return AppMessage::SwitchTheme;
    }
    if DefaultKeymap::SWITCH_PANEL.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    // 根据焦点位置处理按键
    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else if app.current_page == Page::Logs {
        handle_logs_keys(key)
    } else {
        handle_rules_keys(key)
    }
}

/// 不带修饰键（或只带 Shift）的字符
fn is_plain_char(key: &KeyEvent, ch: char) -> bool {
    key.code == KeyCode::Char(ch) && key.modifiers.difference(KeyModifiers::SHIFT).is_empty()
}

/// 可输入的字符
fn typed_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(ch) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => Some(ch),
        _ => None,
    }
}

/// 数字键 1..=columns 选择表头
fn sort_column(key: &KeyEvent, columns: u32) -> Option<usize> {
    let KeyCode::Char(ch) = key.code else {
        return None;
    };
    if !key.modifiers.is_empty() {
        return None;
    }
    match ch.to_digit(10) {
        Some(n) if (1..=columns).contains(&n) => usize::try_from(n - 1).ok(),
        _ => None,
    }
}

/// 处理导航面板的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上移
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }

        // ↓ 或 j: 下移
        KeyCode::Down | KeyCode::Char('j') => {
            AppMessage::Navigation(NavigationMessage::SelectNext)
        }

        // Enter: 打开页面
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),

        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),

        _ => AppMessage::Noop,
    }
}

/// 表格通用的光标移动
fn handle_table_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        KeyCode::Enter => AppMessage::Content(ContentMessage::Open),
        _ => AppMessage::Noop,
    }
}

/// 处理规则页面的按键
fn handle_rules_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::ACTION_ADD.matches(&key) {
        return AppMessage::Content(ContentMessage::Add);
    }
    if DefaultKeymap::ACTION_EDIT.matches(&key) {
        return AppMessage::Content(ContentMessage::Edit);
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::Content(ContentMessage::Delete);
    }
    if DefaultKeymap::ACTION_TOGGLE.matches(&key) {
        return AppMessage::Content(ContentMessage::Toggle);
    }
    if let Some(column) = sort_column(&key, RULE_COLUMNS) {
        return AppMessage::Content(ContentMessage::SortBy(column));
    }

    handle_table_keys(key)
}

/// 处理访问日志页面的按键
fn handle_logs_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::FILTER.matches(&key) {
        return AppMessage::Content(ContentMessage::StartFilter);
    }
    if DefaultKeymap::FILTER_IP.matches(&key) {
        return AppMessage::Content(ContentMessage::FilterBySelectedIp);
    }
    if DefaultKeymap::CLEAR_FILTER.matches(&key) {
        return AppMessage::Content(ContentMessage::ClearFilter);
    }
    if let Some(column) = sort_column(&key, LOG_COLUMNS) {
        return AppMessage::Content(ContentMessage::SortBy(column));
    }

    handle_table_keys(key)
}

/// 处理过滤输入框的按键
fn handle_filter_input_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => AppMessage::Content(ContentMessage::FinishFilter),
        KeyCode::Backspace => AppMessage::Content(ContentMessage::FilterBackspace),
        _ => match typed_char(&key) {
            Some(ch) => AppMessage::Content(ContentMessage::FilterInput(ch)),
            None => AppMessage::Noop,
        },
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗
    if key.code == KeyCode::Esc || DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Modal(ModalMessage::Close);
    }

    let Some(ref modal) = app.modal.active else {
        return AppMessage::Noop;
    };

    match modal {
        Modal::ItemForm { kind } => {
            let focus = app
                .rules(*kind)
                .controller
                .dialog()
                .map(|dialog| dialog.focus);
            handle_item_form_keys(key, focus)
        }
        Modal::Confirm { .. } => handle_confirm_keys(key),
        Modal::Reason(_) | Modal::Help | Modal::Error { .. } => {
            // 只响应关闭按键
            match key.code {
                KeyCode::Enter => AppMessage::Modal(ModalMessage::Close),
                _ => AppMessage::Noop,
            }
        }
    }
}

/// 处理添加 / 编辑弹窗的按键
fn handle_item_form_keys(key: KeyEvent, focus: Option<FormField>) -> AppMessage {
    let on_list_type = focus == Some(FormField::ListType);

    match key.code {
        // Tab / ↓: 下一个字段
        KeyCode::Tab | KeyCode::Down => AppMessage::Modal(ModalMessage::NextField),

        // Shift+Tab / ↑: 上一个字段
        KeyCode::BackTab | KeyCode::Up => AppMessage::Modal(ModalMessage::PrevField),

        // ← → 空格: 切换 allow / deny（仅当焦点在类型字段时）
        KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') if on_list_type => {
            AppMessage::Modal(ModalMessage::SwitchOption)
        }

        // Enter: 提交
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),

        KeyCode::Backspace if !on_list_type => AppMessage::Modal(ModalMessage::Backspace),

        _ => match typed_char(&key) {
            Some(ch) if !on_list_type => AppMessage::Modal(ModalMessage::Input(ch)),
            _ => AppMessage::Noop,
        },
    }
}

/// 处理确认弹窗的按键
fn handle_confirm_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // Tab 或 ← →: 切换焦点
        KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
            AppMessage::Modal(ModalMessage::SwitchOption)
        }

        // Enter: 按焦点回答
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),

        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn alt(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::ALT)
    }

    #[test]
    fn digits_select_sortable_range() {
        assert_eq!(sort_column(&press(KeyCode::Char('1')), RULE_COLUMNS), Some(0));
        assert_eq!(sort_column(&press(KeyCode::Char('5')), RULE_COLUMNS), Some(4));
        assert_eq!(sort_column(&press(KeyCode::Char('5')), LOG_COLUMNS), None);
        assert_eq!(sort_column(&press(KeyCode::Char('0')), LOG_COLUMNS), None);
        assert_eq!(sort_column(&alt('1'), LOG_COLUMNS), None);
    }

    #[test]
    fn rule_page_actions() {
        assert!(matches!(
            handle_rules_keys(alt('a')),
            AppMessage::Content(ContentMessage::Add)
        ));
        assert!(matches!(
            handle_rules_keys(alt('t')),
            AppMessage::Content(ContentMessage::Toggle)
        ));
        assert!(matches!(
            handle_rules_keys(press(KeyCode::Enter)),
            AppMessage::Content(ContentMessage::Open)
        ));
    }

    #[test]
    fn list_type_field_swallows_text_input() {
        let on_type = Some(FormField::ListType);
        assert!(matches!(
            handle_item_form_keys(press(KeyCode::Right), on_type),
            AppMessage::Modal(ModalMessage::SwitchOption)
        ));
        assert!(matches!(
            handle_item_form_keys(press(KeyCode::Char('x')), on_type),
            AppMessage::Noop
        ));

        let on_value = Some(FormField::Value);
        assert!(matches!(
            handle_item_form_keys(
                KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT),
                on_value
            ),
            AppMessage::Modal(ModalMessage::Input('A'))
        ));
        assert!(matches!(
            handle_item_form_keys(press(KeyCode::Char(' ')), on_value),
            AppMessage::Modal(ModalMessage::Input(' '))
        ));
    }

    #[test]
    fn filter_input_captures_global_keys() {
        assert!(matches!(
            handle_filter_input_keys(press(KeyCode::Char('q'))),
            AppMessage::Content(ContentMessage::FilterInput('q'))
        ));
        assert!(matches!(
            handle_filter_input_keys(press(KeyCode::Esc)),
            AppMessage::Content(ContentMessage::FinishFilter)
        ));
    }

    #[tokio::test]
    async fn open_modal_takes_priority() {
        let (mut app, _rx) = test_support::app("handler-modal");
        app.modal.show_help();

        assert!(matches!(
            handle_event(Event::Key(press(KeyCode::Char('q'))), &app),
            AppMessage::Noop
        ));
        assert!(matches!(
            handle_event(Event::Key(press(KeyCode::Esc)), &app),
            AppMessage::Modal(ModalMessage::Close)
        ));
    }

    #[tokio::test]
    async fn global_keys_without_modal() {
        let (app, _rx) = test_support::app("handler-global");
        assert!(matches!(
            handle_event(Event::Key(press(KeyCode::Char('q'))), &app),
            AppMessage::Quit
        ));
        assert!(matches!(
            handle_event(Event::Key(alt('l')), &app),
            AppMessage::SwitchLanguage
        ));
        assert!(matches!(
            handle_event(Event::Key(press(KeyCode::Tab)), &app),
            AppMessage::ToggleFocus
        ));
    }
}
