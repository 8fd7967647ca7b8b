//! 快捷键配置
//!
//! 定义快捷键映射

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::alt(KeyCode::Char('h'));
    pub const REFRESH: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));
    pub const LANGUAGE: KeyBinding = KeyBinding::alt(KeyCode::Char('l'));
    pub const THEME: KeyBinding = KeyBinding::alt(KeyCode::Char('s'));
    pub const SWITCH_PANEL: KeyBinding = KeyBinding::key(KeyCode::Tab);

    // 规则页
    pub const ACTION_ADD: KeyBinding = KeyBinding::alt(KeyCode::Char('a'));
    pub const ACTION_EDIT: KeyBinding = KeyBinding::alt(KeyCode::Char('e'));
    pub const ACTION_DELETE: KeyBinding = KeyBinding::alt(KeyCode::Char('d'));
    pub const ACTION_TOGGLE: KeyBinding = KeyBinding::alt(KeyCode::Char('t'));

    // 日志页
    pub const FILTER: KeyBinding = KeyBinding::key(KeyCode::Char('/'));
    pub const FILTER_IP: KeyBinding = KeyBinding::alt(KeyCode::Char('f'));
    pub const CLEAR_FILTER: KeyBinding = KeyBinding::alt(KeyCode::Char('c'));
}
