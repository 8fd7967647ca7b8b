//! 主题和样式定义

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU8, Ordering};

// 默认为 0 (Dark)，相应地，1 为 Light
static CURRENT_THEME: AtomicU8 = AtomicU8::new(0);

/// 主题枚举
///
/// 在配置文件中写作 `theme = "dark"` / `theme = "light"`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// 获取下一个主题
    #[must_use]
    pub fn next(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    fn index(self) -> u8 {
        match self {
            Theme::Dark => 0,
            Theme::Light => 1,
        }
    }
}

/// 设置当前主题
pub fn set_theme(theme: Theme) {
    CURRENT_THEME.store(theme.index(), Ordering::SeqCst);
}

/// 当前主题
pub fn current_theme() -> Theme {
    match CURRENT_THEME.load(Ordering::SeqCst) {
        0 => Theme::Dark,
        _ => Theme::Light,
    }
}

/// 获取当前主题的颜色方案
pub fn colors() -> ThemeColors {
    match current_theme() {
        Theme::Dark => ThemeColors::dark(),
        Theme::Light => ThemeColors::light(),
    }
}

/// 主题颜色
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub muted: Color,
    pub hint_key: Color,
}

impl ThemeColors {
    /// 深色主题
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(30, 30, 30),
            fg: Color::Rgb(212, 212, 212),
            border: Color::Rgb(62, 62, 62),
            border_focused: Color::Rgb(0, 122, 204),
            highlight: Color::Rgb(0, 122, 204),
            selected_bg: Color::Rgb(38, 79, 120),
            selected_fg: Color::White,
            success: Color::Rgb(78, 201, 176),
            warning: Color::Rgb(206, 145, 120),
            error: Color::Rgb(244, 135, 113),
            muted: Color::Rgb(128, 128, 128),
            hint_key: Color::Yellow,
        }
    }

    /// 浅色主题
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(250, 250, 250),
            fg: Color::Rgb(51, 51, 51),
            border: Color::Rgb(204, 204, 204),
            border_focused: Color::Rgb(0, 102, 204),
            highlight: Color::Rgb(0, 102, 204),
            selected_bg: Color::Rgb(204, 232, 255),
            selected_fg: Color::Black,
            success: Color::Rgb(34, 134, 58),
            warning: Color::Rgb(176, 136, 0),
            error: Color::Rgb(215, 58, 73),
            muted: Color::Rgb(128, 128, 128),
            hint_key: Color::Rgb(176, 136, 0),
        }
    }
}

/// 常用样式（跟随当前主题）
pub struct Styles;

impl Styles {
    /// 边框样式
    pub fn border(focused: bool) -> Style {
        let c = colors();
        Style::default().fg(if focused { c.border_focused } else { c.border })
    }

    /// 选中行样式
    pub fn selected() -> Style {
        let c = colors();
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 标题样式
    pub fn title() -> Style {
        Style::default().fg(colors().fg).add_modifier(Modifier::BOLD)
    }

    /// 表头样式
    pub fn header() -> Style {
        Style::default()
            .fg(colors().highlight)
            .add_modifier(Modifier::BOLD)
    }

    /// 状态栏样式
    pub fn statusbar() -> Style {
        let c = colors();
        Style::default().bg(c.highlight).fg(c.selected_fg)
    }

    /// 弹窗背景
    pub fn modal() -> Style {
        let c = colors();
        Style::default().bg(c.bg).fg(c.fg)
    }

    /// 次要文本
    pub fn muted() -> Style {
        Style::default().fg(colors().muted)
    }

    /// 快捷键提示样式
    pub fn hint_key() -> Style {
        Style::default()
            .fg(colors().hint_key)
            .add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明样式
    pub fn hint_desc() -> Style {
        Style::default().fg(colors().selected_fg)
    }
}
