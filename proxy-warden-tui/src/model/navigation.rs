//! 导航栏与焦点

use super::Page;

/// 焦点面板
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 左侧导航
    Navigation,
    /// 右侧表格
    #[default]
    Content,
}

impl FocusPanel {
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            FocusPanel::Navigation => FocusPanel::Content,
            FocusPanel::Content => FocusPanel::Navigation,
        }
    }

    pub fn is_navigation(self) -> bool {
        self == FocusPanel::Navigation
    }

    pub fn is_content(self) -> bool {
        self == FocusPanel::Content
    }
}

/// 导航状态
#[derive(Debug)]
pub struct NavigationState {
    /// 导航项（按显示顺序）
    pub items: Vec<Page>,
    /// 当前选中的索引
    pub selected: usize,
}

impl NavigationState {
    pub fn new() -> Self {
        Self {
            items: Page::ALL.to_vec(),
            selected: 0,
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }

    /// 当前选中的页面
    pub fn current_page(&self) -> Option<Page> {
        self.items.get(self.selected).copied()
    }

    /// 让选中项跟随页面（通过快捷键切换页面时）
    pub fn select_page(&mut self, page: Page) {
        if let Some(pos) = self.items.iter().position(|p| *p == page) {
            self.selected = pos;
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}
