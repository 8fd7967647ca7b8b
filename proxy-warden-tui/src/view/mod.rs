//! 视图层
//!
//! 只读 `App`，不修改状态。
//!
//! ```text
//! ┌ 标题栏 ──────────────────────────────────────────┐
//! ├ 导航 ─────┬ 内容（规则表 / 访问日志）──────────────┤
//! │           │                                      │
//! ├───────────┴──────────────────────────────────────┤
//! └ 状态栏 ──────────────────────────────────────────┘
//! ```
//!
//! 弹窗最后绘制，覆盖在最上层。

mod components;
mod layout;
mod pages;
pub mod theme;

use ratatui::Frame;

use crate::model::App;

/// 渲染整个界面
pub fn render(app: &App, frame: &mut Frame) {
    layout::render(app, frame);
}
