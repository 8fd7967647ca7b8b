//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);

    // 左右分栏布局
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(22), // 左侧导航
            Constraint::Min(20),    // 右侧内容
        ])
        .split(main_layout[1]);

    components::navigation::render(app, frame, columns[0]);
    render_page_content(app, frame, columns[1]);
    components::statusbar::render(app, frame, main_layout[2]);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏：应用名 + 服务端地址
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let line = Line::from(vec![
        Span::raw(format!(" {} v{}", t().common.app_name, env!("CARGO_PKG_VERSION"))),
        Span::raw("  ·  "),
        Span::raw(app.core.base_url().to_string()),
    ]);
    let title = Paragraph::new(line).style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 根据当前页面渲染内容
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {} {} ", app.current_page.icon(), app.current_page.title()))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_content()));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match app.current_page.resource() {
        Some(kind) => pages::rules::render(app, app.rules(kind), frame, inner_area),
        None => pages::logs::render(app, frame, inner_area),
    }
}
