//! 左侧导航面板组件

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::Styles;

/// 渲染导航面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", t().nav.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_navigation()));

    let items: Vec<ListItem> = app
        .navigation
        .items
        .iter()
        .enumerate()
        .map(|(i, page)| {
            let is_selected = i == app.navigation.selected;
            let prefix = if is_selected { "▶ " } else { "  " };
            let content = format!("{}{} {}", prefix, page.icon(), page.title());

            // 当前打开的页面加粗
            let style = if *page == app.current_page {
                Styles::title()
            } else {
                Styles::muted()
            };
            ListItem::new(Line::from(Span::styled(content, style)))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Styles::selected());

    let mut state = ListState::default();
    state.select(Some(app.navigation.selected));

    frame.render_stateful_widget(list, area, &mut state);
}
