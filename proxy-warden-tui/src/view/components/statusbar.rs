//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, FocusPanel, StatusLevel};
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let separator = || Span::styled(" │ ", Style::default().fg(c.muted));

    let mut spans = Vec::new();
    for (i, (key, desc)) in get_hints(app).iter().enumerate() {
        if i > 0 {
            spans.push(separator());
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 状态消息显示在提示之后
    if let Some(msg) = &app.status_message {
        let color = match msg.level {
            StatusLevel::Info => c.success,
            StatusLevel::Error => c.error,
        };
        spans.push(separator());
        spans.push(Span::styled(msg.text.clone(), Style::default().fg(color)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前焦点和页面生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let hints = &t().hints;

    // 正在输入过滤文本
    if app.logs.is_editing_filter() && app.current_page.resource().is_none() {
        return vec![("Enter/Esc", hints.done)];
    }

    let mut list = vec![("Tab", hints.switch_panel), ("↑↓", hints.select)];

    match app.focus {
        FocusPanel::Navigation => list.push(("Enter", hints.open)),
        FocusPanel::Content if app.current_page.resource().is_some() => {
            list.push(("1-4", hints.sort));
            list.push(("Alt+a", hints.add));
            list.push(("Alt+e", hints.edit));
            list.push(("Alt+t", hints.toggle));
            list.push(("Alt+d", hints.delete));
        }
        FocusPanel::Content => {
            list.push(("1-4", hints.sort));
            list.push(("Enter", hints.reason));
            list.push(("/", hints.filter));
            list.push(("Alt+f", hints.filter_ip));
            list.push(("Alt+c", hints.clear_filter));
        }
    }

    list.push(("Alt+r", hints.reload));
    list.push(("Alt+h", hints.help));
    list.push(("q", hints.quit));
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Page;
    use crate::test_support;

    fn keys(app: &App) -> Vec<&'static str> {
        get_hints(app).into_iter().map(|(key, _)| key).collect()
    }

    #[tokio::test]
    async fn hints_follow_page() {
        let (mut app, _rx) = test_support::app("statusbar-hints");
        assert!(keys(&app).contains(&"Alt+a"));

        app.open_page(Page::Logs);
        let log_keys = keys(&app);
        assert!(log_keys.contains(&"/"));
        assert!(!log_keys.contains(&"Alt+a"));

        app.logs.start_filter();
        assert_eq!(keys(&app), vec!["Enter/Esc"]);
    }
}
