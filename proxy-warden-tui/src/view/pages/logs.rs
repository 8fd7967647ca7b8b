//! 访问日志页面视图

use proxy_warden_core::table::{LogBanner, LogFilter, LogRowView};
use proxy_warden_core::types::Decision;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::i18n::{fill, t};
use crate::model::App;
use crate::view::components::table::header_row;
use crate::view::theme::{colors, Styles};

/// 渲染访问日志页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 提示
            Constraint::Length(1), // 过滤
            Constraint::Min(1),    // 表格
        ])
        .split(area);

    render_banner(app, frame, layout[0]);
    render_filter(app, frame, layout[1]);
    render_table(app, frame, layout[2]);
}

/// 表格上方的提示：等待首次拉取 / 没有数据 / 拉取失败
fn render_banner(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().logs;
    let c = colors();
    let table = &app.logs.table;

    let line = match table.banner() {
        Some(LogBanner::FetchFailed { message }) => {
            let text = match message {
                Some(message) => format!("⚠ {} ({message})", texts.fetch_failed),
                None => format!("⚠ {}", texts.fetch_failed),
            };
            Line::styled(text, Style::default().fg(c.error))
        }
        _ if !table.is_loaded() => Line::styled(texts.waiting, Styles::muted()),
        Some(LogBanner::NoData) => Line::styled(texts.no_data, Styles::muted()),
        None => Line::from(""),
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// 过滤输入 / 当前过滤条件
fn render_filter(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().logs;
    let c = colors();
    let logs = &app.logs;

    let shown = fill(
        texts.shown_count,
        &[
            ("shown", &logs.table.visible_count().to_string()),
            ("total", &logs.table.rows().len().to_string()),
        ],
    );

    let mut spans = Vec::new();
    if let Some(input) = &logs.filter_input {
        spans.push(Span::styled(format!("{}: ", texts.filter_label), Styles::hint_key()));
        spans.push(Span::styled(
            format!("{input}▎"),
            Style::default().fg(c.highlight),
        ));
    } else {
        match logs.table.filter() {
            Some(LogFilter::Text { query, .. }) => {
                spans.push(Span::styled(format!("{}: ", texts.filter_label), Styles::muted()));
                spans.push(Span::styled(query.clone(), Style::default().fg(c.fg)));
            }
            Some(LogFilter::Ip(ip)) => {
                spans.push(Span::styled(
                    format!("{}: ", texts.filter_ip_label),
                    Styles::muted(),
                ));
                spans.push(Span::styled(ip.clone(), Style::default().fg(c.fg)));
            }
            None => {}
        }
    }
    if !spans.is_empty() {
        spans.push(Span::raw("  "));
    }
    spans.push(Span::styled(shown, Styles::muted()));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_table(app: &App, frame: &mut Frame, area: Rect) {
    let columns = &t().logs.columns;
    let table_state = &app.logs.table;

    let titles = [columns.decision, columns.client_ip, columns.url, columns.time];
    let header = header_row(&titles, |i| table_state.indicator(i));
    let rows: Vec<Row> = table_state.visible_rows().map(render_row).collect();

    let widths = [
        Constraint::Length(10),
        Constraint::Length(16),
        Constraint::Min(20),
        Constraint::Length(19),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(2)
        .row_highlight_style(if app.focus.is_content() {
            Styles::selected()
        } else {
            Style::default().add_modifier(Modifier::REVERSED)
        })
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(app.logs.cursor.position(table_state.visible_count()));

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_row(row: &LogRowView) -> Row<'static> {
    let c = colors();
    let decision_color = match row.decision {
        Decision::Allow => c.success,
        Decision::Deny => c.error,
        Decision::Unknown => c.muted,
    };

    Row::new(vec![
        Cell::from(Span::styled(
            row.decision_label.clone(),
            Style::default().fg(decision_color),
        )),
        Cell::from(row.client_ip.clone()),
        Cell::from(row.url.clone()),
        Cell::from(Span::styled(row.time_display.clone(), Styles::muted())),
    ])
    .style(Style::default().fg(c.fg))
}
