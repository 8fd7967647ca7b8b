//! 规则页面视图（CIDR / 域名 / 隐藏域名共用）

use proxy_warden_core::table::{RowView, StatusKind, ToggleIcon, ToggleWording};
use proxy_warden_core::types::ResourceKind;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::i18n::t;
use crate::model::state::RulesState;
use crate::model::App;
use crate::view::components::table::header_row;
use crate::view::theme::{colors, Styles};

/// 渲染规则页面
pub fn render(app: &App, rules: &RulesState, frame: &mut Frame, area: Rect) {
    if !rules.controller.is_loaded() {
        render_message(frame, area, t().common.loading, None);
    } else if rules.rows().is_empty() {
        let texts = &t().rules;
        render_message(frame, area, texts.empty, Some(texts.empty_hint));
    } else {
        render_table(app, rules, frame, area);
    }
}

/// 空状态 / 加载中
fn render_message(frame: &mut Frame, area: Rect, text: &str, hint: Option<&str>) {
    let mut content = vec![
        Line::from(""),
        Line::styled(format!("  {text}"), Style::default().fg(colors().fg)),
    ];
    if let Some(hint) = hint {
        content.push(Line::from(""));
        content.push(Line::styled(format!("  {hint}"), Styles::muted()));
    }
    frame.render_widget(Paragraph::new(content), area);
}

fn render_table(app: &App, rules: &RulesState, frame: &mut Frame, area: Rect) {
    let texts = &t().rules;
    let columns = &texts.columns;
    let value_title = match rules.kind() {
        ResourceKind::Cidrs => columns.cidr,
        ResourceKind::Domains | ResourceKind::Hides => columns.domain,
    };
    let titles = [
        columns.status,
        value_title,
        columns.description,
        columns.updated,
        columns.actions,
    ];
    let table_state = rules.controller.table();
    let header = header_row(&titles, |i| table_state.indicator(i));

    let rows: Vec<Row> = rules.rows().iter().map(render_row).collect();

    let widths = [
        Constraint::Length(10),
        Constraint::Percentage(30),
        Constraint::Min(12),
        Constraint::Length(19),
        Constraint::Length(14),
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
    state.select(rules.cursor.position(rules.rows().len()));

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_row(row: &RowView) -> Row<'static> {
    let texts = &t().rules;
    let c = colors();

    let status_color = match row.status {
        StatusKind::Allow | StatusKind::Success => c.success,
        StatusKind::Deny => c.error,
    };
    let text_style = if row.inactive {
        Style::default().fg(c.muted).add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(c.fg)
    };

    let mut value = vec![Span::styled(row.value.clone(), text_style)];
    if row.inactive {
        value.push(Span::styled(format!(" ({})", texts.inactive), Styles::muted()));
    }

    let toggle = &row.actions.toggle;
    let icon = match toggle.icon {
        ToggleIcon::Pause => "⏸",
        ToggleIcon::Play => "▶",
    };
    let wording = match toggle.wording {
        ToggleWording::Disable => texts.disable,
        ToggleWording::Enable => texts.enable,
    };

    Row::new(vec![
        Cell::from(Span::styled(
            row.status_label.clone(),
            Style::default().fg(status_color),
        )),
        Cell::from(Line::from(value)),
        Cell::from(Span::styled(row.description.clone(), text_style)),
        Cell::from(Span::styled(row.updated_display.clone(), Styles::muted())),
        Cell::from(Span::styled(format!("{icon} {wording}"), Styles::muted())),
    ])
}
