//! 弹窗组件

use proxy_warden_core::services::{DialogError, DialogMode, ItemDialog};
use proxy_warden_core::table::LogRowView;
use proxy_warden_core::types::{Decision, FormField, ListType, ResourceKind, ValidationIssue};
use proxy_warden_core::ConfirmPrompt;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::{fill, t};
use crate::model::{App, Modal};
use crate::view::theme::{colors, Styles};

/// 弹窗最小 / 最大宽度
const MIN_WIDTH: u16 = 40;
const MAX_WIDTH: u16 = 80;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(modal) = &app.modal.active else {
        return;
    };

    match modal {
        Modal::ItemForm { kind } => {
            if let Some(dialog) = app.rules(*kind).controller.dialog() {
                render_item_form(frame, *kind, dialog);
            }
        }
        Modal::Confirm {
            request,
            accept_focused,
        } => render_confirm(frame, &request.prompt, *accept_focused),
        Modal::Reason(row) => render_reason(frame, row),
        Modal::Help => render_help(frame),
        Modal::Error { title, message } => render_error(frame, title, message),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// 按内容计算宽度（含边框和左右留白）
fn fit_width(lines: &[Line]) -> u16 {
    let content = lines.iter().map(Line::width).max().unwrap_or(0);
    u16::try_from(content + 4)
        .unwrap_or(MAX_WIDTH)
        .clamp(MIN_WIDTH, MAX_WIDTH)
}

/// 绘制边框和内容
fn render_box(frame: &mut Frame, title: &str, lines: Vec<Line>, border: Style) {
    let width = fit_width(&lines);
    // 窄屏时会换行，多留两行
    let height = u16::try_from(lines.len() + 4).unwrap_or(u16::MAX);
    let area = centered_rect(width, height, frame.area());

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(border)
        .style(Styles::modal());

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn hint_line(pairs: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for (i, (key, desc)) in pairs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Styles::muted()));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::styled(format!(" {desc}"), Styles::muted()));
    }
    Line::from(spans)
}

// ========== 添加 / 编辑 ==========

fn render_item_form(frame: &mut Frame, kind: ResourceKind, dialog: &ItemDialog) {
    let texts = &t().modal.item_form;
    let c = colors();

    let title = match dialog.mode {
        DialogMode::Add => texts.add_title,
        DialogMode::Edit { .. } => texts.edit_title,
    };
    let (value_label, placeholder) = match kind {
        ResourceKind::Cidrs => (texts.cidr, texts.cidr_placeholder),
        ResourceKind::Domains | ResourceKind::Hides => (texts.domain, texts.domain_placeholder),
    };

    let mut lines = Vec::new();
    for field in FormField::order(kind) {
        let focused = *field == dialog.focus && !dialog.pending;
        let value_style = if focused {
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c.fg)
        };

        match field {
            FormField::ListType => {
                lines.push(Line::from(vec![
                    Span::styled(texts.list_type, Styles::muted()),
                    if focused {
                        Span::styled(format!(" {}", texts.list_type_hint), Styles::muted())
                    } else {
                        Span::raw("")
                    },
                ]));
                let label = list_type_label(dialog.fields.list_type.unwrap_or_default());
                let display = if focused {
                    format!("  ◀ {label} ▶")
                } else {
                    format!("    {label}")
                };
                lines.push(Line::styled(display, value_style));
            }
            FormField::Value => {
                lines.push(Line::styled(value_label, Styles::muted()));
                lines.push(input_line(&dialog.fields.value, placeholder, focused, value_style));
            }
            FormField::Description => {
                lines.push(Line::styled(texts.description, Styles::muted()));
                lines.push(input_line(&dialog.fields.description, "", focused, value_style));
            }
        }
        lines.push(Line::from(""));
    }

    if let Some(error) = &dialog.error {
        lines.push(Line::styled(
            format!("  ⚠ {}", error_text(error)),
            Style::default().fg(c.error),
        ));
    } else if dialog.pending {
        lines.push(Line::styled(
            format!("  {}", texts.submitting),
            Style::default().fg(c.warning),
        ));
    }

    let hints = &t().hints;
    lines.push(Line::from(""));
    lines.push(hint_line(&[
        ("Tab", hints.select),
        ("Enter", hints.done),
        ("Esc", hints.cancel),
    ]));

    render_box(frame, title, lines, Styles::border(true));
}

fn input_line(value: &str, placeholder: &str, focused: bool, style: Style) -> Line<'static> {
    if focused {
        Line::styled(format!("  {value}▎"), style)
    } else if value.is_empty() {
        Line::styled(format!("  {placeholder}"), Styles::muted())
    } else {
        Line::styled(format!("  {value}"), style)
    }
}

fn list_type_label(list_type: ListType) -> &'static str {
    let status = &t().rules.status;
    match list_type {
        ListType::Allow => status.allow,
        ListType::Deny => status.deny,
    }
}

/// 弹窗内显示的错误文本
fn error_text(error: &DialogError) -> String {
    let texts = t();
    let errors = &texts.modal.item_form.errors;
    match error {
        DialogError::Validation { issue, .. } => match issue {
            ValidationIssue::Required => errors.required.to_string(),
            ValidationIssue::InvalidDomain => errors.invalid_domain.to_string(),
            ValidationIssue::InvalidCidr => errors.invalid_cidr.to_string(),
            ValidationIssue::TooLong { max } => {
                fill(errors.too_long, &[("max", &max.to_string())])
            }
        },
        DialogError::Server { message } => message
            .clone()
            .unwrap_or_else(|| texts.status_bar.submit_failed.to_string()),
    }
}

// ========== 确认 ==========

fn render_confirm(frame: &mut Frame, prompt: &ConfirmPrompt, accept_focused: bool) {
    let texts = t();
    let confirm = &texts.modal.confirm;
    let c = colors();

    let template = match prompt {
        ConfirmPrompt::Delete { .. } => confirm.delete_message,
        ConfirmPrompt::Toggle { activate: true, .. } => confirm.enable_message,
        ConfirmPrompt::Toggle {
            activate: false, ..
        } => confirm.disable_message,
    };
    let message = fill(template, &[("value", prompt.value())]);

    let button = |label: &str, focused: bool| {
        let style = if focused {
            Styles::selected()
        } else {
            Style::default().fg(c.fg)
        };
        Span::styled(format!("  {label}  "), style)
    };

    let lines = vec![
        Line::from(""),
        Line::styled(format!("  {message}"), Style::default().fg(c.fg)),
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            button(texts.common.yes, accept_focused),
            Span::raw("   "),
            button(texts.common.no, !accept_focused),
        ])
        .alignment(Alignment::Center),
    ];

    let border = match prompt {
        ConfirmPrompt::Delete { .. } => Style::default().fg(c.error),
        ConfirmPrompt::Toggle { .. } => Style::default().fg(c.warning),
    };
    render_box(frame, confirm.title, lines, border);
}

// ========== 访问日志原因 ==========

fn render_reason(frame: &mut Frame, row: &LogRowView) {
    let texts = &t().modal.reason;
    let c = colors();

    let (title, color) = match row.decision {
        Decision::Allow => (texts.allow_title, c.success),
        Decision::Deny => (texts.deny_title, c.error),
        Decision::Unknown => (texts.unknown_title, c.muted),
    };

    let field = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("  {label}: "), Styles::muted()),
            Span::styled(value, Style::default().fg(c.fg)),
        ])
    };

    let mut lines = vec![
        Line::from(""),
        Line::styled(
            format!("  {}", row.reason),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        field(texts.client_ip, row.client_ip.clone()),
        field(texts.url, row.url.clone()),
    ];
    if let Some(method) = &row.method {
        lines.push(field(texts.method, method.clone()));
    }
    if let Some(score) = row.score {
        lines.push(field(texts.score, format!("{score:.2}")));
    }
    lines.push(field(texts.time, row.time_display.clone()));

    render_box(frame, title, lines, Style::default().fg(color));
}

// ========== 帮助 ==========

fn render_help(frame: &mut Frame) {
    let help = &t().help;
    let a = &help.actions;

    let section = |title: &'static str| {
        Line::styled(
            title,
            Styles::header().add_modifier(Modifier::UNDERLINED),
        )
    };
    let entry = |key: &'static str, desc: &'static str| {
        // 按显示宽度对齐，韩文字符占两列
        let pad = 12usize.saturating_sub(key.width());
        Line::from(vec![
            Span::raw("  "),
            Span::styled(key, Styles::hint_key()),
            Span::raw(" ".repeat(pad)),
            Span::raw(desc),
        ])
    };

    let lines = vec![
        section(help.global),
        entry("Tab", a.switch_panel),
        entry("↑↓ / j k", a.move_up_down),
        entry("Alt+r", a.reload),
        entry("Alt+l", a.language),
        entry("Alt+s", a.theme),
        entry("q", a.quit),
        Line::from(""),
        section(help.rules),
        entry("1-4", a.sort),
        entry("Alt+a", a.add),
        entry("Alt+e", a.edit),
        entry("Alt+t", a.toggle),
        entry("Alt+d", a.delete),
        Line::from(""),
        section(help.logs),
        entry("1-4", a.sort),
        entry("Enter", a.reason),
        entry("/", a.filter),
        entry("Alt+f", a.filter_ip),
        entry("Alt+c", a.clear_filter),
        Line::from(""),
        Line::styled(help.close_hint, Styles::muted()),
    ];

    render_box(frame, help.title, lines, Styles::border(true));
}

// ========== 错误 ==========

fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let c = colors();
    let lines = vec![
        Line::from(""),
        Line::styled(format!("  {message}"), Style::default().fg(c.fg)),
        Line::from(""),
        hint_line(&[("Enter", t().hints.done)]),
    ];
    render_box(frame, title, lines, Style::default().fg(c.error));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_fits_inside_area() {
        let area = Rect::new(0, 0, 30, 10);
        let rect = centered_rect(50, 6, area);
        assert_eq!(rect.width, 30);
        assert_eq!(rect.y, 2);
    }

    #[test]
    fn width_grows_with_content() {
        let short = vec![Line::from("ok")];
        let long = vec![Line::from("x".repeat(60))];
        assert_eq!(fit_width(&short), MIN_WIDTH);
        assert_eq!(fit_width(&long), 64);
    }

    #[test]
    fn server_error_prefers_server_text() {
        let error = DialogError::Server {
            message: Some("Duplicate CIDR".into()),
        };
        assert_eq!(error_text(&error), "Duplicate CIDR");

        let error = DialogError::Validation {
            field: FormField::Value,
            issue: ValidationIssue::TooLong { max: 255 },
        };
        assert!(error_text(&error).contains("255"));
    }
}
