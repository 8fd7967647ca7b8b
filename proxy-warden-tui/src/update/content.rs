//! 内容面板更新逻辑
//!
//! 规则页的操作都经由 ListController：打开弹窗是同步的，删除 / 启停
//! 返回一个 future，交给 CoreService 在后台执行。

use futures::future::BoxFuture;
use proxy_warden_core::services::ListOutcome;
use proxy_warden_core::types::ResourceKind;
use proxy_warden_core::CoreResult;

use crate::message::ContentMessage;
use crate::model::App;

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    match app.current_page.resource() {
        Some(kind) => update_rules(app, kind, msg),
        None => update_logs(app, msg),
    }
}

// ========== 规则页 ==========

fn update_rules(app: &mut App, kind: ResourceKind, msg: ContentMessage) {
    match msg {
        ContentMessage::SelectPrevious => app.rules_mut(kind).select_previous(),
        ContentMessage::SelectNext => app.rules_mut(kind).select_next(),
        ContentMessage::SelectFirst => app.rules_mut(kind).select_first(),
        ContentMessage::SelectLast => app.rules_mut(kind).select_last(),

        ContentMessage::SortBy(column) => {
            app.rules_mut(kind).sort_by(column);
        }

        ContentMessage::Add => {
            app.rules_mut(kind).controller.open_add();
            app.modal.show_item_form(kind);
        }

        ContentMessage::Open | ContentMessage::Edit => {
            let Some(idx) = selected_idx(app, kind) else {
                return;
            };
            match app.rules_mut(kind).controller.open_edit(idx) {
                Ok(()) => app.modal.show_item_form(kind),
                Err(e) => log::debug!("[{kind}] Cannot edit #{idx}: {e}"),
            }
        }

        ContentMessage::Delete => {
            if let Some(idx) = selected_idx(app, kind) {
                let task = app.rules(kind).controller.delete_task(idx);
                spawn(app, kind, task);
            }
        }

        ContentMessage::Toggle => {
            if let Some(idx) = selected_idx(app, kind) {
                let task = app.rules(kind).controller.toggle_task(idx);
                spawn(app, kind, task);
            }
        }

        // 过滤只在日志页
        ContentMessage::StartFilter
        | ContentMessage::FilterInput(_)
        | ContentMessage::FilterBackspace
        | ContentMessage::FinishFilter
        | ContentMessage::FilterBySelectedIp
        | ContentMessage::ClearFilter => {}
    }
}

fn selected_idx(app: &App, kind: ResourceKind) -> Option<i64> {
    app.rules(kind).selected_row().map(|row| row.idx)
}

fn spawn(app: &App, kind: ResourceKind, task: CoreResult<BoxFuture<'static, ListOutcome>>) {
    match task {
        Ok(task) => app.core.spawn_list(kind, task),
        Err(e) => log::debug!("[{kind}] Action skipped: {e}"),
    }
}

// ========== 访问日志 ==========

fn update_logs(app: &mut App, msg: ContentMessage) {
    let logs = &mut app.logs;
    match msg {
        ContentMessage::SelectPrevious => logs.select_previous(),
        ContentMessage::SelectNext => logs.select_next(),
        ContentMessage::SelectFirst => logs.select_first(),
        ContentMessage::SelectLast => logs.select_last(),

        ContentMessage::SortBy(column) => {
            logs.sort_by(column);
        }

        ContentMessage::Open => {
            if let Some(row) = logs.selected_row().cloned() {
                app.modal.show_reason(row);
            }
        }

        ContentMessage::StartFilter => logs.start_filter(),
        ContentMessage::FilterInput(ch) => logs.push_filter_char(ch),
        ContentMessage::FilterBackspace => logs.pop_filter_char(),
        ContentMessage::FinishFilter => logs.finish_filter(),
        ContentMessage::FilterBySelectedIp => {
            if let Some(ip) = logs.filter_by_selected_ip() {
                log::debug!("Filtering decision log by client {ip}");
            }
        }
        ContentMessage::ClearFilter => logs.clear_filter(),

        // 日志是只读的
        ContentMessage::Add
        | ContentMessage::Edit
        | ContentMessage::Delete
        | ContentMessage::Toggle => {}
    }
}
