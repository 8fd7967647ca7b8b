//! 弹窗更新逻辑

use proxy_warden_core::types::{FormField, ResourceKind};
use proxy_warden_core::CoreError;

use crate::message::ModalMessage;
use crate::model::{App, Modal};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    let form_kind = match app.modal.active {
        Some(Modal::ItemForm { kind }) => Some(kind),
        _ => None,
    };

    match (msg, form_kind) {
        (ModalMessage::Close, Some(kind)) => {
            app.rules_mut(kind).controller.close_dialog();
            app.modal.close();
        }
        (ModalMessage::Close, None) => app.modal.close(),

        (msg, Some(kind)) => update_item_form(app, kind, msg),

        (ModalMessage::SwitchOption | ModalMessage::NextField | ModalMessage::PrevField, None) => {
            app.modal.toggle_confirm_focus();
        }
        (ModalMessage::Confirm, None) => {
            if matches!(app.modal.active, Some(Modal::Confirm { .. })) {
                app.modal.answer_confirm();
            } else {
                app.modal.close();
            }
        }
        (ModalMessage::Input(_) | ModalMessage::Backspace, None) => {}
    }
}

/// 添加 / 编辑表单
fn update_item_form(app: &mut App, kind: ResourceKind, msg: ModalMessage) {
    if matches!(msg, ModalMessage::Confirm) {
        submit(app, kind);
        return;
    }

    let Some(dialog) = app.rules_mut(kind).controller.dialog_mut() else {
        return;
    };
    // 等待服务端响应时不允许修改
    if dialog.pending {
        return;
    }

    match msg {
        ModalMessage::NextField => dialog.focus = step_field(kind, dialog.focus, true),
        ModalMessage::PrevField => dialog.focus = step_field(kind, dialog.focus, false),
        ModalMessage::SwitchOption => {
            if dialog.focus == FormField::ListType {
                dialog.fields.list_type = dialog.fields.list_type.map(|t| t.flipped());
            }
        }
        ModalMessage::Input(ch) => match dialog.focus {
            FormField::Value => dialog.fields.value.push(ch),
            FormField::Description => dialog.fields.description.push(ch),
            FormField::ListType => {}
        },
        ModalMessage::Backspace => match dialog.focus {
            FormField::Value => {
                dialog.fields.value.pop();
            }
            FormField::Description => {
                dialog.fields.description.pop();
            }
            FormField::ListType => {}
        },
        ModalMessage::Close | ModalMessage::Confirm => {}
    }
}

/// 循环切换字段
fn step_field(kind: ResourceKind, current: FormField, forward: bool) -> FormField {
    let order = FormField::order(kind);
    let pos = order.iter().position(|f| *f == current).unwrap_or(0);
    let next = if forward {
        (pos + 1) % order.len()
    } else {
        (pos + order.len() - 1) % order.len()
    };
    order[next]
}

/// 提交表单；校验失败时错误已经写进弹窗，弹窗保持打开
fn submit(app: &mut App, kind: ResourceKind) {
    match app.rules_mut(kind).controller.submit_task() {
        Ok(task) => app.core.spawn_list(kind, task),
        Err(CoreError::Validation { field, issue }) => {
            log::debug!("[{kind}] Form rejected locally: {field} {issue}");
        }
        Err(e) => log::debug!("[{kind}] Submit skipped: {e}"),
    }
}
