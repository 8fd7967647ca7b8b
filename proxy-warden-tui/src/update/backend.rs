//! 后台结果更新逻辑

use proxy_warden_core::services::{MutationKind, Notice, NoticeAction};
use proxy_warden_core::types::ResourceKind;

use crate::i18n::t;
use crate::message::BackendMessage;
use crate::model::{App, Modal};

/// 处理后台任务结果
pub fn update(app: &mut App, msg: BackendMessage) {
    match msg {
        BackendMessage::List { kind, outcome } => {
            let rules = app.rules_mut(kind);
            rules.apply(outcome);
            let notice = rules.controller.take_notice();
            let dialog_closed = rules.controller.dialog().is_none();

            // 提交成功后控制器已关闭表单，弹窗跟着关闭
            if dialog_closed && is_form_for(app, kind) {
                app.modal.close();
            }
            if let Some(notice) = notice {
                show_notice(app, notice);
            }
        }

        BackendMessage::Logs(result) => app.logs.apply_fetch(result),

        BackendMessage::Confirm(request) => app.modal.push_confirm(request),
    }
}

fn is_form_for(app: &App, kind: ResourceKind) -> bool {
    matches!(app.modal.active, Some(Modal::ItemForm { kind: k }) if k == kind)
}

fn show_notice(app: &mut App, notice: Notice) {
    match notice {
        Notice::Info(message) => app.set_status(message),
        Notice::Failure { action, message } => {
            let text = message.unwrap_or_else(|| fallback_text(action).to_string());
            app.set_error(text);
        }
    }
}

/// 服务端没有给出说明时的本地化提示
fn fallback_text(action: NoticeAction) -> &'static str {
    let texts = &t().status_bar;
    match action {
        NoticeAction::Load => texts.load_failed,
        NoticeAction::Mutation(MutationKind::Create) => texts.create_failed,
        NoticeAction::Mutation(MutationKind::Update) => texts.update_failed,
        NoticeAction::Mutation(MutationKind::Delete) => texts.delete_failed,
        NoticeAction::Mutation(MutationKind::Toggle) => texts.toggle_failed,
    }
}
