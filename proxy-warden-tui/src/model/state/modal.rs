//! 弹窗/对话框状态

use std::collections::VecDeque;

use proxy_warden_core::table::LogRowView;
use proxy_warden_core::types::ResourceKind;

use crate::backend::ConfirmRequest;

/// 弹窗类型
#[derive(Debug)]
pub enum Modal {
    /// 添加 / 编辑规则
    ///
    /// 表单内容保存在对应资源的 `ListController` 里，这里只记录是哪种资源。
    ItemForm { kind: ResourceKind },
    /// 删除 / 启停确认；后台任务在等待 `request` 的回答
    Confirm {
        request: ConfirmRequest,
        /// 焦点在“是”按钮上（默认在“否”）
        accept_focused: bool,
    },
    /// 访问日志的决策原因
    Reason(LogRowView),
    /// 帮助信息
    Help,
    /// 错误提示
    Error { title: String, message: String },
}

/// 弹窗状态
///
/// 同一时间只显示一个弹窗。确认请求来自后台任务，可能在其他弹窗打开时
/// 到达，先排队，前一个弹窗关闭后依次显示。
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
    pending_confirms: VecDeque<ConfirmRequest>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 关闭弹窗；未回答的确认视为拒绝
    pub fn close(&mut self) {
        if let Some(Modal::Confirm { request, .. }) = self.active.take() {
            request.answer(false);
        }
        self.show_next_confirm();
    }

    pub fn show_item_form(&mut self, kind: ResourceKind) {
        self.active = Some(Modal::ItemForm { kind });
    }

    pub fn show_reason(&mut self, row: LogRowView) {
        self.active = Some(Modal::Reason(row));
    }

    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    pub fn show_error(&mut self, title: &str, message: &str) {
        self.active = Some(Modal::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    // ========== 确认 ==========

    /// 收到确认请求
    pub fn push_confirm(&mut self, request: ConfirmRequest) {
        self.pending_confirms.push_back(request);
        if !self.is_open() {
            self.show_next_confirm();
        }
    }

    /// 在“是 / 否”之间切换焦点
    pub fn toggle_confirm_focus(&mut self) {
        if let Some(Modal::Confirm { accept_focused, .. }) = self.active.as_mut() {
            *accept_focused = !*accept_focused;
        }
    }

    /// 按焦点回答当前确认
    pub fn answer_confirm(&mut self) {
        let Some(Modal::Confirm {
            request,
            accept_focused,
        }) = self.active.take()
        else {
            return;
        };
        request.answer(accept_focused);
        self.show_next_confirm();
    }

    fn show_next_confirm(&mut self) {
        if self.active.is_none() {
            self.active = self
                .pending_confirms
                .pop_front()
                .map(|request| Modal::Confirm {
                    request,
                    accept_focused: false,
                });
        }
    }
}
