//! 规则列表控制器
//!
//! 一个控制器对应一种资源（CIDR / 域名 / 隐藏域名），三者共用同一套逻辑，
//! 差异只由 [`ResourceKind`] 决定。
//!
//! ```text
//!            open_add / open_edit          submit ok
//!   Idle ───────────────────────► Dialog ──────────► Idle + reload
//!     │                             │ submit err
//!     │                             └──► Dialog（显示错误，保持打开）
//!     │ delete / toggle
//!     └──► confirm? ── no ──► Idle（无副作用）
//!                  └─ yes ─► remove / set_active ─► reload
//! ```
//!
//! 网络请求与状态修改分离：`*_task()` 返回 `'static` future（可以丢给任意
//! 运行时），完成后把 [`ListOutcome`] 交给 [`ListController::apply`] 更新状态。
//! 便捷方法 `load()` / `submit()` / `delete()` / `toggle()` 把两步合在一起。
//!
//! 失败不会修改表格：表格始终是最后一次成功加载的内容。

use std::sync::Arc;

use futures::future::BoxFuture;
use futures::FutureExt;

use crate::error::{CoreError, CoreResult};
use crate::table::{ListTable, RowRenderer, RowView};
use crate::traits::{ConfirmPrompt, Confirmer, ListResource};
use crate::types::{FormField, ItemFields, ListItem, ListType, MutationReply, ResourceKind};
use crate::utils::validation::{normalized, validate_fields, ValidationIssue};

/// 修改类操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
    Toggle,
}

/// 一次异步操作的结果
#[derive(Debug)]
pub enum ListOutcome {
    /// 列表加载完成
    Loaded(CoreResult<Vec<ListItem>>),
    /// 用户取消了确认
    Cancelled,
    /// 修改完成；成功时附带随后的重新加载结果
    Mutated {
        kind: MutationKind,
        /// 发起提交的弹窗编号；删除和启停为 `None`
        origin: Option<u64>,
        result: CoreResult<MutationReply>,
        reloaded: Option<CoreResult<Vec<ListItem>>>,
    },
}

/// 状态栏提示
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// 服务端返回的成功消息
    Info(String),
    /// 失败；`message` 为服务端说明，`None` 时由宿主显示本地化的通用提示
    Failure {
        action: NoticeAction,
        message: Option<String>,
    },
}

/// 失败的操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeAction {
    Load,
    Mutation(MutationKind),
}

/// 弹窗模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    Add,
    Edit { idx: i64 },
}

/// 弹窗中显示的错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogError {
    /// 本地校验失败
    Validation {
        field: FormField,
        issue: ValidationIssue,
    },
    /// 服务端拒绝或网络失败
    Server { message: Option<String> },
}

/// 添加 / 编辑弹窗
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDialog {
    pub mode: DialogMode,
    pub fields: ItemFields,
    pub focus: FormField,
    pub error: Option<DialogError>,
    /// 已提交，等待服务端响应
    pub pending: bool,
    /// 每次打开弹窗递增，用来认出迟到的提交结果
    ticket: u64,
}

impl ItemDialog {
    fn new(kind: ResourceKind, mode: DialogMode, fields: ItemFields, ticket: u64) -> Self {
        Self {
            mode,
            fields,
            focus: FormField::order(kind)[0],
            error: None,
            pending: false,
            ticket,
        }
    }
}

/// 规则列表控制器
pub struct ListController {
    kind: ResourceKind,
    resource: Arc<dyn ListResource>,
    confirmer: Arc<dyn Confirmer>,
    renderer: RowRenderer,
    items: Vec<ListItem>,
    table: ListTable,
    dialog: Option<ItemDialog>,
    notice: Option<Notice>,
    loaded: bool,
    next_ticket: u64,
}

impl ListController {
    pub fn new(
        resource: Arc<dyn ListResource>,
        confirmer: Arc<dyn Confirmer>,
        renderer: RowRenderer,
    ) -> Self {
        Self {
            kind: resource.kind(),
            resource,
            confirmer,
            renderer,
            items: Vec::new(),
            table: ListTable::default(),
            dialog: None,
            notice: None,
            loaded: false,
            next_ticket: 0,
        }
    }

    // ========== 状态访问 ==========

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn table(&self) -> &ListTable {
        &self.table
    }

    pub fn dialog(&self) -> Option<&ItemDialog> {
        self.dialog.as_ref()
    }

    /// 编辑弹窗内容（输入框绑定到这里）
    pub fn dialog_mut(&mut self) -> Option<&mut ItemDialog> {
        self.dialog.as_mut()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// 是否至少成功加载过一次
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// 更换渲染器（切换语言 / 时间格式后），用当前数据重建表格
    pub fn set_renderer(&mut self, renderer: RowRenderer) {
        self.renderer = renderer;
        self.table.replace(&self.items, &self.renderer);
    }

    /// 选择表头
    pub fn sort_by(&mut self, column: usize) -> bool {
        self.table.sort_by(column)
    }

    // ========== 弹窗 ==========

    /// 打开添加弹窗（空表单）
    pub fn open_add(&mut self) {
        let fields = ItemFields {
            list_type: self.kind.has_list_type().then_some(ListType::Allow),
            ..ItemFields::default()
        };
        let ticket = self.issue_ticket();
        self.dialog = Some(ItemDialog::new(self.kind, DialogMode::Add, fields, ticket));
    }

    /// 打开编辑弹窗，从行内原始值预填
    pub fn open_edit(&mut self, idx: i64) -> CoreResult<()> {
        let fields = self.row(idx)?.fields();
        let ticket = self.issue_ticket();
        self.dialog = Some(ItemDialog::new(
            self.kind,
            DialogMode::Edit { idx },
            fields,
            ticket,
        ));
        Ok(())
    }

    fn issue_ticket(&mut self) -> u64 {
        self.next_ticket += 1;
        self.next_ticket
    }

    /// 关闭弹窗（丢弃表单内容）
    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    // ========== 异步任务 ==========

    /// 加载列表
    pub fn load_task(&self) -> BoxFuture<'static, ListOutcome> {
        let resource = Arc::clone(&self.resource);
        async move { ListOutcome::Loaded(resource.list().await) }.boxed()
    }

    /// 提交弹窗
    ///
    /// 本地校验失败时不发请求：错误写入弹窗，焦点移到出错字段，并返回
    /// `CoreError::Validation`。
    pub fn submit_task(&mut self) -> CoreResult<BoxFuture<'static, ListOutcome>> {
        let kind = self.kind;
        let dialog = self.dialog.as_mut().ok_or(CoreError::NoDialog)?;
        if dialog.pending {
            return Err(CoreError::SubmissionPending);
        }

        if let Err((field, issue)) = validate_fields(kind, &dialog.fields) {
            dialog.focus = field;
            dialog.error = Some(DialogError::Validation { field, issue });
            return Err(CoreError::Validation { field, issue });
        }

        dialog.error = None;
        dialog.pending = true;

        let mut fields = normalized(&dialog.fields);
        if !kind.has_list_type() {
            fields.list_type = None;
        }
        let mode = dialog.mode;
        let origin = Some(dialog.ticket);
        let resource = Arc::clone(&self.resource);

        Ok(async move {
            let (mutation, result) = match mode {
                DialogMode::Add => (MutationKind::Create, resource.create(&fields).await),
                DialogMode::Edit { idx } => {
                    (MutationKind::Update, resource.update(idx, &fields).await)
                }
            };
            finish_mutation(resource.as_ref(), mutation, origin, result).await
        }
        .boxed())
    }

    /// 删除（先确认）
    pub fn delete_task(&self, idx: i64) -> CoreResult<BoxFuture<'static, ListOutcome>> {
        let row = self.row(idx)?;
        let prompt = ConfirmPrompt::Delete {
            kind: self.kind,
            idx,
            value: row.value.clone(),
        };
        let resource = Arc::clone(&self.resource);
        let confirmer = Arc::clone(&self.confirmer);

        Ok(async move {
            if !confirmer.confirm(&prompt).await {
                return ListOutcome::Cancelled;
            }
            let result = resource.remove(idx).await;
            finish_mutation(resource.as_ref(), MutationKind::Delete, None, result).await
        }
        .boxed())
    }

    /// 启用 / 停用（先确认，提示语取决于当前状态）
    pub fn toggle_task(&self, idx: i64) -> CoreResult<BoxFuture<'static, ListOutcome>> {
        let row = self.row(idx)?;
        let activate = row.actions.toggle.target_active;
        let prompt = ConfirmPrompt::Toggle {
            kind: self.kind,
            idx,
            value: row.value.clone(),
            activate,
        };
        let resource = Arc::clone(&self.resource);
        let confirmer = Arc::clone(&self.confirmer);

        Ok(async move {
            if !confirmer.confirm(&prompt).await {
                return ListOutcome::Cancelled;
            }
            let result = resource.set_active(idx, activate).await;
            finish_mutation(resource.as_ref(), MutationKind::Toggle, None, result).await
        }
        .boxed())
    }

    // ========== 状态更新 ==========

    /// 应用异步操作结果
    pub fn apply(&mut self, outcome: ListOutcome) {
        match outcome {
            ListOutcome::Cancelled => {
                log::debug!("[{}] Action cancelled by user", self.kind);
            }
            ListOutcome::Loaded(result) => self.apply_load(result),
            ListOutcome::Mutated {
                kind,
                origin,
                result: Ok(reply),
                reloaded,
            } => {
                log::info!("[{}] {kind:?} succeeded", self.kind);
                if self.is_origin(origin) {
                    self.dialog = None;
                }
                self.notice = reply.message.map(Notice::Info);
                if let Some(result) = reloaded {
                    self.apply_load(result);
                }
            }
            ListOutcome::Mutated {
                kind,
                origin,
                result: Err(e),
                ..
            } => {
                e.log(&format!("[{}] {kind:?} failed", self.kind));
                let message = e.server_message();
                let is_origin = self.is_origin(origin);
                match self.dialog.as_mut() {
                    Some(dialog) if is_origin => {
                        dialog.pending = false;
                        dialog.error = Some(DialogError::Server { message });
                    }
                    _ => {
                        self.notice = Some(Notice::Failure {
                            action: NoticeAction::Mutation(kind),
                            message,
                        });
                    }
                }
            }
        }
    }

    /// 结果是否属于当前打开的弹窗（弹窗可能已关闭或换成了新的）
    fn is_origin(&self, origin: Option<u64>) -> bool {
        match (origin, self.dialog.as_ref()) {
            (Some(ticket), Some(dialog)) => dialog.ticket == ticket,
            _ => false,
        }
    }

    fn apply_load(&mut self, result: CoreResult<Vec<ListItem>>) {
        match result {
            Ok(items) => {
                log::debug!("[{}] Loaded {} items", self.kind, items.len());
                self.table.replace(&items, &self.renderer);
                self.items = items;
                self.loaded = true;
                if matches!(
                    self.notice,
                    Some(Notice::Failure {
                        action: NoticeAction::Load,
                        ..
                    })
                ) {
                    self.notice = None;
                }
            }
            Err(e) => {
                e.log(&format!("[{}] Failed to load list", self.kind));
                self.notice = Some(Notice::Failure {
                    action: NoticeAction::Load,
                    message: e.server_message(),
                });
            }
        }
    }

    // ========== 便捷方法 ==========

    /// 加载并应用
    pub async fn load(&mut self) {
        let outcome = self.load_task().await;
        self.apply(outcome);
    }

    /// 提交弹窗并应用
    pub async fn submit(&mut self) -> CoreResult<()> {
        let outcome = self.submit_task()?.await;
        self.apply(outcome);
        Ok(())
    }

    /// 删除并应用
    pub async fn delete(&mut self, idx: i64) -> CoreResult<()> {
        let outcome = self.delete_task(idx)?.await;
        self.apply(outcome);
        Ok(())
    }

    /// 启停并应用
    pub async fn toggle(&mut self, idx: i64) -> CoreResult<()> {
        let outcome = self.toggle_task(idx)?.await;
        self.apply(outcome);
        Ok(())
    }

    fn row(&self, idx: i64) -> CoreResult<&RowView> {
        self.table.find(idx).ok_or(CoreError::ItemNotFound(idx))
    }
}

/// 修改成功后重新加载列表
async fn finish_mutation(
    resource: &dyn ListResource,
    kind: MutationKind,
    origin: Option<u64>,
    result: CoreResult<MutationReply>,
) -> ListOutcome {
    let reloaded = match &result {
        Ok(_) => Some(resource.list().await),
        Err(_) => None,
    };
    ListOutcome::Mutated {
        kind,
        origin,
        result,
        reloaded,
    }
}
