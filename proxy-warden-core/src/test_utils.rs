//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::services::ListController;
use crate::table::RowRenderer;
use crate::traits::{ConfirmPrompt, Confirmer, ListResource, LogSource};
use crate::types::{Decision, ItemFields, ListItem, ListType, LogEntry, MutationReply, ResourceKind};

fn base_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 5)
        .and_then(|d| d.and_hms_opt(10, 0, 0))
        .unwrap_or_default()
}

pub fn cidr_item(idx: i64, cidr: &str) -> ListItem {
    ListItem {
        idx,
        value: cidr.to_string(),
        list_type: Some(ListType::Deny),
        description: String::new(),
        is_active: true,
        updated_at: base_time().format("%Y-%m-%dT%H:%M:%S").to_string(),
    }
}

pub fn domain_item(idx: i64, domain: &str) -> ListItem {
    ListItem {
        list_type: Some(ListType::Allow),
        ..cidr_item(idx, domain)
    }
}

pub fn log_entry(ip: &str, decision: Decision, timestamp: &str) -> LogEntry {
    LogEntry {
        idx: None,
        timestamp: timestamp.to_string(),
        client_ip: ip.to_string(),
        url: "example.com:443".to_string(),
        method: Some("CONNECT".to_string()),
        decision,
        score: None,
        reason: None,
    }
}

/// 构造控制器，确认提示固定返回 `answer`
pub fn controller(
    resource: Arc<MockListResource>,
    answer: bool,
) -> (ListController, Arc<FixedConfirmer>) {
    let confirmer = Arc::new(FixedConfirmer::new(answer));
    let ctl = ListController::new(resource, confirmer.clone(), RowRenderer::default());
    (ctl, confirmer)
}

// ===== MockListResource =====

/// 内存中的列表资源：分配 `idx`，每次修改刷新 `updated_at`
pub struct MockListResource {
    kind: ResourceKind,
    items: RwLock<Vec<ListItem>>,
    next_idx: RwLock<i64>,
    clock: RwLock<i64>,
    calls: RwLock<Vec<String>>,
    /// 如果 Some，list 时返回此错误
    list_error: RwLock<Option<CoreError>>,
    /// 如果 Some，下一次修改返回此错误（用一次即清除）
    mutation_error: RwLock<Option<CoreError>>,
}

impl MockListResource {
    pub fn new(kind: ResourceKind) -> Arc<Self> {
        Self::with_items(kind, Vec::new())
    }

    pub fn with_items(kind: ResourceKind, items: Vec<ListItem>) -> Arc<Self> {
        let next_idx = items.iter().map(|i| i.idx).max().unwrap_or(0) + 1;
        Arc::new(Self {
            kind,
            items: RwLock::new(items),
            next_idx: RwLock::new(next_idx),
            clock: RwLock::new(0),
            calls: RwLock::new(Vec::new()),
            list_error: RwLock::new(None),
            mutation_error: RwLock::new(None),
        })
    }

    pub async fn set_list_error(&self, err: Option<CoreError>) {
        *self.list_error.write().await = err;
    }

    pub async fn fail_next_mutation(&self, err: CoreError) {
        *self.mutation_error.write().await = Some(err);
    }

    /// 调用记录（`list` / `create` / `update:1` / ...）
    pub async fn calls(&self) -> Vec<String> {
        self.calls.read().await.clone()
    }

    async fn record(&self, call: String) {
        self.calls.write().await.push(call);
    }

    async fn tick(&self) -> String {
        let mut clock = self.clock.write().await;
        *clock += 1;
        (base_time() + Duration::seconds(*clock))
            .format("%Y-%m-%dT%H:%M:%S")
            .to_string()
    }

    async fn check_mutation(&self) -> CoreResult<()> {
        match self.mutation_error.write().await.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn reply(message: &str) -> MutationReply {
        MutationReply {
            message: Some(message.to_string()),
        }
    }
}

#[async_trait]
impl ListResource for MockListResource {
    fn kind(&self) -> ResourceKind {
        self.kind
    }

    async fn list(&self) -> CoreResult<Vec<ListItem>> {
        self.record("list".to_string()).await;
        if let Some(err) = self.list_error.read().await.as_ref() {
            return Err(clone_error(err));
        }
        Ok(self.items.read().await.clone())
    }

    async fn create(&self, fields: &ItemFields) -> CoreResult<MutationReply> {
        self.record("create".to_string()).await;
        self.check_mutation().await?;
        let mut next_idx = self.next_idx.write().await;
        let item = ListItem {
            idx: *next_idx,
            value: fields.value.clone(),
            list_type: fields.list_type,
            description: fields.description.clone(),
            is_active: true,
            updated_at: self.tick().await,
        };
        *next_idx += 1;
        self.items.write().await.push(item);
        Ok(Self::reply("created"))
    }

    async fn update(&self, idx: i64, fields: &ItemFields) -> CoreResult<MutationReply> {
        self.record(format!("update:{idx}")).await;
        self.check_mutation().await?;
        let updated_at = self.tick().await;
        let mut items = self.items.write().await;
        let item = items
            .iter_mut()
            .find(|i| i.idx == idx)
            .ok_or(CoreError::ItemNotFound(idx))?;
        item.value = fields.value.clone();
        item.list_type = fields.list_type;
        item.description = fields.description.clone();
        item.updated_at = updated_at;
        Ok(Self::reply("updated"))
    }

    async fn remove(&self, idx: i64) -> CoreResult<MutationReply> {
        self.record(format!("remove:{idx}")).await;
        self.check_mutation().await?;
        self.items.write().await.retain(|i| i.idx != idx);
        Ok(Self::reply("deleted"))
    }

    async fn set_active(&self, idx: i64, active: bool) -> CoreResult<MutationReply> {
        self.record(format!("set_active:{idx}:{active}")).await;
        self.check_mutation().await?;
        let updated_at = self.tick().await;
        let mut items = self.items.write().await;
        let item = items
            .iter_mut()
            .find(|i| i.idx == idx)
            .ok_or(CoreError::ItemNotFound(idx))?;
        item.is_active = active;
        item.updated_at = updated_at;
        Ok(Self::reply("toggled"))
    }
}

/// `CoreError` 不可 Clone；mock 只需要保留类别和文本
fn clone_error(err: &CoreError) -> CoreError {
    match err {
        CoreError::Api(api) => CoreError::Api(api.clone()),
        CoreError::ItemNotFound(idx) => CoreError::ItemNotFound(*idx),
        _ => CoreError::NoDialog,
    }
}

// ===== MockLogSource =====

/// 按脚本依次返回结果；脚本用完后返回空列表
pub struct MockLogSource {
    script: Mutex<VecDeque<CoreResult<Vec<LogEntry>>>>,
    calls: AtomicUsize,
}

impl MockLogSource {
    pub fn scripted(script: Vec<CoreResult<Vec<LogEntry>>>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(VecDeque::from(script)),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LogSource for MockLogSource {
    async fn fetch_logs(&self) -> CoreResult<Vec<LogEntry>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.script.lock().ok().and_then(|mut s| s.pop_front());
        next.unwrap_or_else(|| Ok(Vec::new()))
    }
}

// ===== FixedConfirmer =====

/// 固定回答的确认器，记录收到的提示
pub struct FixedConfirmer {
    answer: bool,
    prompts: Mutex<Vec<ConfirmPrompt>>,
}

impl FixedConfirmer {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<ConfirmPrompt> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl Confirmer for FixedConfirmer {
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.clone());
        }
        self.answer
    }
}
