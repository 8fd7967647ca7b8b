//! 规则行渲染
//!
//! `ListItem -> RowView` 的纯映射。行里同时保存显示文本和原始值：
//! 排序用原始值，编辑弹窗也从原始值预填，不重新请求服务端。

use crate::table::sort::{SortKey, SortableRow};
use crate::types::{ItemFields, ListItem, ListType, Timestamp};
use crate::utils::datetime::DEFAULT_DISPLAY_FORMAT;

/// 状态标签类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Allow,
    Deny,
    /// 隐藏域名没有 allow/deny，固定显示“成功”
    Success,
}

/// 状态标签文本（由宿主按语言提供）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLabels {
    pub allow: String,
    pub deny: String,
    pub success: String,
}

impl Default for StatusLabels {
    fn default() -> Self {
        Self {
            allow: "Allow".to_string(),
            deny: "Deny".to_string(),
            success: "Success".to_string(),
        }
    }
}

impl StatusLabels {
    fn label(&self, kind: StatusKind) -> &str {
        match kind {
            StatusKind::Allow => &self.allow,
            StatusKind::Deny => &self.deny,
            StatusKind::Success => &self.success,
        }
    }
}

/// 启停按钮图标
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleIcon {
    Pause,
    Play,
}

/// 启停按钮文案
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleWording {
    Disable,
    Enable,
}

/// 启停按钮：外观取决于当前是否启用
///
/// | 当前状态 | 图标 | 文案 | 点击后 |
/// |----------|------|------|--------|
/// | 启用 | Pause | Disable | 停用 |
/// | 停用 | Play | Enable | 启用 |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleAffordance {
    pub icon: ToggleIcon,
    pub wording: ToggleWording,
    /// 点击后要设置的 `is_active`
    pub target_active: bool,
}

impl ToggleAffordance {
    pub fn for_state(is_active: bool) -> Self {
        if is_active {
            Self {
                icon: ToggleIcon::Pause,
                wording: ToggleWording::Disable,
                target_active: false,
            }
        } else {
            Self {
                icon: ToggleIcon::Play,
                wording: ToggleWording::Enable,
                target_active: true,
            }
        }
    }
}

/// 行操作（编辑 / 启停 / 删除）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowActions {
    pub idx: i64,
    pub toggle: ToggleAffordance,
}

/// 一行规则
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub idx: i64,
    pub status: StatusKind,
    pub status_label: String,
    /// 显示“已停用”标记
    pub inactive: bool,
    pub list_type: Option<ListType>,
    /// 原始主体（CIDR / 域名）
    pub value: String,
    /// 原始描述
    pub description: String,
    pub updated_at: Timestamp,
    pub updated_display: String,
    pub actions: RowActions,
}

impl RowView {
    pub fn is_active(&self) -> bool {
        !self.inactive
    }

    /// 编辑弹窗预填内容
    pub fn fields(&self) -> ItemFields {
        ItemFields {
            list_type: self.list_type,
            value: self.value.clone(),
            description: self.description.clone(),
        }
    }
}

impl SortableRow for RowView {
    fn sort_key(&self, column: usize) -> SortKey<'_> {
        match column {
            0 => SortKey::Text(&self.status_label),
            1 => SortKey::Text(&self.value),
            2 => SortKey::Text(&self.description),
            3 => SortKey::Instant(self.updated_at.instant()),
            _ => SortKey::Text(""),
        }
    }
}

/// 行渲染器
#[derive(Debug, Clone)]
pub struct RowRenderer {
    labels: StatusLabels,
    timestamp_format: String,
}

impl Default for RowRenderer {
    fn default() -> Self {
        Self::new(StatusLabels::default(), DEFAULT_DISPLAY_FORMAT)
    }
}

impl RowRenderer {
    pub fn new(labels: StatusLabels, timestamp_format: impl Into<String>) -> Self {
        Self {
            labels,
            timestamp_format: timestamp_format.into(),
        }
    }

    pub fn render(&self, item: &ListItem) -> RowView {
        let status = match item.list_type {
            Some(ListType::Allow) => StatusKind::Allow,
            Some(ListType::Deny) => StatusKind::Deny,
            None => StatusKind::Success,
        };
        let updated_at = Timestamp::parse(&item.updated_at);

        RowView {
            idx: item.idx,
            status,
            status_label: self.labels.label(status).to_string(),
            inactive: !item.is_active,
            list_type: item.list_type,
            value: item.value.clone(),
            description: item.description.clone(),
            updated_display: updated_at.display(&self.timestamp_format),
            updated_at,
            actions: RowActions {
                idx: item.idx,
                toggle: ToggleAffordance::for_state(item.is_active),
            },
        }
    }

    pub fn render_all(&self, items: &[ListItem]) -> Vec<RowView> {
        items.iter().map(|item| self.render(item)).collect()
    }
}
