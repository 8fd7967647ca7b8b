//! 日志行渲染

use crate::table::sort::{SortKey, SortableRow};
use crate::types::{Decision, LogEntry, Timestamp};
use crate::utils::datetime::DEFAULT_DISPLAY_FORMAT;

/// 日志相关文本（由宿主按语言提供）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLabels {
    pub allow: String,
    pub deny: String,
    pub unknown: String,
    /// 服务端没有给出原因时显示
    pub no_reason: String,
}

impl Default for LogLabels {
    fn default() -> Self {
        Self {
            allow: "Allow".to_string(),
            deny: "Deny".to_string(),
            unknown: "Unknown".to_string(),
            no_reason: "No reason given".to_string(),
        }
    }
}

/// 一行日志
#[derive(Debug, Clone, PartialEq)]
pub struct LogRowView {
    pub decision: Decision,
    pub decision_label: String,
    pub client_ip: String,
    pub url: String,
    pub method: Option<String>,
    pub score: Option<f64>,
    /// 原因（缺省时已替换为 `no_reason` 文本）
    pub reason: String,
    pub timestamp: Timestamp,
    pub time_display: String,
    /// 所有单元格小写后以空格拼接，供全文过滤
    search_text: String,
}

impl LogRowView {
    /// 是否包含 `needle`（`needle` 需已转小写）
    pub fn matches_text(&self, needle: &str) -> bool {
        self.search_text.contains(needle)
    }
}

impl SortableRow for LogRowView {
    fn sort_key(&self, column: usize) -> SortKey<'_> {
        match column {
            0 => SortKey::Text(&self.decision_label),
            1 => SortKey::Text(&self.client_ip),
            2 => SortKey::Text(&self.url),
            3 => SortKey::Instant(self.timestamp.instant()),
            _ => SortKey::Text(""),
        }
    }
}

/// 日志行渲染器
#[derive(Debug, Clone)]
pub struct LogRowRenderer {
    labels: LogLabels,
    timestamp_format: String,
}

impl Default for LogRowRenderer {
    fn default() -> Self {
        Self::new(LogLabels::default(), DEFAULT_DISPLAY_FORMAT)
    }
}

impl LogRowRenderer {
    pub fn new(labels: LogLabels, timestamp_format: impl Into<String>) -> Self {
        Self {
            labels,
            timestamp_format: timestamp_format.into(),
        }
    }

    pub fn render(&self, entry: &LogEntry) -> LogRowView {
        let decision_label = match entry.decision {
            Decision::Allow => &self.labels.allow,
            Decision::Deny => &self.labels.deny,
            Decision::Unknown => &self.labels.unknown,
        }
        .clone();
        let timestamp = Timestamp::parse(&entry.timestamp);
        let time_display = timestamp.display(&self.timestamp_format);

        let search_text = [
            decision_label.as_str(),
            entry.client_ip.as_str(),
            entry.url.as_str(),
            time_display.as_str(),
        ]
        .join(" ")
        .to_lowercase();

        LogRowView {
            decision: entry.decision,
            decision_label,
            client_ip: entry.client_ip.clone(),
            url: entry.url.clone(),
            method: entry.method.clone(),
            score: entry.score,
            reason: entry
                .reason
                .clone()
                .unwrap_or_else(|| self.labels.no_reason.clone()),
            timestamp,
            time_display,
            search_text,
        }
    }

    pub fn render_all(&self, entries: &[LogEntry]) -> Vec<LogRowView> {
        entries.iter().map(|entry| self.render(entry)).collect()
    }
}
