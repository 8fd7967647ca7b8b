//! 访问日志表格
//!
//! ```text
//! 拉取结果 ──► apply_fetch()
//!   Ok(非空) ─► 整体重建 + 重新排序，清除提示
//!   Ok(空)   ─► 清空表格，显示 NoData
//!   Err(e)   ─► 保留上一次的内容，显示 FetchFailed
//! ```
//!
//! 过滤只隐藏行，不删除行。文本过滤和 IP 过滤不叠加：最后一次应用的那个生效。

use crate::error::CoreError;
use crate::table::log_row::{LogRowRenderer, LogRowView};
use crate::table::sort::{SortIndicator, SortState, TableSchema, TableSortEngine};
use crate::types::LogEntry;

/// 当前生效的过滤条件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogFilter {
    /// 全文过滤；`query` 为用户输入原文，`needle` 为其小写形式
    Text { query: String, needle: String },
    /// 客户端 IP 精确匹配
    Ip(String),
}

/// 表格上方的提示
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogBanner {
    /// 拉取成功但没有日志
    NoData,
    /// 本轮拉取失败；`message` 为服务端给出的说明（如有）
    FetchFailed { message: Option<String> },
}

/// 日志表格
#[derive(Debug, Clone)]
pub struct LogTable {
    renderer: LogRowRenderer,
    entries: Vec<LogEntry>,
    rows: Vec<LogRowView>,
    sort: TableSortEngine,
    filter: Option<LogFilter>,
    banner: Option<LogBanner>,
    loaded: bool,
}

impl Default for LogTable {
    fn default() -> Self {
        Self::new(LogRowRenderer::default())
    }
}

impl LogTable {
    pub fn new(renderer: LogRowRenderer) -> Self {
        Self {
            renderer,
            entries: Vec::new(),
            rows: Vec::new(),
            sort: TableSortEngine::new(TableSchema::LOG),
            filter: None,
            banner: None,
            loaded: false,
        }
    }

    /// 应用一轮拉取结果
    pub fn apply_fetch(&mut self, result: Result<Vec<LogEntry>, CoreError>) {
        match result {
            Ok(entries) => {
                self.banner = entries.is_empty().then_some(LogBanner::NoData);
                self.entries = entries;
                self.loaded = true;
                self.rebuild();
            }
            Err(e) => {
                e.log("Failed to fetch decision log");
                self.banner = Some(LogBanner::FetchFailed {
                    message: e.server_message(),
                });
            }
        }
    }

    /// 更换渲染器（切换语言 / 时间格式后），用当前数据重建
    pub fn set_renderer(&mut self, renderer: LogRowRenderer) {
        self.renderer = renderer;
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.rows = self.renderer.render_all(&self.entries);
        self.sort.reapply(&mut self.rows);
    }

    /// 全文过滤：每次输入变化时调用；空字符串显示全部
    pub fn set_text_filter(&mut self, query: &str) {
        self.filter = Some(LogFilter::Text {
            query: query.to_string(),
            needle: query.to_lowercase(),
        });
    }

    /// 只显示客户端 IP 等于 `ip` 的行
    pub fn filter_by_ip(&mut self, ip: &str) {
        self.filter = Some(LogFilter::Ip(ip.trim().to_string()));
    }

    /// 清除过滤，显示全部
    pub fn clear_filter(&mut self) {
        self.filter = None;
    }

    pub fn filter(&self) -> Option<&LogFilter> {
        self.filter.as_ref()
    }

    /// 当前 IP 过滤值（用于显示过滤标记）
    pub fn ip_filter(&self) -> Option<&str> {
        match &self.filter {
            Some(LogFilter::Ip(ip)) => Some(ip),
            _ => None,
        }
    }

    pub fn is_visible(&self, row: &LogRowView) -> bool {
        match &self.filter {
            None => true,
            Some(LogFilter::Text { needle, .. }) => row.matches_text(needle),
            Some(LogFilter::Ip(ip)) => row.client_ip == *ip,
        }
    }

    /// 所有行（包括被过滤隐藏的）
    pub fn rows(&self) -> &[LogRowView] {
        &self.rows
    }

    /// 可见行
    pub fn visible_rows(&self) -> impl Iterator<Item = &LogRowView> {
        self.rows.iter().filter(|row| self.is_visible(row))
    }

    pub fn visible_count(&self) -> usize {
        self.visible_rows().count()
    }

    pub fn banner(&self) -> Option<&LogBanner> {
        self.banner.as_ref()
    }

    /// 是否至少成功拉取过一次
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// 选择表头
    pub fn sort_by(&mut self, column: usize) -> bool {
        self.sort.sort(column, &mut self.rows)
    }

    pub fn sort_state(&self) -> SortState {
        self.sort.state()
    }

    pub fn indicator(&self, column: usize) -> SortIndicator {
        self.sort.indicator(column)
    }
}
