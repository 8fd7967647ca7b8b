//! 表格排序引擎
//!
//! 每个表格实例（CIDR / 域名 / 隐藏域名 / 日志）各自持有一个 [`TableSortEngine`]，
//! 互不影响。
//!
//! ```text
//! sort(col):
//!   col == active  ──► ascending = !ascending
//!   col != active  ──► active = col, ascending = true
//!
//! reapply():  数据重新加载后按当前状态重排，不翻转方向
//! ```
//!
//! 比较规则由列类型决定：
//! - `Status`：比较状态标签文本
//! - `Timestamp`：比较解析后的时刻（无法解析的排在最前）
//! - `Text`：比较原始值；列表表格按码点比较，日志表格忽略大小写
//! - `Actions`：不可排序

use std::cmp::Ordering;

use chrono::NaiveDateTime;

/// 列类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Status,
    Text,
    Timestamp,
    Actions,
}

/// 文本比较方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collation {
    /// 按码点逐个比较（大写字母排在小写之前）
    Ordinal,
    /// 先统一转小写再比较
    CaseFolded,
}

/// 表格结构：各列类型 + 文本比较方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSchema {
    pub columns: &'static [ColumnKind],
    pub collation: Collation,
}

impl TableSchema {
    /// 规则列表：状态 | 主体 | 描述 | 更新时间 | 操作
    pub const LIST: Self = Self {
        columns: &[
            ColumnKind::Status,
            ColumnKind::Text,
            ColumnKind::Text,
            ColumnKind::Timestamp,
            ColumnKind::Actions,
        ],
        collation: Collation::Ordinal,
    };

    /// 访问日志：决策 | 客户端 IP | URL | 时间
    pub const LOG: Self = Self {
        columns: &[
            ColumnKind::Status,
            ColumnKind::Text,
            ColumnKind::Text,
            ColumnKind::Timestamp,
        ],
        collation: Collation::CaseFolded,
    };

    /// 列是否可排序
    pub fn is_sortable(&self, column: usize) -> bool {
        self.columns
            .get(column)
            .is_some_and(|kind| *kind != ColumnKind::Actions)
    }
}

/// 某一列的排序键
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey<'a> {
    Text(&'a str),
    Instant(Option<NaiveDateTime>),
}

/// 可排序的行
pub trait SortableRow {
    /// 第 `column` 列的排序键
    fn sort_key(&self, column: usize) -> SortKey<'_>;
}

/// 排序状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    /// 当前排序列（`None` 表示未排序）
    pub active_column: Option<usize>,
    /// 是否升序
    pub ascending: bool,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            active_column: None,
            ascending: true,
        }
    }
}

/// 表头指示符
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    /// 不可排序的列
    None,
    /// 可排序但未激活
    Unsorted,
    Ascending,
    Descending,
}

/// 稳定、按列切换方向的排序引擎
#[derive(Debug, Clone)]
pub struct TableSortEngine {
    schema: TableSchema,
    state: SortState,
}

impl TableSortEngine {
    pub fn new(schema: TableSchema) -> Self {
        Self {
            schema,
            state: SortState::default(),
        }
    }

    pub fn state(&self) -> SortState {
        self.state
    }

    /// 表头指示符
    pub fn indicator(&self, column: usize) -> SortIndicator {
        if !self.schema.is_sortable(column) {
            SortIndicator::None
        } else if self.state.active_column == Some(column) {
            if self.state.ascending {
                SortIndicator::Ascending
            } else {
                SortIndicator::Descending
            }
        } else {
            SortIndicator::Unsorted
        }
    }

    /// 选择表头：切换排序状态并重排 `rows`
    ///
    /// 不可排序的列返回 `false`，状态和行顺序都不变。
    pub fn sort<R: SortableRow>(&mut self, column: usize, rows: &mut [R]) -> bool {
        if !self.schema.is_sortable(column) {
            return false;
        }

        if self.state.active_column == Some(column) {
            self.state.ascending = !self.state.ascending;
        } else {
            self.state.active_column = Some(column);
            self.state.ascending = true;
        }

        self.reapply(rows);
        true
    }

    /// 按当前状态重排（数据刷新后调用）
    pub fn reapply<R: SortableRow>(&self, rows: &mut [R]) {
        let Some(column) = self.state.active_column else {
            return;
        };
        let collation = self.schema.collation;
        let ascending = self.state.ascending;

        // sort_by 是稳定排序，相等元素保持原有相对顺序
        rows.sort_by(|a, b| {
            let ord = compare_keys(a.sort_key(column), b.sort_key(column), collation);
            if ascending { ord } else { ord.reverse() }
        });
    }
}

fn compare_keys(a: SortKey<'_>, b: SortKey<'_>, collation: Collation) -> Ordering {
    match (a, b) {
        (SortKey::Text(a), SortKey::Text(b)) => match collation {
            Collation::Ordinal => a.cmp(b),
            Collation::CaseFolded => a.to_lowercase().cmp(&b.to_lowercase()),
        },
        (SortKey::Instant(a), SortKey::Instant(b)) => a.cmp(&b),
        _ => Ordering::Equal,
    }
}
