//! 表格模型
//!
//! ```text
//! ListItem ──RowRenderer──► RowView ─┐
//!                                    ├─► ListTable (rows + TableSortEngine)
//! LogEntry ──LogRowRenderer─► LogRowView ─► LogTable (rows + 过滤 + TableSortEngine)
//! ```
//!
//! 表格总是由最近一次完整拉取的数据整体重建，然后重新应用排序。

mod log_row;
mod log_table;
mod row;
mod sort;

pub use log_row::{LogLabels, LogRowRenderer, LogRowView};
pub use log_table::{LogBanner, LogFilter, LogTable};
pub use row::{
    RowActions, RowRenderer, RowView, StatusKind, StatusLabels, ToggleAffordance, ToggleIcon,
    ToggleWording,
};
pub use sort::{
    Collation, ColumnKind, SortIndicator, SortKey, SortState, SortableRow, TableSchema,
    TableSortEngine,
};

use crate::types::ListItem;

/// 规则表格：一个 `idx` 对应唯一一行
#[derive(Debug, Clone)]
pub struct ListTable {
    rows: Vec<RowView>,
    sort: TableSortEngine,
}

impl Default for ListTable {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            sort: TableSortEngine::new(TableSchema::LIST),
        }
    }
}

impl ListTable {
    /// 用最新列表整体替换，并重新应用排序
    pub fn replace(&mut self, items: &[ListItem], renderer: &RowRenderer) {
        self.rows = renderer.render_all(items);
        self.sort.reapply(&mut self.rows);
    }

    /// 选择表头
    pub fn sort_by(&mut self, column: usize) -> bool {
        self.sort.sort(column, &mut self.rows)
    }

    pub fn rows(&self) -> &[RowView] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn find(&self, idx: i64) -> Option<&RowView> {
        self.rows.iter().find(|row| row.idx == idx)
    }

    pub fn sort_state(&self) -> SortState {
        self.sort.state()
    }

    pub fn indicator(&self, column: usize) -> SortIndicator {
        self.sort.indicator(column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ListType;

    fn item(idx: i64, value: &str, updated_at: &str) -> ListItem {
        ListItem {
            idx,
            value: value.into(),
            list_type: Some(ListType::Allow),
            description: String::new(),
            is_active: true,
            updated_at: updated_at.into(),
        }
    }

    #[test]
    fn replace_reapplies_active_sort() {
        let renderer = RowRenderer::default();
        let mut table = ListTable::default();
        table.replace(
            &[item(1, "b.com", ""), item(2, "a.com", "")],
            &renderer,
        );
        assert!(table.sort_by(1));
        assert_eq!(table.rows()[0].idx, 2);

        table.replace(
            &[
                item(3, "c.com", ""),
                item(1, "b.com", ""),
                item(2, "a.com", ""),
            ],
            &renderer,
        );
        let order: Vec<i64> = table.rows().iter().map(|r| r.idx).collect();
        assert_eq!(order, vec![2, 1, 3]);
        assert!(table.sort_state().ascending);
    }

    #[test]
    fn replace_with_empty_list() {
        let renderer = RowRenderer::default();
        let mut table = ListTable::default();
        table.replace(&[item(1, "a.com", "")], &renderer);
        table.replace(&[], &renderer);
        assert!(table.is_empty());
        assert!(table.find(1).is_none());
    }
}
