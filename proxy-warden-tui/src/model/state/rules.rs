//! 规则页面状态（CIDR / 域名 / 隐藏域名共用）

use proxy_warden_core::services::ListOutcome;
use proxy_warden_core::table::RowView;
use proxy_warden_core::types::ResourceKind;
use proxy_warden_core::ListController;

use super::Cursor;

/// 规则页面状态
///
/// 表格、弹窗和提示都在 [`ListController`] 里，这里只多一个光标。
pub struct RulesState {
    pub controller: ListController,
    pub cursor: Cursor,
}

impl RulesState {
    pub fn new(controller: ListController) -> Self {
        Self {
            controller,
            cursor: Cursor::default(),
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.controller.kind()
    }

    pub fn rows(&self) -> &[RowView] {
        self.controller.table().rows()
    }

    pub fn selected_row(&self) -> Option<&RowView> {
        self.cursor
            .position(self.rows().len())
            .and_then(|pos| self.rows().get(pos))
    }

    pub fn select_previous(&mut self) {
        self.cursor.select_previous();
    }

    pub fn select_next(&mut self) {
        self.cursor.select_next(self.rows().len());
    }

    pub fn select_first(&mut self) {
        self.cursor.select_first();
    }

    pub fn select_last(&mut self) {
        self.cursor.select_last(self.rows().len());
    }

    /// 应用后台结果；重新加载或排序后光标仍指向同一条规则
    pub fn apply(&mut self, outcome: ListOutcome) {
        self.keep_selection(|controller| controller.apply(outcome));
    }

    /// 按列排序，返回该列是否可排序
    pub fn sort_by(&mut self, column: usize) -> bool {
        let mut sorted = false;
        self.keep_selection(|controller| sorted = controller.sort_by(column));
        sorted
    }

    fn keep_selection(&mut self, f: impl FnOnce(&mut ListController)) {
        let selected = self.selected_row().map(|row| row.idx);
        f(&mut self.controller);

        let rows = self.rows();
        match selected.and_then(|idx| rows.iter().position(|row| row.idx == idx)) {
            Some(pos) => self.cursor.selected = pos,
            None => self.cursor.clamp(rows.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{controller, item};

    fn loaded(values: &[(i64, &str)]) -> ListOutcome {
        ListOutcome::Loaded(Ok(values
            .iter()
            .map(|(idx, value)| item(*idx, value, true))
            .collect()))
    }

    #[test]
    fn selection_follows_item_across_reload() {
        let mut state = RulesState::new(controller(ResourceKind::Domains));
        state.apply(loaded(&[(1, "a.com"), (2, "b.com"), (3, "c.com")]));
        state.select_next();
        assert_eq!(state.selected_row().map(|r| r.idx), Some(2));

        // 服务端在前面插入了一条
        state.apply(loaded(&[(4, "0.com"), (1, "a.com"), (2, "b.com"), (3, "c.com")]));
        assert_eq!(state.selected_row().map(|r| r.idx), Some(2));
        assert_eq!(state.cursor.selected, 2);
    }

    #[test]
    fn cursor_clamps_when_selected_item_disappears() {
        let mut state = RulesState::new(controller(ResourceKind::Domains));
        state.apply(loaded(&[(1, "a.com"), (2, "b.com"), (3, "c.com")]));
        state.select_last();

        state.apply(loaded(&[(1, "a.com")]));
        assert_eq!(state.selected_row().map(|r| r.idx), Some(1));
    }

    #[test]
    fn sorting_keeps_the_selected_rule() {
        let mut state = RulesState::new(controller(ResourceKind::Domains));
        state.apply(loaded(&[(1, "b.com"), (2, "c.com"), (3, "a.com")]));
        state.select_first();

        assert!(state.sort_by(1));
        assert_eq!(state.rows()[0].value, "a.com");
        assert_eq!(state.selected_row().map(|r| r.idx), Some(1));

        // 操作列不可排序
        assert!(!state.sort_by(4));
    }

    #[test]
    fn failed_load_keeps_rows() {
        let mut state = RulesState::new(controller(ResourceKind::Cidrs));
        state.apply(loaded(&[(1, "10.0.0.0/8")]));
        state.apply(ListOutcome::Loaded(Err(
            proxy_warden_core::CoreError::ItemNotFound(9),
        )));
        assert_eq!(state.rows().len(), 1);
        assert!(state.controller.notice().is_some());
    }
}
