//! 访问日志页面状态

use proxy_warden_core::table::{LogFilter, LogRowView, LogTable};
use proxy_warden_core::types::LogEntry;
use proxy_warden_core::CoreResult;

use super::Cursor;

/// 访问日志页面状态
#[derive(Debug, Default)]
pub struct LogsState {
    pub table: LogTable,
    /// 光标位于可见行中的位置
    pub cursor: Cursor,
    /// 正在编辑的过滤文本；`None` 表示没有在输入
    pub filter_input: Option<String>,
}

impl LogsState {
    pub fn new(table: LogTable) -> Self {
        Self {
            table,
            cursor: Cursor::default(),
            filter_input: None,
        }
    }

    pub fn selected_row(&self) -> Option<&LogRowView> {
        self.table.visible_rows().nth(self.cursor.selected)
    }

    pub fn select_previous(&mut self) {
        self.cursor.select_previous();
    }

    pub fn select_next(&mut self) {
        self.cursor.select_next(self.table.visible_count());
    }

    pub fn select_first(&mut self) {
        self.cursor.select_first();
    }

    pub fn select_last(&mut self) {
        self.cursor.select_last(self.table.visible_count());
    }

    /// 应用一轮拉取结果
    pub fn apply_fetch(&mut self, result: CoreResult<Vec<LogEntry>>) {
        self.table.apply_fetch(result);
        self.clamp_cursor();
    }

    pub fn sort_by(&mut self, column: usize) -> bool {
        self.table.sort_by(column)
    }

    // ========== 过滤 ==========

    pub fn is_editing_filter(&self) -> bool {
        self.filter_input.is_some()
    }

    /// 开始输入过滤文本；已有文本过滤时接着编辑
    pub fn start_filter(&mut self) {
        let current = match self.table.filter() {
            Some(LogFilter::Text { query, .. }) => query.clone(),
            _ => String::new(),
        };
        self.filter_input = Some(current);
    }

    /// 每次输入都立即生效
    pub fn push_filter_char(&mut self, ch: char) {
        if let Some(input) = self.filter_input.as_mut() {
            input.push(ch);
            self.table.set_text_filter(input);
            self.cursor.select_first();
        }
    }

    pub fn pop_filter_char(&mut self) {
        if let Some(input) = self.filter_input.as_mut() {
            input.pop();
            self.table.set_text_filter(input);
            self.cursor.select_first();
        }
    }

    /// 结束输入；空文本等同于清除过滤
    pub fn finish_filter(&mut self) {
        if let Some(input) = self.filter_input.take() {
            if input.is_empty() {
                self.table.clear_filter();
            }
        }
        self.clamp_cursor();
    }

    /// 只看与选中行相同客户端 IP 的日志，返回使用的 IP
    pub fn filter_by_selected_ip(&mut self) -> Option<String> {
        let ip = self.selected_row()?.client_ip.clone();
        self.filter_input = None;
        self.table.filter_by_ip(&ip);
        self.cursor.select_first();
        Some(ip)
    }

    pub fn clear_filter(&mut self) {
        self.filter_input = None;
        self.table.clear_filter();
        self.clamp_cursor();
    }

    fn clamp_cursor(&mut self) {
        self.cursor.clamp(self.table.visible_count());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::log_entry;
    use proxy_warden_core::types::Decision;

    fn state() -> LogsState {
        let mut state = LogsState::default();
        state.apply_fetch(Ok(vec![
            log_entry("10.0.0.1", Decision::Allow, "2024-05-01 10:00:00"),
            log_entry("10.0.0.2", Decision::Deny, "2024-05-01 10:01:00"),
            log_entry("10.0.0.1", Decision::Deny, "2024-05-01 10:02:00"),
        ]));
        state
    }

    #[test]
    fn typing_filters_live() {
        let mut state = state();
        state.start_filter();
        for ch in "0.0.2".chars() {
            state.push_filter_char(ch);
        }
        assert_eq!(state.table.visible_count(), 1);

        state.finish_filter();
        assert!(!state.is_editing_filter());
        assert_eq!(state.table.visible_count(), 1);
    }

    #[test]
    fn empty_filter_text_clears_filter() {
        let mut state = state();
        state.start_filter();
        state.push_filter_char('x');
        state.pop_filter_char();
        state.finish_filter();
        assert_eq!(state.table.filter(), None);
        assert_eq!(state.table.visible_count(), 3);
    }

    #[test]
    fn reediting_keeps_typed_case() {
        let mut state = state();
        state.start_filter();
        for ch in "Example".chars() {
            state.push_filter_char(ch);
        }
        state.finish_filter();
        assert_eq!(state.table.visible_count(), 3);

        state.start_filter();
        assert_eq!(state.filter_input.as_deref(), Some("Example"));
    }

    #[test]
    fn ip_filter_uses_selected_row() {
        let mut state = state();
        assert_eq!(state.filter_by_selected_ip().as_deref(), Some("10.0.0.1"));
        assert_eq!(state.table.visible_count(), 2);
        assert!(state
            .table
            .visible_rows()
            .all(|row| row.client_ip == "10.0.0.1"));

        state.clear_filter();
        assert_eq!(state.table.visible_count(), 3);
    }

    #[test]
    fn shrinking_fetch_clamps_cursor() {
        let mut state = state();
        state.select_last();
        assert_eq!(state.cursor.selected, 2);

        state.apply_fetch(Ok(vec![log_entry(
            "10.0.0.9",
            Decision::Allow,
            "2024-05-01 11:00:00",
        )]));
        assert_eq!(state.cursor.selected, 0);
        assert_eq!(state.selected_row().map(|r| r.client_ip.as_str()), Some("10.0.0.9"));
    }
}
