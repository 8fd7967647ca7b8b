//! 表格选中行

/// 表格光标
///
/// 只记录位置；行数由调用方传入，因为表格内容随时会被后台结果替换。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub selected: usize,
}

impl Cursor {
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// 行数变少后收回越界的光标
    pub fn clamp(&mut self, len: usize) {
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    /// 当前位置（表格为空时为 `None`）
    pub fn position(&self, len: usize) -> Option<usize> {
        (self.selected < len).then_some(self.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_within_bounds() {
        let mut cursor = Cursor::default();
        cursor.select_previous();
        assert_eq!(cursor.selected, 0);

        cursor.select_next(3);
        cursor.select_next(3);
        cursor.select_next(3);
        assert_eq!(cursor.selected, 2);

        cursor.select_first();
        assert_eq!(cursor.selected, 0);
        cursor.select_last(5);
        assert_eq!(cursor.selected, 4);
    }

    #[test]
    fn clamp_after_shrink() {
        let mut cursor = Cursor { selected: 7 };
        cursor.clamp(3);
        assert_eq!(cursor.selected, 2);

        cursor.clamp(0);
        assert_eq!(cursor.selected, 0);
        assert_eq!(cursor.position(0), None);
        assert_eq!(cursor.position(1), Some(0));
    }
}
