//! 表头辅助

use proxy_warden_core::table::SortIndicator;
use ratatui::widgets::{Cell, Row};

use crate::view::theme::Styles;

/// 排序指示符
pub fn indicator_symbol(indicator: SortIndicator) -> &'static str {
    match indicator {
        SortIndicator::None => "",
        SortIndicator::Unsorted => " ↕",
        SortIndicator::Ascending => " ↑",
        SortIndicator::Descending => " ↓",
    }
}

/// 带排序指示符的表头；`indicator` 按列号给出状态
pub fn header_row<'a>(titles: &[&str], indicator: impl Fn(usize) -> SortIndicator) -> Row<'a> {
    let cells = titles
        .iter()
        .enumerate()
        .map(|(i, title)| Cell::from(format!("{title}{}", indicator_symbol(indicator(i)))));
    Row::new(cells).style(Styles::header()).bottom_margin(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols() {
        assert_eq!(indicator_symbol(SortIndicator::None), "");
        assert_eq!(indicator_symbol(SortIndicator::Ascending), " ↑");
        assert_eq!(indicator_symbol(SortIndicator::Descending), " ↓");
    }
}
