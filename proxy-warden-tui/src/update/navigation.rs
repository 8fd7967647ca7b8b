//! 导航更新逻辑

use crate::message::NavigationMessage;
use crate::model::{App, FocusPanel};

/// 处理导航消息
pub fn update(app: &mut App, msg: NavigationMessage) {
    match msg {
        NavigationMessage::SelectPrevious => app.navigation.select_previous(),
        NavigationMessage::SelectNext => app.navigation.select_next(),
        NavigationMessage::SelectFirst => app.navigation.select_first(),
        NavigationMessage::SelectLast => app.navigation.select_last(),

        NavigationMessage::Confirm => {
            if let Some(page) = app.navigation.current_page() {
                app.open_page(page);
                // 打开页面后直接操作表格
                app.focus = FocusPanel::Content;
            }
        }
    }
}
