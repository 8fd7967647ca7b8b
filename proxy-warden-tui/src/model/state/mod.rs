//! 页面状态模块
//!
//! 定义各个页面的状态数据结构

mod cursor;
mod logs;
mod modal;
mod rules;
mod settings;

pub use cursor::Cursor;
pub use logs::LogsState;
pub use modal::{Modal, ModalState};
pub use rules::RulesState;
pub use settings::SettingsState;
