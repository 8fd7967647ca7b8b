//! 页面视图

pub mod logs;
pub mod rules;
