//! 界面设置状态

use proxy_warden_core::table::{LogRowRenderer, RowRenderer};

use crate::backend::AppConfig;
use crate::i18n::{self, Language};
use crate::view::theme::Theme;

/// 界面设置
///
/// 语言和时间格式决定表格的渲染方式，切换后需要用新的渲染器重建表格。
#[derive(Debug, Clone)]
pub struct SettingsState {
    pub language: Language,
    pub theme: Theme,
    pub timestamp_format: String,
}

impl SettingsState {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            language: config.language(),
            theme: config.ui.theme,
            timestamp_format: config.ui.timestamp_format.clone(),
        }
    }

    /// 规则表格渲染器（使用当前语言）
    pub fn row_renderer(&self) -> RowRenderer {
        RowRenderer::new(i18n::status_labels(), self.timestamp_format.as_str())
    }

    /// 日志表格渲染器（使用当前语言）
    pub fn log_renderer(&self) -> LogRowRenderer {
        LogRowRenderer::new(i18n::log_labels(), self.timestamp_format.as_str())
    }

    /// 写回配置
    pub fn store(&self, config: &mut AppConfig) {
        config.ui.language = self.language.code().to_string();
        config.ui.theme = self.theme;
        config.ui.timestamp_format.clone_from(&self.timestamp_format);
    }
}

impl Default for SettingsState {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}
