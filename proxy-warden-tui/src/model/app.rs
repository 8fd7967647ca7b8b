//! 应用主状态结构

use std::sync::Arc;

use proxy_warden_core::table::LogTable;
use proxy_warden_core::types::ResourceKind;
use tokio::task::JoinHandle;

use super::{
    FocusPanel, LogsState, ModalState, NavigationState, Page, RulesState, SettingsState,
};
use crate::backend::{AppConfig, ConfigError, ConfigService, CoreService};

/// 状态栏消息级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

/// 状态栏消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航状态
    pub navigation: NavigationState,

    /// 当前页面
    pub current_page: Page,

    /// 状态栏消息
    pub status_message: Option<StatusMessage>,

    // === 各页面状态 ===
    pub cidrs: RulesState,
    pub domains: RulesState,
    pub hides: RulesState,
    pub logs: LogsState,
    pub settings: SettingsState,

    /// 弹窗状态
    pub modal: ModalState,

    // === 服务 ===
    pub core: CoreService,
    pub config: AppConfig,
    pub config_service: Arc<dyn ConfigService>,
}

impl App {
    /// 创建应用实例
    ///
    /// 调用前应已按配置设置好语言，渲染器会读取当前语言的标签。
    pub fn new(core: CoreService, config: AppConfig, config_service: Arc<dyn ConfigService>) -> Self {
        let settings = SettingsState::from_config(&config);
        let rules = |kind| RulesState::new(core.list_controller(kind, settings.row_renderer()));

        Self {
            should_quit: false,
            focus: FocusPanel::default(),
            navigation: NavigationState::new(),
            current_page: Page::default(),
            status_message: None,
            cidrs: rules(ResourceKind::Cidrs),
            domains: rules(ResourceKind::Domains),
            hides: rules(ResourceKind::Hides),
            logs: LogsState::new(LogTable::new(settings.log_renderer())),
            settings,
            modal: ModalState::new(),
            core,
            config,
            config_service,
        }
    }

    /// 启动：加载三个规则列表，开始轮询日志
    pub fn start(&self) -> JoinHandle<()> {
        for kind in ResourceKind::ALL {
            self.core
                .spawn_list(kind, self.rules(kind).controller.load_task());
        }
        self.core.start_polling()
    }

    pub fn rules(&self, kind: ResourceKind) -> &RulesState {
        match kind {
            ResourceKind::Cidrs => &self.cidrs,
            ResourceKind::Domains => &self.domains,
            ResourceKind::Hides => &self.hides,
        }
    }

    pub fn rules_mut(&mut self, kind: ResourceKind) -> &mut RulesState {
        match kind {
            ResourceKind::Cidrs => &mut self.cidrs,
            ResourceKind::Domains => &mut self.domains,
            ResourceKind::Hides => &mut self.hides,
        }
    }

    /// 切换页面
    pub fn open_page(&mut self, page: Page) {
        self.current_page = page;
        self.navigation.select_page(page);
        self.clear_status();
    }

    /// 用当前语言 / 时间格式重建所有表格
    pub fn rebuild_tables(&mut self) {
        for kind in ResourceKind::ALL {
            let renderer = self.settings.row_renderer();
            self.rules_mut(kind).controller.set_renderer(renderer);
        }
        self.logs.table.set_renderer(self.settings.log_renderer());
    }

    /// 保存界面设置；返回是否成功
    pub fn save_settings(&mut self) -> Result<(), ConfigError> {
        self.settings.store(&mut self.config);
        self.config_service.save(&self.config).inspect_err(|e| {
            log::warn!("Failed to save settings: {e}");
        })
    }

    /// 设置状态消息
    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status_message = Some(StatusMessage {
            level: StatusLevel::Info,
            text: text.into(),
        });
    }

    /// 设置错误消息
    pub fn set_error(&mut self, text: impl Into<String>) {
        self.status_message = Some(StatusMessage {
            level: StatusLevel::Error,
            text: text.into(),
        });
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
