//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ ModalMsg  │               ▼               │   │
//！│  │   ┌─────────┐          │ ContentMsg│          ┌──────────┐         │   │
//！│  │   │  View   │          │ NavMsg    │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ 异步调用          │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │proxy-warden-core  │           │
//！│                                           │                   │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘


//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod backend;            // 后台任务结果
//!         mod content;            // 内容面板子消息处理
//!         mod modal;              // 弹窗子消息处理
//!         mod navigation;         // 导航子消息处理
//!
//!
//!     网络请求不在这里等待：
//!         content / modal 调用控制器的 *_task() 拿到 future，交给
//!         app.core.spawn_list() 在 tokio 上执行，立即返回。
//!         结果稍后以 BackendMessage 回到主循环，由 backend.rs 应用。
//!
//!     切换语言：
//!         set_language() 之后用新的渲染器重建所有表格（状态标签、日志决策
//!         文本都来自当前语言），再把设置写回配置文件。
//!

mod backend;
mod content;
mod modal;
mod navigation;

use crate::i18n::{self, fill, t};
use crate::message::AppMessage;
use crate::model::App;
use crate::view::theme::{self, Theme};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => navigation::update(app, nav_msg),
        AppMessage::Content(content_msg) => content::update(app, content_msg),
        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),
        AppMessage::Backend(backend_msg) => backend::update(app, backend_msg),

        AppMessage::Refresh => refresh(app),

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::SwitchLanguage => switch_language(app),
        AppMessage::SwitchTheme => switch_theme(app),

        AppMessage::Noop => {}
    }
}

/// 重新加载当前页面
fn refresh(app: &mut App) {
    match app.current_page.resource() {
        Some(kind) => {
            let task = app.rules(kind).controller.load_task();
            app.core.spawn_list(kind, task);
        }
        None => app.core.refresh_logs(),
    }
    app.set_status(t().status_bar.reloading);
}

fn switch_language(app: &mut App) {
    let language = app.settings.language.next();
    app.settings.language = language;
    i18n::set_language(language);
    app.rebuild_tables();

    log::info!("Language switched to {}", language.code());
    finish_settings_change(
        app,
        fill(
            t().status_bar.language_changed,
            &[("value", language.display_name())],
        ),
    );
}

fn switch_theme(app: &mut App) {
    let theme = app.settings.theme.next();
    app.settings.theme = theme;
    theme::set_theme(theme);

    let name = match theme {
        Theme::Dark => t().status_bar.theme_dark,
        Theme::Light => t().status_bar.theme_light,
    };
    finish_settings_change(app, fill(t().status_bar.theme_changed, &[("value", name)]));
}

fn finish_settings_change(app: &mut App, message: String) {
    match app.save_settings() {
        Ok(()) => app.set_status(message),
        Err(e) => {
            app.set_error(t().status_bar.config_save_failed);
            app.modal.show_error(t().common.error, &e.to_string());
        }
    }
}
