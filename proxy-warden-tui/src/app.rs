//!
//! app.rs
//! 应用主循环
//!
//!
//!
//! 在应用启动时，App 的初始状态为：
//!
//! App {
//!
//!     should_quit: bool = false,                      // 决定应用是否应该退出
//!     focus: FocusPanel::Content,                     // 当前焦点在哪个面板
//!     navigation: NavigationState{
//!         items: [Cidrs , Domains , Hides , Logs],
//!         selected = 0
//!     },
//!     current_page = Page::Cidrs,
//!     status_message = None,
//!     cidrs / domains / hides: 加载中
//!     logs: 等待首次拉取
//!
//! }
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit{ break }                     // 检查 APP 是否应该退出
//!     while let Ok(msg) = rx.try_recv() {             // 取出后台任务的结果，不等待
//!         update::update(&mut app , Backend(msg))
//!     }
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);           // 接收原始事件并分发消息
//!         update::update(&mut app , msg)                  // 更新终端状态
//!     }
//! }

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::event;
use crate::message::{AppMessage, BackendMessage};
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 输入轮询超时，也是后台结果的最大显示延迟
const TICK: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    rx: &mut UnboundedReceiver<BackendMessage>,
) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 后台结果
        while let Ok(msg) = rx.try_recv() {
            update::update(app, AppMessage::Backend(msg));
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(TICK)? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }
    }

    Ok(())
}
