//! 核心服务
//!
//! 封装 proxy-warden-core 的控制器和轮询器，并负责把它们的异步任务
//! 放到 tokio 运行时上执行。任务结果以 [`BackendMessage`] 的形式送回
//! 主循环，由 Update 层应用。

use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use proxy_warden_api::ApiClient;
use proxy_warden_core::services::ListOutcome;
use proxy_warden_core::table::RowRenderer;
use proxy_warden_core::types::ResourceKind;
use proxy_warden_core::{ListController, LogPoller};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::confirm_service::ChannelConfirmer;
use crate::message::BackendMessage;

/// TUI 核心服务
pub struct CoreService {
    client: ApiClient,
    runtime: Handle,
    tx: mpsc::UnboundedSender<BackendMessage>,
    poller: LogPoller,
}

impl CoreService {
    /// 创建核心服务实例
    ///
    /// 结果通过 `tx` 送回主循环。
    pub fn new(
        client: ApiClient,
        runtime: Handle,
        tx: mpsc::UnboundedSender<BackendMessage>,
        poll_interval: Duration,
    ) -> Self {
        let poller = LogPoller::new(Arc::new(client.logs()), poll_interval);
        Self {
            client,
            runtime,
            tx,
            poller,
        }
    }

    /// 服务端地址
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    // ========== 规则列表 ==========

    /// 为一种资源创建控制器
    pub fn list_controller(&self, kind: ResourceKind, renderer: RowRenderer) -> ListController {
        ListController::new(
            Arc::new(self.client.resource(kind)),
            Arc::new(ChannelConfirmer::new(self.tx.clone())),
            renderer,
        )
    }

    /// 执行控制器任务，结果送回主循环
    pub fn spawn_list(&self, kind: ResourceKind, task: BoxFuture<'static, ListOutcome>) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let outcome = task.await;
            if tx.send(BackendMessage::List { kind, outcome }).is_err() {
                log::debug!("[{kind}] UI closed before the result arrived");
            }
        });
    }

    // ========== 访问日志 ==========

    /// 立即拉取一次
    pub fn refresh_logs(&self) {
        let tx = self.tx.clone();
        let task = self.poller.fetch_task();
        self.runtime.spawn(async move {
            if tx.send(BackendMessage::Logs(task.await)).is_err() {
                log::debug!("UI closed before the log refresh arrived");
            }
        });
    }

    /// 启动后台轮询；主循环退出（通道关闭）后自动停止
    pub fn start_polling(&self) -> JoinHandle<()> {
        let tx = self.tx.clone();
        let poller = self.poller.clone();
        log::info!(
            "Polling {}/api/logs every {:?}",
            self.client.base_url(),
            poller.interval()
        );

        self.runtime.spawn(async move {
            poller
                .run(|result| {
                    if tx.send(BackendMessage::Logs(result)).is_err() {
                        ControlFlow::Break(())
                    } else {
                        ControlFlow::Continue(())
                    }
                })
                .await;
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn polling_stops_when_ui_is_gone() {
        let (tx, rx) = mpsc::unbounded_channel();
        // 端口 1 上没有服务，每轮都会失败，但轮询不会因此停止
        let client = ApiClient::new("http://127.0.0.1:1").unwrap();
        let core = CoreService::new(client, Handle::current(), tx, Duration::from_secs(1));

        drop(rx);
        let handle = core.start_polling();
        tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .expect("poller should stop")
            .unwrap();
    }

    #[tokio::test]
    async fn spawned_list_task_reports_back() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let client = ApiClient::new("http://127.0.0.1:1").unwrap();
        let core = CoreService::new(client, Handle::current(), tx, Duration::from_secs(5));

        let controller = core.list_controller(ResourceKind::Domains, RowRenderer::default());
        core.spawn_list(ResourceKind::Domains, controller.load_task());

        match rx.recv().await {
            Some(BackendMessage::List {
                kind: ResourceKind::Domains,
                outcome: ListOutcome::Loaded(Err(_)),
            }) => {}
            other => panic!("unexpected message: {other:?}"),
        }
    }
}
