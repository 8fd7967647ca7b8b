//! 确认服务
//!
//! 控制器的删除 / 启停任务在 tokio 上运行，遇到确认时通过通道把
//! [`ConfirmRequest`] 发给界面线程，界面弹出确认框，用户的回答经
//! oneshot 通道送回任务。
//!
//! 界面关闭弹窗而没有回答时（丢弃发送端），视为拒绝。

use async_trait::async_trait;
use proxy_warden_core::{ConfirmPrompt, Confirmer};
use tokio::sync::{mpsc, oneshot};

use crate::message::BackendMessage;

/// 等待用户回答的确认请求
#[derive(Debug)]
pub struct ConfirmRequest {
    pub prompt: ConfirmPrompt,
    pub reply: oneshot::Sender<bool>,
}

impl ConfirmRequest {
    /// 回答确认请求
    pub fn answer(self, accepted: bool) {
        if self.reply.send(accepted).is_err() {
            log::debug!("Confirm answer dropped: task already finished");
        }
    }
}

/// 基于通道的确认器
#[derive(Debug, Clone)]
pub struct ChannelConfirmer {
    tx: mpsc::UnboundedSender<BackendMessage>,
}

impl ChannelConfirmer {
    pub fn new(tx: mpsc::UnboundedSender<BackendMessage>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl Confirmer for ChannelConfirmer {
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        let (reply, answer) = oneshot::channel();
        let request = ConfirmRequest {
            prompt: prompt.clone(),
            reply,
        };

        if self.tx.send(BackendMessage::Confirm(request)).is_err() {
            log::warn!("UI is gone, treating confirmation as declined");
            return false;
        }

        answer.await.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proxy_warden_core::types::ResourceKind;

    fn prompt() -> ConfirmPrompt {
        ConfirmPrompt::Delete {
            kind: ResourceKind::Cidrs,
            idx: 1,
            value: "10.0.0.0/8".into(),
        }
    }

    #[tokio::test]
    async fn answer_is_forwarded_to_task() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let confirmer = ChannelConfirmer::new(tx);

        let task = tokio::spawn(async move { confirmer.confirm(&prompt()).await });

        let Some(BackendMessage::Confirm(request)) = rx.recv().await else {
            panic!("expected a confirm request");
        };
        assert_eq!(request.prompt, prompt());
        request.answer(true);

        assert!(task.await.unwrap());
    }

    #[tokio::test]
    async fn dropped_request_counts_as_no() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let confirmer = ChannelConfirmer::new(tx);

        let task = tokio::spawn(async move { confirmer.confirm(&prompt()).await });
        drop(rx.recv().await);

        assert!(!task.await.unwrap());
    }

    #[test]
    fn closed_ui_declines_immediately() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let confirmer = ChannelConfirmer::new(tx);
        assert!(!tokio_test::block_on(confirmer.confirm(&prompt())));
    }
}
