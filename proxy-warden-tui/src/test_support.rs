//! 测试辅助

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use proxy_warden_api::ApiClient;
use proxy_warden_core::table::RowRenderer;
use proxy_warden_core::types::{Decision, ListItem, ListType, LogEntry, ResourceKind};
use proxy_warden_core::ListController;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::backend::{AppConfig, ChannelConfirmer, CoreService, TomlConfigService};
use crate::message::BackendMessage;
use crate::model::App;

/// 不会被访问的服务端地址（端口 1 上没有服务）
const UNREACHABLE: &str = "http://127.0.0.1:1";

fn client() -> ApiClient {
    ApiClient::new(UNREACHABLE).unwrap()
}

/// 独立的控制器（确认请求会被丢弃）
pub fn controller(kind: ResourceKind) -> ListController {
    let (tx, _rx) = mpsc::unbounded_channel();
    ListController::new(
        Arc::new(client().resource(kind)),
        Arc::new(ChannelConfirmer::new(tx)),
        RowRenderer::default(),
    )
}

pub fn item(idx: i64, value: &str, is_active: bool) -> ListItem {
    ListItem {
        idx,
        value: value.to_string(),
        list_type: Some(ListType::Allow),
        description: String::new(),
        is_active,
        updated_at: "2024-05-01 12:00:00".to_string(),
    }
}

pub fn log_entry(ip: &str, decision: Decision, timestamp: &str) -> LogEntry {
    LogEntry {
        idx: None,
        timestamp: timestamp.to_string(),
        client_ip: ip.to_string(),
        url: "https://example.com/".to_string(),
        method: Some("GET".to_string()),
        decision,
        score: None,
        reason: None,
    }
}

/// 每个测试独立的配置文件路径
pub fn temp_config_path(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("proxy-warden-tui-test-{}-{name}", std::process::id()))
        .join("config.toml")
}

/// 完整的 App，后台消息从返回的接收端读取
///
/// 需要在 tokio 运行时中调用。
pub fn app(name: &str) -> (App, mpsc::UnboundedReceiver<BackendMessage>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let core = CoreService::new(client(), Handle::current(), tx, Duration::from_secs(60));
    let config_service = Arc::new(TomlConfigService::new(temp_config_path(name)));
    (App::new(core, AppConfig::default(), config_service), rx)
}
