//! 共享测试工具和辅助函数
//!
//! `StubServer` 绑定 `127.0.0.1:0`，按顺序返回预设响应，并记录收到的请求，
//! 用于在不依赖真实后端的情况下验证请求方法、路径和请求体编码。

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use proxy_warden_api::ApiClient;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 收到的一次请求
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: String,
}

/// 预设响应
#[derive(Debug, Clone)]
pub struct StubResponse {
    pub status: u16,
    pub body: String,
}

impl StubResponse {
    pub fn json(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }

    pub fn ok(body: &str) -> Self {
        Self::json(200, body)
    }
}

/// 简易 HTTP/1.1 桩服务
pub struct StubServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubServer {
    /// 启动桩服务，依次返回 `responses`；用尽后返回 500
    pub async fn start(responses: Vec<StubResponse>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let queue = Arc::new(Mutex::new(VecDeque::from(responses)));

        let recorded = Arc::clone(&requests);
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let recorded = Arc::clone(&recorded);
                let queue = Arc::clone(&queue);
                tokio::spawn(async move {
                    handle_connection(stream, recorded, queue).await;
                });
            }
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
        }
    }

    /// 指向桩服务的客户端
    pub fn client(&self) -> ApiClient {
        ApiClient::new(&self.base_url).unwrap()
    }

    /// 已收到的请求（按到达顺序）
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// 最近一次请求
    pub fn last_request(&self) -> RecordedRequest {
        self.requests().pop().unwrap()
    }
}

async fn handle_connection(
    mut stream: TcpStream,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
    queue: Arc<Mutex<VecDeque<StubResponse>>>,
) {
    let Some(request) = read_request(&mut stream).await else {
        return;
    };
    recorded.lock().unwrap().push(request);

    let response = queue
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| StubResponse::json(500, r#"{"status":"error","message":"no stub"}"#));

    let raw = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        response.status,
        reason_phrase(response.status),
        response.body.len(),
        response.body
    );
    let _ = stream.write_all(raw.as_bytes()).await;
    let _ = stream.shutdown().await;
}

async fn read_request(stream: &mut TcpStream) -> Option<RecordedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0_u8; 4096];

    let header_end = loop {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let path = request_line.next()?.to_string();

    let mut content_length = 0_usize;
    let mut content_type = None;
    for line in lines {
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        let name = name.trim().to_ascii_lowercase();
        let value = value.trim().to_string();
        if name == "content-length" {
            content_length = value.parse().unwrap_or(0);
        } else if name == "content-type" {
            content_type = Some(value);
        }
    }

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let body_end = (header_end + content_length).min(buf.len());
    Some(RecordedRequest {
        method,
        path,
        content_type,
        body: String::from_utf8_lossy(&buf[header_end..body_end]).to_string(),
    })
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        _ => "Status",
    }
}

/// 一个已关闭端口的地址（连接必然被拒绝）
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
