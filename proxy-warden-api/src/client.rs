//! Endpoint wrappers
//!
//! [`ApiClient`] owns the `reqwest::Client` and the server base URL and hands
//! out cheap, cloneable per-endpoint clients:
//!
//! | Client | Endpoints |
//! |--------|-----------|
//! | [`ListResourceClient`] | `GET/POST /api/{resource}`, `PUT/DELETE /api/{resource}/{idx}`, `PUT /api/{resource}/{idx}/toggle` |
//! | [`LogClient`] | `GET /api/logs` |
//!
//! None of them hold state beyond the connection pool.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;

use crate::error::{ApiError, Result};
use crate::http_client::HttpUtils;
use crate::types::{ItemFields, ListItem, LogEntry, MutationReply, ResourceKind};

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Resource label used for the decision log in logs and errors.
const LOGS_RESOURCE: &str = "logs";

/// Entry point: base URL plus a shared connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for the server at `base_url` (e.g. `http://127.0.0.1:8000`).
    ///
    /// Only the connect phase is bounded; in-flight requests are not timed out.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ApiError::NetworkError {
                resource: "client".to_string(),
                detail: format!("Failed to create HTTP client: {e}"),
            })?;
        Ok(Self::with_http_client(http, base_url))
    }

    /// Build a client around an existing `reqwest::Client`.
    pub fn with_http_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// Server base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Client for one list resource.
    pub fn resource(&self, kind: ResourceKind) -> ListResourceClient {
        ListResourceClient {
            http: self.http.clone(),
            endpoint: format!("{}/api/{}", self.base_url, kind.path()),
            kind,
        }
    }

    /// Client for the decision log.
    pub fn logs(&self) -> LogClient {
        LogClient {
            http: self.http.clone(),
            endpoint: format!("{}/api/{LOGS_RESOURCE}", self.base_url),
        }
    }
}

// ============ List resources ============

#[derive(Serialize)]
struct ToggleBody {
    is_active: bool,
}

/// Typed access to `/api/{resource}`.
#[derive(Debug, Clone)]
pub struct ListResourceClient {
    http: Client,
    endpoint: String,
    kind: ResourceKind,
}

impl ListResourceClient {
    /// Resource this client talks to.
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Fetch the full list.
    ///
    /// A success envelope without `data` is a parse error; nothing is ever
    /// returned partially.
    pub async fn list(&self) -> Result<Vec<ListItem>> {
        let resource = self.kind.path();
        let (status, body) = HttpUtils::execute_request(
            self.http.get(&self.endpoint),
            resource,
            "GET",
            &self.endpoint,
        )
        .await?;

        HttpUtils::parse_envelope::<Vec<ListItem>>(status, &body, resource)?
            .data
            .ok_or_else(|| ApiError::ParseError {
                resource: resource.to_string(),
                detail: "Missing `data` field in response".to_string(),
            })
    }

    /// Create an item; `idx` is assigned by the server.
    pub async fn create(&self, fields: &ItemFields) -> Result<MutationReply> {
        let request = self
            .http
            .post(&self.endpoint)
            .form(&fields.form_pairs(self.kind));
        self.mutate(request, "POST", &self.endpoint).await
    }

    /// Replace every editable field of item `idx`.
    pub async fn update(&self, idx: i64, fields: &ItemFields) -> Result<MutationReply> {
        let url = format!("{}/{idx}", self.endpoint);
        let request = self.http.put(&url).form(&fields.form_pairs(self.kind));
        self.mutate(request, "PUT", &url).await
    }

    /// Delete item `idx`.
    pub async fn remove(&self, idx: i64) -> Result<MutationReply> {
        let url = format!("{}/{idx}", self.endpoint);
        let request = self.http.delete(&url);
        self.mutate(request, "DELETE", &url).await
    }

    /// Set the active flag of item `idx` (JSON body, not a form).
    pub async fn set_active(&self, idx: i64, active: bool) -> Result<MutationReply> {
        let url = format!("{}/{idx}/toggle", self.endpoint);
        let request = self.http.put(&url).json(&ToggleBody { is_active: active });
        self.mutate(request, "PUT", &url).await
    }

    async fn mutate(
        &self,
        request: reqwest::RequestBuilder,
        method: &str,
        url: &str,
    ) -> Result<MutationReply> {
        let resource = self.kind.path();
        let (status, body) = HttpUtils::execute_request(request, resource, method, url).await?;
        let envelope = HttpUtils::parse_envelope::<serde_json::Value>(status, &body, resource)?;
        Ok(MutationReply {
            message: envelope.message,
        })
    }
}

// ============ Decision log ============

/// Typed access to `/api/logs`.
#[derive(Debug, Clone)]
pub struct LogClient {
    http: Client,
    endpoint: String,
}

impl LogClient {
    /// Fetch the recent decision window, newest first.
    pub async fn fetch(&self) -> Result<Vec<LogEntry>> {
        let (status, body) = HttpUtils::execute_request(
            self.http.get(&self.endpoint),
            LOGS_RESOURCE,
            "GET",
            &self.endpoint,
        )
        .await?;

        HttpUtils::parse_envelope::<Vec<LogEntry>>(status, &body, LOGS_RESOURCE)?
            .data
            .ok_or_else(|| ApiError::ParseError {
                resource: LOGS_RESOURCE.to_string(),
                detail: "Missing `data` field in response".to_string(),
            })
    }
}
