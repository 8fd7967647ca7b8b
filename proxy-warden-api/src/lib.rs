//! # proxy-warden-api
//!
//! Typed HTTP client for the Proxy Warden control API: CIDR rules, domain
//! rules, hidden domains and the access-decision log.
//!
//! ## Endpoints
//!
//! | Resource | Base path | Subject field | List type |
//! |----------|-----------|---------------|-----------|
//! | CIDR rules | `/api/cidrs` | `cidr` | allow / deny |
//! | Domain rules | `/api/domains` | `domain` | allow / deny |
//! | Hidden domains | `/api/hides` | `domain` | — |
//! | Decision log | `/api/logs` | — | — |
//!
//! Every response is a `{status, data?, message?}` JSON envelope. Anything
//! other than `status: "success"` is an [`ApiError`].
//!
//! ## TLS Backend
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use proxy_warden_api::{ApiClient, ItemFields, ListType, ResourceKind};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = ApiClient::new("http://127.0.0.1:8000")?;
//!     let cidrs = api.resource(ResourceKind::Cidrs);
//!
//!     cidrs
//!         .create(&ItemFields {
//!             list_type: Some(ListType::Deny),
//!             value: "10.0.0.0/8".to_string(),
//!             description: "internal".to_string(),
//!         })
//!         .await?;
//!
//!     for item in cidrs.list().await? {
//!         println!("{} {} active={}", item.idx, item.value, item.is_active);
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod http_client;
mod types;
mod utils;

pub use client::{ApiClient, ListResourceClient, LogClient};
pub use error::{ApiError, FailureKind, Result};
pub use types::{
    ApiEnvelope, Decision, ItemFields, ListItem, ListType, LogEntry, MutationReply, ResourceKind,
    ResponseStatus,
};
