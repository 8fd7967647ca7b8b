use serde::{Deserialize, Serialize};

/// Unified error type for all list-API operations.
///
/// Each variant includes a `resource` field naming the endpoint family that
/// produced the error (`cidrs`, `domains`, `hides`, `logs`), plus
/// variant-specific context. All variants are serializable for structured
/// error reporting.
///
/// # Failure classes
///
/// Every variant maps onto one of two user-facing classes, see
/// [`failure_kind`](Self::failure_kind):
/// - [`FailureKind::Network`]: transport errors, non-2xx responses and
///   unreadable bodies
/// - [`FailureKind::Application`]: a 2xx response whose envelope reports
///   `status != "success"`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ApiError {
    /// A network-level error occurred (connection refused, reset, DNS failure).
    NetworkError {
        /// Resource family the request targeted.
        resource: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Resource family the request targeted.
        resource: String,
        /// Error details.
        detail: String,
    },

    /// The server answered with a non-2xx status code.
    HttpStatus {
        /// Resource family the request targeted.
        resource: String,
        /// HTTP status code.
        status: u16,
        /// `message` or `detail` text from the error body, if any.
        raw_message: Option<String>,
    },

    /// Failed to parse the response body as the expected JSON envelope.
    ParseError {
        /// Resource family the request targeted.
        resource: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// The server processed the request and reported `status: "error"`.
    Application {
        /// Resource family the request targeted.
        resource: String,
        /// Server-provided explanation, if any.
        message: Option<String>,
    },
}

/// User-facing failure class of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureKind {
    /// Transport failure, non-2xx response or malformed body.
    Network,
    /// The server rejected the request with its own message.
    Application,
}

impl ApiError {
    /// 是否为预期行为（服务端拒绝、参数错误等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Application { .. } => true,
            Self::HttpStatus { status, .. } => (400..500).contains(status),
            _ => false,
        }
    }

    /// Map this error onto the two user-facing failure classes.
    #[must_use]
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            Self::Application { .. } => FailureKind::Application,
            Self::NetworkError { .. }
            | Self::Timeout { .. }
            | Self::HttpStatus { .. }
            | Self::ParseError { .. } => FailureKind::Network,
        }
    }

    /// Server-provided message suitable for showing to the operator.
    ///
    /// Only application failures carry one; callers fall back to their own
    /// localized text otherwise.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Application {
                message: Some(msg), ..
            } if !msg.trim().is_empty() => Some(msg),
            _ => None,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { resource, detail } => {
                write!(f, "[{resource}] Network error: {detail}")
            }
            Self::Timeout { resource, detail } => {
                write!(f, "[{resource}] Request timeout: {detail}")
            }
            Self::HttpStatus {
                resource,
                status,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{resource}] HTTP {status}: {msg}")
                } else {
                    write!(f, "[{resource}] HTTP {status}")
                }
            }
            Self::ParseError { resource, detail } => {
                write!(f, "[{resource}] Parse error: {detail}")
            }
            Self::Application { resource, message } => {
                if let Some(msg) = message {
                    write!(f, "[{resource}] Rejected by server: {msg}")
                } else {
                    write!(f, "[{resource}] Rejected by server")
                }
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = ApiError::NetworkError {
            resource: "cidrs".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "[cidrs] Network error: connection refused");
    }

    #[test]
    fn display_http_status_with_message() {
        let e = ApiError::HttpStatus {
            resource: "domains".to_string(),
            status: 400,
            raw_message: Some("invalid domain".to_string()),
        };
        assert_eq!(e.to_string(), "[domains] HTTP 400: invalid domain");
    }

    #[test]
    fn display_http_status_without_message() {
        let e = ApiError::HttpStatus {
            resource: "logs".to_string(),
            status: 502,
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[logs] HTTP 502");
    }

    #[test]
    fn display_application_error() {
        let e = ApiError::Application {
            resource: "hides".to_string(),
            message: Some("duplicate".to_string()),
        };
        assert_eq!(e.to_string(), "[hides] Rejected by server: duplicate");
    }

    #[test]
    fn display_parse_error() {
        let e = ApiError::ParseError {
            resource: "logs".to_string(),
            detail: "expected value".to_string(),
        };
        assert_eq!(e.to_string(), "[logs] Parse error: expected value");
    }

    // ---- failure_kind ----

    #[test]
    fn non_2xx_is_network_failure() {
        let e = ApiError::HttpStatus {
            resource: "cidrs".into(),
            status: 500,
            raw_message: None,
        };
        assert_eq!(e.failure_kind(), FailureKind::Network);
    }

    #[test]
    fn parse_error_is_network_failure() {
        let e = ApiError::ParseError {
            resource: "cidrs".into(),
            detail: "eof".into(),
        };
        assert_eq!(e.failure_kind(), FailureKind::Network);
    }

    #[test]
    fn status_error_is_application_failure() {
        let e = ApiError::Application {
            resource: "cidrs".into(),
            message: None,
        };
        assert_eq!(e.failure_kind(), FailureKind::Application);
    }

    // ---- server_message ----

    #[test]
    fn server_message_only_for_application_failures() {
        let app = ApiError::Application {
            resource: "domains".into(),
            message: Some("duplicate".into()),
        };
        assert_eq!(app.server_message(), Some("duplicate"));

        let http = ApiError::HttpStatus {
            resource: "domains".into(),
            status: 400,
            raw_message: Some("bad".into()),
        };
        assert_eq!(http.server_message(), None);
    }

    #[test]
    fn blank_server_message_is_ignored() {
        let e = ApiError::Application {
            resource: "domains".into(),
            message: Some("   ".into()),
        };
        assert_eq!(e.server_message(), None);
    }

    // ---- is_expected ----

    #[test]
    fn client_errors_are_expected() {
        assert!(
            ApiError::HttpStatus {
                resource: "t".into(),
                status: 404,
                raw_message: None,
            }
            .is_expected()
        );
        assert!(
            !ApiError::HttpStatus {
                resource: "t".into(),
                status: 503,
                raw_message: None,
            }
            .is_expected()
        );
        assert!(
            !ApiError::NetworkError {
                resource: "t".into(),
                detail: "x".into(),
            }
            .is_expected()
        );
    }

    #[test]
    fn serialize_uses_code_tag() {
        let e = ApiError::HttpStatus {
            resource: "cidrs".to_string(),
            status: 400,
            raw_message: Some("bad".to_string()),
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"HttpStatus\""));
        assert!(json.contains("\"status\":400"));
    }
}
