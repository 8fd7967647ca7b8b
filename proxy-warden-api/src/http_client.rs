//! Generic HTTP client tools
//!
//! Reusable request/response handling shared by every endpoint wrapper.
//! Callers construct the `RequestBuilder` themselves (form body, JSON body or
//! none); this module sends it, logs it and classifies the reply.
//!
//! # Response classification
//! - transport failure → [`ApiError::NetworkError`] / [`ApiError::Timeout`]
//! - non-2xx → [`ApiError::HttpStatus`] (body `message`/`detail` captured)
//! - unparsable JSON → [`ApiError::ParseError`]
//! - 2xx with `status != "success"` → [`ApiError::Application`]

use reqwest::RequestBuilder;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::types::{ApiEnvelope, ResponseStatus};
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, body, headers)
    /// * `resource` - resource family (for logging and error context)
    /// * `method_name` - request method name (used for logs)
    /// * `url` - request URL (used for logs)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` for any HTTP status
    /// * `Err(ApiError::NetworkError | ApiError::Timeout)` on transport failure
    pub async fn execute_request(
        request_builder: RequestBuilder,
        resource: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ApiError> {
        log::debug!("[{resource}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout {
                    resource: resource.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ApiError::NetworkError {
                    resource: resource.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{resource}] Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| ApiError::NetworkError {
                resource: resource.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{resource}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ApiError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str, resource: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{resource}] JSON parse failed: {e}");
            log::error!(
                "[{resource}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ApiError::ParseError {
                resource: resource.to_string(),
                detail: e.to_string(),
            }
        })
    }

    /// Classify a raw response into a successful envelope or an [`ApiError`].
    ///
    /// Non-2xx statuses fail before the body is parsed as an envelope; the
    /// body's `message` or `detail` is kept for logging.
    pub fn parse_envelope<T>(
        status_code: u16,
        response_text: &str,
        resource: &str,
    ) -> Result<ApiEnvelope<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        if !(200..300).contains(&status_code) {
            let raw_message = error_body_message(response_text);
            log::warn!(
                "[{resource}] HTTP {status_code}: {}",
                raw_message.as_deref().unwrap_or("<no message>")
            );
            return Err(ApiError::HttpStatus {
                resource: resource.to_string(),
                status: status_code,
                raw_message,
            });
        }

        let envelope: ApiEnvelope<T> = Self::parse_json(response_text, resource)?;
        if envelope.status != ResponseStatus::Success {
            log::warn!(
                "[{resource}] Server reported error: {}",
                envelope.message.as_deref().unwrap_or("<no message>")
            );
            return Err(ApiError::Application {
                resource: resource.to_string(),
                message: envelope.message,
            });
        }

        Ok(envelope)
    }
}

/// Error bodies come as `{"status":"error","message":..}` from handlers and
/// `{"detail":..}` from framework-level rejections (`detail` may be a list).
fn error_body_message(response_text: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
        detail: Option<serde_json::Value>,
    }

    let body: ErrorBody = serde_json::from_str(response_text).ok()?;
    body.message
        .filter(|m| !m.trim().is_empty())
        .or_else(|| match body.detail? {
            serde_json::Value::String(s) => Some(s),
            serde_json::Value::Null => None,
            other => Some(other.to_string()),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ListItem;

    // ---- parse_json ----

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, ApiError> = HttpUtils::parse_json(r#"{"x":42}"#, "test");
        assert!(
            matches!(&result, Ok(Foo { x: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        let result: Result<serde_json::Value, ApiError> =
            HttpUtils::parse_json("<html>oops</html>", "test");
        assert!(
            matches!(&result, Err(ApiError::ParseError { .. })),
            "unexpected parse result: {result:?}"
        );
    }

    // ---- parse_envelope ----

    #[test]
    fn envelope_success_keeps_data() {
        let body = r#"{"status":"success","data":[{"idx":1,"cidr":"10.0.0.0/8","list_type":"allow","description":"","is_active":true,"updated_at":"2024-01-05 10:00:00"}]}"#;
        let result = HttpUtils::parse_envelope::<Vec<ListItem>>(200, body, "cidrs");
        let env = result.unwrap();
        assert_eq!(env.data.map(|d| d.len()), Some(1));
    }

    #[test]
    fn envelope_status_error_is_application_failure() {
        let body = r#"{"status":"error","message":"duplicate"}"#;
        let result = HttpUtils::parse_envelope::<serde_json::Value>(200, body, "domains");
        assert!(
            matches!(
                &result,
                Err(ApiError::Application { message: Some(m), .. }) if m == "duplicate"
            ),
            "unexpected result: {result:?}"
        );
    }

    #[test]
    fn envelope_unknown_status_is_failure() {
        let body = r#"{"status":"pending"}"#;
        let result = HttpUtils::parse_envelope::<serde_json::Value>(200, body, "domains");
        assert!(matches!(
            &result,
            Err(ApiError::Application { message: None, .. })
        ));
    }

    #[test]
    fn non_2xx_captures_detail() {
        let result = HttpUtils::parse_envelope::<serde_json::Value>(
            400,
            r#"{"detail":"Invalid CIDR"}"#,
            "cidrs",
        );
        assert!(
            matches!(
                &result,
                Err(ApiError::HttpStatus { status: 400, raw_message: Some(m), .. }) if m == "Invalid CIDR"
            ),
            "unexpected result: {result:?}"
        );
    }

    #[test]
    fn non_2xx_prefers_message_field() {
        let result = HttpUtils::parse_envelope::<serde_json::Value>(
            500,
            r#"{"status":"error","message":"db down"}"#,
            "logs",
        );
        assert!(matches!(
            &result,
            Err(ApiError::HttpStatus { raw_message: Some(m), .. }) if m == "db down"
        ));
    }

    #[test]
    fn non_2xx_with_non_json_body() {
        let result =
            HttpUtils::parse_envelope::<serde_json::Value>(502, "Bad Gateway", "logs");
        assert!(matches!(
            &result,
            Err(ApiError::HttpStatus {
                status: 502,
                raw_message: None,
                ..
            })
        ));
    }

    #[test]
    fn structured_detail_is_stringified() {
        let msg = error_body_message(r#"{"detail":[{"loc":["body","cidr"],"msg":"field required"}]}"#);
        assert!(msg.is_some_and(|m| m.contains("field required")));
    }
}
