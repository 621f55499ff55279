use gloo::net::http::Request;
use serde::{Serialize, de::DeserializeOwned};

use crate::domain::{
    errors::{InfrastructureError, InfrastructureResult, NetworkError},
    logging::{LogComponent, LogLevel, get_logger},
};

/// JSON-over-fetch client built on gloo
#[derive(Clone)]
pub struct GlooHttpClient {
    default_headers: Vec<(String, String)>,
}

impl Default for GlooHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GlooHttpClient {
    pub fn new() -> Self {
        Self {
            default_headers: vec![("Content-Type".to_string(), "application/json".to_string())],
        }
    }

    /// POST `body` as JSON and decode a JSON reply.
    /// Non-2xx replies are logged with their body and returned as `HttpStatus`.
    pub async fn post_json<T, R>(&self, url: &str, body: &T) -> InfrastructureResult<R>
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        let safe_url = HttpUtils::strip_query(url);
        get_logger().debug(LogComponent::Infrastructure("HTTP"), &format!("🌐 POST JSON: {}", safe_url));

        let mut request = Request::post(url);
        for (key, value) in &self.default_headers {
            request = request.header(key, value);
        }

        let response = request
            .json(body)
            .map_err(|e| InfrastructureError::Serialization(format!("Failed to encode body: {:?}", e)))?
            .send()
            .await
            .map_err(|e| NetworkError::HttpRequestFailed(format!("{:?}", e)))?;

        if !HttpUtils::is_success_status(response.status()) {
            let error_body = response.text().await.unwrap_or_default();
            get_logger().log_with_metadata(
                LogLevel::Error,
                LogComponent::Infrastructure("HTTP"),
                &format!("API error response from {}", safe_url),
                &error_body,
            );
            return Err(NetworkError::HttpStatus {
                status: response.status(),
                status_text: response.status_text(),
            }
            .into());
        }

        let data = response
            .json::<R>()
            .await
            .map_err(|e| NetworkError::InvalidResponse(format!("Failed to parse JSON response: {:?}", e)))?;

        get_logger().debug(LogComponent::Infrastructure("HTTP"), "✅ POST JSON response parsed successfully");

        Ok(data)
    }
}

/// Helpers for building request URLs
pub struct HttpUtils;

impl HttpUtils {
    pub fn is_success_status(status: u16) -> bool {
        (200..300).contains(&status)
    }

    /// Drop the query string so API keys never reach the log
    pub fn strip_query(url: &str) -> &str {
        url.split_once('?').map(|(path, _)| path).unwrap_or(url)
    }

    /// Percent-encode a query component (RFC 3986 unreserved set kept as is)
    pub fn url_encode(input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        for byte in input.bytes() {
            match byte {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => out.push(byte as char),
                _ => out.push_str(&format!("%{:02X}", byte)),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_is_stripped_for_logging() {
        assert_eq!(
            HttpUtils::strip_query("https://example.com/v1/models/m:generateContent?key=secret"),
            "https://example.com/v1/models/m:generateContent"
        );
        assert_eq!(HttpUtils::strip_query("https://example.com/a"), "https://example.com/a");
    }

    #[test]
    fn test_url_encoding() {
        assert_eq!(HttpUtils::url_encode("hello world"), "hello%20world");
        assert_eq!(HttpUtils::url_encode("a&b=c"), "a%26b%3Dc");
        assert_eq!(HttpUtils::url_encode("AIza-_.~"), "AIza-_.~");
    }

    #[test]
    fn success_range() {
        assert!(HttpUtils::is_success_status(200));
        assert!(!HttpUtils::is_success_status(404));
    }
}
