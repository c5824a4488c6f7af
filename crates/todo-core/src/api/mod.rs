//! Shared HTTP plumbing for the auth gateway and the task client.

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};

/// Longest response body excerpt written to a log line, in characters.
const LOG_BODY_LIMIT: usize = 180;

#[derive(Debug, Clone)]
pub(crate) struct ApiTransport {
    config: ClientConfig,
    client: Client,
}

impl ApiTransport {
    pub(crate) fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            config: config.clone(),
            client: Client::builder().build()?,
        })
    }

    pub(crate) const fn client(&self) -> &Client {
        &self.client
    }

    pub(crate) fn endpoint(&self, route: &str) -> String {
        self.config.endpoint(route)
    }
}

/// Sends a request and turns non-2xx statuses into `ApiError::Server`.
///
/// `failure_label` builds the fallback text, e.g. `"Failed to add task"`
/// becomes `"Failed to add task (Status: 500)"` when the body has no message.
pub(crate) async fn send(request: RequestBuilder, failure_label: &str) -> Result<Response> {
    let response = request.send().await?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = parse_error_message(&body)
        .unwrap_or_else(|| format!("{failure_label} (Status: {})", status.as_u16()));
    tracing::warn!(
        "Request failed with HTTP {}: {}",
        status.as_u16(),
        log_excerpt(&body)
    );
    Err(ApiError::Server {
        status: status.as_u16(),
        message,
    })
}

/// Reads a success body as JSON.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|error| {
        tracing::warn!("Unexpected response body: {}", log_excerpt(&body));
        ApiError::Decode(error.to_string())
    })
}

fn log_excerpt(body: &str) -> String {
    body.trim().chars().take(LOG_BODY_LIMIT).collect()
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    msg: Option<String>,
}

pub(crate) fn parse_error_message(body: &str) -> Option<String> {
    let payload = serde_json::from_str::<ErrorBody>(body).ok()?;
    payload
        .message
        .or(payload.msg)
        .map(|message| message.trim().to_string())
        .filter(|message| !message.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_excerpt_is_bounded() {
        assert_eq!(log_excerpt(&"é".repeat(500)).chars().count(), LOG_BODY_LIMIT);
        assert_eq!(log_excerpt("  short body \n"), "short body");
    }

    #[test]
    fn parse_error_message_prefers_message_field() {
        assert_eq!(
            parse_error_message(r#"{"message":"User already exists"}"#).as_deref(),
            Some("User already exists")
        );
        assert_eq!(
            parse_error_message(r#"{"msg":"Token has expired"}"#).as_deref(),
            Some("Token has expired")
        );
    }

    #[test]
    fn parse_error_message_ignores_empty_and_non_json_bodies() {
        assert_eq!(parse_error_message(r#"{"message":"  "}"#), None);
        assert_eq!(parse_error_message("<html>Bad Gateway</html>"), None);
        assert_eq!(parse_error_message(""), None);
    }
}
