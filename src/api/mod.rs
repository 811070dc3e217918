//! Server API Bindings
//!
//! HTTP bindings to the task-board server, organized by domain. Every
//! call resolves to `Result<T, ApiError>` so call sites must handle both
//! transport failures and non-success responses; nothing is swallowed.

mod auth;
mod boards;
mod tasks;

use gloo_net::http::Response;
use serde::Deserialize;
use std::fmt;

// Re-export all public items
pub use auth::*;
pub use boards::*;
pub use tasks::*;

pub const BASE_URL: &str = "https://todo-app-server-wnkl.onrender.com";

/// Outcome of a failed server call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced an HTTP response
    Network(String),
    /// The server answered with a non-success status
    Api { status: u16, message: String },
}

impl ApiError {
    /// Message shown to the user: the server-provided one for
    /// application failures, a generic one for transport failures.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "An error occurred. Please try again.".to_string(),
            ApiError::Api { message, .. } => message.clone(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(detail) => write!(f, "network error: {detail}"),
            ApiError::Api { status, message } => write!(f, "{message} (HTTP {status})"),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// Error body shape the server uses on non-2xx responses
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Extracts the server-provided message from a non-2xx body, falling
/// back to a generic one when the field is missing or the body is not
/// JSON.
fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| format!("Request failed with status {status}"))
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Checks the response status and decodes the JSON body on success.
async fn decode_json<T: for<'de> Deserialize<'de>>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let text = response.text().await?;
    if !response.ok() {
        return Err(ApiError::Api {
            status,
            message: error_message(status, &text),
        });
    }
    serde_json::from_str(&text).map_err(|e| ApiError::Api {
        status,
        message: format!("Unexpected response format: {e}"),
    })
}

/// Checks the status of a call whose success body is ignored.
async fn expect_ok(response: Response) -> Result<(), ApiError> {
    let status = response.status();
    if response.ok() {
        return Ok(());
    }
    let text = response.text().await.unwrap_or_default();
    Err(ApiError::Api {
        status,
        message: error_message(status, &text),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_from_body() {
        assert_eq!(
            error_message(400, r#"{"message":"Board name taken"}"#),
            "Board name taken"
        );
    }

    #[test]
    fn test_error_message_fallbacks() {
        assert_eq!(
            error_message(500, r#"{"detail":"oops"}"#),
            "Request failed with status 500"
        );
        assert_eq!(
            error_message(502, "<html>Bad Gateway</html>"),
            "Request failed with status 502"
        );
        assert_eq!(error_message(401, ""), "Request failed with status 401");
    }

    #[test]
    fn test_user_message() {
        let err = ApiError::Api {
            status: 400,
            message: "Board name taken".to_string(),
        };
        assert_eq!(err.user_message(), "Board name taken");

        let err = ApiError::Network("failed to fetch".to_string());
        assert_eq!(err.user_message(), "An error occurred. Please try again.");
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::Api {
            status: 401,
            message: "Unauthorized".to_string(),
        };
        assert_eq!(err.to_string(), "Unauthorized (HTTP 401)");

        let err = ApiError::Network("failed to fetch".to_string());
        assert_eq!(err.to_string(), "network error: failed to fetch");
    }
}
