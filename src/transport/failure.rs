//! Classification of failed calls and their user-facing messages.
//!
//! A failed call is turned into a [`TransportFailure`] and then absorbed into
//! whatever envelope the caller expected, so the application layer only ever
//! sees an `error` status with a readable message.

use crate::domain::ErrorEnvelope;
use serde_json::Value as JsonValue;

/// Message used when no response reached the client.
pub const NO_RESPONSE_MESSAGE: &str =
    "Could not connect to the server. Check network and server status.";

/// Fallback detail for an HTTP failure without a usable body.
pub const SERVER_ERROR_DETAIL: &str = "Server error";

/// Why a call produced no usable envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportFailure {
    /// The request was sent (or attempted) but no response arrived.
    NoResponse,
    /// The service answered with a non-success HTTP status.
    Server {
        /// HTTP status code.
        status: u16,
        /// Raw response body, possibly empty or not JSON.
        body: String,
    },
    /// Anything else, such as a request that could not be built.
    Unknown,
}

impl TransportFailure {
    /// Classifies a `reqwest` error raised before a status line was read.
    #[must_use]
    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_builder() {
            Self::Unknown
        } else if err.is_connect() || err.is_timeout() || err.is_request() || err.is_body() {
            Self::NoResponse
        } else {
            Self::Unknown
        }
    }

    /// Builds the user-facing message for this failure.
    ///
    /// Precedence for server failures: the body's `detail`, then its `message`,
    /// then [`SERVER_ERROR_DETAIL`]; the HTTP status is always prefixed.
    #[must_use]
    pub fn message(&self, context: &str) -> String {
        match self {
            Self::Server { status, body } => {
                let detail = server_detail(body).unwrap_or_else(|| SERVER_ERROR_DETAIL.to_string());
                format!("Error {status}: {detail}")
            }
            Self::NoResponse => NO_RESPONSE_MESSAGE.to_string(),
            Self::Unknown => format!("An unknown error occurred during {context}."),
        }
    }

    /// Converts this failure into the `error` envelope the caller expected.
    pub fn absorb<T: ErrorEnvelope>(&self, context: &str) -> T {
        let message = self.message(context);
        tracing::warn!(context = context, failure = ?self, message = %message, "request failed");
        T::from_failure_message(message)
    }
}

/// Extracts the most specific human-readable message from an error body.
fn server_detail(body: &str) -> Option<String> {
    let json: JsonValue = serde_json::from_str(body).ok()?;
    detail_text(json.get("detail")).or_else(|| non_empty_str(json.get("message")))
}

/// Renders a `detail` field, which is a plain string for most errors and a list
/// of `{loc, msg, type}` objects for request validation errors.
fn detail_text(detail: Option<&JsonValue>) -> Option<String> {
    match detail? {
        JsonValue::String(s) if !s.is_empty() => Some(s.clone()),
        JsonValue::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(JsonValue::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        JsonValue::Null | JsonValue::String(_) => None,
        other => Some(other.to_string()),
    }
}

fn non_empty_str(value: Option<&JsonValue>) -> Option<String> {
    value
        .and_then(JsonValue::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NutritionResponse, RecognitionResponse, RecognitionStatus};

    fn server(status: u16, body: &str) -> TransportFailure {
        TransportFailure::Server { status, body: body.to_string() }
    }

    #[test]
    fn detail_wins_over_message() {
        let failure = server(404, r#"{"detail":"Food not found","message":"ignored"}"#);
        assert_eq!(failure.message("searchFoodByName"), "Error 404: Food not found");
    }

    #[test]
    fn message_used_when_detail_missing_or_empty() {
        assert_eq!(server(500, r#"{"message":"db down"}"#).message("x"), "Error 500: db down");
        assert_eq!(
            server(500, r#"{"detail":"","message":"db down"}"#).message("x"),
            "Error 500: db down"
        );
    }

    #[test]
    fn falls_back_to_server_error() {
        assert_eq!(server(502, "").message("x"), "Error 502: Server error");
        assert_eq!(server(502, "<html>bad gateway</html>").message("x"), "Error 502: Server error");
        assert_eq!(server(500, r#"{"detail":null}"#).message("x"), "Error 500: Server error");
    }

    #[test]
    fn validation_details_are_flattened() {
        let body = r#"{"detail":[{"loc":["path","q"],"msg":"too short","type":"value_error"},
                                  {"loc":["header"],"msg":"missing User-Id","type":"missing"}]}"#;
        assert_eq!(server(422, body).message("x"), "Error 422: too short; missing User-Id");
    }

    #[test]
    fn no_response_and_unknown_messages() {
        assert_eq!(
            TransportFailure::NoResponse.message("searchFoodByName"),
            "Could not connect to the server. Check network and server status."
        );
        assert_eq!(
            TransportFailure::Unknown.message("recognizeImage"),
            "An unknown error occurred during recognizeImage."
        );
    }

    #[test]
    fn absorb_builds_expected_envelope() {
        let nutrition: NutritionResponse = TransportFailure::NoResponse.absorb("searchFoodByName");
        assert!(nutrition.status.is_error());
        assert_eq!(nutrition.message.as_deref(), Some(NO_RESPONSE_MESSAGE));

        let recognition: RecognitionResponse = server(500, "").absorb("recognizeAndSaveImage");
        assert_eq!(recognition.status, RecognitionStatus::Error);
        assert!(recognition.main_prediction.is_none());
    }
}
