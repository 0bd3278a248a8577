//! Response envelope status tags and the failure-absorption contract.
//!
//! Every response the service returns is wrapped in an envelope carrying a
//! status tag. When a call fails before a usable envelope arrives, the transport
//! builds one locally through [`ErrorEnvelope`] so callers only ever branch on
//! the status.

use serde::{Deserialize, Serialize};

/// Status tag of a nutrition search envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    /// The service found a primary match.
    Success,
    /// The request failed; payload fields must be ignored.
    Error,
    /// Only part of the requested information was found.
    Partial,
}

impl ResponseStatus {
    /// Returns `true` for the `error` tag.
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::Error)
    }
}

/// Status tag of a recognition envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecognitionStatus {
    Success,
    Error,
}

/// Envelopes that can be synthesized locally from a failure message.
///
/// Implemented by every response type the transport returns, so one generic
/// helper can convert a transport or server failure into the envelope the
/// caller expected.
pub trait ErrorEnvelope: Sized {
    /// Builds an envelope with `error` status carrying `message`.
    fn from_failure_message(message: String) -> Self;
}

/// Minimal `{status, message}` envelope returned by mutating endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEnvelope {
    pub status: ResponseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorEnvelope for StatusEnvelope {
    fn from_failure_message(message: String) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: Some(message),
        }
    }
}
