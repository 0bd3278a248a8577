//! Image recognition and prediction history model.

use super::envelope::{ErrorEnvelope, RecognitionStatus, ResponseStatus};
use serde::{Deserialize, Serialize};

/// One label guessed by the recognition model.
///
/// The confidence scale is defined by the service and is not validated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    #[serde(rename = "class")]
    pub label: String,
    pub confidence: f64,
}

/// Envelope returned by the recognition endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognitionResponse {
    pub status: RecognitionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_prediction: Option<PredictionResult>,
    #[serde(default)]
    pub alternatives: Vec<PredictionResult>,
    /// Opaque identifier of the stored prediction, set by `recognize-and-save`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction_id: Option<String>,
}

impl RecognitionResponse {
    /// Returns the main prediction only for a successful envelope.
    #[must_use]
    pub fn usable_prediction(&self) -> Option<&PredictionResult> {
        match self.status {
            RecognitionStatus::Success => self.main_prediction.as_ref(),
            RecognitionStatus::Error => None,
        }
    }
}

impl ErrorEnvelope for RecognitionResponse {
    fn from_failure_message(message: String) -> Self {
        Self {
            status: RecognitionStatus::Error,
            message: Some(message),
            main_prediction: None,
            alternatives: vec![],
            prediction_id: None,
        }
    }
}

/// A recognition stored in the user's prediction history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub id: String,
    pub user_id: String,
    pub food_class: String,
    pub confidence: f64,
    /// Timestamp as formatted by the service.
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_filename: Option<String>,
}

/// Prediction history listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionListResponse {
    pub status: ResponseStatus,
    #[serde(default)]
    pub predictions: Vec<Prediction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PredictionListResponse {
    #[must_use]
    pub const fn success(predictions: Vec<Prediction>) -> Self {
        Self {
            status: ResponseStatus::Success,
            predictions,
            message: None,
        }
    }
}

impl ErrorEnvelope for PredictionListResponse {
    fn from_failure_message(message: String) -> Self {
        Self {
            status: ResponseStatus::Error,
            predictions: vec![],
            message: Some(message),
        }
    }
}

/// A single stored prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionDetailResponse {
    pub status: ResponseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction: Option<Prediction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PredictionDetailResponse {
    #[must_use]
    pub const fn success(prediction: Prediction) -> Self {
        Self {
            status: ResponseStatus::Success,
            prediction: Some(prediction),
            message: None,
        }
    }
}

impl ErrorEnvelope for PredictionDetailResponse {
    fn from_failure_message(message: String) -> Self {
        Self {
            status: ResponseStatus::Error,
            prediction: None,
            message: Some(message),
        }
    }
}
