//! Domain layer for the NutriSearch client.
//!
//! This module holds the value types exchanged with the nutrition service and
//! the crate error type, independent of HTTP or rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`envelope`]: Status tags and the failure-to-envelope contract
//! - [`nutrition`]: Food items and search envelopes
//! - [`recognition`]: Recognition envelopes and prediction history
//! - [`image`]: Opaque captured-image handle
//!
//! # Examples
//!
//! ```
//! use nutrisearch::domain::{NutritionResponse, ResponseStatus};
//!
//! let response: NutritionResponse = serde_json::from_str(
//!     r#"{"status":"success","data":{"food_name":"Banana"},"alternatives":[]}"#,
//! ).unwrap();
//! assert_eq!(response.status, ResponseStatus::Success);
//! assert_eq!(response.usable_data().unwrap().food_name, "Banana");
//! ```

pub mod envelope;
pub mod error;
pub mod image;
pub mod nutrition;
pub mod recognition;

pub use envelope::{ErrorEnvelope, RecognitionStatus, ResponseStatus, StatusEnvelope};
pub use error::{NutriError, Result};
pub use image::ImageHandle;
pub use nutrition::{NutrientDetails, Nutrient, NutritionInfo, NutritionResponse};
pub use recognition::{
    Prediction, PredictionDetailResponse, PredictionListResponse, PredictionResult,
    RecognitionResponse,
};
