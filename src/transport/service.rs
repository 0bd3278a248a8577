//! Service abstraction consumed by the flow controllers.

use crate::domain::{
    ImageHandle, NutritionResponse, PredictionDetailResponse, PredictionListResponse,
    RecognitionResponse, Result, StatusEnvelope,
};
use async_trait::async_trait;

/// Operations offered by the remote nutrition/recognition service.
///
/// Every method performs exactly one call. Transport and server failures are
/// returned as `Ok` envelopes with `error` status; `Err` is reserved for local
/// faults such as a success response whose body does not match the envelope.
///
/// # Implementations
///
/// - [`HttpTransport`](super::HttpTransport): `reqwest` over HTTP (default)
#[async_trait]
pub trait NutritionService: Send + Sync {
    /// Searches foods by name. `query` must already be trimmed and non-empty.
    async fn search(&self, query: &str) -> Result<NutritionResponse>;

    /// Looks up a packaged product by barcode.
    async fn search_by_barcode(&self, code: &str) -> Result<NutritionResponse>;

    /// Classifies a photo without storing the prediction.
    async fn recognize_image(&self, image: &ImageHandle) -> Result<RecognitionResponse>;

    /// Classifies a photo and stores the prediction in the user's history.
    async fn recognize_and_save_image(
        &self,
        image: &ImageHandle,
        user_id: &str,
    ) -> Result<RecognitionResponse>;

    /// Lists the user's stored predictions.
    async fn user_predictions(&self, user_id: &str) -> Result<PredictionListResponse>;

    /// Fetches one stored prediction.
    async fn prediction_details(
        &self,
        user_id: &str,
        prediction_id: &str,
    ) -> Result<PredictionDetailResponse>;

    /// Deletes one stored prediction.
    async fn delete_prediction(&self, user_id: &str, prediction_id: &str) -> Result<StatusEnvelope>;
}
