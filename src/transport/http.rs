//! HTTP implementation of [`NutritionService`] on top of `reqwest`.
//!
//! One shared client, one request per operation, no retries, no caching and
//! no timeout beyond the library defaults. JSON is used for text lookups and
//! multipart uploads for images.

use super::failure::TransportFailure;
use super::service::NutritionService;
use crate::domain::{
    ErrorEnvelope, ImageHandle, NutriError, NutritionResponse, Prediction,
    PredictionDetailResponse, PredictionListResponse, RecognitionResponse, Result, StatusEnvelope,
};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;

/// Header carrying the opaque user id on `recognize-and-save`.
pub const USER_ID_HEADER: &str = "User-Id";

/// Multipart field name for the uploaded photo.
pub const IMAGE_FIELD: &str = "file";

/// Outcome of a single call before envelope absorption.
type CallOutcome<T> = std::result::Result<T, TransportFailure>;

/// `reqwest`-backed client for the nutrition/recognition service.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    /// Creates a transport for the service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`NutriError::Config`] if the URL does not parse, cannot carry
    /// path segments, or the HTTP client cannot be initialized.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| NutriError::Config(format!("failed to build HTTP client: {e}")))?;
        Self::with_client(client, base_url)
    }

    /// Creates a transport reusing an existing `reqwest` client.
    ///
    /// # Errors
    ///
    /// Returns [`NutriError::Config`] for an unusable base URL.
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| NutriError::Config(format!("invalid api_url '{base_url}': {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(NutriError::Config(format!(
                "api_url '{base_url}' cannot be used as a base URL"
            )));
        }
        tracing::debug!(base_url = %parsed, "http transport created");
        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Sends a request and decodes a success body as `T`.
    ///
    /// Transport and HTTP-status failures come back as `Ok(Err(failure))`; a
    /// success body that does not decode is a local fault.
    async fn fetch<T: DeserializeOwned>(
        context: &'static str,
        request: RequestBuilder,
    ) -> Result<CallOutcome<T>> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!(context = context, error = %e, "request not answered");
                return Ok(Err(TransportFailure::from_reqwest(&e)));
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!(context = context, error = %e, "response body unreadable");
                return Ok(Err(TransportFailure::from_reqwest(&e)));
            }
        };

        tracing::info!(
            context = context,
            status = status.as_u16(),
            body_len = body.len(),
            "response received"
        );

        if !status.is_success() {
            return Ok(Err(TransportFailure::Server {
                status: status.as_u16(),
                body,
            }));
        }

        serde_json::from_str(&body)
            .map(Ok)
            .map_err(|source| NutriError::Decode { context, source })
    }

    /// Sends a request whose success body is itself the envelope.
    async fn call<T: DeserializeOwned + ErrorEnvelope>(
        context: &'static str,
        request: RequestBuilder,
    ) -> Result<T> {
        Ok(Self::fetch::<T>(context, request)
            .await?
            .unwrap_or_else(|failure| failure.absorb(context)))
    }

    /// Builds the multipart upload for a captured photo.
    async fn upload(
        context: &'static str,
        request: RequestBuilder,
        image: &ImageHandle,
    ) -> Result<RecognitionResponse> {
        let part = Part::bytes(image.bytes().to_vec())
            .file_name(image.file_name().to_string())
            .mime_str(image.mime());
        match part {
            Ok(part) => Self::call(context, request.multipart(Form::new().part(IMAGE_FIELD, part))).await,
            Err(e) => Ok(TransportFailure::from_reqwest(&e).absorb(context)),
        }
    }
}

#[async_trait]
impl NutritionService for HttpTransport {
    async fn search(&self, query: &str) -> Result<NutritionResponse> {
        let url = self.endpoint(&["nutrition", "search", query]);
        tracing::info!(query = %query, url = %url, "searching food by name");
        Self::call("searchFoodByName", self.client.get(url)).await
    }

    async fn search_by_barcode(&self, code: &str) -> Result<NutritionResponse> {
        let url = self.endpoint(&["nutrition", "barcode", code]);
        tracing::info!(barcode = %code, url = %url, "searching food by barcode");
        Self::call("searchFoodByBarcode", self.client.get(url)).await
    }

    async fn recognize_image(&self, image: &ImageHandle) -> Result<RecognitionResponse> {
        let url = self.endpoint(&["image", "recognize"]);
        tracing::info!(image = ?image, url = %url, "recognizing image");
        Self::upload("recognizeImage", self.client.post(url), image).await
    }

    async fn recognize_and_save_image(
        &self,
        image: &ImageHandle,
        user_id: &str,
    ) -> Result<RecognitionResponse> {
        let url = self.endpoint(&["image", "recognize-and-save"]);
        tracing::info!(image = ?image, user_id = %user_id, url = %url, "recognizing and saving image");
        let request = self.client.post(url).header(USER_ID_HEADER, user_id);
        Self::upload("recognizeAndSaveImage", request, image).await
    }

    async fn user_predictions(&self, user_id: &str) -> Result<PredictionListResponse> {
        const CONTEXT: &str = "getUserPredictions";
        let url = self.endpoint(&["predictions", user_id]);
        tracing::info!(user_id = %user_id, url = %url, "listing predictions");
        Ok(match Self::fetch::<Vec<Prediction>>(CONTEXT, self.client.get(url)).await? {
            Ok(predictions) => PredictionListResponse::success(predictions),
            Err(failure) => failure.absorb(CONTEXT),
        })
    }

    async fn prediction_details(
        &self,
        user_id: &str,
        prediction_id: &str,
    ) -> Result<PredictionDetailResponse> {
        const CONTEXT: &str = "getPredictionDetails";
        let url = self.endpoint(&["predictions", user_id, prediction_id]);
        tracing::info!(user_id = %user_id, prediction_id = %prediction_id, "fetching prediction");
        Ok(match Self::fetch::<Prediction>(CONTEXT, self.client.get(url)).await? {
            Ok(prediction) => PredictionDetailResponse::success(prediction),
            Err(failure) => failure.absorb(CONTEXT),
        })
    }

    async fn delete_prediction(&self, user_id: &str, prediction_id: &str) -> Result<StatusEnvelope> {
        let url = self.endpoint(&["predictions", user_id, prediction_id]);
        tracing::info!(user_id = %user_id, prediction_id = %prediction_id, "deleting prediction");
        Self::call("deletePrediction", self.client.delete(url)).await
    }
}
