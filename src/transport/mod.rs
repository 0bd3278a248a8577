//! Access layer for the remote nutrition/recognition service.
//!
//! # Endpoints
//!
//! | Method | Path | Operation |
//! |---|---|---|
//! | GET | `/nutrition/search/{query}` | [`NutritionService::search`] |
//! | GET | `/nutrition/barcode/{barcode}` | [`NutritionService::search_by_barcode`] |
//! | POST | `/image/recognize` | [`NutritionService::recognize_image`] |
//! | POST | `/image/recognize-and-save` | [`NutritionService::recognize_and_save_image`] |
//! | GET | `/predictions/{user}` | [`NutritionService::user_predictions`] |
//! | GET | `/predictions/{user}/{id}` | [`NutritionService::prediction_details`] |
//! | DELETE | `/predictions/{user}/{id}` | [`NutritionService::delete_prediction`] |
//!
//! # Modules
//!
//! - `service`: the [`NutritionService`] trait consumed by the flow controllers
//! - `http`: the `reqwest` implementation
//! - `failure`: failure classification and message precedence

pub mod failure;
pub mod http;
pub mod service;

pub use failure::{TransportFailure, NO_RESPONSE_MESSAGE};
pub use http::HttpTransport;
pub use service::NutritionService;
