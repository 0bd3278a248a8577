//! Flow controllers: one user-triggered request sequence each.
//!
//! Every flow takes a [`Ticket`](super::screen::Ticket) from the screen before
//! calling the service and applies its outcome through that ticket, so a flow
//! that was superseded or whose screen was disposed changes nothing.
//!
//! # Flows
//!
//! - [`run_search`]: text search
//! - [`run_barcode_search`]: barcode lookup, same contract as `run_search`
//! - [`run_recognition`]: photo recognition chained into a text search
//! - [`load_history`], [`show_prediction`] and [`delete_history_entry`]:
//!   stored predictions
//!
//! `loading` is cleared on every path that reaches the screen: success,
//! error envelope, and local fault alike.

use super::modes::Phase;
use super::screen::{ScreenHandle, Ticket};
use crate::domain::{
    ErrorEnvelope, ImageHandle, PredictionDetailResponse, PredictionListResponse, ResponseStatus,
    StatusEnvelope,
};
use crate::transport::NutritionService;
use tracing::Instrument;

/// Shown when recognition yields no usable prediction and no message.
pub const RECOGNITION_FALLBACK_MESSAGE: &str = "Could not recognize food in the image.";

#[derive(Debug, Clone, Copy)]
enum Lookup {
    Name,
    Barcode,
}

/// Searches foods by name and publishes the outcome on `screen`.
///
/// A blank query is ignored without touching the service or the screen.
///
/// # Returns
///
/// The phase reached, or `None` when nothing was applied (blank query,
/// superseded request, or disposed screen).
pub async fn run_search(
    service: &dyn NutritionService,
    screen: &ScreenHandle,
    query: &str,
) -> Option<Phase> {
    lookup(service, screen, query, Lookup::Name).await
}

/// Looks up a product by barcode and publishes the outcome on `screen`.
pub async fn run_barcode_search(
    service: &dyn NutritionService,
    screen: &ScreenHandle,
    code: &str,
) -> Option<Phase> {
    lookup(service, screen, code, Lookup::Barcode).await
}

async fn lookup(
    service: &dyn NutritionService,
    screen: &ScreenHandle,
    query: &str,
    kind: Lookup,
) -> Option<Phase> {
    let query = query.trim();
    if query.is_empty() {
        tracing::debug!(lookup = ?kind, "blank query ignored");
        return None;
    }

    async {
        let ticket = screen.begin()?;
        let outcome = match kind {
            Lookup::Name => service.search(query).await,
            Lookup::Barcode => service.search_by_barcode(query).await,
        };
        let phase = screen.complete(ticket, |state| {
            state.apply_search_outcome(outcome);
            state.finish_loading();
            state.phase()
        });
        tracing::debug!(phase = ?phase, "lookup finished");
        phase
    }
    .instrument(lookup_span(kind, query))
    .await
}

fn lookup_span(kind: Lookup, query: &str) -> tracing::Span {
    match kind {
        Lookup::Name => tracing::debug_span!("run_search", query = %query),
        Lookup::Barcode => tracing::debug_span!("run_barcode_search", barcode = %query),
    }
}

/// Recognizes the food in a photo, stores the prediction for `user_id`, and
/// searches nutrition facts for the detected label.
///
/// The whole chain runs under a single ticket: `loading` stays raised until
/// the chained search resolves, and the recognition itself is only surfaced
/// as the notice `"Detected: {label}"`. If a newer request starts while the
/// photo is being recognized, the chained search is not issued.
pub async fn run_recognition(
    service: &dyn NutritionService,
    screen: &ScreenHandle,
    image: &ImageHandle,
    user_id: &str,
) -> Option<Phase> {
    let span = tracing::debug_span!("run_recognition", image = ?image);
    async {
        let ticket = screen.begin()?;

        let response = match service.recognize_and_save_image(image, user_id).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, "recognition failed locally");
                return fail(screen, ticket, e.to_string());
            }
        };

        let label = response
            .usable_prediction()
            .map(|p| p.label.trim().to_string())
            .filter(|label| !label.is_empty());
        let Some(label) = label else {
            let message = response
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| RECOGNITION_FALLBACK_MESSAGE.to_string());
            return fail(screen, ticket, message);
        };

        tracing::info!(label = %label, prediction_id = ?response.prediction_id, "food recognized");
        if !screen.is_current(ticket) {
            tracing::debug!(label = %label, "recognition superseded, chained search skipped");
            return None;
        }

        let outcome = service.search(&label).await;
        screen.complete(ticket, |state| {
            state.apply_search_outcome(outcome);
            state.notice = Some(format!("Detected: {label}"));
            state.finish_loading();
            state.phase()
        })
    }
    .instrument(span)
    .await
}

fn fail(screen: &ScreenHandle, ticket: Ticket, message: String) -> Option<Phase> {
    screen.complete(ticket, |state| {
        state.fail(message);
        state.finish_loading();
        state.phase()
    })
}

/// Loads the stored predictions of `user_id` into the history panel.
///
/// A local fault is folded into an error envelope, like a transport failure.
pub async fn load_history(
    service: &dyn NutritionService,
    screen: &ScreenHandle,
    user_id: &str,
) -> PredictionListResponse {
    let response = service
        .user_predictions(user_id)
        .await
        .unwrap_or_else(|e| PredictionListResponse::from_failure_message(e.to_string()));
    tracing::debug!(
        status = ?response.status,
        count = response.predictions.len(),
        "history loaded"
    );
    screen.update(|state| state.apply_history(response.clone()));
    response
}

/// Fetches one stored prediction of `user_id` and summarizes it in the notice.
pub async fn show_prediction(
    service: &dyn NutritionService,
    screen: &ScreenHandle,
    user_id: &str,
    prediction_id: &str,
) -> PredictionDetailResponse {
    let prediction_id = prediction_id.trim();
    let response = service
        .prediction_details(user_id, prediction_id)
        .await
        .unwrap_or_else(|e| PredictionDetailResponse::from_failure_message(e.to_string()));
    tracing::debug!(status = ?response.status, prediction_id = %prediction_id, "prediction loaded");
    screen.update(|state| state.apply_prediction_detail(prediction_id, response.clone()));
    response
}

/// Deletes one stored prediction, reports the outcome as a notice, and
/// reloads the history panel.
pub async fn delete_history_entry(
    service: &dyn NutritionService,
    screen: &ScreenHandle,
    user_id: &str,
    prediction_id: &str,
) -> StatusEnvelope {
    let prediction_id = prediction_id.trim();
    let response = service
        .delete_prediction(user_id, prediction_id)
        .await
        .unwrap_or_else(|e| StatusEnvelope::from_failure_message(e.to_string()));

    let notice = match (&response.status, &response.message) {
        (ResponseStatus::Error, Some(message)) => message.clone(),
        (ResponseStatus::Error, None) => format!("Could not delete prediction {prediction_id}"),
        _ => format!("Deleted prediction {prediction_id}"),
    };
    screen.update(|state| state.notice = Some(notice));

    load_history(service, screen, user_id).await;
    response
}
