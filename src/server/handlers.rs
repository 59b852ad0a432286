//! HTTP handlers for the site API.
//!
//! The contact handler validates again on the server. The browser form
//! validates too, but anything can POST to a public endpoint.

use crate::metrics::{SubmissionOutcome, SubmissionTimer};
use crate::models::api::FAILED_MESSAGE;
use crate::models::{ContactAccepted, ContactForm, ContactInvalid, ErrorBody, HealthStatus, Lead};
use crate::server::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, info, warn};

/// `GET /api/health`: liveness only, always the same payload.
pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    state.metrics.record_health_check();
    Json(HealthStatus::ok())
}

/// `OPTIONS /api/*`: answer CORS preflight requests with an empty 200.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// `POST /api/contact`: validate a contact form and hand the lead to the sink.
///
/// - 200 with [`ContactAccepted`] once the sink has the lead
/// - 400 with [`ContactInvalid`] when fields fail validation
/// - 400 with [`ErrorBody`] when the body is not a usable JSON object
/// - 500 with [`ErrorBody`] when the sink fails
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactForm>, JsonRejection>,
) -> Response {
    let timer = SubmissionTimer::new(state.metrics.clone());

    let form = match payload {
        Ok(Json(form)) => form,
        Err(rejection) => {
            warn!(reason = %rejection.body_text(), "Malformed contact submission");
            timer.finish(SubmissionOutcome::Malformed);
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody::new(rejection.body_text())),
            )
                .into_response();
        }
    };

    let submission = match form.validate() {
        Ok(submission) => submission,
        Err(errors) => {
            let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
            info!(fields = ?fields, "Contact submission failed validation");
            timer.finish(SubmissionOutcome::Invalid);
            return (StatusCode::BAD_REQUEST, Json(ContactInvalid::new(errors))).into_response();
        }
    };

    let lead = Lead::new(submission);

    match state.sink.submit_lead(&lead).await {
        Ok(()) => {
            info!(lead_id = %lead.lead_id, "Contact submission accepted");
            timer.finish(SubmissionOutcome::Accepted);
            (StatusCode::OK, Json(ContactAccepted::new(lead.lead_id))).into_response()
        }
        Err(e) => {
            error!(lead_id = %lead.lead_id, error = %e, "Lead sink failed");
            timer.finish(SubmissionOutcome::Failed);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::new(FAILED_MESSAGE)),
            )
                .into_response()
        }
    }
}
