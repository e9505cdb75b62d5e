use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Local;
use serde::Deserialize;
use serde_json::json;

use super::domain::{ProApplicationId, ProListingStatus, TradeCategory, VerificationSubmission};
use super::repository::{AlertPublisher, ProApplicationRepository, RepositoryError};
use super::roster::{ProListingView, ProProfile, ProRoster};
use super::service::{ProServiceError, ProVerificationService};

/// Router builder exposing HTTP endpoints for intake, review, and the roster.
pub fn directory_router<R, A>(service: Arc<ProVerificationService<R, A>>) -> Router
where
    R: ProApplicationRepository + 'static,
    A: AlertPublisher + 'static,
{
    Router::new()
        .route("/api/v1/pros", get(roster_handler))
        .route("/api/v1/pros/applications", post(submit_handler::<R, A>))
        .route(
            "/api/v1/pros/applications/:application_id",
            get(status_handler::<R, A>),
        )
        .route(
            "/api/v1/pros/applications/:application_id/review",
            post(review_handler::<R, A>),
        )
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RosterQuery {
    trade: Option<TradeCategory>,
}

pub(crate) async fn roster_handler(Query(query): Query<RosterQuery>) -> Response {
    let roster = ProRoster::standard();
    let listings: Vec<ProListingView> = match query.trade {
        Some(trade) => roster
            .for_trade(trade)
            .into_iter()
            .map(ProProfile::to_view)
            .collect(),
        None => roster.views(),
    };
    (StatusCode::OK, axum::Json(listings)).into_response()
}

pub(crate) async fn submit_handler<R, A>(
    State(service): State<Arc<ProVerificationService<R, A>>>,
    axum::Json(submission): axum::Json<VerificationSubmission>,
) -> Response
where
    R: ProApplicationRepository + 'static,
    A: AlertPublisher + 'static,
{
    match service.submit(submission) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::ACCEPTED, axum::Json(view)).into_response()
        }
        Err(ProServiceError::Intake(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(ProServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "application already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn status_handler<R, A>(
    State(service): State<Arc<ProVerificationService<R, A>>>,
    Path(application_id): Path<String>,
) -> Response
where
    R: ProApplicationRepository + 'static,
    A: AlertPublisher + 'static,
{
    let id = ProApplicationId(application_id);
    match service.get(&id) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(ProServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "application_id": id.0,
                "business_name": serde_json::Value::Null,
                "status": ProListingStatus::Submitted.label(),
                "decision_rationale": "pending review",
                "total_score": serde_json::Value::Null,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn review_handler<R, A>(
    State(service): State<Arc<ProVerificationService<R, A>>>,
    Path(application_id): Path<String>,
) -> Response
where
    R: ProApplicationRepository + 'static,
    A: AlertPublisher + 'static,
{
    let id = ProApplicationId(application_id);
    let today = Local::now().date_naive();
    match service.evaluate(&id, today) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(ProServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "application not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
