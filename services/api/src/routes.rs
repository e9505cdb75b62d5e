use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use hometrust::error::AppError;
use hometrust::workflows::directory::{
    directory_router, AlertPublisher, ProApplicationRepository, ProVerificationService,
};
use hometrust::workflows::pricing::{FlatRateOffer, FlatRateOfferView, PriceCatalog};
use hometrust::workflows::triage::report::views::{
    tier_cards, TierBreakdownEntry, TierCardView, TriageInsights, TriageResultView,
};
use hometrust::workflows::triage::{build_context, ConsultationContext, TriageClassifier, TriageReport};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct TriageReportRequest {
    /// Comma- or newline-separated project phrases, as typed into the triage
    /// form.
    pub(crate) projects: String,
    #[serde(default)]
    pub(crate) include_quotes: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct TriageReportResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) headline_tier_label: Option<&'static str>,
    pub(crate) tier_breakdown: Vec<TierBreakdownEntry>,
    pub(crate) results: Vec<TriageResultView>,
    pub(crate) insights: TriageInsights,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) quotes: Option<Vec<ProjectQuote>>,
}

/// A per-phrase quote lookup. Phrases off the flat-rate grid carry no offer.
#[derive(Debug, Serialize)]
pub(crate) struct ProjectQuote {
    pub(crate) phrase: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) offer: Option<FlatRateOfferView>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ConsultationRequest {
    pub(crate) projects: String,
}

pub(crate) fn with_platform_routes<R, A>(
    service: Arc<ProVerificationService<R, A>>,
) -> axum::Router
where
    R: ProApplicationRepository + 'static,
    A: AlertPublisher + 'static,
{
    directory_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/triage/report",
            axum::routing::post(triage_report_endpoint),
        )
        .route(
            "/api/v1/triage/tiers",
            axum::routing::get(tier_catalog_endpoint),
        )
        .route("/api/v1/pricing", axum::routing::get(pricing_endpoint))
        .route(
            "/api/v1/consultations/context",
            axum::routing::post(consultation_context_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn triage_report_endpoint(
    Json(payload): Json<TriageReportRequest>,
) -> Json<TriageReportResponse> {
    let TriageReportRequest {
        projects,
        include_quotes,
    } = payload;

    let classifier = TriageClassifier::standard();
    let report = TriageReport::new(classifier.classify_list(&projects));
    let summary = report.summary();
    let insights = summary.insights();

    let quotes = include_quotes.then(|| {
        let catalog = PriceCatalog::standard();
        summary
            .results
            .iter()
            .map(|result| ProjectQuote {
                phrase: result.phrase.clone(),
                offer: catalog
                    .match_phrase(&result.phrase)
                    .map(FlatRateOffer::to_view),
            })
            .collect()
    });

    Json(TriageReportResponse {
        headline_tier_label: summary.headline_tier_label,
        tier_breakdown: summary.tier_breakdown,
        results: summary.results,
        insights,
        quotes,
    })
}

pub(crate) async fn tier_catalog_endpoint() -> Json<Vec<TierCardView>> {
    Json(tier_cards())
}

pub(crate) async fn pricing_endpoint() -> Json<Vec<FlatRateOfferView>> {
    Json(PriceCatalog::standard().views())
}

pub(crate) async fn consultation_context_endpoint(
    Json(payload): Json<ConsultationRequest>,
) -> Result<Json<ConsultationContext>, AppError> {
    let classifier = TriageClassifier::standard();
    let context = build_context(&classifier, &payload.projects)?;
    Ok(Json(context))
}
