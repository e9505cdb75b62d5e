use crate::cli::ServeArgs;
use crate::infra::{
    default_verification_config, AppState, InMemoryAlertPublisher,
    InMemoryProApplicationRepository,
};
use crate::routes::with_platform_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use hometrust::config::AppConfig;
use hometrust::error::AppError;
use hometrust::telemetry;
use hometrust::workflows::directory::{ProVerificationService, VerificationConfig};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryProApplicationRepository::default());
    let alerts = Arc::new(InMemoryAlertPublisher::default());
    let verification_config = VerificationConfig {
        coi_max_age_days: config.verification.coi_max_age_days,
        min_liability_limit: config.verification.min_liability_limit,
        ..default_verification_config()
    };
    let verification_service = Arc::new(ProVerificationService::new(
        repository,
        alerts,
        verification_config,
    ));

    let app = with_platform_routes(verification_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "hometrust platform ready");

    axum::serve(listener, app).await?;
    Ok(())
}
