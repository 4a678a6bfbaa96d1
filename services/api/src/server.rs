use crate::cli::ServeArgs;
use crate::infra::{AppState, PortalServices};
use crate::routes::app;
use axum_prometheus::PrometheusMetricLayer;
use credit_portal::config::AppConfig;
use credit_portal::error::AppError;
use credit_portal::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
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

    telemetry::init(&config.telemetry, config.environment)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let services = PortalServices::in_memory(config.simulation);
    let app = app(services, app_state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        verification_delay_ms = config.simulation.verification_delay.as_millis() as u64,
        "credit portal api ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
