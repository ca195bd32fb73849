use crate::cli::ServeArgs;
use crate::infra::{AppState, ServiceStack};
use crate::routes::with_verification_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;
use verifiable_stubs::config::AppConfig;
use verifiable_stubs::error::AppError;
use verifiable_stubs::telemetry;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if args.seed {
        config.seed_reference_data = true;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let services = ServiceStack::in_memory();
    if config.seed_reference_data {
        let seeded = services.catalog.seed_reference_data()?;
        info!(
            regulations = seeded.regulations,
            fraud_patterns = seeded.fraud_patterns,
            sanctions_entries = seeded.sanctions_entries,
            "reference data loaded"
        );
    }

    let app = with_verification_routes(services)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        title = %config.api.title,
        version = %config.api.version,
        "verification stubs ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
