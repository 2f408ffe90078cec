use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryApplicationStore, InMemoryCatalog, InMemorySession};
use crate::routes::{with_portal_routes, PortalApi};
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use jobboard::catalog::CatalogService;
use jobboard::config::AppConfig;
use jobboard::error::AppError;
use jobboard::telemetry;
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

    let catalog = Arc::new(InMemoryCatalog::from_config_path(
        config.catalog.csv_path.as_deref(),
    )?);
    let applications = Arc::new(InMemoryApplicationStore::seeded());
    let sessions = Arc::new(InMemorySession::default());
    let api = PortalApi {
        service: Arc::new(CatalogService::new(catalog, applications)),
        sessions,
    };

    let app = with_portal_routes(api)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "job board portal ready");

    axum::serve(listener, app).await?;
    Ok(())
}
