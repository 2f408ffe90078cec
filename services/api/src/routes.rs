use crate::infra::{AppState, InMemoryApplicationStore, InMemoryCatalog, InMemorySession};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use jobboard::access::{Identity, Role};
use jobboard::catalog::{catalog_router, CatalogApi};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

pub(crate) type PortalApi = CatalogApi<InMemoryCatalog, InMemoryApplicationStore, InMemorySession>;

pub(crate) fn with_portal_routes(api: PortalApi) -> axum::Router {
    let sessions = api.sessions.clone();
    catalog_router(api)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/session",
            axum::routing::post(sign_in_endpoint).layer(Extension(sessions)),
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

/// Mock sign-in: any role/name/email combination is accepted as-is.
#[derive(Debug, Deserialize)]
pub(crate) struct SignInRequest {
    pub(crate) role: String,
    pub(crate) name: String,
    pub(crate) email: String,
    #[serde(default)]
    pub(crate) avatar_url: Option<String>,
}

pub(crate) async fn sign_in_endpoint(
    Extension(sessions): Extension<Arc<InMemorySession>>,
    Json(request): Json<SignInRequest>,
) -> (StatusCode, Json<serde_json::Value>) {
    let Some(role) = Role::parse(&request.role) else {
        let payload = json!({
            "error": format!("unknown role '{}'", request.role),
            "expected": Role::ordered().map(Role::label),
        });
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload));
    };

    let mut identity = Identity::new(role, request.name, request.email);
    identity.avatar_url = request.avatar_url;
    sessions.sign_in(identity.clone());

    let payload = json!({ "signed_in": true, "identity": identity });
    (StatusCode::CREATED, Json(payload))
}
