pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod types;

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    middleware as axum_middleware,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::database::store::Store;

/// Shared handler state: the persistence seam behind the API
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
}

/// Build the application router. Split out of main so integration tests can
/// drive the exact production routing and middleware stack.
pub fn app(state: AppState) -> Router {
    let protected = Router::new()
        .route(
            "/api/subjects",
            get(handlers::protected::subjects::department_get)
                .post(handlers::protected::subjects::subject_post)
                .put(handlers::protected::subjects::department_put)
                .delete(handlers::protected::subjects::department_delete),
        )
        .route_layer(axum_middleware::from_fn(middleware::session_auth_middleware));

    let mut router = Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if config::config().security.enable_cors {
        router = router.layer(CorsLayer::permissive());
    }

    router
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "SBTE API",
            "version": version,
            "description": "Academic institution management API built with Rust (Axum)",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "subjects": "/api/subjects (protected - POST creates a subject; PUT/DELETE/GET manage departments)",
            }
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.store.ping().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
