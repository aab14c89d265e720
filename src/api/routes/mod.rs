pub mod chat;
pub mod documents;
pub mod health;
pub mod quiz;

use axum::http::{header, Method, StatusCode};
use axum::{routing::get, routing::post, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::middleware::request_logger;
use crate::api::state::AppState;
use crate::domain::DomainError;

pub fn create_router(state: AppState) -> Router {
    let cors = build_cors(&state.config.cors.allowed_origins);

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1", api_v1_routes())
        .layer(axum::middleware::from_fn(request_logger))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn build_cors(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        cors.allow_origin(origins)
    }
}

fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .route("/chat", post(chat::chat_handler))
        .route("/documents", post(documents::upload_document))
        .route("/quiz/score", post(quiz::score_handler))
}

/// Maps the domain taxonomy onto HTTP statuses. Persistence trouble is
/// surfaced distinctly instead of hiding behind a generic 500.
pub(crate) fn error_status(error: &DomainError) -> StatusCode {
    match error {
        DomainError::UnsupportedFileType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        DomainError::EmptyContent(_) | DomainError::Validation(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        DomainError::Persistence(_) => StatusCode::SERVICE_UNAVAILABLE,
        DomainError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        DomainError::ExternalService(_) | DomainError::Internal(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
