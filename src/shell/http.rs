use axum::{
    Json, Router,
    extract::State,
    http::{HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::modules::attendance::use_cases::close_day::inbound::http as close_day_http;
use crate::modules::attendance::use_cases::get_timesheet_range::inbound::http as timesheet_range_http;
use crate::modules::attendance::use_cases::record_punch::inbound::http as record_punch_http;
use crate::shell::config::AppConfig;
use crate::shell::graphql;
use crate::shell::state::AppState;

/// Error response with a `{ "detail": ... }` body.
pub fn detail(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "detail": message.into() }))).into_response()
}

pub fn router(state: AppState) -> Router {
    let config = state.config.clone();

    let attendance = Router::new()
        .route("/punch", post(record_punch_http::handle))
        .route("/timesheet", get(timesheet_range_http::handle))
        .route("/close-day/{emp_id}/{date}", post(close_day_http::handle))
        .route("/health", get(attendance_health));

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .nest(&format!("{}/attendance", config.api_prefix()), attendance)
        .merge(graphql::routes(graphql::build_schema(state.clone()), config.graphiql))
        .with_state(state)
        .layer(cors_layer(&config))
        .layer(TraceLayer::new_for_http())
}

async fn root(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "service": state.config.app_name,
        "version": state.config.api_version,
        "status": "running",
    }))
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "healthy" }))
}

async fn attendance_health() -> impl IntoResponse {
    Json(json!({ "status": "healthy", "service": "attendance" }))
}

pub fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
