use axum::{
    http::{StatusCode, Uri},
    middleware::from_fn_with_state,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod store;
pub mod ui;
pub mod validation;

use crate::config::Settings;
use crate::error::AppError;
use crate::middleware::timing::track_response_time;

/// Shared by every handler. Cloning is cheap: the connection is a pool handle.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub settings: Arc<Settings>,
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "site",
    responses(
        (status = 200, description = "Service is healthy", body = String)
    )
)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "Service is healthy")
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "JobBoard API",
        version = "0.1.0",
        description = "Job postings, candidate follows and profile views, employer reports"
    ),
    paths(
        health_check,
        routes::pages::home,
        routes::jobs::create,
        routes::jobs::list,
        routes::jobs::get,
        routes::candidates::follow,
        routes::candidates::list_follows,
        routes::candidates::record_view,
        routes::candidates::list_views,
        routes::reports::generate,
        routes::reports::list
    ),
    components(schemas(
        entities::job::Model,
        entities::job::NewJob,
        entities::candidate_follow::Model,
        entities::candidate_follow::NewCandidateFollow,
        entities::candidate_view::Model,
        entities::candidate_view::NewCandidateView,
        entities::report::Model,
        entities::report::NewReport,
        entities::report::ReportType,
        error::ErrorBody,
        validation::FieldError
    )),
    tags(
        (name = "jobs", description = "Job postings"),
        (name = "candidates", description = "Employer follows and profile views"),
        (name = "reports", description = "Generated employer reports"),
        (name = "site", description = "Public pages and probes")
    )
)]
pub struct ApiDoc;

/// Create the application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let api_doc = ApiDoc::openapi();
    let timing = state.settings.timing();
    let burst = state.settings.rate_limit_burst;
    let rate_limit_period = state.settings.rate_limit_period();

    let api_routes = Router::new()
        .route("/api/jobs", post(routes::jobs::create).get(routes::jobs::list))
        .route("/api/jobs/{id}", get(routes::jobs::get))
        .route("/api/follows", post(routes::candidates::follow))
        .route(
            "/api/candidates/{candidate_id}/follows",
            get(routes::candidates::list_follows),
        )
        .route("/api/views", post(routes::candidates::record_view))
        .route(
            "/api/candidates/{candidate_id}/views",
            get(routes::candidates::list_views),
        )
        .route("/api/reports", post(routes::reports::generate))
        .route(
            "/api/employers/{employer_id}/reports",
            get(routes::reports::list),
        );

    // Rate limit the API only; pages, probes and docs stay unthrottled.
    let api_routes = if let Some(period) = rate_limit_period {
        let governor_conf = GovernorConfigBuilder::default()
            .key_extractor(SmartIpKeyExtractor)
            .period(period)
            .burst_size(burst)
            .finish();
        match governor_conf {
            Some(conf) => api_routes.layer(GovernorLayer {
                config: Arc::new(conf),
            }),
            None => {
                tracing::warn!("Invalid rate limit configuration; API is not rate limited");
                api_routes
            }
        }
    } else {
        api_routes
    };

    let docs_router = SwaggerUi::new("/docs").url("/api-doc/openapi.json", api_doc);

    Router::new()
        .route("/", get(routes::pages::home))
        .route("/health", get(health_check))
        .merge(api_routes)
        .with_state(state)
        .merge(docs_router)
        .fallback(not_found)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        // Outermost, so the measured time covers every other layer.
        .layer(from_fn_with_state(timing, track_response_time))
}
