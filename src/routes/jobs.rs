use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use crate::entities::job::{self, NewJob};
use crate::error::{AppError, ErrorBody};
use crate::extract::{AppJson, AppPath};
use crate::{store, AppState};

/// Post a new job
#[utoipa::path(
    post,
    path = "/api/jobs",
    tag = "jobs",
    request_body = NewJob,
    responses(
        (status = 201, description = "Job created", body = job::Model),
        (status = 400, description = "Missing title, company, location or category", body = ErrorBody)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<NewJob>,
) -> Result<(StatusCode, Json<job::Model>), AppError> {
    let job = store::create_job(&state.db, input).await?;
    tracing::info!(id = job.id, category = %job.category, "Job posted");
    Ok((StatusCode::CREATED, Json(job)))
}

/// List all jobs, newest first
#[utoipa::path(
    get,
    path = "/api/jobs",
    tag = "jobs",
    responses(
        (status = 200, description = "All job postings", body = Vec<job::Model>)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<job::Model>>, AppError> {
    Ok(Json(store::list_jobs(&state.db).await?))
}

/// Fetch one job by id
#[utoipa::path(
    get,
    path = "/api/jobs/{id}",
    tag = "jobs",
    params(("id" = i32, Path, description = "Job id")),
    responses(
        (status = 200, description = "The job", body = job::Model),
        (status = 404, description = "No job with this id", body = ErrorBody)
    )
)]
#[tracing::instrument(skip(state))]
pub async fn get(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<job::Model>, AppError> {
    Ok(Json(store::get_job(&state.db, id).await?))
}
