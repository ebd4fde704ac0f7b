use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::entities::candidate_follow::{self, NewCandidateFollow};
use crate::entities::candidate_view::{self, NewCandidateView};
use crate::error::{AppError, ErrorBody};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::{store, AppState};

/// Employer follows a candidate
#[utoipa::path(
    post,
    path = "/api/follows",
    tag = "candidates",
    request_body = NewCandidateFollow,
    responses(
        (status = 201, description = "Follow recorded", body = candidate_follow::Model),
        (status = 400, description = "Missing candidateId or employerId", body = ErrorBody),
        (status = 409, description = "Employer already follows this candidate", body = ErrorBody)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn follow(
    State(state): State<AppState>,
    AppJson(input): AppJson<NewCandidateFollow>,
) -> Result<(StatusCode, Json<candidate_follow::Model>), AppError> {
    let follow = store::follow_candidate(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(follow)))
}

/// Employers following a candidate, most recent first
#[utoipa::path(
    get,
    path = "/api/candidates/{candidate_id}/follows",
    tag = "candidates",
    params(("candidate_id" = String, Path, description = "Candidate id")),
    responses(
        (status = 200, description = "Follows of the candidate", body = Vec<candidate_follow::Model>)
    )
)]
#[tracing::instrument(skip(state))]
pub async fn list_follows(
    State(state): State<AppState>,
    AppPath(candidate_id): AppPath<String>,
) -> Result<Json<Vec<candidate_follow::Model>>, AppError> {
    Ok(Json(store::list_follows(&state.db, &candidate_id).await?))
}

/// Employer viewed a candidate profile
#[utoipa::path(
    post,
    path = "/api/views",
    tag = "candidates",
    request_body = NewCandidateView,
    responses(
        (status = 201, description = "View recorded", body = candidate_view::Model),
        (status = 400, description = "Missing candidateId or employerId", body = ErrorBody)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn record_view(
    State(state): State<AppState>,
    AppJson(input): AppJson<NewCandidateView>,
) -> Result<(StatusCode, Json<candidate_view::Model>), AppError> {
    let view = store::record_view(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct ViewsQuery {
    /// Only views by this employer
    employer_id: Option<String>,
}

/// Profile views of a candidate, most recent first
#[utoipa::path(
    get,
    path = "/api/candidates/{candidate_id}/views",
    tag = "candidates",
    params(("candidate_id" = String, Path, description = "Candidate id"), ViewsQuery),
    responses(
        (status = 200, description = "Views of the candidate", body = Vec<candidate_view::Model>)
    )
)]
#[tracing::instrument(skip(state))]
pub async fn list_views(
    State(state): State<AppState>,
    AppPath(candidate_id): AppPath<String>,
    AppQuery(query): AppQuery<ViewsQuery>,
) -> Result<Json<Vec<candidate_view::Model>>, AppError> {
    let views = store::list_views(&state.db, &candidate_id, query.employer_id.as_deref()).await?;
    Ok(Json(views))
}
