use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::entities::report::{self, NewReport, ReportType};
use crate::error::{AppError, ErrorBody};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::validation::Validator;
use crate::{store, AppState};

/// Store a generated report
#[utoipa::path(
    post,
    path = "/api/reports",
    tag = "reports",
    request_body = NewReport,
    responses(
        (status = 201, description = "Report stored", body = report::Model),
        (status = 400, description = "Missing field or unknown reportType", body = ErrorBody)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn generate(
    State(state): State<AppState>,
    AppJson(input): AppJson<NewReport>,
) -> Result<(StatusCode, Json<report::Model>), AppError> {
    let report = store::generate_report(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(report)))
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct ReportsQuery {
    /// Only reports of this type
    report_type: Option<String>,
}

/// Reports of an employer, most recent first
#[utoipa::path(
    get,
    path = "/api/employers/{employer_id}/reports",
    tag = "reports",
    params(("employer_id" = String, Path, description = "Employer id"), ReportsQuery),
    responses(
        (status = 200, description = "Reports of the employer", body = Vec<report::Model>),
        (status = 400, description = "Unknown reportType", body = ErrorBody)
    )
)]
#[tracing::instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    AppPath(employer_id): AppPath<String>,
    AppQuery(query): AppQuery<ReportsQuery>,
) -> Result<Json<Vec<report::Model>>, AppError> {
    let report_type = match query.report_type.filter(|t| !t.is_empty()) {
        Some(raw) => {
            let mut v = Validator::new();
            let parsed = v.one_of("reportType", Some(raw), ReportType::parse);
            v.finish()?;
            parsed
        }
        None => None,
    };
    let reports = store::list_reports(&state.db, &employer_id, report_type).await?;
    Ok(Json(reports))
}
