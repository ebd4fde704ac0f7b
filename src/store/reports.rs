use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::debug;

use crate::entities::report::{self, NewReport, ReportType};
use crate::error::AppError;

pub async fn generate_report(
    db: &DatabaseConnection,
    input: NewReport,
) -> Result<report::Model, AppError> {
    let am = input.validate()?;
    let saved = am.insert(db).await?;
    debug!(
        "Stored {} report {} for employer {}",
        saved.report_type, saved.id, saved.employer_id
    );
    Ok(saved)
}

/// Reports for one employer, newest first, optionally of a single type.
pub async fn list_reports(
    db: &DatabaseConnection,
    employer_id: &str,
    report_type: Option<ReportType>,
) -> Result<Vec<report::Model>, AppError> {
    let mut query = report::Entity::find().filter(report::Column::EmployerId.eq(employer_id));
    if let Some(report_type) = report_type {
        query = query.filter(report::Column::ReportType.eq(report_type));
    }
    let reports = query
        .order_by_desc(report::Column::GeneratedAt)
        .order_by_desc(report::Column::Id)
        .all(db)
        .await?;
    Ok(reports)
}
