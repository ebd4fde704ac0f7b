use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use crate::validation::{ValidationErrors, Validator};

/// Kinds of report an employer can generate. The string values are stored
/// as-is and are part of the wire format.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ReportType {
    #[sea_orm(string_value = "JobPerformance")]
    JobPerformance,
    #[sea_orm(string_value = "ApplicantDemographics")]
    ApplicantDemographics,
    #[sea_orm(string_value = "InterviewStatistics")]
    InterviewStatistics,
    #[sea_orm(string_value = "ApplicationStatus")]
    ApplicationStatus,
}

impl ReportType {
    pub const ALL: [ReportType; 4] = [
        ReportType::JobPerformance,
        ReportType::ApplicantDemographics,
        ReportType::InterviewStatistics,
        ReportType::ApplicationStatus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::JobPerformance => "JobPerformance",
            ReportType::ApplicantDemographics => "ApplicantDemographics",
            ReportType::InterviewStatistics => "InterviewStatistics",
            ReportType::ApplicationStatus => "ApplicationStatus",
        }
    }

    /// Exact, case-sensitive match on the stored name.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generated employer report. Never updated after insertion.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "reports")]
#[serde(rename_all = "camelCase")]
#[schema(as = Report)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub employer_id: String,
    pub report_type: ReportType,
    #[sea_orm(column_type = "Json")]
    #[schema(value_type = Object)]
    pub data: Json,
    pub generated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewReport {
    pub employer_id: Option<String>,
    /// One of JobPerformance, ApplicantDemographics, InterviewStatistics, ApplicationStatus
    pub report_type: Option<String>,
    /// Free-form report payload; must not be null
    #[schema(value_type = Option<Object>)]
    pub data: Option<Json>,
    pub generated_at: Option<DateTime<Utc>>,
}

impl NewReport {
    pub fn validate(self) -> Result<ActiveModel, ValidationErrors> {
        let mut v = Validator::new();
        let employer_id = v.required("employerId", self.employer_id);
        let report_type = v.one_of("reportType", self.report_type, ReportType::parse);
        let data = v.required_json("data", self.data);
        v.finish()?;

        let mut model = ActiveModel {
            employer_id: Set(employer_id),
            data: Set(data),
            generated_at: Set(self.generated_at.unwrap_or_else(Utc::now)),
            ..Default::default()
        };
        if let Some(report_type) = report_type {
            model.report_type = Set(report_type);
        }
        Ok(model)
    }
}
