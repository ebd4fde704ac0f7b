use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::validation::{ValidationErrors, Validator};

/// An employer following a candidate. At most one row per
/// (candidate_id, employer_id); the unique index lives in the migration.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "candidate_follows")]
#[serde(rename_all = "camelCase")]
#[schema(as = CandidateFollow)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub candidate_id: String,
    pub employer_id: String,
    pub followed_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewCandidateFollow {
    pub candidate_id: Option<String>,
    pub employer_id: Option<String>,
    /// Defaults to the time of insertion
    pub followed_at: Option<DateTime<Utc>>,
}

impl NewCandidateFollow {
    pub fn validate(self) -> Result<ActiveModel, ValidationErrors> {
        let mut v = Validator::new();
        let candidate_id = v.required("candidateId", self.candidate_id);
        let employer_id = v.required("employerId", self.employer_id);
        v.finish()?;

        Ok(ActiveModel {
            candidate_id: Set(candidate_id),
            employer_id: Set(employer_id),
            followed_at: Set(self.followed_at.unwrap_or_else(Utc::now)),
            ..Default::default()
        })
    }
}
