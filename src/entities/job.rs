use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::validation::{ValidationErrors, Validator};

/// A job posting.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "jobs")]
#[serde(rename_all = "camelCase")]
#[schema(as = Job)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: Option<String>, // free text, e.g. "15 - 20 triệu"
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub logo: Option<String>,
    pub expire_date: Option<String>,
    pub category: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Job posting as submitted by an employer, before validation.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub expire_date: Option<String>,
    pub category: Option<String>,
}

impl NewJob {
    /// Checks that title, company, location and category are present.
    pub fn validate(self) -> Result<ActiveModel, ValidationErrors> {
        let mut v = Validator::new();
        let title = v.required("title", self.title);
        let company = v.required("company", self.company);
        let location = v.required("location", self.location);
        let category = v.required("category", self.category);
        v.finish()?;

        Ok(ActiveModel {
            title: Set(title),
            company: Set(company),
            location: Set(location),
            salary: Set(self.salary),
            description: Set(self.description),
            logo: Set(self.logo),
            expire_date: Set(self.expire_date),
            category: Set(category),
            ..Default::default() // id is assigned by the database
        })
    }
}
