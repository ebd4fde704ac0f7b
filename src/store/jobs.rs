use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};
use tracing::debug;

use crate::entities::job::{self, NewJob};
use crate::error::AppError;

pub async fn create_job(db: &DatabaseConnection, input: NewJob) -> Result<job::Model, AppError> {
    let am = input.validate()?;
    let saved = am.insert(db).await?;
    debug!("Inserted job {} ({} @ {})", saved.id, saved.title, saved.company);
    Ok(saved)
}

pub async fn get_job(db: &DatabaseConnection, id: i32) -> Result<job::Model, AppError> {
    job::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("job {}", id)))
}

/// All postings, most recently created first.
pub async fn list_jobs(db: &DatabaseConnection) -> Result<Vec<job::Model>, AppError> {
    let jobs = job::Entity::find()
        .order_by_desc(job::Column::Id)
        .all(db)
        .await?;
    Ok(jobs)
}
