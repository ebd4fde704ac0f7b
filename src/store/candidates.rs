use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::{debug, warn};

use crate::entities::candidate_follow::{self, NewCandidateFollow};
use crate::entities::candidate_view::{self, NewCandidateView};
use crate::error::AppError;

/// Records that an employer follows a candidate. Following the same
/// candidate twice is rejected by the unique index and reported as
/// [`AppError::Conflict`].
pub async fn follow_candidate(
    db: &DatabaseConnection,
    input: NewCandidateFollow,
) -> Result<candidate_follow::Model, AppError> {
    let am = input.validate()?;
    match am.insert(db).await {
        Ok(saved) => {
            debug!(
                "Employer {} now follows candidate {}",
                saved.employer_id, saved.candidate_id
            );
            Ok(saved)
        }
        Err(e) => match AppError::from(e) {
            AppError::Conflict(detail) => {
                warn!("Duplicate follow rejected: {}", detail);
                Err(AppError::Conflict(
                    "employer already follows this candidate".to_string(),
                ))
            }
            other => Err(other),
        },
    }
}

pub async fn list_follows(
    db: &DatabaseConnection,
    candidate_id: &str,
) -> Result<Vec<candidate_follow::Model>, AppError> {
    let follows = candidate_follow::Entity::find()
        .filter(candidate_follow::Column::CandidateId.eq(candidate_id))
        .order_by_desc(candidate_follow::Column::FollowedAt)
        .order_by_desc(candidate_follow::Column::Id)
        .all(db)
        .await?;
    Ok(follows)
}

/// Records a profile view. Repeat views by the same employer are kept.
pub async fn record_view(
    db: &DatabaseConnection,
    input: NewCandidateView,
) -> Result<candidate_view::Model, AppError> {
    let am = input.validate()?;
    let saved = am.insert(db).await?;
    debug!(
        "Employer {} viewed candidate {}",
        saved.employer_id, saved.candidate_id
    );
    Ok(saved)
}

/// Views of one candidate, newest first, optionally narrowed to one employer.
pub async fn list_views(
    db: &DatabaseConnection,
    candidate_id: &str,
    employer_id: Option<&str>,
) -> Result<Vec<candidate_view::Model>, AppError> {
    let mut query = candidate_view::Entity::find()
        .filter(candidate_view::Column::CandidateId.eq(candidate_id));
    if let Some(employer_id) = employer_id {
        query = query.filter(candidate_view::Column::EmployerId.eq(employer_id));
    }
    let views = query
        .order_by_desc(candidate_view::Column::ViewedAt)
        .order_by_desc(candidate_view::Column::Id)
        .all(db)
        .await?;
    Ok(views)
}
