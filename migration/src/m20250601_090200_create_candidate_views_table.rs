use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CandidateViews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CandidateViews::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CandidateViews::CandidateId).string().not_null())
                    .col(ColumnDef::new(CandidateViews::EmployerId).string().not_null())
                    .col(
                        ColumnDef::new(CandidateViews::ViewedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Lookup only; repeat views are allowed.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_candidate_views_candidate_employer")
                    .table(CandidateViews::Table)
                    .col(CandidateViews::CandidateId)
                    .col(CandidateViews::EmployerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_candidate_views_viewed_at")
                    .table(CandidateViews::Table)
                    .col((CandidateViews::ViewedAt, IndexOrder::Desc))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CandidateViews::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CandidateViews {
    Table,
    Id,
    CandidateId,
    EmployerId,
    ViewedAt,
}
