use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CandidateFollows::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CandidateFollows::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CandidateFollows::CandidateId).string().not_null())
                    .col(ColumnDef::new(CandidateFollows::EmployerId).string().not_null())
                    .col(
                        ColumnDef::new(CandidateFollows::FollowedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // An employer follows a given candidate at most once.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_candidate_follows_candidate_employer")
                    .table(CandidateFollows::Table)
                    .col(CandidateFollows::CandidateId)
                    .col(CandidateFollows::EmployerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_candidate_follows_followed_at")
                    .table(CandidateFollows::Table)
                    .col((CandidateFollows::FollowedAt, IndexOrder::Desc))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CandidateFollows::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CandidateFollows {
    Table,
    Id,
    CandidateId,
    EmployerId,
    FollowedAt,
}
