use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(Definitions::Table)
                    .col(Definitions::StatusDefinitionId)
                    .col(Definitions::CategoryId)
                    .name("idx_definitions_status_category")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Definitions::Table)
                    .col(Definitions::UserId)
                    .col(Definitions::UpdatedAt)
                    .name("idx_definitions_user_updated_at")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_definitions_user_updated_at")
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_definitions_status_category")
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum Definitions {
    Table,
    UserId,
    CategoryId,
    StatusDefinitionId,
    UpdatedAt,
}
