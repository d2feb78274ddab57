use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Fixed moderation statuses. Ids are referenced by the service and must not change.
const STATUSES: [(i32, &str); 4] = [
    (1, "pending"),
    (2, "approved"),
    (3, "rejected"),
    (4, "deleted"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StatusDefinitions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StatusDefinitions::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StatusDefinitions::StatusDefinition)
                            .string_len(32)
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        let mut seed = Query::insert()
            .into_table(StatusDefinitions::Table)
            .columns([StatusDefinitions::Id, StatusDefinitions::StatusDefinition])
            .to_owned();
        for (id, label) in STATUSES {
            seed.values_panic([id.into(), label.into()]);
        }
        seed.on_conflict(
            OnConflict::column(StatusDefinitions::Id)
                .do_nothing()
                .to_owned(),
        );

        let db = manager.get_connection();
        db.execute(db.get_database_backend().build(&seed)).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StatusDefinitions::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum StatusDefinitions {
    Table,
    Id,
    StatusDefinition,
}
