use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(kamus_definitions_migration::Migrator).await;
}
