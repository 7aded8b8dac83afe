use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(testify_admin_migration::Migrator).await;
}
