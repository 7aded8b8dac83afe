use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Autotester::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Autotester::AutotesterId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Autotester::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Autotester::StudentGitlabUrl).text().not_null())
                    .col(ColumnDef::new(Autotester::TestsGitlabUrl).text().not_null())
                    .col(ColumnDef::new(Autotester::StudentCodePath).text().not_null())
                    .col(ColumnDef::new(Autotester::TestCodePath).text().not_null())
                    .col(ColumnDef::new(Autotester::DockerImageUrl).text().not_null())
                    .col(ColumnDef::new(Autotester::GitlabToken).text())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Autotester::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Autotester {
    Table,
    AutotesterId,
    Name,
    StudentGitlabUrl,
    TestsGitlabUrl,
    StudentCodePath,
    TestCodePath,
    DockerImageUrl,
    GitlabToken,
}
