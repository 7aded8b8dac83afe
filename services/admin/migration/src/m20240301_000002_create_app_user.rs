use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppUser::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AppUser::AppUserId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AppUser::FirstName).string_len(100).not_null())
                    .col(ColumnDef::new(AppUser::LastName).string_len(100).not_null())
                    .col(ColumnDef::new(AppUser::Email).string_len(255).not_null())
                    .col(ColumnDef::new(AppUser::UserRoleId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_app_user_user_role")
                            .from(AppUser::Table, AppUser::UserRoleId)
                            .to(UserRole::Table, UserRole::UserRoleId)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(AppUser::Table)
                    .col(AppUser::Email)
                    .name("uk_app_user_email")
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AppUser::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum AppUser {
    Table,
    AppUserId,
    FirstName,
    LastName,
    Email,
    UserRoleId,
}

#[derive(Iden)]
enum UserRole {
    Table,
    UserRoleId,
}
