use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GradingElement::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GradingElement::GradingElementId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(GradingElement::AssignmentId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GradingElement::ElementName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(GradingElement::Description).text())
                    .col(
                        ColumnDef::new(GradingElement::MaxPoints)
                            .decimal_len(5, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GradingElement::IsDeduction)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_grading_element_assignment")
                            .from(GradingElement::Table, GradingElement::AssignmentId)
                            .to(Assignment::Table, Assignment::AssignmentId)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GradingElement::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum GradingElement {
    Table,
    GradingElementId,
    AssignmentId,
    ElementName,
    Description,
    MaxPoints,
    IsDeduction,
}

#[derive(Iden)]
enum Assignment {
    Table,
    AssignmentId,
}
