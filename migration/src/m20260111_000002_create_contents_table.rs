use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // News, jobs, events and partners share one table; every read is scoped by `kind`.
        manager.create_table(
            Table::create()
                .table(Contents::Table)
                .if_not_exists()
                .col(ColumnDef::new(Contents::Id).big_integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Contents::PublicId).uuid().not_null().unique_key())
                .col(ColumnDef::new(Contents::Kind).string().not_null())
                .col(ColumnDef::new(Contents::Title).string().not_null())
                .col(ColumnDef::new(Contents::Description).text().null())
                .col(ColumnDef::new(Contents::Content).text().not_null())
                .col(ColumnDef::new(Contents::Category).string().null())
                .col(ColumnDef::new(Contents::ImageUrl).string().null())
                .col(ColumnDef::new(Contents::AuthorId).big_integer().null())
                .col(ColumnDef::new(Contents::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_contents_author_id")
                        .from(Contents::Table, Contents::AuthorId)
                        .to(Users::Table, Users::Id)
                        .on_delete(ForeignKeyAction::SetNull)
                )
                .to_owned(),
        ).await?;

        manager.create_index(
            Index::create()
                .name("idx_contents_kind_created_at")
                .table(Contents::Table)
                .col(Contents::Kind)
                .col(Contents::CreatedAt)
                .to_owned()
        ).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Contents::Table).to_owned()).await
    }
}

#[derive(Iden)]
enum Contents {
    Table,
    Id,
    PublicId,
    Kind,
    Title,
    Description,
    Content,
    Category,
    ImageUrl,
    AuthorId,
    CreatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
