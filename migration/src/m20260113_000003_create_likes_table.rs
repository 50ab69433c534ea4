use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(
            Table::create()
                .table(Likes::Table)
                .if_not_exists()
                .col(ColumnDef::new(Likes::Id).big_integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Likes::UserId).big_integer().not_null())
                .col(ColumnDef::new(Likes::ItemId).big_integer().not_null())
                .col(ColumnDef::new(Likes::Kind).string().not_null())
                .col(ColumnDef::new(Likes::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_likes_user_id")
                        .from(Likes::Table, Likes::UserId)
                        .to(Users::Table, Users::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_likes_item_id")
                        .from(Likes::Table, Likes::ItemId)
                        .to(Contents::Table, Contents::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        // The toggle relies on this index: one fact per (user, item, kind).
        manager.create_index(
            Index::create()
                .name("idx_likes_user_item_kind")
                .table(Likes::Table)
                .col(Likes::UserId)
                .col(Likes::ItemId)
                .col(Likes::Kind)
                .unique()
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create()
                .name("idx_likes_kind_item")
                .table(Likes::Table)
                .col(Likes::Kind)
                .col(Likes::ItemId)
                .to_owned()
        ).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Likes::Table).to_owned()).await
    }
}

#[derive(Iden)]
enum Likes {
    Table,
    Id,
    UserId,
    ItemId,
    Kind,
    CreatedAt,
}

#[derive(Iden)]
enum Contents {
    Table,
    Id,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
