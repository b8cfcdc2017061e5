//! Create games table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Games::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Games::Name).string_len(64).not_null())
                    .col(ColumnDef::new(Games::YearReleased).integer().not_null())
                    .col(ColumnDef::new(Games::Genre).string_len(64).not_null())
                    .col(ColumnDef::new(Games::Studio).string_len(64).not_null())
                    .to_owned(),
            )
            .await?;

        // Equality filters on the listing endpoint hit these two columns.
        manager
            .create_index(
                Index::create()
                    .name("idx_games_genre")
                    .table(Games::Table)
                    .col(Games::Genre)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_games_year_released")
                    .table(Games::Table)
                    .col(Games::YearReleased)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Games {
    Table,
    Id,
    Name,
    YearReleased,
    Genre,
    Studio,
}
