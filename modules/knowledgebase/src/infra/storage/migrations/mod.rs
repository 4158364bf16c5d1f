//! Database migrations for the knowledgebase module

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250815_000001_create_options::Migration),
            Box::new(m20250815_000002_create_articles::Migration),
        ]
    }
}

mod m20250815_000001_create_options {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Options::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Options::Key)
                                .string()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Options::Value).json().not_null())
                        .col(
                            ColumnDef::new(Options::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Options::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Options {
        Table,
        Key,
        Value,
        UpdatedAt,
    }
}

mod m20250815_000002_create_articles {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Articles::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Articles::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Articles::ParentId).big_integer())
                        .col(ColumnDef::new(Articles::PostType).string().not_null())
                        .col(ColumnDef::new(Articles::Title).string().not_null())
                        .col(ColumnDef::new(Articles::Excerpt).text().not_null())
                        .col(ColumnDef::new(Articles::Body).text().not_null())
                        .col(
                            ColumnDef::new(Articles::MenuOrder)
                                .big_integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Articles::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(Articles::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await?;

            // Rename and listing queries filter on the slug
            manager
                .create_index(
                    Index::create()
                        .name("idx_articles_post_type")
                        .table(Articles::Table)
                        .col(Articles::PostType)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Articles::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Articles {
        Table,
        Id,
        ParentId,
        PostType,
        Title,
        Excerpt,
        Body,
        MenuOrder,
        CreatedAt,
        UpdatedAt,
    }
}
