use sea_orm_migration::{prelude::*, schema::*};

use super::m20240601_000001_create_category_table::Category;
use super::m20240601_000002_create_book_table::Book;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CategoryBook::Table)
                    .if_not_exists()
                    .col(integer(CategoryBook::CategoryId))
                    .col(integer(CategoryBook::BookId))
                    .primary_key(
                        Index::create()
                            .name("pk_category_books")
                            .col(CategoryBook::CategoryId)
                            .col(CategoryBook::BookId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_category_books_category_id")
                            .from(CategoryBook::Table, CategoryBook::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_category_books_book_id")
                            .from(CategoryBook::Table, CategoryBook::BookId)
                            .to(Book::Table, Book::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CategoryBook::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CategoryBook {
    #[sea_orm(iden = "category_books")]
    Table,
    CategoryId,
    BookId,
}
