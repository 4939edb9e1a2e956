use crate::server::{data::book::BookRepository, model::book::CreateBookParams};
use chrono::Utc;
use entity::prelude::*;
use sea_orm::{
    ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, TransactionTrait,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;

fn params(category_id: i32) -> CreateBookParams {
    CreateBookParams {
        title: "Dune".to_string(),
        author: "Herbert".to_string(),
        year: 1965,
        category_id,
        created_at: Utc::now(),
    }
}
