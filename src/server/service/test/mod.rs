use crate::server::{
    error::AppError,
    model::book::NewBook,
    service::{book::BookService, category::CategoryService},
    util::clock::FixedClock,
};
use chrono::{TimeZone, Utc};
use entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};


fn clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap())
}

fn new_book(title: &str, author: &str, year: i32, category_id: i32) -> NewBook {
    NewBook {
        title: title.to_string(),
        author: author.to_string(),
        year,
        category_id,
    }
}
