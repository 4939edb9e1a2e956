use crate::server::{data::category::CategoryRepository, model::category::CreateCategoryParams};
use chrono::{TimeZone, Utc};
use sea_orm::{DbErr, EntityTrait, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
mod get_by_id;
