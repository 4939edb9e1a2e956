use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub category_id: i32,
    pub year: i32,
    pub created_at: DateTime<Utc>,
}

/// Request body for `POST /`. Unknown fields are ignored, all listed fields are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBookDto {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub category_id: i32,
}
