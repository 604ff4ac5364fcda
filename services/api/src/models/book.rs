//! Book model and related payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Book entity
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub publish_year: String,
    /// Absolute URL of the stored cover image, empty when none was uploaded
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// New book creation payload
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub publish_year: String,
    pub image: String,
}

/// Book update payload
#[derive(Debug, Clone)]
pub struct UpdateBook {
    pub title: String,
    pub author: String,
    pub publish_year: String,
    pub image: String,
}

/// Response for the book listing endpoint
#[derive(Debug, Serialize)]
pub struct BookListResponse {
    pub count: usize,
    pub data: Vec<Book>,
}
