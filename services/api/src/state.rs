//! Application state shared across handlers

use sqlx::PgPool;

use crate::{
    jwt::JwtService,
    media::MediaStore,
    repositories::{BookRepository, UserRepository},
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub book_repository: BookRepository,
    pub user_repository: UserRepository,
    pub media_store: MediaStore,
    pub jwt_service: JwtService,
}
