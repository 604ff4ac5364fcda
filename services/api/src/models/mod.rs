//! API service models

pub mod book;
pub mod user;

// Re-export for convenience
pub use book::{Book, BookListResponse, NewBook, UpdateBook};
pub use user::{LoginRequest, LoginResponse, NewUser, SignupRequest, User, UserResponse};
