//! Book catalog routes

use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult},
    models::{BookListResponse, NewBook, UpdateBook},
    state::AppState,
    validation,
};

/// Fields collected from a multipart book payload
#[derive(Default)]
struct BookForm {
    title: Option<String>,
    author: Option<String>,
    publish_year: Option<String>,
    image: Option<(Option<String>, Vec<u8>)>,
}

/// Drain a multipart request into the known book fields
///
/// Unknown parts are skipped; a malformed body is a client error.
async fn read_book_form(mut multipart: Multipart) -> ApiResult<BookForm> {
    let mut form = BookForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("title") => {
                form.title = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| ApiError::BadRequest(e.to_string()))?,
                )
            }
            Some("author") => {
                form.author = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| ApiError::BadRequest(e.to_string()))?,
                )
            }
            Some("publishYear") => {
                form.publish_year = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| ApiError::BadRequest(e.to_string()))?,
                )
            }
            Some("image") => {
                let file_name = field.file_name().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(e.to_string()))?;
                form.image = Some((file_name, bytes.to_vec()));
            }
            _ => {}
        }
    }

    Ok(form)
}

/// Save a new book, persisting an uploaded image first when present
pub async fn create_book(
    State(state): State<AppState>,
    multipart: Multipart,
) -> ApiResult<impl IntoResponse> {
    let form = read_book_form(multipart).await?;
    let (title, author, publish_year) =
        validation::required_book_fields(form.title, form.author, form.publish_year)
            .map_err(ApiError::BadRequest)?;

    let image = match form.image {
        Some((file_name, bytes)) => {
            state
                .media_store
                .save(file_name.as_deref(), &bytes)
                .await?
                .url
        }
        None => String::new(),
    };

    let book = state
        .book_repository
        .create(&NewBook {
            title,
            author,
            publish_year,
            image,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(book)))
}

/// Get all books with a count
pub async fn list_books(State(state): State<AppState>) -> ApiResult<Json<BookListResponse>> {
    let books = state.book_repository.find_all().await?;

    Ok(Json(BookListResponse {
        count: books.len(),
        data: books,
    }))
}

/// Get one book by id
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let book = state
        .book_repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Book not found".to_string()))?;

    Ok(Json(book))
}

/// Update a book, replacing its image file when a new one is uploaded
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> ApiResult<impl IntoResponse> {
    let form = read_book_form(multipart).await?;
    let (title, author, publish_year) =
        validation::required_book_fields(form.title, form.author, form.publish_year)
            .map_err(ApiError::BadRequest)?;

    let existing = state
        .book_repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Book not found".to_string()))?;

    let image = match form.image {
        Some((file_name, bytes)) => {
            if !existing.image.is_empty() {
                state.media_store.schedule_delete(&existing.image);
            }
            state
                .media_store
                .save(file_name.as_deref(), &bytes)
                .await?
                .url
        }
        None => existing.image,
    };

    let book = state
        .book_repository
        .update(
            id,
            &UpdateBook {
                title,
                author,
                publish_year,
                image,
            },
        )
        .await?
        .ok_or_else(|| ApiError::NotFound("Book not found".to_string()))?;

    Ok(Json(json!({
        "message": "Book updated successfully",
        "book": book,
    })))
}

/// Delete a book and schedule removal of its image file
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let book = state
        .book_repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Book not found".to_string()))?;

    if !book.image.is_empty() {
        state.media_store.schedule_delete(&book.image);
    }

    if !state.book_repository.delete(id).await? {
        return Err(ApiError::NotFound("Book not found".to_string()));
    }

    Ok(Json(json!({
        "message": "Book deleted successfully",
    })))
}
