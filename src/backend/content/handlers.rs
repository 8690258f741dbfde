/**
 * Content Handlers
 *
 * This module implements the HTTP handlers for content:
 *
 * - `GET /contents` - public listing of every item
 * - `GET /content` - the caller's own items
 * - `POST /content` - create an item owned by the caller
 * - `PUT /content/{id}` - replace an item the caller owns
 * - `DELETE /content/{id}` - delete an item the caller owns
 *
 * All but the public listing sit behind the authentication middleware. The
 * owner always comes from the session; request bodies cannot name one.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::content::service;
use crate::backend::error::BackendError;
use crate::backend::extract::{parse_id, JsonBody};
use crate::backend::middleware::AuthUser;
use crate::backend::server::database::Database;
use crate::shared::{Content, ContentFields, MessageResponse};

/// Public listing of all content
pub async fn list_all_contents(
    State(database): State<Database>,
) -> Result<Json<Vec<Content>>, BackendError> {
    let contents = service::list_all(&database).await?;
    Ok(Json(contents))
}

/// The authenticated user's content
pub async fn list_my_contents(
    State(database): State<Database>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Content>>, BackendError> {
    let contents = service::list_owned(&database, user.user_id).await?;
    Ok(Json(contents))
}

/// Create content handler
///
/// # Example Request
///
/// ```http
/// POST /content HTTP/1.1
/// Cookie: token=eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...
/// Content-Type: application/json
///
/// {
///   "name": "Blog",
///   "description": "Personal blog",
///   "url": "https://blog.example.com",
///   "imgUrl": "https://blog.example.com/cover.png",
///   "stack": ["go", "rust"]
/// }
/// ```
///
/// # Errors
///
/// * `400 Bad Request` - malformed body, empty name, or an unknown stack name
/// * `401 Unauthorized` - no valid session
pub async fn create_content(
    State(database): State<Database>,
    AuthUser(user): AuthUser,
    JsonBody(fields): JsonBody<ContentFields>,
) -> Result<(StatusCode, Json<MessageResponse>), BackendError> {
    service::create_content(&database, user.user_id, fields).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Content created successfully")),
    ))
}

/// Update content handler
///
/// Replaces every editable field and re-resolves the stack names.
///
/// # Errors
///
/// * `400 Bad Request` - invalid ID, malformed body or unknown stack name
/// * `401 Unauthorized` - no valid session
/// * `404 Not Found` - no such item, or it belongs to someone else
pub async fn update_content(
    State(database): State<Database>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    JsonBody(fields): JsonBody<ContentFields>,
) -> Result<&'static str, BackendError> {
    let id = parse_id(&id, "content")?;
    service::edit_content(&database, id, user.user_id, fields).await?;
    Ok("Content updated successfully")
}

/// Delete content handler
///
/// # Errors
///
/// * `400 Bad Request` - invalid ID
/// * `401 Unauthorized` - no valid session
/// * `404 Not Found` - no such item, or it belongs to someone else
pub async fn delete_content(
    State(database): State<Database>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<&'static str, BackendError> {
    let id = parse_id(&id, "content")?;
    service::remove_content(&database, id, user.user_id).await?;
    Ok("Content deleted successfully")
}
