/**
 * Stack Handlers
 *
 * This module implements the HTTP handlers for the stack registry:
 *
 * - `GET /stacks` - list every stack
 * - `POST /stacks` - create a stack
 * - `PUT /stacks/{id}` - rename or recolor a stack
 * - `DELETE /stacks/{id}` - delete a stack
 *
 * Editing or deleting a stack never touches content that already embeds it.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};

use crate::backend::error::BackendError;
use crate::backend::extract::{parse_id, JsonBody};
use crate::backend::server::database::Database;
use crate::backend::stacks::db;
use crate::shared::{MessageResponse, Stack};

/// Create or update stack request
#[derive(Deserialize, Serialize, Debug)]
pub struct StackRequest {
    pub name: String,
    pub color: String,
}

/// List all stacks
pub async fn list_stacks(State(database): State<Database>) -> Result<Json<Vec<Stack>>, BackendError> {
    let stacks = db::list_stacks(&database).await?;
    Ok(Json(stacks))
}

/// Create stack handler
///
/// # Errors
///
/// * `400 Bad Request` - empty name or color, or malformed body
/// * `409 Conflict` - a stack with this name already exists
pub async fn create_stack(
    State(database): State<Database>,
    JsonBody(request): JsonBody<StackRequest>,
) -> Result<(StatusCode, Json<Stack>), BackendError> {
    let stack = db::create_stack(&database, &request.name, &request.color).await?;
    Ok((StatusCode::CREATED, Json(stack)))
}

/// Update stack handler
///
/// Replaces both name and color.
///
/// # Errors
///
/// * `400 Bad Request` - invalid ID, empty fields or malformed body
/// * `404 Not Found` - no stack with this ID
/// * `409 Conflict` - the new name belongs to another stack
pub async fn update_stack(
    State(database): State<Database>,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<StackRequest>,
) -> Result<Json<Stack>, BackendError> {
    let id = parse_id(&id, "stack")?;
    let stack = db::update_stack(&database, id, &request.name, &request.color).await?;
    Ok(Json(stack))
}

/// Delete stack handler
///
/// Succeeds whether or not the stack existed.
pub async fn delete_stack(
    State(database): State<Database>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, BackendError> {
    let id = parse_id(&id, "stack")?;
    db::delete_stack(&database, id).await?;
    Ok(Json(MessageResponse::new("Stack deleted successfully")))
}
