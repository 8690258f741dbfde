//! Stack registry database operations
//!
//! Name uniqueness is enforced by the unique index on `stacks.name`; create
//! and update are single statements, so two racing requests cannot both
//! claim a name.

use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite};
use thiserror::Error;
use uuid::Uuid;

use crate::backend::server::database::{Database, StoreError};
use crate::shared::error::{require_non_empty, SharedError};
use crate::shared::Stack;

/// Stack registry failures
#[derive(Debug, Error)]
pub enum StackError {
    #[error(transparent)]
    Invalid(#[from] SharedError),

    #[error("a stack named '{name}' already exists")]
    Conflict { name: String },

    #[error("stack {id} not found")]
    NotFound { id: Uuid },

    #[error("one or more stacks not found: {}", missing.join(", "))]
    PartialResolution { missing: Vec<String> },

    #[error(transparent)]
    Store(#[from] StoreError),
}

fn validate(name: &str, color: &str) -> Result<(), StackError> {
    require_non_empty("name", name)?;
    require_non_empty("color", color)?;
    Ok(())
}

fn map_unique(err: StoreError, name: &str) -> StackError {
    if err.is_unique_violation() {
        StackError::Conflict {
            name: name.to_string(),
        }
    } else {
        StackError::Store(err)
    }
}

/// Register a new stack
pub async fn create_stack(db: &Database, name: &str, color: &str) -> Result<Stack, StackError> {
    validate(name, color)?;
    let stack = Stack::new(name, color);

    db.bounded(
        sqlx::query("INSERT INTO stacks (id, name, color, created_at) VALUES (?, ?, ?, ?)")
            .bind(stack.id)
            .bind(&stack.name)
            .bind(&stack.color)
            .bind(Utc::now())
            .execute(db.pool()),
    )
    .await
    .map_err(|e| map_unique(e, name))?;

    tracing::info!(stack_id = %stack.id, "Stack created: {}", stack.name);
    Ok(stack)
}

/// List every stack in creation order
pub async fn list_stacks(db: &Database) -> Result<Vec<Stack>, StackError> {
    let stacks = db
        .bounded(
            sqlx::query_as::<_, Stack>(
                "SELECT id, name, color FROM stacks ORDER BY created_at ASC, rowid ASC",
            )
            .fetch_all(db.pool()),
        )
        .await?;
    Ok(stacks)
}

/// Replace a stack's name and color
///
/// Content that already embeds this stack keeps its old snapshot.
pub async fn update_stack(
    db: &Database,
    id: Uuid,
    name: &str,
    color: &str,
) -> Result<Stack, StackError> {
    validate(name, color)?;

    let result = db
        .bounded(
            sqlx::query("UPDATE stacks SET name = ?, color = ? WHERE id = ?")
                .bind(name)
                .bind(color)
                .bind(id)
                .execute(db.pool()),
        )
        .await
        .map_err(|e| map_unique(e, name))?;

    if result.rows_affected() == 0 {
        return Err(StackError::NotFound { id });
    }

    tracing::info!(stack_id = %id, "Stack updated: {}", name);
    Ok(Stack {
        id,
        name: name.to_string(),
        color: color.to_string(),
    })
}

/// Delete a stack by ID
///
/// Succeeds whether or not the stack exists. Returns true if a row was removed.
pub async fn delete_stack(db: &Database, id: Uuid) -> Result<bool, StackError> {
    let result = db
        .bounded(
            sqlx::query("DELETE FROM stacks WHERE id = ?")
                .bind(id)
                .execute(db.pool()),
        )
        .await?;

    let removed = result.rows_affected() > 0;
    tracing::info!(stack_id = %id, removed, "Stack delete requested");
    Ok(removed)
}

/// Resolve stack names to full records
///
/// The request is treated as a set: repeated names collapse onto their first
/// occurrence. Records come back in request order. If any name is unknown the
/// whole batch fails with `PartialResolution` listing the missing names.
pub async fn resolve_stacks(db: &Database, names: &[String]) -> Result<Vec<Stack>, StackError> {
    let mut requested: Vec<&str> = Vec::with_capacity(names.len());
    for name in names {
        if !requested.contains(&name.as_str()) {
            requested.push(name.as_str());
        }
    }

    if requested.is_empty() {
        return Ok(Vec::new());
    }

    let mut builder = QueryBuilder::<Sqlite>::new("SELECT id, name, color FROM stacks WHERE name IN (");
    let mut separated = builder.separated(", ");
    for name in &requested {
        separated.push_bind(*name);
    }
    separated.push_unseparated(")");

    let found = db
        .bounded(builder.build_query_as::<Stack>().fetch_all(db.pool()))
        .await?;

    let mut resolved = Vec::with_capacity(requested.len());
    let mut missing = Vec::new();
    for name in requested {
        match found.iter().find(|stack| stack.name == name) {
            Some(stack) => resolved.push(stack.clone()),
            None => missing.push(name.to_string()),
        }
    }

    if !missing.is_empty() {
        tracing::warn!("Unresolved stack names: {:?}", missing);
        return Err(StackError::PartialResolution { missing });
    }

    Ok(resolved)
}
