/**
 * Content Orchestrator
 *
 * This module coordinates the stack registry and the content store for
 * content writes.
 *
 * # Write Flow
 *
 * 1. Validate the submitted fields
 * 2. Resolve the submitted stack names to snapshots (all or nothing)
 * 3. Stamp the owner from the authenticated session
 * 4. Persist in a single statement
 *
 * Stack resolution happens before any write, so a request naming an unknown
 * stack never changes stored content. Edits check ownership before looking
 * at the submitted fields, so a caller who does not own the record always
 * gets `NotFoundOrForbidden`.
 */

use thiserror::Error;
use uuid::Uuid;

use crate::backend::content::db;
use crate::backend::server::database::{Database, StoreError};
use crate::backend::stacks::{self, StackError};
use crate::shared::error::{require_non_empty, SharedError};
use crate::shared::{Content, ContentFields};

/// Content operation failures
#[derive(Debug, Error)]
pub enum ContentError {
    #[error(transparent)]
    Invalid(#[from] SharedError),

    #[error(transparent)]
    Stack(#[from] StackError),

    /// No matching record, or the record belongs to another user
    #[error("content not found or not owned by the caller")]
    NotFoundOrForbidden,

    #[error(transparent)]
    Store(#[from] StoreError),
}

async fn build(
    database: &Database,
    id: Uuid,
    owner_id: Uuid,
    fields: ContentFields,
) -> Result<Content, ContentError> {
    require_non_empty("name", &fields.name)?;
    let stack = stacks::resolve_stacks(database, &fields.stack).await?;

    Ok(Content {
        id,
        user_id: owner_id,
        name: fields.name,
        description: fields.description,
        url: fields.url,
        img_url: fields.img_url,
        stack,
    })
}

/// Create content owned by `owner_id`
pub async fn create_content(
    database: &Database,
    owner_id: Uuid,
    fields: ContentFields,
) -> Result<Content, ContentError> {
    let content = build(database, Uuid::new_v4(), owner_id, fields).await?;
    db::insert_content(database, &content).await?;

    tracing::info!(content_id = %content.id, user_id = %owner_id, "Content created: {}", content.name);
    Ok(content)
}

/// Replace the fields of content the caller owns
///
/// Stack names are resolved again, so the stored snapshots reflect the
/// stacks as they are at edit time.
pub async fn edit_content(
    database: &Database,
    id: Uuid,
    owner_id: Uuid,
    fields: ContentFields,
) -> Result<Content, ContentError> {
    if !db::owns_content(database, id, owner_id).await? {
        tracing::warn!(content_id = %id, user_id = %owner_id, "Content update rejected");
        return Err(ContentError::NotFoundOrForbidden);
    }

    let content = build(database, id, owner_id, fields).await?;

    match db::update_owned_content(database, &content).await? {
        Some(updated) => {
            tracing::info!(content_id = %id, user_id = %owner_id, "Content updated");
            Ok(updated)
        }
        None => {
            tracing::warn!(content_id = %id, user_id = %owner_id, "Content update rejected");
            Err(ContentError::NotFoundOrForbidden)
        }
    }
}

/// Delete content the caller owns
pub async fn remove_content(
    database: &Database,
    id: Uuid,
    owner_id: Uuid,
) -> Result<(), ContentError> {
    if !db::delete_owned_content(database, id, owner_id).await? {
        tracing::warn!(content_id = %id, user_id = %owner_id, "Content delete rejected");
        return Err(ContentError::NotFoundOrForbidden);
    }

    tracing::info!(content_id = %id, user_id = %owner_id, "Content deleted");
    Ok(())
}

/// Every content item, for the public listing
pub async fn list_all(database: &Database) -> Result<Vec<Content>, ContentError> {
    Ok(db::list_contents(database).await?)
}

/// The caller's own content
pub async fn list_owned(database: &Database, owner_id: Uuid) -> Result<Vec<Content>, ContentError> {
    Ok(db::list_contents_by_owner(database, owner_id).await?)
}
