//! Content store database operations
//!
//! Stack snapshots are kept in the `stack` column as a JSON array. Update and
//! delete carry the owner in their WHERE clause, so ownership is checked in
//! the same statement that writes.

use chrono::Utc;
use uuid::Uuid;

use crate::backend::server::database::{Database, StoreError};
use crate::shared::{Content, Stack};

const CONTENT_COLUMNS: &str = "id, user_id, name, description, url, img_url, stack";

/// Content row as stored
#[derive(Debug, sqlx::FromRow)]
struct ContentRow {
    id: Uuid,
    user_id: Uuid,
    name: String,
    description: String,
    url: String,
    img_url: String,
    stack: String,
}

impl TryFrom<ContentRow> for Content {
    type Error = serde_json::Error;

    fn try_from(row: ContentRow) -> Result<Self, Self::Error> {
        let stack: Vec<Stack> = serde_json::from_str(&row.stack)?;
        Ok(Content {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
            description: row.description,
            url: row.url,
            img_url: row.img_url,
            stack,
        })
    }
}

fn into_contents(rows: Vec<ContentRow>) -> Result<Vec<Content>, StoreError> {
    rows.into_iter()
        .map(|row| Content::try_from(row).map_err(StoreError::from))
        .collect()
}

/// Insert a new content record
pub async fn insert_content(db: &Database, content: &Content) -> Result<(), StoreError> {
    let stack = serde_json::to_string(&content.stack)?;

    db.bounded(
        sqlx::query(
            r#"
            INSERT INTO contents (id, user_id, name, description, url, img_url, stack, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(content.id)
        .bind(content.user_id)
        .bind(&content.name)
        .bind(&content.description)
        .bind(&content.url)
        .bind(&content.img_url)
        .bind(stack)
        .bind(Utc::now())
        .execute(db.pool()),
    )
    .await?;

    Ok(())
}

/// All content, oldest first
pub async fn list_contents(db: &Database) -> Result<Vec<Content>, StoreError> {
    let query = format!(
        "SELECT {} FROM contents ORDER BY created_at ASC, rowid ASC",
        CONTENT_COLUMNS
    );
    let rows = db
        .bounded(sqlx::query_as::<_, ContentRow>(&query).fetch_all(db.pool()))
        .await?;
    into_contents(rows)
}

/// Content owned by one user, oldest first
pub async fn list_contents_by_owner(
    db: &Database,
    owner_id: Uuid,
) -> Result<Vec<Content>, StoreError> {
    let query = format!(
        "SELECT {} FROM contents WHERE user_id = ? ORDER BY created_at ASC, rowid ASC",
        CONTENT_COLUMNS
    );
    let rows = db
        .bounded(
            sqlx::query_as::<_, ContentRow>(&query)
                .bind(owner_id)
                .fetch_all(db.pool()),
        )
        .await?;
    into_contents(rows)
}

/// Whether `owner_id` holds the record `id`
pub async fn owns_content(db: &Database, id: Uuid, owner_id: Uuid) -> Result<bool, StoreError> {
    let found: Option<i64> = db
        .bounded(
            sqlx::query_scalar("SELECT 1 FROM contents WHERE id = ? AND user_id = ?")
                .bind(id)
                .bind(owner_id)
                .fetch_optional(db.pool()),
        )
        .await?;

    Ok(found.is_some())
}

/// Replace the editable fields of a record the owner holds
///
/// `content.id` and `content.user_id` select the row. Returns `None` when no
/// row matched, either because it does not exist or another user owns it.
pub async fn update_owned_content(
    db: &Database,
    content: &Content,
) -> Result<Option<Content>, StoreError> {
    let stack = serde_json::to_string(&content.stack)?;
    let query = format!(
        r#"
        UPDATE contents
        SET name = ?, description = ?, url = ?, img_url = ?, stack = ?
        WHERE id = ? AND user_id = ?
        RETURNING {}
        "#,
        CONTENT_COLUMNS
    );

    let row = db
        .bounded(
            sqlx::query_as::<_, ContentRow>(&query)
                .bind(&content.name)
                .bind(&content.description)
                .bind(&content.url)
                .bind(&content.img_url)
                .bind(stack)
                .bind(content.id)
                .bind(content.user_id)
                .fetch_optional(db.pool()),
        )
        .await?;

    row.map(|row| Content::try_from(row).map_err(StoreError::from))
        .transpose()
}

/// Delete a record the owner holds
///
/// Returns false when no row matched.
pub async fn delete_owned_content(
    db: &Database,
    id: Uuid,
    owner_id: Uuid,
) -> Result<bool, StoreError> {
    let result = db
        .bounded(
            sqlx::query("DELETE FROM contents WHERE id = ? AND user_id = ?")
                .bind(id)
                .bind(owner_id)
                .execute(db.pool()),
        )
        .await?;

    Ok(result.rows_affected() > 0)
}
