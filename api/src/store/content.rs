use jiff_sqlx::ToSqlx;
use payloads::{ContentDetails, ContentId, requests, responses::Content};
use sqlx::PgPool;

use super::{StoreError, ValidatedAdmin};
use crate::time::TimeSource;

pub async fn list_content(pool: &PgPool) -> Result<Vec<Content>, StoreError> {
    let content = sqlx::query_as::<_, Content>(
        "SELECT * FROM content_blocks ORDER BY created_at, title",
    )
    .fetch_all(pool)
    .await?;
    Ok(content)
}

#[tracing::instrument(skip(details, _actor, pool, time_source))]
pub async fn create_content(
    details: &ContentDetails,
    _actor: &ValidatedAdmin,
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<Content, StoreError> {
    details.validate()?;
    let content = sqlx::query_as::<_, Content>(
        "INSERT INTO content_blocks (title, body, created_at, updated_at)
        VALUES ($1, $2, $3, $3)
        RETURNING *",
    )
    .bind(details.title.trim())
    .bind(&details.body)
    .bind(time_source.now().to_sqlx())
    .fetch_one(pool)
    .await?;
    Ok(content)
}

#[tracing::instrument(skip(details, _actor, pool, time_source))]
pub async fn update_content(
    details: &requests::UpdateContent,
    _actor: &ValidatedAdmin,
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<Content, StoreError> {
    details.details.validate()?;
    sqlx::query_as::<_, Content>(
        "UPDATE content_blocks
        SET title = $2, body = $3, updated_at = $4
        WHERE id = $1
        RETURNING *",
    )
    .bind(details.id)
    .bind(details.details.title.trim())
    .bind(&details.details.body)
    .bind(time_source.now().to_sqlx())
    .fetch_one(pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::RowNotFound => StoreError::ContentNotFound,
        e => StoreError::Database(e),
    })
}

#[tracing::instrument(skip(_actor, pool))]
pub async fn delete_content(
    content_id: &ContentId,
    _actor: &ValidatedAdmin,
    pool: &PgPool,
) -> Result<(), StoreError> {
    let result = sqlx::query("DELETE FROM content_blocks WHERE id = $1")
        .bind(content_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(StoreError::ContentNotFound);
    }
    Ok(())
}
