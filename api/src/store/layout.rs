use jiff_sqlx::ToSqlx;
use payloads::LayoutSettings;
use sqlx::PgPool;

use super::{StoreError, ValidatedAdmin};
use crate::time::TimeSource;

/// The settings row is seeded by the initial migration and never deleted.
pub async fn get_layout(pool: &PgPool) -> Result<LayoutSettings, StoreError> {
    let layout = sqlx::query_as::<_, LayoutSettings>(
        "SELECT * FROM layout_settings WHERE id",
    )
    .fetch_one(pool)
    .await?;
    Ok(layout)
}

fn clean_url(url: &Option<String>) -> Option<&str> {
    url.as_deref().map(str::trim).filter(|url| !url.is_empty())
}

#[tracing::instrument(skip(_actor, pool, time_source))]
pub async fn update_layout(
    details: &LayoutSettings,
    _actor: &ValidatedAdmin,
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<LayoutSettings, StoreError> {
    details.validate()?;
    let layout = sqlx::query_as::<_, LayoutSettings>(
        "UPDATE layout_settings
        SET contact_phone = $1,
            contact_email = $2,
            address = $3,
            facebook_url = $4,
            instagram_url = $5,
            youtube_url = $6,
            updated_at = $7
        WHERE id
        RETURNING *",
    )
    .bind(details.contact_phone.trim())
    .bind(details.contact_email.trim())
    .bind(details.address.trim())
    .bind(clean_url(&details.facebook_url))
    .bind(clean_url(&details.instagram_url))
    .bind(clean_url(&details.youtube_url))
    .bind(time_source.now().to_sqlx())
    .fetch_one(pool)
    .await?;
    Ok(layout)
}
