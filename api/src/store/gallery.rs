use jiff_sqlx::ToSqlx;
use payloads::requests::{self, DESCRIPTION_MAX_LEN, TITLE_MAX_LEN};
use payloads::{GalleryImageId, MAX_IMAGE_SIZE, responses::GalleryImage};
use sqlx::{FromRow, PgPool};

use super::{StoreError, ValidatedAdmin};
use crate::time::TimeSource;

/// Columns of `gallery_images` without the image bytes.
const METADATA_COLUMNS: &str =
    "id, title, description, created_at, updated_at";

/// Raw bytes of a stored image and the MIME type sniffed from them.
#[derive(Debug, Clone, FromRow)]
pub struct ImageData {
    pub image_data: Vec<u8>,
}

impl ImageData {
    pub fn mime_type(&self) -> &'static str {
        infer::get(&self.image_data)
            .map(|kind| kind.mime_type())
            .unwrap_or("application/octet-stream")
    }
}

fn validate_metadata(
    title: &str,
    description: Option<&str>,
) -> Result<(), StoreError> {
    if title.trim().is_empty() {
        return Err(requests::FieldError::Empty("title").into());
    }
    if title.len() > TITLE_MAX_LEN
        || description.is_some_and(|d| d.len() > DESCRIPTION_MAX_LEN)
    {
        return Err(StoreError::FieldTooLong);
    }
    Ok(())
}

fn clean_description(description: Option<&str>) -> Option<&str> {
    description.map(str::trim).filter(|d| !d.is_empty())
}

pub async fn list_gallery(
    pool: &PgPool,
) -> Result<Vec<GalleryImage>, StoreError> {
    let images = sqlx::query_as::<_, GalleryImage>(&format!(
        "SELECT {METADATA_COLUMNS} FROM gallery_images ORDER BY created_at DESC"
    ))
    .fetch_all(pool)
    .await?;
    Ok(images)
}

pub async fn get_image_data(
    image_id: &GalleryImageId,
    pool: &PgPool,
) -> Result<ImageData, StoreError> {
    sqlx::query_as::<_, ImageData>(
        "SELECT image_data FROM gallery_images WHERE id = $1",
    )
    .bind(image_id)
    .fetch_one(pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::RowNotFound => StoreError::GalleryImageNotFound,
        e => StoreError::Database(e),
    })
}

/// Store an uploaded image. Only data recognised as an image is accepted.
#[tracing::instrument(
    skip(details, _actor, pool, time_source),
    fields(size = details.image_data.len())
)]
pub async fn create_gallery_image(
    details: &requests::CreateGalleryImage,
    _actor: &ValidatedAdmin,
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<GalleryImage, StoreError> {
    validate_metadata(&details.title, details.description.as_deref())?;
    if details.image_data.len() > MAX_IMAGE_SIZE {
        return Err(StoreError::ImageTooLarge);
    }
    if !infer::is_image(&details.image_data) {
        return Err(StoreError::UnsupportedImage);
    }

    let image = sqlx::query_as::<_, GalleryImage>(&format!(
        "INSERT INTO gallery_images (
            title, description, image_data, created_at, updated_at
        ) VALUES ($1, $2, $3, $4, $4)
        RETURNING {METADATA_COLUMNS}"
    ))
    .bind(details.title.trim())
    .bind(clean_description(details.description.as_deref()))
    .bind(&details.image_data)
    .bind(time_source.now().to_sqlx())
    .fetch_one(pool)
    .await?;
    Ok(image)
}

#[tracing::instrument(skip(details, _actor, pool, time_source))]
pub async fn update_gallery_image(
    details: &requests::UpdateGalleryImage,
    _actor: &ValidatedAdmin,
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<GalleryImage, StoreError> {
    validate_metadata(&details.title, details.description.as_deref())?;
    sqlx::query_as::<_, GalleryImage>(&format!(
        "UPDATE gallery_images
        SET title = $2, description = $3, updated_at = $4
        WHERE id = $1
        RETURNING {METADATA_COLUMNS}"
    ))
    .bind(details.id)
    .bind(details.title.trim())
    .bind(clean_description(details.description.as_deref()))
    .bind(time_source.now().to_sqlx())
    .fetch_one(pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::RowNotFound => StoreError::GalleryImageNotFound,
        e => StoreError::Database(e),
    })
}

#[tracing::instrument(skip(_actor, pool))]
pub async fn delete_gallery_image(
    image_id: &GalleryImageId,
    _actor: &ValidatedAdmin,
    pool: &PgPool,
) -> Result<(), StoreError> {
    let result = sqlx::query("DELETE FROM gallery_images WHERE id = $1")
        .bind(image_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(StoreError::GalleryImageNotFound);
    }
    Ok(())
}
