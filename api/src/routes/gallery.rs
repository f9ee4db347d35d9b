use actix_identity::Identity;
use actix_web::{HttpResponse, get, http::header, post, web};
use payloads::{GalleryImageId, requests};
use sqlx::PgPool;

use crate::store;
use crate::time::TimeSource;

use super::{APIError, get_validated_admin, private_ok};

#[tracing::instrument(skip(pool))]
#[get("/gallery")]
pub async fn list_gallery(
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    let images = store::list_gallery(&pool).await?;
    Ok(HttpResponse::Ok().json(images))
}

/// Raw image bytes, with the content type sniffed from the data.
#[tracing::instrument(skip(pool))]
#[get("/images/{image_id}")]
pub async fn get_image(
    path: web::Path<GalleryImageId>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    let image = store::get_image_data(&path, &pool).await?;
    Ok(HttpResponse::Ok()
        .content_type(image.mime_type())
        .insert_header((header::CACHE_CONTROL, "public, max-age=86400"))
        .body(image.image_data))
}

#[tracing::instrument(
    skip(user, details, pool, time_source),
    fields(user_id=tracing::field::Empty, size=details.image_data.len()),
    ret
)]
#[post("/upload_gallery_image")]
pub async fn upload_gallery_image(
    user: Identity,
    details: web::Json<requests::CreateGalleryImage>,
    pool: web::Data<PgPool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let actor = get_validated_admin(&user, &pool).await?;
    let image =
        store::create_gallery_image(&details, &actor, &pool, &time_source)
            .await?;
    Ok(private_ok().json(image))
}

#[tracing::instrument(
    skip(user, pool, time_source),
    fields(user_id=tracing::field::Empty),
    ret
)]
#[post("/update_gallery_image")]
pub async fn update_gallery_image(
    user: Identity,
    details: web::Json<requests::UpdateGalleryImage>,
    pool: web::Data<PgPool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let actor = get_validated_admin(&user, &pool).await?;
    let image =
        store::update_gallery_image(&details, &actor, &pool, &time_source)
            .await?;
    Ok(private_ok().json(image))
}

#[tracing::instrument(skip(user, pool), fields(user_id=tracing::field::Empty))]
#[post("/delete_gallery_image")]
pub async fn delete_gallery_image(
    user: Identity,
    image_id: web::Json<GalleryImageId>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    let actor = get_validated_admin(&user, &pool).await?;
    store::delete_gallery_image(&image_id, &actor, &pool).await?;
    Ok(private_ok().finish())
}
