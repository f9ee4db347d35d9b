use actix_identity::Identity;
use actix_web::{HttpResponse, get, post, web};
use payloads::{ContentDetails, ContentId, requests};
use sqlx::PgPool;

use crate::store;
use crate::time::TimeSource;

use super::{APIError, get_validated_admin, private_ok};

#[tracing::instrument(skip(pool))]
#[get("/content")]
pub async fn list_content(
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    let content = store::list_content(&pool).await?;
    Ok(HttpResponse::Ok().json(content))
}

#[tracing::instrument(
    skip(user, details, pool, time_source),
    fields(user_id=tracing::field::Empty),
    ret
)]
#[post("/create_content")]
pub async fn create_content(
    user: Identity,
    details: web::Json<ContentDetails>,
    pool: web::Data<PgPool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let actor = get_validated_admin(&user, &pool).await?;
    let content =
        store::create_content(&details, &actor, &pool, &time_source).await?;
    Ok(private_ok().json(content))
}

#[tracing::instrument(
    skip(user, details, pool, time_source),
    fields(user_id=tracing::field::Empty, content_id=%details.id),
    ret
)]
#[post("/update_content")]
pub async fn update_content(
    user: Identity,
    details: web::Json<requests::UpdateContent>,
    pool: web::Data<PgPool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let actor = get_validated_admin(&user, &pool).await?;
    let content =
        store::update_content(&details, &actor, &pool, &time_source).await?;
    Ok(private_ok().json(content))
}

#[tracing::instrument(skip(user, pool), fields(user_id=tracing::field::Empty))]
#[post("/delete_content")]
pub async fn delete_content(
    user: Identity,
    content_id: web::Json<ContentId>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    let actor = get_validated_admin(&user, &pool).await?;
    store::delete_content(&content_id, &actor, &pool).await?;
    Ok(private_ok().finish())
}
