use actix_identity::Identity;
use actix_web::{HttpResponse, get, post, web};
use payloads::{UserId, requests};
use sqlx::PgPool;

use crate::store;
use crate::time::TimeSource;

use super::{APIError, get_validated_admin, private_ok};

#[tracing::instrument(skip(user, pool), fields(user_id=tracing::field::Empty))]
#[get("/users")]
pub async fn list_users(
    user: Identity,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    let actor = get_validated_admin(&user, &pool).await?;
    let users = store::list_users(&actor, &pool).await?;
    Ok(private_ok().json(users))
}

#[tracing::instrument(
    skip(user, pool, time_source),
    fields(user_id=tracing::field::Empty),
    ret
)]
#[post("/update_user")]
pub async fn update_user(
    user: Identity,
    details: web::Json<requests::UpdateUser>,
    pool: web::Data<PgPool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let actor = get_validated_admin(&user, &pool).await?;
    let profile =
        store::update_user(&details, &actor, &pool, &time_source).await?;
    Ok(private_ok().json(profile))
}

#[tracing::instrument(skip(user, pool), fields(user_id=tracing::field::Empty))]
#[post("/delete_user")]
pub async fn delete_user(
    user: Identity,
    target: web::Json<UserId>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    let actor = get_validated_admin(&user, &pool).await?;
    store::delete_user(&target, &actor, &pool).await?;
    Ok(private_ok().finish())
}
