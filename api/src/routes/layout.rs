use actix_identity::Identity;
use actix_web::{HttpResponse, get, post, web};
use payloads::LayoutSettings;
use sqlx::PgPool;

use crate::store;
use crate::time::TimeSource;

use super::{APIError, get_validated_admin, private_ok};

#[tracing::instrument(skip(pool))]
#[get("/layout")]
pub async fn get_layout(
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    let layout = store::get_layout(&pool).await?;
    Ok(HttpResponse::Ok().json(layout))
}

#[tracing::instrument(
    skip(user, pool, time_source),
    fields(user_id=tracing::field::Empty),
    ret
)]
#[post("/update_layout")]
pub async fn update_layout(
    user: Identity,
    details: web::Json<LayoutSettings>,
    pool: web::Data<PgPool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let actor = get_validated_admin(&user, &pool).await?;
    let layout =
        store::update_layout(&details, &actor, &pool, &time_source).await?;
    Ok(private_ok().json(layout))
}
