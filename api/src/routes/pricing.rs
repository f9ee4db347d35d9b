//! Services, price list items and membership plans.

use actix_identity::Identity;
use actix_web::{HttpResponse, get, post, web};
use payloads::{
    MembershipDetails, MembershipId, PriceItemDetails, PriceItemId,
    ServiceDetails, ServiceId, requests,
};
use sqlx::PgPool;

use crate::store;
use crate::time::TimeSource;

use super::{APIError, get_validated_admin, private_ok};

#[tracing::instrument(skip(pool))]
#[get("/services")]
pub async fn list_services(
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    let services = store::list_services(&pool).await?;
    Ok(HttpResponse::Ok().json(services))
}

#[tracing::instrument(
    skip(user, pool, time_source),
    fields(user_id=tracing::field::Empty),
    ret
)]
#[post("/create_service")]
pub async fn create_service(
    user: Identity,
    details: web::Json<ServiceDetails>,
    pool: web::Data<PgPool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let actor = get_validated_admin(&user, &pool).await?;
    let service =
        store::create_service(&details, &actor, &pool, &time_source).await?;
    Ok(private_ok().json(service))
}

#[tracing::instrument(
    skip(user, pool, time_source),
    fields(user_id=tracing::field::Empty),
    ret
)]
#[post("/update_service")]
pub async fn update_service(
    user: Identity,
    details: web::Json<requests::UpdateService>,
    pool: web::Data<PgPool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let actor = get_validated_admin(&user, &pool).await?;
    let service =
        store::update_service(&details, &actor, &pool, &time_source).await?;
    Ok(private_ok().json(service))
}

#[tracing::instrument(skip(user, pool), fields(user_id=tracing::field::Empty))]
#[post("/delete_service")]
pub async fn delete_service(
    user: Identity,
    service_id: web::Json<ServiceId>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    let actor = get_validated_admin(&user, &pool).await?;
    store::delete_service(&service_id, &actor, &pool).await?;
    Ok(private_ok().finish())
}

#[tracing::instrument(skip(pool))]
#[get("/price_items")]
pub async fn list_price_items(
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    let items = store::list_price_items(&pool).await?;
    Ok(HttpResponse::Ok().json(items))
}

#[tracing::instrument(
    skip(user, pool, time_source),
    fields(user_id=tracing::field::Empty),
    ret
)]
#[post("/create_price_item")]
pub async fn create_price_item(
    user: Identity,
    details: web::Json<PriceItemDetails>,
    pool: web::Data<PgPool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let actor = get_validated_admin(&user, &pool).await?;
    let item =
        store::create_price_item(&details, &actor, &pool, &time_source).await?;
    Ok(private_ok().json(item))
}

#[tracing::instrument(
    skip(user, pool, time_source),
    fields(user_id=tracing::field::Empty),
    ret
)]
#[post("/update_price_item")]
pub async fn update_price_item(
    user: Identity,
    details: web::Json<requests::UpdatePriceItem>,
    pool: web::Data<PgPool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let actor = get_validated_admin(&user, &pool).await?;
    let item =
        store::update_price_item(&details, &actor, &pool, &time_source).await?;
    Ok(private_ok().json(item))
}

#[tracing::instrument(skip(user, pool), fields(user_id=tracing::field::Empty))]
#[post("/delete_price_item")]
pub async fn delete_price_item(
    user: Identity,
    price_item_id: web::Json<PriceItemId>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    let actor = get_validated_admin(&user, &pool).await?;
    store::delete_price_item(&price_item_id, &actor, &pool).await?;
    Ok(private_ok().finish())
}

#[tracing::instrument(skip(pool))]
#[get("/memberships")]
pub async fn list_memberships(
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    let memberships = store::list_memberships(&pool).await?;
    Ok(HttpResponse::Ok().json(memberships))
}

#[tracing::instrument(
    skip(user, pool, time_source),
    fields(user_id=tracing::field::Empty),
    ret
)]
#[post("/create_membership")]
pub async fn create_membership(
    user: Identity,
    details: web::Json<MembershipDetails>,
    pool: web::Data<PgPool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let actor = get_validated_admin(&user, &pool).await?;
    let membership =
        store::create_membership(&details, &actor, &pool, &time_source)
            .await?;
    Ok(private_ok().json(membership))
}

#[tracing::instrument(
    skip(user, pool, time_source),
    fields(user_id=tracing::field::Empty),
    ret
)]
#[post("/update_membership")]
pub async fn update_membership(
    user: Identity,
    details: web::Json<requests::UpdateMembership>,
    pool: web::Data<PgPool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let actor = get_validated_admin(&user, &pool).await?;
    let membership =
        store::update_membership(&details, &actor, &pool, &time_source)
            .await?;
    Ok(private_ok().json(membership))
}

#[tracing::instrument(skip(user, pool), fields(user_id=tracing::field::Empty))]
#[post("/delete_membership")]
pub async fn delete_membership(
    user: Identity,
    membership_id: web::Json<MembershipId>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    let actor = get_validated_admin(&user, &pool).await?;
    store::delete_membership(&membership_id, &actor, &pool).await?;
    Ok(private_ok().finish())
}
