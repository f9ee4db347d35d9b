use actix_identity::Identity;
use actix_web::{HttpResponse, get, post, web};
use payloads::availability::AvailabilityPolicy;
use payloads::catalog::ServiceCatalog;
use payloads::{ReservationId, requests};
use sqlx::PgPool;

use crate::store;
use crate::time::TimeSource;

use super::{APIError, get_validated_admin, private_ok};

/// Public booking endpoint. Responds with the id of the stored, pending
/// reservation.
#[tracing::instrument(
    skip(details, catalog, policy, pool, time_source),
    fields(reservation_id=tracing::field::Empty)
)]
#[post("/submit_reservation")]
pub async fn submit_reservation(
    details: web::Json<requests::SubmitReservation>,
    catalog: web::Data<ServiceCatalog>,
    policy: web::Data<AvailabilityPolicy>,
    pool: web::Data<PgPool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let reservation = store::create_reservation(
        &details,
        &catalog,
        &policy,
        &pool,
        &time_source,
    )
    .await?;
    tracing::Span::current()
        .record("reservation_id", tracing::field::display(&reservation.id));
    tracing::info!(
        service = %reservation.service,
        date = %reservation.reservation_date,
        time = %reservation.reservation_time,
        "Reservation received"
    );
    Ok(HttpResponse::Ok().json(reservation.id))
}

#[tracing::instrument(skip(user, pool), fields(user_id=tracing::field::Empty))]
#[get("/reservations")]
pub async fn list_reservations(
    user: Identity,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    let actor = get_validated_admin(&user, &pool).await?;
    let reservations = store::list_reservations(&actor, &pool).await?;
    Ok(private_ok().json(reservations))
}

#[tracing::instrument(
    skip(user, pool, time_source),
    fields(user_id=tracing::field::Empty),
    ret
)]
#[post("/set_reservation_status")]
pub async fn set_reservation_status(
    user: Identity,
    details: web::Json<requests::SetReservationStatus>,
    pool: web::Data<PgPool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let actor = get_validated_admin(&user, &pool).await?;
    let reservation =
        store::set_reservation_status(&details, &actor, &pool, &time_source)
            .await?;
    Ok(private_ok().json(reservation))
}

#[tracing::instrument(skip(user, pool), fields(user_id=tracing::field::Empty))]
#[post("/delete_reservation")]
pub async fn delete_reservation(
    user: Identity,
    reservation_id: web::Json<ReservationId>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    let actor = get_validated_admin(&user, &pool).await?;
    store::delete_reservation(&reservation_id, &actor, &pool).await?;
    Ok(private_ok().finish())
}
