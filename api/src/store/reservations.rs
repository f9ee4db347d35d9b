use jiff_sqlx::ToSqlx;
use payloads::availability::AvailabilityPolicy;
use payloads::catalog::ServiceCatalog;
use payloads::reservation::ReservationDraft;
use payloads::{ReservationId, requests, responses::Reservation};
use sqlx::PgPool;

use super::{StoreError, ValidatedAdmin};
use crate::time::TimeSource;

/// Store a booking request from the public form as pending.
///
/// The request is validated again with the same rules the form uses, against
/// the venue's current date.
#[tracing::instrument(
    skip(request, catalog, policy, pool, time_source),
    fields(service = %request.service, date = %request.date, time = %request.time)
)]
pub async fn create_reservation(
    request: &requests::SubmitReservation,
    catalog: &ServiceCatalog,
    policy: &AvailabilityPolicy,
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<Reservation, StoreError> {
    let request = ReservationDraft::from(request.clone())
        .validate(catalog, policy, time_source.today())
        .map_err(StoreError::InvalidReservation)?;

    let reservation = sqlx::query_as::<_, Reservation>(
        "INSERT INTO reservations (
            customer_name,
            email,
            phone,
            category,
            service,
            reservation_date,
            reservation_time,
            notes,
            created_at,
            updated_at
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
        RETURNING *",
    )
    .bind(&request.name)
    .bind(&request.email)
    .bind(&request.phone)
    .bind(&request.category)
    .bind(&request.service)
    .bind(request.date.to_sqlx())
    .bind(&request.time)
    .bind(&request.notes)
    .bind(time_source.now().to_sqlx())
    .fetch_one(pool)
    .await?;
    Ok(reservation)
}

pub async fn list_reservations(
    _actor: &ValidatedAdmin,
    pool: &PgPool,
) -> Result<Vec<Reservation>, StoreError> {
    let reservations = sqlx::query_as::<_, Reservation>(
        "SELECT * FROM reservations
        ORDER BY reservation_date, reservation_time, created_at",
    )
    .fetch_all(pool)
    .await?;
    Ok(reservations)
}

/// Confirm or cancel a pending reservation.
#[tracing::instrument(skip(_actor, pool, time_source))]
pub async fn set_reservation_status(
    details: &requests::SetReservationStatus,
    _actor: &ValidatedAdmin,
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<Reservation, StoreError> {
    let mut tx = pool.begin().await?;

    let current = sqlx::query_as::<_, Reservation>(
        "SELECT * FROM reservations WHERE id = $1 FOR UPDATE",
    )
    .bind(details.id)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| match e {
        sqlx::Error::RowNotFound => StoreError::ReservationNotFound,
        e => StoreError::Database(e),
    })?;

    if !current.status.can_transition_to(details.status) {
        return Err(StoreError::InvalidStatusTransition {
            from: current.status,
            to: details.status,
        });
    }

    let updated = sqlx::query_as::<_, Reservation>(
        "UPDATE reservations SET status = $2, updated_at = $3
        WHERE id = $1
        RETURNING *",
    )
    .bind(details.id)
    .bind(details.status)
    .bind(time_source.now().to_sqlx())
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(updated)
}

#[tracing::instrument(skip(_actor, pool))]
pub async fn delete_reservation(
    reservation_id: &ReservationId,
    _actor: &ValidatedAdmin,
    pool: &PgPool,
) -> Result<(), StoreError> {
    let result = sqlx::query("DELETE FROM reservations WHERE id = $1")
        .bind(reservation_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(StoreError::ReservationNotFound);
    }
    Ok(())
}
