//! Services, price list items and membership plans.

use jiff_sqlx::ToSqlx;
use payloads::responses::{Membership, PriceItem, Service};
use payloads::{
    MembershipDetails, MembershipId, PriceItemDetails, PriceItemId,
    ServiceDetails, ServiceId, requests,
};
use sqlx::PgPool;

use super::{StoreError, ValidatedAdmin};
use crate::time::TimeSource;

pub async fn list_services(pool: &PgPool) -> Result<Vec<Service>, StoreError> {
    let services = sqlx::query_as::<_, Service>(
        "SELECT * FROM services ORDER BY name",
    )
    .fetch_all(pool)
    .await?;
    Ok(services)
}

#[tracing::instrument(skip(_actor, pool, time_source))]
pub async fn create_service(
    details: &ServiceDetails,
    _actor: &ValidatedAdmin,
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<Service, StoreError> {
    details.validate()?;
    let service = sqlx::query_as::<_, Service>(
        "INSERT INTO services (
            name, description, duration_minutes, price, created_at, updated_at
        ) VALUES ($1, $2, $3, $4, $5, $5)
        RETURNING *",
    )
    .bind(details.name.trim())
    .bind(details.description.trim())
    .bind(details.duration_minutes)
    .bind(details.price)
    .bind(time_source.now().to_sqlx())
    .fetch_one(pool)
    .await?;
    Ok(service)
}

#[tracing::instrument(skip(_actor, pool, time_source))]
pub async fn update_service(
    details: &requests::UpdateService,
    _actor: &ValidatedAdmin,
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<Service, StoreError> {
    let service = &details.details;
    service.validate()?;
    sqlx::query_as::<_, Service>(
        "UPDATE services
        SET name = $2, description = $3, duration_minutes = $4, price = $5,
            updated_at = $6
        WHERE id = $1
        RETURNING *",
    )
    .bind(details.id)
    .bind(service.name.trim())
    .bind(service.description.trim())
    .bind(service.duration_minutes)
    .bind(service.price)
    .bind(time_source.now().to_sqlx())
    .fetch_one(pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::RowNotFound => StoreError::ServiceNotFound,
        e => StoreError::Database(e),
    })
}

#[tracing::instrument(skip(_actor, pool))]
pub async fn delete_service(
    service_id: &ServiceId,
    _actor: &ValidatedAdmin,
    pool: &PgPool,
) -> Result<(), StoreError> {
    let result = sqlx::query("DELETE FROM services WHERE id = $1")
        .bind(service_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(StoreError::ServiceNotFound);
    }
    Ok(())
}

pub async fn list_price_items(
    pool: &PgPool,
) -> Result<Vec<PriceItem>, StoreError> {
    let items = sqlx::query_as::<_, PriceItem>(
        "SELECT * FROM price_items ORDER BY price, title",
    )
    .fetch_all(pool)
    .await?;
    Ok(items)
}

#[tracing::instrument(skip(_actor, pool, time_source))]
pub async fn create_price_item(
    details: &PriceItemDetails,
    _actor: &ValidatedAdmin,
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<PriceItem, StoreError> {
    details.validate()?;
    let item = sqlx::query_as::<_, PriceItem>(
        "INSERT INTO price_items (
            title, price, duration, description, created_at, updated_at
        ) VALUES ($1, $2, $3, $4, $5, $5)
        RETURNING *",
    )
    .bind(details.title.trim())
    .bind(details.price)
    .bind(details.duration.trim())
    .bind(details.description.trim())
    .bind(time_source.now().to_sqlx())
    .fetch_one(pool)
    .await?;
    Ok(item)
}

#[tracing::instrument(skip(_actor, pool, time_source))]
pub async fn update_price_item(
    details: &requests::UpdatePriceItem,
    _actor: &ValidatedAdmin,
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<PriceItem, StoreError> {
    let item = &details.details;
    item.validate()?;
    sqlx::query_as::<_, PriceItem>(
        "UPDATE price_items
        SET title = $2, price = $3, duration = $4, description = $5,
            updated_at = $6
        WHERE id = $1
        RETURNING *",
    )
    .bind(details.id)
    .bind(item.title.trim())
    .bind(item.price)
    .bind(item.duration.trim())
    .bind(item.description.trim())
    .bind(time_source.now().to_sqlx())
    .fetch_one(pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::RowNotFound => StoreError::PriceItemNotFound,
        e => StoreError::Database(e),
    })
}

#[tracing::instrument(skip(_actor, pool))]
pub async fn delete_price_item(
    price_item_id: &PriceItemId,
    _actor: &ValidatedAdmin,
    pool: &PgPool,
) -> Result<(), StoreError> {
    let result = sqlx::query("DELETE FROM price_items WHERE id = $1")
        .bind(price_item_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(StoreError::PriceItemNotFound);
    }
    Ok(())
}

pub async fn list_memberships(
    pool: &PgPool,
) -> Result<Vec<Membership>, StoreError> {
    let memberships = sqlx::query_as::<_, Membership>(
        "SELECT * FROM memberships ORDER BY price, name",
    )
    .fetch_all(pool)
    .await?;
    Ok(memberships)
}

fn trimmed_benefits(details: &MembershipDetails) -> Vec<String> {
    details
        .benefits
        .iter()
        .map(|benefit| benefit.trim().to_string())
        .collect()
}

#[tracing::instrument(skip(_actor, pool, time_source))]
pub async fn create_membership(
    details: &MembershipDetails,
    _actor: &ValidatedAdmin,
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<Membership, StoreError> {
    details.validate()?;
    let membership = sqlx::query_as::<_, Membership>(
        "INSERT INTO memberships (
            name, price, period, benefits, created_at, updated_at
        ) VALUES ($1, $2, $3, $4, $5, $5)
        RETURNING *",
    )
    .bind(details.name.trim())
    .bind(details.price)
    .bind(details.period.trim())
    .bind(trimmed_benefits(details))
    .bind(time_source.now().to_sqlx())
    .fetch_one(pool)
    .await?;
    Ok(membership)
}

#[tracing::instrument(skip(_actor, pool, time_source))]
pub async fn update_membership(
    details: &requests::UpdateMembership,
    _actor: &ValidatedAdmin,
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<Membership, StoreError> {
    let membership = &details.details;
    membership.validate()?;
    sqlx::query_as::<_, Membership>(
        "UPDATE memberships
        SET name = $2, price = $3, period = $4, benefits = $5, updated_at = $6
        WHERE id = $1
        RETURNING *",
    )
    .bind(details.id)
    .bind(membership.name.trim())
    .bind(membership.price)
    .bind(membership.period.trim())
    .bind(trimmed_benefits(membership))
    .bind(time_source.now().to_sqlx())
    .fetch_one(pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::RowNotFound => StoreError::MembershipNotFound,
        e => StoreError::Database(e),
    })
}

#[tracing::instrument(skip(_actor, pool))]
pub async fn delete_membership(
    membership_id: &MembershipId,
    _actor: &ValidatedAdmin,
    pool: &PgPool,
) -> Result<(), StoreError> {
    let result = sqlx::query("DELETE FROM memberships WHERE id = $1")
        .bind(membership_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(StoreError::MembershipNotFound);
    }
    Ok(())
}
