//! Database store module for the UM PARK api
//!
//! ## Design Decisions
//!
//! ### Admin proof type
//! - **ValidatedAdmin**: every write to site content takes a
//!   `&ValidatedAdmin`, which can only be obtained from
//!   [`get_validated_admin`]. Handlers cannot forget the role check.
//! - **Deactivated admins**: an inactive account never validates, even if
//!   its role is still `admin`.
//!
//! ### Time Source Dependency
//! - All `created_at`/`updated_at` values come from the `TimeSource` passed
//!   in by the route, never from `now()` in SQL, so tests can pin the clock.
//!
//! ### Validation
//! - Field limits live next to the request types in `payloads::requests`
//!   and are checked here before any query runs. The database constraints
//!   are a second line only.

use jiff::Timestamp;
use jiff_sqlx::{Timestamp as SqlxTs, ToSqlx};
use sqlx::{FromRow, PgPool};

use payloads::requests::{self, FieldError};
use payloads::{ReservationStatus, Role, UserId, responses};

use crate::time::TimeSource;

pub mod content;
pub mod gallery;
pub mod layout;
pub mod pricing;
pub mod reservations;

pub use content::*;
pub use gallery::*;
pub use layout::*;
pub use pricing::*;
pub use reservations::*;

/// A complete user row that stays in the backend.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub password_hash: String,
    pub full_name: Option<String>,
    pub role: Role,
    pub is_active: bool,
    #[sqlx(try_from = "SqlxTs")]
    pub created_at: Timestamp,
    #[sqlx(try_from = "SqlxTs")]
    pub updated_at: Timestamp,
}

impl From<User> for responses::UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
            role: user.role,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

/// A type that can only exist if the interior User has been validated to be
/// an active admin.
#[derive(Debug, Clone)]
pub struct ValidatedAdmin(User);

impl ValidatedAdmin {
    pub fn user(&self) -> &User {
        &self.0
    }
}

#[tracing::instrument(skip(pool, time_source))]
pub async fn create_user(
    email: &str,
    password_hash: &str,
    full_name: Option<&str>,
    role: Role,
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<User, StoreError> {
    sqlx::query_as::<_, User>(
        "INSERT INTO users (
            email, password_hash, full_name, role, created_at, updated_at
        ) VALUES ($1, $2, $3, $4, $5, $5) RETURNING *",
    )
    .bind(email)
    .bind(password_hash)
    .bind(full_name)
    .bind(role)
    .bind(time_source.now().to_sqlx())
    .fetch_one(pool)
    .await
    .map_err(|e| match StoreError::from(e) {
        StoreError::NotUnique(_) => StoreError::EmailTaken,
        e => e,
    })
}

pub async fn read_user(
    user_id: &UserId,
    pool: &PgPool,
) -> Result<User, StoreError> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => StoreError::UserNotFound,
            e => StoreError::Database(e),
        })
}

/// `email` must already be normalized.
pub async fn read_user_by_email(
    email: &str,
    pool: &PgPool,
) -> Result<User, StoreError> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_one(pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => StoreError::UserNotFound,
            e => StoreError::Database(e),
        })
}

/// Used when bootstrapping the first admin from the environment.
pub async fn promote_to_admin(
    user_id: &UserId,
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<(), StoreError> {
    let result = sqlx::query(
        "UPDATE users SET role = 'admin', is_active = TRUE, updated_at = $2
        WHERE id = $1",
    )
    .bind(user_id)
    .bind(time_source.now().to_sqlx())
    .execute(pool)
    .await?;
    if result.rows_affected() == 0 {
        return Err(StoreError::UserNotFound);
    }
    Ok(())
}

pub async fn get_validated_admin(
    user_id: &UserId,
    pool: &PgPool,
) -> Result<ValidatedAdmin, StoreError> {
    let user = match read_user(user_id, pool).await {
        Ok(user) => user,
        // the session outlived the account
        Err(StoreError::UserNotFound) => {
            return Err(StoreError::RequiresAdmin);
        }
        Err(e) => return Err(e),
    };
    if !user.is_active || !user.role.is_admin() {
        return Err(StoreError::RequiresAdmin);
    }
    Ok(ValidatedAdmin(user))
}

pub async fn list_users(
    _actor: &ValidatedAdmin,
    pool: &PgPool,
) -> Result<Vec<responses::UserProfile>, StoreError> {
    let users = sqlx::query_as::<_, User>(
        "SELECT * FROM users ORDER BY created_at DESC, email",
    )
    .fetch_all(pool)
    .await?;
    Ok(users.into_iter().map(Into::into).collect())
}

/// Change another account's name, role or active flag. Admins cannot demote
/// or deactivate themselves, so there is always at least one active admin.
#[tracing::instrument(skip(actor, pool, time_source))]
pub async fn update_user(
    details: &requests::UpdateUser,
    actor: &ValidatedAdmin,
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<responses::UserProfile, StoreError> {
    if details.user_id == actor.0.id
        && (!details.role.is_admin() || !details.is_active)
    {
        return Err(StoreError::CannotModifySelf);
    }
    let full_name = details
        .full_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty());
    if full_name.is_some_and(|name| name.len() > requests::FULL_NAME_MAX_LEN)
    {
        return Err(StoreError::FieldTooLong);
    }

    let user = sqlx::query_as::<_, User>(
        "UPDATE users
        SET full_name = $2, role = $3, is_active = $4, updated_at = $5
        WHERE id = $1
        RETURNING *",
    )
    .bind(details.user_id)
    .bind(full_name)
    .bind(details.role)
    .bind(details.is_active)
    .bind(time_source.now().to_sqlx())
    .fetch_one(pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::RowNotFound => StoreError::UserNotFound,
        e => StoreError::Database(e),
    })?;
    Ok(user.into())
}

#[tracing::instrument(skip(actor, pool))]
pub async fn delete_user(
    user_id: &UserId,
    actor: &ValidatedAdmin,
    pool: &PgPool,
) -> Result<(), StoreError> {
    if *user_id == actor.0.id {
        return Err(StoreError::CannotModifySelf);
    }
    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(StoreError::UserNotFound);
    }
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Admin permissions required")]
    RequiresAdmin,
    #[error("Admins cannot demote, deactivate or delete themselves")]
    CannotModifySelf,
    #[error("An account with this email already exists")]
    EmailTaken,
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
    #[error("Field too long")]
    FieldTooLong,
    #[error("Invalid field: {0}")]
    InvalidField(#[from] FieldError),
    #[error("Invalid reservation: {0}")]
    InvalidReservation(#[source] payloads::reservation::FieldErrors),
    #[error("Reservation is already {from}; cannot change it to {to}")]
    InvalidStatusTransition {
        from: ReservationStatus,
        to: ReservationStatus,
    },
    #[error("File is not a supported image")]
    UnsupportedImage,
    #[error("Image is too large")]
    ImageTooLarge,
    #[error("Unique constraint violation")]
    NotUnique(#[source] sqlx::Error),
    #[error("Database error")]
    Database(#[source] sqlx::Error),
    #[error("Unexpected error")]
    UnexpectedError(#[from] anyhow::Error),
    #[error("User not found")]
    UserNotFound,
    #[error("Content not found")]
    ContentNotFound,
    #[error("Gallery image not found")]
    GalleryImageNotFound,
    #[error("Service not found")]
    ServiceNotFound,
    #[error("Price item not found")]
    PriceItemNotFound,
    #[error("Membership not found")]
    MembershipNotFound,
    #[error("Reservation not found")]
    ReservationNotFound,
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &e
            && db_err.is_unique_violation()
        {
            return StoreError::NotUnique(e);
        }
        StoreError::Database(e)
    }
}
