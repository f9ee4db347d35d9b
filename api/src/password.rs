use crate::store::{self, StoreError};
use crate::telemetry::spawn_blocking_with_tracing;
use crate::time::TimeSource;
use anyhow::Context;
use argon2::password_hash::SaltString;
use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier,
    Version,
};
use payloads::requests::{
    EMAIL_MAX_LEN, FULL_NAME_MAX_LEN, PASSWORD_MIN_LEN, is_valid_email,
};
use payloads::{Role, UserId};
use secrecy::{ExposeSecret, SecretBox};
use sqlx::PgPool;

#[derive(thiserror::Error, Debug)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials(#[source] anyhow::Error),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

#[derive(serde::Deserialize)]
pub struct Credentials {
    pub email: String,
    password: SecretBox<String>,
}

/// Emails are compared case-insensitively; they are stored lowercased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[tracing::instrument(name = "Validate credentials", skip(credentials, pool))]
pub async fn validate_credentials(
    credentials: Credentials,
    pool: &PgPool,
) -> Result<UserId, AuthError> {
    let mut user = None;
    // fallback password hash to prevent timing differences
    let mut expected_password_hash = SecretBox::new(Box::new(
        "$argon2id$v=19$m=15000,t=2,p=1$\
        gZiV/M1gPc22ElAH/Jh1Hw$\
        CWOrkoo7oJBQ/iyh7uJ0LO2aLEfrHwTWllSAxT0zRno"
            .to_string(),
    ));

    if let Some((stored_user, stored_password_hash)) =
        get_stored_credentials(&normalize_email(&credentials.email), pool)
            .await?
    {
        user = Some(stored_user);
        expected_password_hash = stored_password_hash;
    }

    spawn_blocking_with_tracing(move || {
        verify_password_hash(expected_password_hash, credentials.password)
    })
    .await
    .context("Failed to spawn blocking task.")??;

    let user = user
        .ok_or_else(|| anyhow::anyhow!("Unknown email."))
        .map_err(AuthError::InvalidCredentials)?;
    if !user.is_active {
        return Err(AuthError::InvalidCredentials(anyhow::anyhow!(
            "Account is deactivated."
        )));
    }
    Ok(user.id)
}

#[tracing::instrument(name = "Get stored credentials", skip(email, pool))]
async fn get_stored_credentials(
    email: &str,
    pool: &PgPool,
) -> Result<Option<(store::User, SecretBox<String>)>, anyhow::Error> {
    let user = sqlx::query_as::<_, store::User>(
        "SELECT * FROM users WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await
    .context("Failed to performed a query to retrieve stored credentials.")?
    .map(|user| {
        let hash = SecretBox::new(Box::new(user.password_hash.clone()));
        (user, hash)
    });
    Ok(user)
}

#[tracing::instrument(
    name = "Verify password hash",
    skip(expected_password_hash, password_candidate)
)]
fn verify_password_hash(
    expected_password_hash: SecretBox<String>,
    password_candidate: SecretBox<String>,
) -> Result<(), AuthError> {
    let expected_password_hash =
        PasswordHash::new(expected_password_hash.expose_secret())
            .context("Failed to parse hash in PHC string format.")?;

    Argon2::default()
        .verify_password(
            password_candidate.expose_secret().as_bytes(),
            &expected_password_hash,
        )
        .context("Invalid password.")
        .map_err(AuthError::InvalidCredentials)
}

#[derive(serde::Deserialize)]
pub struct NewUserDetails {
    pub email: String,
    password: SecretBox<String>,
    pub full_name: Option<String>,
}

impl NewUserDetails {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        full_name: Option<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: SecretBox::new(Box::new(password.into())),
            full_name,
        }
    }

    fn validate(&self) -> Result<(), StoreError> {
        if self.email.len() > EMAIL_MAX_LEN {
            return Err(StoreError::FieldTooLong);
        }
        if !is_valid_email(self.email.trim()) {
            return Err(StoreError::InvalidEmail);
        }
        if self.password.expose_secret().chars().count() < PASSWORD_MIN_LEN {
            return Err(StoreError::PasswordTooShort);
        }
        if self
            .full_name
            .as_ref()
            .is_some_and(|name| name.len() > FULL_NAME_MAX_LEN)
        {
            return Err(StoreError::FieldTooLong);
        }
        Ok(())
    }
}

#[tracing::instrument(
    name = "Create user",
    skip(new_user_details, pool, time_source),
    fields(email=tracing::field::Empty, user_id=tracing::field::Empty)
)]
pub async fn create_user(
    new_user_details: NewUserDetails,
    role: Role,
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<UserId, StoreError> {
    new_user_details.validate()?;
    let email = normalize_email(&new_user_details.email);
    let full_name = new_user_details
        .full_name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty());
    let password_hash = spawn_blocking_with_tracing(move || {
        compute_password_hash(new_user_details.password)
    })
    .await
    .map_err(anyhow::Error::from)?
    .context("Failed to hash password")?;
    let new_user_id = store::create_user(
        &email,
        password_hash.expose_secret(),
        full_name.as_deref(),
        role,
        pool,
        time_source,
    )
    .await?
    .id;
    tracing::Span::current()
        .record("email", tracing::field::display(&email))
        .record("user_id", tracing::field::display(&new_user_id));
    Ok(new_user_id)
}

/// Make sure an admin account exists for `email`. A missing account is
/// created with `password`; an existing one is promoted and reactivated
/// without touching its password.
#[tracing::instrument(
    name = "Ensure admin",
    skip(email, password, pool, time_source)
)]
pub async fn ensure_admin(
    email: &str,
    password: SecretBox<String>,
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<UserId, StoreError> {
    let email = normalize_email(email);
    match store::read_user_by_email(&email, pool).await {
        Ok(user) => {
            store::promote_to_admin(&user.id, pool, time_source).await?;
            tracing::info!("Existing account {email} granted admin role");
            Ok(user.id)
        }
        Err(StoreError::UserNotFound) => {
            let details = NewUserDetails {
                email: email.clone(),
                password,
                full_name: None,
            };
            let user_id =
                create_user(details, Role::Admin, pool, time_source).await?;
            tracing::info!("Created admin account {email}");
            Ok(user_id)
        }
        Err(e) => Err(e),
    }
}

fn compute_password_hash(
    password: SecretBox<String>,
) -> Result<SecretBox<String>, anyhow::Error> {
    let salt = SaltString::generate(&mut rand_core::OsRng);
    let params = Params::new(15000, 2, 1, None)
        .map_err(|e| anyhow::anyhow!("Invalid argon2 params: {e}"))?;
    let password_hash =
        Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
            .hash_password(password.expose_secret().as_bytes(), &salt)?
            .to_string();
    Ok(SecretBox::new(Box::new(password_hash)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emails_are_normalized() {
        assert_eq!(normalize_email("  Admin@UMPark.cz "), "admin@umpark.cz");
    }

    #[test]
    fn computed_hash_verifies() {
        let hash = compute_password_hash(SecretBox::new(Box::new(
            "parkour123".to_string(),
        )))
        .unwrap();
        assert!(
            verify_password_hash(
                SecretBox::new(Box::new(hash.expose_secret().clone())),
                SecretBox::new(Box::new("parkour123".to_string())),
            )
            .is_ok()
        );
        assert!(matches!(
            verify_password_hash(
                hash,
                SecretBox::new(Box::new("wrong".to_string())),
            ),
            Err(AuthError::InvalidCredentials(_))
        ));
    }

    #[test]
    fn short_passwords_are_refused() {
        let details = NewUserDetails::new("jan@example.cz", "12345", None);
        assert!(matches!(
            details.validate(),
            Err(StoreError::PasswordTooShort)
        ));
        let details = NewUserDetails::new("not-an-email", "123456", None);
        assert!(matches!(details.validate(), Err(StoreError::InvalidEmail)));
    }
}
