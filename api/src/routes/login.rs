use actix_identity::Identity;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, get, post, web};
use payloads::{Role, responses};
use sqlx::PgPool;

use crate::password::{
    AuthError, Credentials, NewUserDetails, create_user, validate_credentials,
};
use crate::store;
use crate::time::TimeSource;

use super::{APIError, get_user_id, private_ok};

#[tracing::instrument(
    skip(request, credentials, pool),
    fields(email=tracing::field::Empty, user_id=tracing::field::Empty),
    ret,
)]
#[post("/login")]
pub async fn login(
    request: HttpRequest,
    credentials: web::Json<Credentials>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    tracing::Span::current()
        .record("email", tracing::field::display(&credentials.email));
    match validate_credentials(credentials.0, &pool).await {
        Ok(user_id) => {
            tracing::Span::current()
                .record("user_id", tracing::field::display(&user_id));
            Identity::login(&request.extensions(), user_id.to_string())
                .map_err(|e| APIError::UnexpectedError(e.into()))?;
            Ok(private_ok().finish())
        }
        Err(e) => {
            let e = match e {
                AuthError::InvalidCredentials(_) => {
                    APIError::AuthError(e.into())
                }
                AuthError::UnexpectedError(_) => {
                    APIError::UnexpectedError(e.into())
                }
            };
            Err(e)
        }
    }
}

#[tracing::instrument(skip(user), fields(user_id=tracing::field::Empty))]
#[post("/login_check")]
pub async fn login_check(user: Identity) -> Result<HttpResponse, APIError> {
    get_user_id(&user)?;
    Ok(private_ok().finish())
}

#[tracing::instrument(skip(user), fields(user_id=tracing::field::Empty))]
#[post("/logout")]
pub async fn logout(user: Identity) -> Result<HttpResponse, APIError> {
    let _ = get_user_id(&user); // to instrument the user_id, if exists
    user.logout();
    Ok(private_ok().finish())
}

/// Self-service sign up. New accounts always get the `user` role; admins are
/// made from the admin panel or the `ADMIN_EMAIL` bootstrap.
#[tracing::instrument(skip(request, new_user_details, pool, time_source))]
#[post("/create_account")]
pub async fn create_account(
    request: HttpRequest,
    new_user_details: web::Json<NewUserDetails>,
    pool: web::Data<PgPool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let user_id =
        create_user(new_user_details.0, Role::User, &pool, &time_source)
            .await?;
    Identity::login(&request.extensions(), user_id.to_string())
        .map_err(|e| APIError::UnexpectedError(e.into()))?;
    Ok(private_ok().finish())
}

#[tracing::instrument(skip(user, pool), fields(user_id=tracing::field::Empty))]
#[get("/user_profile")]
pub async fn user_profile(
    user: Identity,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    let user_id = get_user_id(&user)?;
    let user = store::read_user(&user_id, &pool).await?;
    let profile: responses::UserProfile = user.into();
    Ok(private_ok().json(profile))
}
