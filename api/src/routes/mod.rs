pub mod catalog;
pub mod content;
pub mod gallery;
pub mod layout;
pub mod login;
pub mod pricing;
pub mod reservations;
pub mod users;

use actix_identity::Identity;
use actix_web::{
    HttpResponse, HttpResponseBuilder, Responder, ResponseError,
    body::BoxBody, dev::HttpServiceFactory, get, http::header, web,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::store::{self, StoreError};

pub fn api_services() -> impl HttpServiceFactory {
    web::scope("/api")
        .service(health_check)
        .service(login::login)
        .service(login::login_check)
        .service(login::user_profile)
        .service(login::logout)
        .service(login::create_account)
        .service(catalog::get_catalog)
        .service(catalog::get_availability)
        .service(reservations::submit_reservation)
        .service(reservations::list_reservations)
        .service(reservations::set_reservation_status)
        .service(reservations::delete_reservation)
        .service(content::list_content)
        .service(content::create_content)
        .service(content::update_content)
        .service(content::delete_content)
        .service(gallery::list_gallery)
        .service(gallery::get_image)
        .service(gallery::upload_gallery_image)
        .service(gallery::update_gallery_image)
        .service(gallery::delete_gallery_image)
        .service(pricing::list_services)
        .service(pricing::create_service)
        .service(pricing::update_service)
        .service(pricing::delete_service)
        .service(pricing::list_price_items)
        .service(pricing::create_price_item)
        .service(pricing::update_price_item)
        .service(pricing::delete_price_item)
        .service(pricing::list_memberships)
        .service(pricing::create_membership)
        .service(pricing::update_membership)
        .service(pricing::delete_membership)
        .service(users::list_users)
        .service(users::update_user)
        .service(users::delete_user)
        .service(layout::get_layout)
        .service(layout::update_layout)
}

#[get("/health_check")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("healthy")
}

/// A 200 response that browsers and proxies must not cache. Used for
/// everything behind a login.
fn private_ok() -> HttpResponseBuilder {
    let mut response = HttpResponse::Ok();
    response
        .insert_header((
            header::CACHE_CONTROL,
            "no-store, no-cache, must-revalidate, private",
        ))
        .insert_header((header::PRAGMA, "no-cache"))
        .insert_header((header::EXPIRES, "0"));
    response
}

#[derive(Debug, thiserror::Error)]
pub enum APIError {
    #[error("Authentication failed")]
    AuthError(#[source] anyhow::Error),
    #[error("Forbidden")]
    Forbidden(#[source] anyhow::Error),
    #[error("Bad request")]
    BadRequest(#[source] anyhow::Error),
    #[error("Not found")]
    NotFound(#[source] anyhow::Error),
    #[error("Something went wrong")]
    UnexpectedError(#[from] anyhow::Error),
}

impl ResponseError for APIError {
    fn error_response(&self) -> HttpResponse<BoxBody> {
        match self {
            Self::AuthError(e) => {
                HttpResponse::Unauthorized().body(format!("{self}: {e}"))
            }
            Self::Forbidden(e) => {
                HttpResponse::Forbidden().body(format!("{self}: {e}"))
            }
            Self::BadRequest(e) => {
                HttpResponse::BadRequest().body(format!("{self}: {e}"))
            }
            Self::NotFound(e) => {
                HttpResponse::NotFound().body(format!("{self}: {e}"))
            }
            Self::UnexpectedError(_) => {
                HttpResponse::InternalServerError().body(self.to_string())
            }
        }
    }
}

impl From<StoreError> for APIError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Database(_) | StoreError::UnexpectedError(_) => {
                APIError::UnexpectedError(e.into())
            }
            StoreError::RequiresAdmin => APIError::Forbidden(e.into()),
            StoreError::UserNotFound
            | StoreError::ContentNotFound
            | StoreError::GalleryImageNotFound
            | StoreError::ServiceNotFound
            | StoreError::PriceItemNotFound
            | StoreError::MembershipNotFound
            | StoreError::ReservationNotFound => APIError::NotFound(e.into()),
            _ => APIError::BadRequest(e.into()),
        }
    }
}

fn get_user_id(user: &Identity) -> Result<payloads::UserId, APIError> {
    let id_str = user.id().map_err(|e| {
        APIError::AuthError(
            anyhow::Error::from(e).context("Invalid login session"),
        )
    })?;
    // special case: since this is used in so many routes, the user_id is
    // recorded here, but attaches to the span for the api route itself
    tracing::Span::current()
        .record("user_id", tracing::field::display(&id_str));
    Ok(payloads::UserId(
        Uuid::parse_str(&id_str).map_err(anyhow::Error::from)?,
    ))
}

/// Resolve the session to an active admin. Anonymous requests get a 401,
/// signed-in non-admins a 403.
async fn get_validated_admin(
    user: &Identity,
    pool: &PgPool,
) -> Result<store::ValidatedAdmin, APIError> {
    let user_id = get_user_id(user)?;
    store::get_validated_admin(&user_id, pool).await.map_err(|e| match e {
        StoreError::RequiresAdmin => APIError::Forbidden(
            anyhow::Error::from(e).context("Couldn't validate admin access"),
        ),
        e => APIError::UnexpectedError(e.into()),
    })
}
