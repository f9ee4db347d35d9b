use actix_web::{HttpResponse, get, web};
use payloads::availability::{self, AvailabilityPolicy, DayMarker};
use payloads::catalog::ServiceCatalog;
use payloads::{requests, responses};

use super::APIError;

#[tracing::instrument(skip(catalog))]
#[get("/catalog")]
pub async fn get_catalog(
    catalog: web::Data<ServiceCatalog>,
) -> Result<HttpResponse, APIError> {
    Ok(HttpResponse::Ok().json(catalog.to_response()))
}

/// Bookable slots for a date. The slots do not depend on existing
/// reservations.
#[tracing::instrument(skip(policy), ret)]
#[get("/availability")]
pub async fn get_availability(
    query: web::Query<requests::AvailabilityQuery>,
    policy: web::Data<AvailabilityPolicy>,
) -> Result<HttpResponse, APIError> {
    let date = query.date;
    let availability = responses::Availability {
        date,
        times: policy.available_slots(date),
        is_sunday: availability::day_marker(date) == DayMarker::Sunday,
    };
    Ok(HttpResponse::Ok().json(availability))
}
