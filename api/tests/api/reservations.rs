use payloads::{ReservationStatus, requests};
use reqwest::StatusCode;

use test_helpers::{assert_status_code, reservation_request_a, spawn_app};

#[tokio::test]
async fn submitted_reservation_is_pending() -> anyhow::Result<()> {
    let app = spawn_app().await;

    // anonymous visitors can book
    let reservation_id = app.submit_reservation_at("09:00").await?;

    app.create_admin_user().await?;
    let reservations = app.client.list_reservations().await?;
    assert_eq!(reservations.len(), 1);
    let reservation = &reservations[0];
    assert_eq!(reservation.id, reservation_id);
    assert_eq!(reservation.status, ReservationStatus::Pending);
    assert_eq!(reservation.customer_name, "Jan Novák");
    assert_eq!(reservation.service, "parkour");
    assert_eq!(reservation.reservation_date, app.tomorrow());
    assert_eq!(reservation.reservation_time, "09:00");
    assert_eq!(reservation.created_at, app.time_source.now());

    Ok(())
}

#[tokio::test]
async fn invalid_reservations_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let tomorrow = app.tomorrow();

    let mut body = reservation_request_a(tomorrow);
    body.name = "J".into();
    let result = app.client.submit_reservation(&body).await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    let mut body = reservation_request_a(tomorrow);
    body.email = "jan.example.cz".into();
    let result = app.client.submit_reservation(&body).await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    let mut body = reservation_request_a(tomorrow);
    body.phone = "12345".into();
    let result = app.client.submit_reservation(&body).await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    // service from another category
    let mut body = reservation_request_a(tomorrow);
    body.service = "narozeniny".into();
    let result = app.client.submit_reservation(&body).await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    // busy slot
    let mut body = reservation_request_a(tomorrow);
    body.time = "14:00".into();
    let result = app.client.submit_reservation(&body).await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    // today is no longer bookable
    let body = reservation_request_a(app.time_source.today());
    let result = app.client.submit_reservation(&body).await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn rejection_lists_the_failing_fields() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let mut body = reservation_request_a(app.tomorrow());
    body.name = " ".into();
    body.time = "10:00".into();
    match app.client.submit_reservation(&body).await {
        Err(payloads::ClientError::APIError(code, text)) => {
            assert_eq!(code, StatusCode::BAD_REQUEST);
            assert!(text.contains(payloads::reservation::TIME_REQUIRED));
            assert!(text.contains(payloads::reservation::NAME_TOO_SHORT));
        }
        _ => panic!("Expected APIError"),
    }

    Ok(())
}

#[tokio::test]
async fn double_booking_is_not_prevented() -> anyhow::Result<()> {
    let app = spawn_app().await;

    app.submit_reservation_at("11:00").await?;
    app.submit_reservation_at("11:00").await?;

    app.create_admin_user().await?;
    assert_eq!(app.client.list_reservations().await?.len(), 2);

    Ok(())
}

#[tokio::test]
async fn reservations_listed_by_date_then_time() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let tomorrow = app.tomorrow();
    let later = tomorrow.tomorrow()?;

    let mut body = reservation_request_a(later);
    body.time = "09:00".into();
    app.client.submit_reservation(&body).await?;
    app.submit_reservation_at("17:00").await?;
    app.submit_reservation_at("11:00").await?;

    app.create_admin_user().await?;
    let order = app
        .client
        .list_reservations()
        .await?
        .into_iter()
        .map(|r| (r.reservation_date, r.reservation_time))
        .collect::<Vec<_>>();
    assert_eq!(
        order,
        vec![
            (tomorrow, "11:00".to_string()),
            (tomorrow, "17:00".to_string()),
            (later, "09:00".to_string()),
        ]
    );

    Ok(())
}

#[tokio::test]
async fn status_changes_only_from_pending() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let id = app.submit_reservation_at("09:00").await?;
    app.create_admin_user().await?;

    let confirmed = app
        .client
        .set_reservation_status(&requests::SetReservationStatus {
            id,
            status: ReservationStatus::Confirmed,
        })
        .await?;
    assert_eq!(confirmed.status, ReservationStatus::Confirmed);

    let result = app
        .client
        .set_reservation_status(&requests::SetReservationStatus {
            id,
            status: ReservationStatus::Cancelled,
        })
        .await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    let result = app
        .client
        .set_reservation_status(&requests::SetReservationStatus {
            id,
            status: ReservationStatus::Pending,
        })
        .await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn delete_reservation() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let id = app.submit_reservation_at("09:00").await?;
    app.create_admin_user().await?;

    app.client.delete_reservation(&id).await?;
    assert!(app.client.list_reservations().await?.is_empty());

    let result = app.client.delete_reservation(&id).await;
    assert_status_code(result, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn reservations_require_admin() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let id = app.submit_reservation_at("09:00").await?;

    // anonymous
    let result = app.client.list_reservations().await;
    assert_status_code(result, StatusCode::UNAUTHORIZED);

    // regular user
    app.create_jan_user().await?;
    let result = app.client.list_reservations().await;
    assert_status_code(result, StatusCode::FORBIDDEN);
    let result = app
        .client
        .set_reservation_status(&requests::SetReservationStatus {
            id,
            status: ReservationStatus::Confirmed,
        })
        .await;
    assert_status_code(result, StatusCode::FORBIDDEN);
    let result = app.client.delete_reservation(&id).await;
    assert_status_code(result, StatusCode::FORBIDDEN);

    Ok(())
}
