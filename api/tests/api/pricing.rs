use payloads::requests;
use reqwest::StatusCode;
use rust_decimal::dec;

use test_helpers::{
    assert_status_code, membership_details_a, price_item_details_a,
    service_details_a, spawn_app,
};

#[tokio::test]
async fn service_lifecycle() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_admin_user().await?;

    let service = app.create_service_a().await?;
    assert_eq!(service.details(), service_details_a());

    let mut details = service.details();
    details.price = dec!(300);
    details.duration_minutes = 120;
    let updated = app
        .client
        .update_service(&requests::UpdateService {
            id: service.id,
            details: details.clone(),
        })
        .await?;
    assert_eq!(updated.details(), details);

    app.client.logout().await?;
    assert_eq!(app.client.list_services().await?, vec![updated]);

    app.login_admin().await?;
    app.client.delete_service(&service.id).await?;
    assert!(app.client.list_services().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn negative_prices_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_admin_user().await?;

    let mut service = service_details_a();
    service.price = dec!(-1);
    let result = app.client.create_service(&service).await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    let mut service = service_details_a();
    service.duration_minutes = -30;
    let result = app.client.create_service(&service).await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    let mut item = price_item_details_a();
    item.price = dec!(-200);
    let result = app.client.create_price_item(&item).await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn price_items_ordered_by_price() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_admin_user().await?;

    let mut expensive = price_item_details_a();
    expensive.title = "Dětská oslava".into();
    expensive.price = dec!(3500);
    app.client.create_price_item(&expensive).await?;
    app.client.create_price_item(&price_item_details_a()).await?;

    let titles = app
        .client
        .list_price_items()
        .await?
        .into_iter()
        .map(|item| item.title)
        .collect::<Vec<_>>();
    assert_eq!(titles, vec!["Jednorázový vstup", "Dětská oslava"]);

    Ok(())
}

#[tokio::test]
async fn membership_benefits_round_trip() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_admin_user().await?;

    let mut details = membership_details_a();
    details.benefits.push("  Osobní skříňka  ".into());
    let membership = app.client.create_membership(&details).await?;
    assert_eq!(membership.benefits.len(), 4);
    assert_eq!(membership.benefits[3], "Osobní skříňka");

    let mut details = membership.details();
    details.benefits.remove(0);
    let updated = app
        .client
        .update_membership(&requests::UpdateMembership {
            id: membership.id,
            details,
        })
        .await?;
    assert_eq!(updated.benefits[0], "Veškeré vybavení");

    app.client.delete_membership(&membership.id).await?;
    let result = app.client.delete_membership(&membership.id).await;
    assert_status_code(result, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn blank_benefit_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_admin_user().await?;

    let mut details = membership_details_a();
    details.benefits.push(" ".into());
    let result = app.client.create_membership(&details).await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn pricing_edits_require_admin() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app.client.create_service(&service_details_a()).await;
    assert_status_code(result, StatusCode::UNAUTHORIZED);

    app.create_jan_user().await?;
    let result = app.client.create_price_item(&price_item_details_a()).await;
    assert_status_code(result, StatusCode::FORBIDDEN);
    let result = app.client.create_membership(&membership_details_a()).await;
    assert_status_code(result, StatusCode::FORBIDDEN);

    // reading stays public
    assert!(app.client.list_memberships().await?.is_empty());

    Ok(())
}
