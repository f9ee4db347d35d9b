use payloads::{ContentDetails, requests};
use reqwest::StatusCode;

use test_helpers::{assert_status_code, content_details_a, spawn_app};

#[tokio::test]
async fn create_and_list_content() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_admin_user().await?;

    let created = app.create_content_a().await?;
    assert_eq!(created.title, content_details_a().title);
    assert_eq!(created.created_at, app.time_source.now());

    // content is public
    app.client.logout().await?;
    let content = app.client.list_content().await?;
    assert_eq!(content, vec![created]);

    Ok(())
}

#[tokio::test]
async fn update_content() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_admin_user().await?;
    let created = app.create_content_a().await?;

    app.time_source.advance(jiff::Span::new().minutes(1));
    let updated = app
        .client
        .update_content(&requests::UpdateContent {
            id: created.id,
            details: ContentDetails {
                title: "Zimní tábor".into(),
                body: "Nové termíny".into(),
            },
        })
        .await?;
    assert_eq!(updated.title, "Zimní tábor");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);

    Ok(())
}

#[tokio::test]
async fn delete_content() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_admin_user().await?;
    let created = app.create_content_a().await?;

    app.client.delete_content(&created.id).await?;
    assert!(app.client.list_content().await?.is_empty());

    let result = app.client.delete_content(&created.id).await;
    assert_status_code(result, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn content_requires_title() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_admin_user().await?;

    let mut details = content_details_a();
    details.title = "  ".into();
    let result = app.client.create_content(&details).await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn regular_user_cannot_edit_content() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app.client.create_content(&content_details_a()).await;
    assert_status_code(result, StatusCode::UNAUTHORIZED);

    app.create_jan_user().await?;
    let result = app.client.create_content(&content_details_a()).await;
    assert_status_code(result, StatusCode::FORBIDDEN);

    Ok(())
}
