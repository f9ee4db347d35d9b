use payloads::requests;
use reqwest::StatusCode;

use test_helpers::{TINY_PNG, assert_status_code, gallery_image_a, spawn_app};

#[tokio::test]
async fn upload_and_fetch_image() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_admin_user().await?;

    let image = app.upload_image_a().await?;
    assert_eq!(image.title, "Hlavní hala");

    app.client.logout().await?;
    let gallery = app.client.list_gallery().await?;
    assert_eq!(gallery, vec![image.clone()]);

    let bytes = app.client.get_image_data(&image.id).await?;
    assert_eq!(bytes, TINY_PNG);

    let response = app
        .client
        .inner_client
        .get(app.client.image_url(&image.id))
        .send()
        .await?;
    assert_eq!(response.headers()["content-type"], "image/png");
    assert!(
        response.headers()["cache-control"]
            .to_str()?
            .contains("public")
    );

    Ok(())
}

#[tokio::test]
async fn non_image_upload_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_admin_user().await?;

    let mut body = gallery_image_a();
    body.image_data = b"<html>not an image</html>".to_vec();
    let result = app.client.upload_gallery_image(&body).await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    let mut body = gallery_image_a();
    body.image_data = Vec::new();
    let result = app.client.upload_gallery_image(&body).await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    assert!(app.client.list_gallery().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn update_image_metadata() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_admin_user().await?;
    let image = app.upload_image_a().await?;

    let updated = app
        .client
        .update_gallery_image(&requests::UpdateGalleryImage {
            id: image.id,
            title: "Trampolíny".into(),
            description: None,
        })
        .await?;
    assert_eq!(updated.title, "Trampolíny");
    assert_eq!(updated.description, None);

    // bytes are untouched
    assert_eq!(app.client.get_image_data(&image.id).await?, TINY_PNG);

    Ok(())
}

#[tokio::test]
async fn delete_image() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_admin_user().await?;
    let image = app.upload_image_a().await?;

    app.client.delete_gallery_image(&image.id).await?;
    assert!(app.client.list_gallery().await?.is_empty());

    let result = app.client.get_image_data(&image.id).await;
    assert_status_code(result, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn regular_user_cannot_upload() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_jan_user().await?;

    let result = app.client.upload_gallery_image(&gallery_image_a()).await;
    assert_status_code(result, StatusCode::FORBIDDEN);

    Ok(())
}
