use reqwest::StatusCode;

use test_helpers::{assert_status_code, layout_settings_a, spawn_app};

#[tokio::test]
async fn default_layout_is_seeded() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let layout = app.client.get_layout().await?;
    assert_eq!(layout.contact_phone, "+420 777 888 999");
    assert_eq!(layout.contact_email, "info@umparkour.cz");
    assert_eq!(layout.facebook_url, None);

    Ok(())
}

#[tokio::test]
async fn update_layout() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_admin_user().await?;

    let updated = app.client.update_layout(&layout_settings_a()).await?;
    assert_eq!(updated, layout_settings_a());

    app.client.logout().await?;
    assert_eq!(app.client.get_layout().await?, layout_settings_a());

    Ok(())
}

#[tokio::test]
async fn blank_links_are_cleared() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_admin_user().await?;

    let mut settings = layout_settings_a();
    settings.instagram_url = Some("  ".into());
    let updated = app.client.update_layout(&settings).await?;
    assert_eq!(updated.instagram_url, None);
    assert_eq!(updated.facebook_url, settings.facebook_url);

    Ok(())
}

#[tokio::test]
async fn layout_requires_contact_details() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_admin_user().await?;

    let mut settings = layout_settings_a();
    settings.contact_email = String::new();
    let result = app.client.update_layout(&settings).await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn regular_user_cannot_update_layout() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_jan_user().await?;

    let result = app.client.update_layout(&layout_settings_a()).await;
    assert_status_code(result, StatusCode::FORBIDDEN);

    Ok(())
}
