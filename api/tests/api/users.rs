use payloads::{Role, requests};
use reqwest::StatusCode;

use test_helpers::{assert_status_code, jan_login_credentials, spawn_app};

#[tokio::test]
async fn users_listed_newest_first() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_jan_user().await?;
    app.time_source.advance(jiff::Span::new().minutes(5));
    app.create_admin_user().await?;

    let emails = app
        .client
        .list_users()
        .await?
        .into_iter()
        .map(|u| u.email)
        .collect::<Vec<_>>();
    assert_eq!(emails, vec!["admin@umparkour.cz", "jan@example.cz"]);

    Ok(())
}

#[tokio::test]
async fn admin_updates_another_user() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_jan_user().await?;
    let jan = app.current_user().await?;
    app.create_admin_user().await?;

    let updated = app
        .client
        .update_user(&requests::UpdateUser {
            user_id: jan.id,
            full_name: Some("Jan Novák ml.".into()),
            role: Role::Admin,
            is_active: true,
        })
        .await?;
    assert_eq!(updated.role, Role::Admin);
    assert_eq!(updated.full_name.as_deref(), Some("Jan Novák ml."));

    // jan can now reach the admin endpoints
    app.login_jan().await?;
    assert_eq!(app.client.list_users().await?.len(), 2);

    Ok(())
}

#[tokio::test]
async fn deactivated_user_cannot_log_in() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_jan_user().await?;
    let jan = app.current_user().await?;
    app.create_admin_user().await?;

    app.client
        .update_user(&requests::UpdateUser {
            user_id: jan.id,
            full_name: jan.full_name.clone(),
            role: Role::User,
            is_active: false,
        })
        .await?;

    app.client.logout().await?;
    let result = app.client.login(&jan_login_credentials()).await;
    assert_status_code(result, StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
async fn admin_cannot_demote_or_delete_self() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_admin_user().await?;
    let admin = app.current_user().await?;

    let result = app
        .client
        .update_user(&requests::UpdateUser {
            user_id: admin.id,
            full_name: admin.full_name.clone(),
            role: Role::User,
            is_active: true,
        })
        .await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    let result = app
        .client
        .update_user(&requests::UpdateUser {
            user_id: admin.id,
            full_name: admin.full_name.clone(),
            role: Role::Admin,
            is_active: false,
        })
        .await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    let result = app.client.delete_user(&admin.id).await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    // renaming yourself is fine
    let renamed = app
        .client
        .update_user(&requests::UpdateUser {
            user_id: admin.id,
            full_name: Some("Petra".into()),
            role: Role::Admin,
            is_active: true,
        })
        .await?;
    assert_eq!(renamed.full_name.as_deref(), Some("Petra"));

    Ok(())
}

#[tokio::test]
async fn delete_user() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_jan_user().await?;
    let jan = app.current_user().await?;
    app.create_admin_user().await?;

    app.client.delete_user(&jan.id).await?;
    assert_eq!(app.client.list_users().await?.len(), 1);

    let result = app.client.delete_user(&jan.id).await;
    assert_status_code(result, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn user_management_requires_admin() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app.client.list_users().await;
    assert_status_code(result, StatusCode::UNAUTHORIZED);

    app.create_jan_user().await?;
    let jan = app.current_user().await?;
    let result = app.client.list_users().await;
    assert_status_code(result, StatusCode::FORBIDDEN);

    // no self promotion
    let result = app
        .client
        .update_user(&requests::UpdateUser {
            user_id: jan.id,
            full_name: None,
            role: Role::Admin,
            is_active: true,
        })
        .await;
    assert_status_code(result, StatusCode::FORBIDDEN);

    Ok(())
}
