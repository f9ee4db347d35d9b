use payloads::{Role, requests};
use reqwest::StatusCode;

use test_helpers::{assert_status_code, jan_credentials, spawn_app};

#[tokio::test]
async fn login_refused() -> anyhow::Result<()> {
    let app = spawn_app().await;

    // test a login with an unknown user
    let body = requests::LoginCredentials {
        email: "nikdo@example.cz".into(),
        password: "random".into(),
    };
    let result = app.client.login(&body).await;

    match result {
        Err(payloads::ClientError::APIError(code, text)) => {
            assert_eq!(code, StatusCode::UNAUTHORIZED);
            assert_eq!(text, "Authentication failed: Invalid credentials");
        }
        _ => {
            panic!("Expected APIError");
        }
    }

    // login check should fail
    let is_logged_in = app.client.login_check().await?;
    assert!(!is_logged_in);

    Ok(())
}

#[tokio::test]
async fn create_account_logs_in_as_regular_user() -> anyhow::Result<()> {
    let app = spawn_app().await;

    app.create_jan_user().await?;

    let is_logged_in = app.client.login_check().await?;
    assert!(is_logged_in);

    let profile = app.current_user().await?;
    assert_eq!(profile.email, "jan@example.cz");
    assert_eq!(profile.full_name.as_deref(), Some("Jan Novák"));
    assert_eq!(profile.role, Role::User);
    assert!(profile.is_active);

    Ok(())
}

#[tokio::test]
async fn login_is_case_insensitive_on_email() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_jan_user().await?;
    app.client.logout().await?;

    app.client
        .login(&requests::LoginCredentials {
            email: "  JAN@Example.cz ".into(),
            password: jan_credentials().password,
        })
        .await?;
    assert!(app.client.login_check().await?);

    Ok(())
}

#[tokio::test]
async fn wrong_password_refused() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_jan_user().await?;
    app.client.logout().await?;

    let result = app
        .client
        .login(&requests::LoginCredentials {
            email: "jan@example.cz".into(),
            password: "spatneheslo".into(),
        })
        .await;
    assert_status_code(result, StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
async fn duplicate_email_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_jan_user().await?;

    let mut body = jan_credentials();
    body.email = "Jan@Example.cz".into();
    let result = app.client.create_account(&body).await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn invalid_account_details_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let mut body = jan_credentials();
    body.email = "neni-email".into();
    let result = app.client.create_account(&body).await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    let mut body = jan_credentials();
    body.password = "12345".into();
    let result = app.client.create_account(&body).await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    let mut body = jan_credentials();
    body.email = format!("{}@example.cz", "x".repeat(260));
    let result = app.client.create_account(&body).await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn logout_ends_session() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_jan_user().await?;

    app.client.logout().await?;

    assert!(!app.client.login_check().await?);
    let result = app.client.user_profile().await;
    assert_status_code(result, StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
async fn switching_accounts_works_from_a_logged_out_client() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_admin_user().await?;
    app.client.logout().await?;

    app.login_admin().await?;
    assert_eq!(app.current_user().await?.role, Role::Admin);

    app.client.logout().await?;
    app.create_jan_user().await?;
    app.login_admin().await?;
    assert_eq!(app.current_user().await?.role, Role::Admin);

    Ok(())
}
