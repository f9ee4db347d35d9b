mod catalog;
mod content;
mod gallery;
mod layout;
mod login;
mod pricing;
mod reservations;
mod security_headers;
mod users;

use test_helpers::spawn_app;

#[tokio::test]
async fn health_check() -> anyhow::Result<()> {
    let app = spawn_app().await;

    app.client.health_check().await?;

    Ok(())
}
