use anyhow::Result;

use test_helpers::spawn_app;

#[tokio::test]
async fn test_security_headers_on_authenticated_endpoints() -> Result<()> {
    let app = spawn_app().await;
    app.create_admin_user().await?;

    // the user list is only served to admins
    let url = format!("{}/api/users", app.client.address);
    let response = app.client.inner_client.get(&url).send().await?;
    assert!(response.status().is_success());

    let headers = response.headers();

    let cache_control = headers
        .get("cache-control")
        .expect("Cache-Control header should be present")
        .to_str()?;
    assert!(cache_control.contains("no-store"), "Should contain no-store");
    assert!(cache_control.contains("no-cache"), "Should contain no-cache");
    assert!(
        cache_control.contains("must-revalidate"),
        "Should contain must-revalidate"
    );
    assert!(cache_control.contains("private"), "Should contain private");

    let pragma = headers
        .get("pragma")
        .expect("Pragma header should be present")
        .to_str()?;
    assert_eq!(pragma, "no-cache", "Pragma should be no-cache");

    let expires = headers
        .get("expires")
        .expect("Expires header should be present")
        .to_str()?;
    assert_eq!(expires, "0", "Expires should be 0");

    Ok(())
}

#[tokio::test]
async fn test_public_endpoints_do_not_have_security_headers() -> Result<()> {
    let app = spawn_app().await;

    for path in ["health_check", "services"] {
        let url = format!("{}/api/{path}", app.client.address);
        let response = app.client.inner_client.get(&url).send().await?;

        let headers = response.headers();
        assert!(
            headers.get("pragma").is_none(),
            "{path} should not have Pragma header"
        );
        assert!(
            headers.get("expires").is_none(),
            "{path} should not have Expires header"
        );
        if let Some(cache_control) = headers.get("cache-control") {
            assert!(
                !cache_control.to_str()?.contains("no-store"),
                "{path} should not have no-store"
            );
        }
    }

    Ok(())
}
