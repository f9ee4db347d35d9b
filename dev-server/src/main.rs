//! Development server for UM PARK UI development
//!
//! This binary starts the API on a fresh database filled with the development
//! dataset (price list, services, content, gallery, reservations and an admin
//! account), then keeps the mocked clock in step with real time so booking
//! dates in the browser line up with the server.
//!
//! Usage: cargo run -p dev-server

use anyhow::Result;
use jiff::Timestamp;
use std::time::Duration;
use test_helpers::mock::DevDataset;
use tokio::time::interval;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = api::telemetry::get_subscriber("info".into());
    api::telemetry::init_subscriber(subscriber)?;

    info!("🚀 Starting UM PARK development server");

    let app = test_helpers::spawn_app().await;

    info!("✅ API server running on http://127.0.0.1:{}", app.port);

    info!("📊 Setting up development data...");
    let dataset = DevDataset::create(&app).await?;

    start_time_sync_task(&app);
    info!("✅ Time sync active - mock time follows real time");

    info!("🎯 Development server ready!");
    info!("   API: http://127.0.0.1:{}", app.port);
    info!(
        "   UI:  cd ui && BACKEND_URL=http://127.0.0.1:{} trunk serve",
        app.port
    );
    info!("");
    dataset.print_summary();
    info!("");
    info!("👋 Press Ctrl+C to shutdown");

    tokio::signal::ctrl_c().await?;
    info!("🛑 Shutting down development server");
    Ok(())
}

/// Keep the mocked time source on the wall clock, so "tomorrow" in the
/// reservation form means the same day to the browser and the api.
fn start_time_sync_task(app: &test_helpers::TestApp) {
    let time_source = app.time_source.clone();

    tokio::spawn(async move {
        let mut interval = interval(Duration::from_secs(1));
        loop {
            interval.tick().await;
            time_source.set(Timestamp::now());
        }
    });
}
