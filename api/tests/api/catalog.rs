use jiff::civil::date;

use test_helpers::spawn_app;

#[tokio::test]
async fn catalog_lists_all_categories() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let catalog = app.client.get_catalog().await?;
    let keys = catalog.iter().map(|c| c.key.as_str()).collect::<Vec<_>>();
    assert_eq!(keys, vec!["sport", "zabava", "performance"]);

    let sport = &catalog[0];
    assert_eq!(sport.title, "Sportovní aktivity");
    let services = sport.services.iter().map(|s| s.id.as_str()).collect::<Vec<_>>();
    assert_eq!(
        services,
        vec!["parkour", "trampoliny", "akrobacie", "gymnastika"]
    );
    assert!(sport.services.iter().all(|s| !s.description.is_empty()));

    Ok(())
}

#[tokio::test]
async fn availability_skips_busy_slots() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let availability = app.client.get_availability(app.tomorrow()).await?;
    assert_eq!(availability.date, app.tomorrow());
    assert_eq!(
        availability.times,
        vec!["09:00", "11:00", "12:00", "13:00", "15:00", "17:00", "18:00"]
    );

    Ok(())
}

#[tokio::test]
async fn sunday_is_flagged_but_bookable() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let sunday = app.client.get_availability(date(2025, 1, 5)).await?;
    assert!(sunday.is_sunday);
    assert_eq!(sunday.times.len(), 7);

    let monday = app.client.get_availability(date(2025, 1, 6)).await?;
    assert!(!monday.is_sunday);
    assert_eq!(monday.times, sunday.times);

    // a booked slot stays on offer
    app.submit_reservation_at("09:00").await?;
    let availability = app.client.get_availability(app.tomorrow()).await?;
    assert!(availability.times.contains(&"09:00".to_string()));

    Ok(())
}
