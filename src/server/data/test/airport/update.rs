use super::*;

/// Tests that a partial update only changes the supplied fields.
///
/// Expected: Ok(true) with city changed and every other field kept
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Airport).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let airport = factory::airport::AirportFactory::new(db)
        .name("Calais Dunkerque")
        .faa("CQF")
        .geo(50.962097, 1.954764)
        .build()
        .await?;

    let repo = AirportRepository::new(db);
    let updated = repo
        .update(
            &airport.id,
            UpdateAirportParams {
                city: Some("Calais".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(updated);
    let stored = Airport::find_by_id(airport.id).one(db).await?.unwrap();
    assert_eq!(stored.city, "Calais");
    assert_eq!(stored.airportname, "Calais Dunkerque");
    assert_eq!(stored.faa.as_deref(), Some("CQF"));
    assert_eq!(stored.geo_lat, Some(50.962097));

    Ok(())
}

/// Tests clearing optional fields with a partial update.
///
/// Expected: Ok(true) with faa and geolocation removed
#[tokio::test]
async fn clears_optional_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Airport).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let airport = factory::airport::AirportFactory::new(db)
        .geo(50.0, 1.0)
        .build()
        .await?;

    let repo = AirportRepository::new(db);
    repo.update(
        &airport.id,
        UpdateAirportParams {
            faa: Some(None),
            geo: Some(None),
            ..Default::default()
        },
    )
    .await?;

    let stored = Airport::find_by_id(airport.id).one(db).await?.unwrap();
    assert!(stored.faa.is_none());
    assert!(stored.geo_lat.is_none());
    assert!(stored.geo_lon.is_none());

    Ok(())
}

/// Tests that an empty update of an existing airport succeeds without writing.
///
/// Expected: Ok(true)
#[tokio::test]
async fn accepts_empty_update() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Airport).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let airport = factory::create_airport(db).await?;

    let repo = AirportRepository::new(db);
    let updated = repo
        .update(&airport.id, UpdateAirportParams::default())
        .await?;

    assert!(updated);

    Ok(())
}

/// Tests updating an airport that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_airport() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Airport).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AirportRepository::new(db);
    let updated = repo
        .update(
            "airport_missing",
            UpdateAirportParams {
                city: Some("Nowhere".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(!updated);
    assert!(Airport::find_by_id("airport_missing").one(db).await?.is_none());

    Ok(())
}
