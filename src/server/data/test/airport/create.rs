use super::*;

/// Tests creating an airport with every field set.
///
/// Expected: Ok with the airport stored under the given key and geolocation columns filled
#[tokio::test]
async fn creates_airport_with_geolocation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Airport).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AirportRepository::new(db);
    let airport = repo
        .create("airport_3469".to_string(), params("San Francisco Intl"))
        .await?;

    assert_eq!(airport.id, "airport_3469");
    assert_eq!(airport.name, "San Francisco Intl");
    assert_eq!(airport.geo.as_ref().map(|geo| geo.lat), Some(37.618972));

    let stored = Airport::find_by_id("airport_3469").one(db).await?.unwrap();
    assert_eq!(stored.faa.as_deref(), Some("SFO"));
    assert_eq!(stored.geo_lon, Some(-122.374889));
    assert_eq!(stored.geo_alt, Some(13.0));

    Ok(())
}

/// Tests creating an airport without optional fields.
///
/// Expected: Ok with faa, icao and geolocation absent
#[tokio::test]
async fn creates_airport_without_optionals() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Airport).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AirportRepository::new(db);
    let airport = repo
        .create(
            "airport_1".to_string(),
            AirportParams {
                faa: None,
                icao: None,
                geo: None,
                ..params("Small Field")
            },
        )
        .await?;

    assert!(airport.faa.is_none());
    assert!(airport.geo.is_none());

    let stored = Airport::find_by_id("airport_1").one(db).await?.unwrap();
    assert!(stored.geo_lat.is_none());

    Ok(())
}

/// Tests creating an airport under a key that is already taken.
///
/// Expected: Err from the primary key constraint
#[tokio::test]
async fn fails_for_duplicate_key() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Airport).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_airport(db).await?;

    let repo = AirportRepository::new(db);
    let result = repo.create(existing.id, params("Duplicate")).await;

    assert!(result.is_err());

    Ok(())
}
