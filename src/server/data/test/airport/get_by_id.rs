use super::*;

/// Tests getting an existing airport.
///
/// Expected: Ok(Some) with the stored fields
#[tokio::test]
async fn returns_existing_airport() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Airport).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let airport = factory::airport::AirportFactory::new(db)
        .name("Los Angeles Intl")
        .faa("LAX")
        .geo(33.942536, -118.408075)
        .build()
        .await?;

    let repo = AirportRepository::new(db);
    let found = repo.get_by_id(&airport.id).await?.unwrap();

    assert_eq!(found.name, "Los Angeles Intl");
    assert_eq!(found.faa.as_deref(), Some("LAX"));
    assert_eq!(found.geo.map(|geo| geo.lon), Some(-118.408075));

    Ok(())
}

/// Tests getting an airport that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_airport() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Airport).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AirportRepository::new(db);
    let found = repo.get_by_id("airport_missing").await?;

    assert!(found.is_none());

    Ok(())
}
