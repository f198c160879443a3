use super::*;

/// Tests that listing returns airports ordered by key with limit and skip applied.
///
/// Expected: Ok with the second and third airport
#[tokio::test]
async fn pages_airports_by_key() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Airport).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for id in ["airport_d", "airport_b", "airport_a", "airport_c"] {
        factory::airport::AirportFactory::new(db).id(id).build().await?;
    }

    let repo = AirportRepository::new(db);
    let airports = repo
        .get_all(&ListQuery {
            limit: 2,
            skip: 1,
            search: None,
        })
        .await?;

    let ids: Vec<_> = airports.iter().map(|airport| airport.id.as_str()).collect();
    assert_eq!(ids, vec!["airport_b", "airport_c"]);

    Ok(())
}

/// Tests filtering airports by a substring of their name.
///
/// Expected: Ok with only airports whose name contains "Intl"
#[tokio::test]
async fn filters_by_name_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Airport).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::airport::AirportFactory::new(db)
        .name("San Francisco Intl")
        .build()
        .await?;
    factory::airport::AirportFactory::new(db)
        .name("Half Moon Bay")
        .build()
        .await?;
    factory::airport::AirportFactory::new(db)
        .name("Oakland Intl")
        .build()
        .await?;

    let repo = AirportRepository::new(db);
    let airports = repo
        .get_all(&ListQuery {
            search: Some("Intl".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(airports.len(), 2);
    assert!(airports.iter().all(|airport| airport.name.contains("Intl")));

    Ok(())
}

/// Tests that an empty search term does not filter.
///
/// Expected: Ok with every airport
#[tokio::test]
async fn ignores_empty_search() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Airport).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_airport(db).await?;
    factory::create_airport(db).await?;

    let repo = AirportRepository::new(db);
    let airports = repo
        .get_all(&ListQuery {
            search: Some(String::new()),
            ..Default::default()
        })
        .await?;

    assert_eq!(airports.len(), 2);

    Ok(())
}

/// Tests that the name filter distinguishes letter case.
///
/// Expected: Ok with only the airport whose name contains "Intl" verbatim
#[tokio::test]
async fn search_is_case_sensitive() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Airport).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::airport::AirportFactory::new(db)
        .id("airport_1")
        .name("San Francisco Intl")
        .build()
        .await?;
    factory::airport::AirportFactory::new(db)
        .id("airport_2")
        .name("Tiny intl field")
        .build()
        .await?;

    let repo = AirportRepository::new(db);
    let airports = repo
        .get_all(&ListQuery {
            search: Some("Intl".to_string()),
            ..Default::default()
        })
        .await?;

    let ids: Vec<_> = airports.iter().map(|airport| airport.id.as_str()).collect();
    assert_eq!(ids, vec!["airport_1"]);

    Ok(())
}
