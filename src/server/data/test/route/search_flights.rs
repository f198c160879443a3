use super::*;

/// Tests that flight search joins schedule, route and airline and sorts by airline name.
///
/// Expected: Ok with one hit per schedule entry, Air France before Delta
#[tokio::test]
async fn returns_flights_sorted_by_airline_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let from = factory::airport::AirportFactory::new(db).faa("SFO").build().await?;
    let to = factory::airport::AirportFactory::new(db).faa("LAX").build().await?;
    let delta = factory::airline::AirlineFactory::new(db)
        .name("Delta Air Lines")
        .iata("DL")
        .build()
        .await?;
    let air_france = factory::airline::AirlineFactory::new(db)
        .name("Air France")
        .iata("AF")
        .build()
        .await?;

    RouteFactory::new(db)
        .airline(&delta)
        .between(&from, &to)
        .equipment("757")
        .schedule_entry(1, "DL100", "06:00:00")
        .build()
        .await?;
    RouteFactory::new(db)
        .airline(&air_france)
        .between(&from, &to)
        .equipment("320")
        .schedule_entry(2, "AF300", "09:30:00")
        .schedule_entry(1, "AF200", "08:15:00")
        .build()
        .await?;
    // Reverse direction must not match
    RouteFactory::new(db)
        .airline(&air_france)
        .between(&to, &from)
        .schedule_entry(1, "AF999", "11:00:00")
        .build()
        .await?;

    let repo = RouteRepository::new(db);
    let flights = repo.search_flights("SFO", "LAX", None, 50, 0).await?;

    let hits: Vec<_> = flights
        .iter()
        .map(|flight| (flight.name.as_str(), flight.flight.as_deref().unwrap_or_default()))
        .collect();
    assert_eq!(
        hits,
        vec![
            ("Air France", "AF200"),
            ("Air France", "AF300"),
            ("Delta Air Lines", "DL100"),
        ]
    );
    assert_eq!(flights[0].equipment.as_deref(), Some("320"));
    assert_eq!(flights[0].utc.as_deref(), Some("08:15:00"));
    assert_eq!(flights[0].source_airport.as_deref(), Some("SFO"));
    assert_eq!(flights[0].destination_airport.as_deref(), Some("LAX"));

    Ok(())
}

/// Tests filtering flight search by day of week.
///
/// Expected: Ok with only the flights on the requested day
#[tokio::test]
async fn filters_by_week_day() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let airline = factory::create_airline(db).await?;
    let from = factory::create_airport(db).await?;
    let to = factory::create_airport(db).await?;
    RouteFactory::new(db)
        .airline(&airline)
        .between(&from, &to)
        .schedule_entry(0, "XX100", "06:00:00")
        .schedule_entry(3, "XX300", "07:00:00")
        .schedule_entry(3, "XX301", "19:00:00")
        .build()
        .await?;

    let source = from.faa.unwrap();
    let destination = to.faa.unwrap();
    let repo = RouteRepository::new(db);
    let flights = repo
        .search_flights(&source, &destination, Some(3), 50, 0)
        .await?;

    assert_eq!(flights.len(), 2);
    assert!(flights.iter().all(|flight| flight.day == Some(3)));

    Ok(())
}

/// Tests paging flight search results.
///
/// Expected: Ok with the second flight only
#[tokio::test]
async fn applies_limit_and_skip() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let airline = factory::create_airline(db).await?;
    let from = factory::create_airport(db).await?;
    let to = factory::create_airport(db).await?;
    RouteFactory::new(db)
        .airline(&airline)
        .between(&from, &to)
        .schedule_entry(1, "XX1", "06:00:00")
        .schedule_entry(1, "XX2", "07:00:00")
        .schedule_entry(1, "XX3", "08:00:00")
        .build()
        .await?;

    let source = from.faa.unwrap();
    let destination = to.faa.unwrap();
    let repo = RouteRepository::new(db);
    let flights = repo
        .search_flights(&source, &destination, None, 1, 1)
        .await?;

    assert_eq!(flights.len(), 1);
    assert_eq!(flights[0].flight.as_deref(), Some("XX2"));

    Ok(())
}

/// Tests that routes whose airline is not stored do not match.
///
/// Expected: Ok with an empty result
#[tokio::test]
async fn skips_routes_without_stored_airline() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let from = factory::create_airport(db).await?;
    let to = factory::create_airport(db).await?;
    RouteFactory::new(db)
        .airlineid("airline_unknown")
        .between(&from, &to)
        .schedule_entry(1, "ZZ1", "06:00:00")
        .build()
        .await?;

    let source = from.faa.unwrap();
    let destination = to.faa.unwrap();
    let repo = RouteRepository::new(db);
    let flights = repo
        .search_flights(&source, &destination, None, 50, 0)
        .await?;

    assert!(flights.is_empty());

    Ok(())
}
