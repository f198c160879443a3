use super::*;

/// Tests that listing attaches each route's own schedule.
///
/// Expected: Ok with routes ordered by key, each with its schedule
#[tokio::test]
async fn lists_routes_with_their_schedules() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    RouteFactory::new(db)
        .id("route_b")
        .schedule_entry(1, "BB1", "01:00:00")
        .build()
        .await?;
    RouteFactory::new(db)
        .id("route_a")
        .schedule_entry(2, "AA1", "02:00:00")
        .schedule_entry(3, "AA2", "03:00:00")
        .build()
        .await?;
    RouteFactory::new(db).id("route_c").build().await?;

    let repo = RouteRepository::new(db);
    let routes = repo.get_all(&ListQuery::default()).await?;

    let ids: Vec<_> = routes.iter().map(|route| route.id.as_str()).collect();
    assert_eq!(ids, vec!["route_a", "route_b", "route_c"]);
    assert_eq!(routes[0].schedule.len(), 2);
    assert_eq!(routes[1].schedule[0].flight.as_deref(), Some("BB1"));
    assert!(routes[2].schedule.is_empty());

    Ok(())
}

/// Tests filtering routes by airline.
///
/// Expected: Ok with only the routes of the matching airline
#[tokio::test]
async fn filters_by_airline() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let air_france = factory::airline::AirlineFactory::new(db)
        .iata("AF")
        .build()
        .await?;
    let delta = factory::airline::AirlineFactory::new(db)
        .iata("DL")
        .build()
        .await?;
    RouteFactory::new(db).airline(&air_france).build().await?;
    RouteFactory::new(db).airline(&delta).build().await?;
    RouteFactory::new(db).airline(&air_france).build().await?;

    let repo = RouteRepository::new(db);
    let routes = repo
        .get_all(&ListQuery {
            search: Some("AF".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(routes.len(), 2);
    assert!(routes
        .iter()
        .all(|route| route.airline.as_deref() == Some("AF")));

    Ok(())
}
