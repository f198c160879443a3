use super::*;

/// Tests creating a route with a schedule.
///
/// Verifies that the schedule is stored in the order it was supplied.
///
/// Expected: Ok with the route and its three schedule entries in order
#[tokio::test]
async fn creates_route_with_schedule() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RouteRepository::new(db);
    let route = repo.create("route_10000".to_string(), params()).await?;

    assert_eq!(route.id, "route_10000");
    assert_eq!(route.airline.as_deref(), Some("AF"));
    assert_eq!(route.schedule.len(), 3);

    let stored = repo.get_by_id("route_10000").await?.unwrap();
    let flights: Vec<_> = stored
        .schedule
        .iter()
        .filter_map(|entry| entry.flight.as_deref())
        .collect();
    assert_eq!(flights, vec!["AF198", "AF547", "AF943"]);

    Ok(())
}

/// Tests creating a route with no fields set.
///
/// Expected: Ok with every field absent and an empty schedule
#[tokio::test]
async fn creates_empty_route() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RouteRepository::new(db);
    let route = repo
        .create("route_empty".to_string(), RouteParams::default())
        .await?;

    assert!(route.airline.is_none());
    assert!(route.schedule.is_empty());
    assert_eq!(schedule_count(db, "route_empty").await?, 0);

    Ok(())
}

/// Tests that a failed insert leaves no schedule rows behind.
///
/// Expected: Err for the duplicate key and the existing schedule untouched
#[tokio::test]
async fn rolls_back_on_duplicate_key() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = RouteFactory::new(db)
        .schedule_entry(1, "AA100", "07:00:00")
        .build()
        .await?;

    let repo = RouteRepository::new(db);
    let result = repo.create(existing.id.clone(), params()).await;

    assert!(result.is_err());
    assert_eq!(schedule_count(db, &existing.id).await?, 1);

    Ok(())
}
