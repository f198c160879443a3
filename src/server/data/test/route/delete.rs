use super::*;

/// Tests deleting a route together with its schedule.
///
/// Expected: Ok(true) with the route and its schedule rows removed
#[tokio::test]
async fn deletes_route_and_schedule() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let route = RouteFactory::new(db)
        .schedule_entry(1, "AA100", "07:00:00")
        .build()
        .await?;
    let other = RouteFactory::new(db)
        .schedule_entry(2, "AA200", "08:00:00")
        .build()
        .await?;

    let repo = RouteRepository::new(db);
    let deleted = repo.delete(&route.id).await?;

    assert!(deleted);
    assert!(repo.get_by_id(&route.id).await?.is_none());
    assert_eq!(schedule_count(db, &route.id).await?, 0);
    assert_eq!(schedule_count(db, &other.id).await?, 1);

    Ok(())
}

/// Tests deleting a route that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_route() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RouteRepository::new(db);

    assert!(!repo.delete("route_missing").await?);

    Ok(())
}
