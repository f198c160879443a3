use super::*;

/// Tests that replacing a route clears omitted fields and swaps the schedule.
///
/// Expected: Ok(true) with airline fields cleared and the new schedule stored
#[tokio::test]
async fn replaces_route_and_schedule() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_airline, _from, _to, route) =
        factory::helpers::create_route_with_dependencies(db).await?;

    let repo = RouteRepository::new(db);
    let replaced = repo
        .replace(
            &route.id,
            RouteParams {
                airline: None,
                airline_id: None,
                ..params()
            },
        )
        .await?;

    assert!(replaced);
    let stored = repo.get_by_id(&route.id).await?.unwrap();
    assert!(stored.airline.is_none());
    assert!(stored.airline_id.is_none());
    assert_eq!(stored.source_airport.as_deref(), Some("TLV"));
    assert_eq!(stored.schedule.len(), 3);

    Ok(())
}

/// Tests replacing a route that does not exist.
///
/// Expected: Ok(false) and nothing inserted
#[tokio::test]
async fn returns_false_for_missing_route() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RouteRepository::new(db);
    let replaced = repo.replace("route_missing", params()).await?;

    assert!(!replaced);
    assert!(repo.get_by_id("route_missing").await?.is_none());

    Ok(())
}
