use super::*;

/// Tests deleting an existing airport.
///
/// Expected: Ok(true) and the airport is gone
#[tokio::test]
async fn deletes_airport() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Airport).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let airport = factory::create_airport(db).await?;
    let other = factory::create_airport(db).await?;

    let repo = AirportRepository::new(db);
    let deleted = repo.delete(&airport.id).await?;

    assert!(deleted);
    assert!(repo.get_by_id(&airport.id).await?.is_none());
    assert!(repo.get_by_id(&other.id).await?.is_some());

    Ok(())
}

/// Tests deleting an airport that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_airport() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Airport).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AirportRepository::new(db);

    assert!(!repo.delete("airport_missing").await?);

    Ok(())
}
