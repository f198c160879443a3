use super::*;

/// Tests resolving the FAA code of airports with and without one.
///
/// Expected: Some(Some(code)), Some(None) and None for a missing airport
#[tokio::test]
async fn resolves_faa_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Airport).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let with_code = factory::airport::AirportFactory::new(db)
        .faa("SFO")
        .build()
        .await?;
    let without_code = factory::airport::AirportFactory::new(db)
        .without_faa()
        .build()
        .await?;

    let repo = AirportRepository::new(db);

    assert_eq!(
        repo.get_faa_by_id(&with_code.id).await?,
        Some(Some("SFO".to_string()))
    );
    assert_eq!(repo.get_faa_by_id(&without_code.id).await?, Some(None));
    assert_eq!(repo.get_faa_by_id("airport_missing").await?, None);

    Ok(())
}
