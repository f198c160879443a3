use super::*;

/// Tests that replacing a hotel drops free-form fields and url not in the new document.
///
/// Expected: Ok(true) with only the new fields stored
#[tokio::test]
async fn replaces_whole_document() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Hotel).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::HotelFactory::new(db)
        .url("http://www.yha.org.uk")
        .extra(json!({ "city": "Medway", "vacancy": true }))
        .build()
        .await?;

    let repo = HotelRepository::new(db);
    let replaced = repo
        .replace(
            &hotel.id,
            HotelParams {
                name: "Renamed".to_string(),
                url: None,
                extra: extra(json!({ "country": "United Kingdom" })),
            },
        )
        .await?;

    assert!(replaced);
    let stored = Hotel::find_by_id(hotel.id).one(db).await?.unwrap();
    assert_eq!(stored.name, "Renamed");
    assert!(stored.url.is_none());
    assert_eq!(stored.extra, json!({ "country": "United Kingdom" }));

    Ok(())
}

/// Tests replacing a hotel that does not exist.
///
/// Expected: Ok(false) and nothing inserted
#[tokio::test]
async fn returns_false_for_missing_hotel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Hotel).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HotelRepository::new(db);
    let replaced = repo
        .replace(
            "hotel_missing",
            HotelParams {
                name: "Ghost".to_string(),
                url: None,
                extra: BTreeMap::new(),
            },
        )
        .await?;

    assert!(!replaced);
    assert!(Hotel::find_by_id("hotel_missing").one(db).await?.is_none());

    Ok(())
}
