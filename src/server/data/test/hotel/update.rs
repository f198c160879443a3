use super::*;

/// Tests that a partial update merges free-form fields and keeps the rest.
///
/// Expected: Ok(true) with the new field added and existing ones kept
#[tokio::test]
async fn merges_free_form_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Hotel).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::HotelFactory::new(db)
        .name("Medway Youth Hostel")
        .url("http://www.yha.org.uk")
        .extra(json!({ "city": "Medway", "vacancy": true }))
        .build()
        .await?;

    let repo = HotelRepository::new(db);
    let updated = repo
        .update(
            &hotel.id,
            UpdateHotelParams {
                extra: extra(json!({ "vacancy": false, "pets_ok": true })),
                ..Default::default()
            },
        )
        .await?;

    assert!(updated);
    let stored = Hotel::find_by_id(hotel.id).one(db).await?.unwrap();
    assert_eq!(stored.name, "Medway Youth Hostel");
    assert_eq!(stored.url.as_deref(), Some("http://www.yha.org.uk"));
    assert_eq!(
        stored.extra,
        json!({ "city": "Medway", "vacancy": false, "pets_ok": true })
    );

    Ok(())
}

/// Tests clearing the url with a partial update.
///
/// Expected: Ok(true) with url removed and the name kept
#[tokio::test]
async fn clears_url() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Hotel).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::HotelFactory::new(db)
        .url("http://www.yha.org.uk")
        .build()
        .await?;

    let repo = HotelRepository::new(db);
    repo.update(
        &hotel.id,
        UpdateHotelParams {
            url: Some(None),
            ..Default::default()
        },
    )
    .await?;

    let stored = Hotel::find_by_id(hotel.id).one(db).await?.unwrap();
    assert!(stored.url.is_none());
    assert_eq!(stored.name, hotel.name);

    Ok(())
}

/// Tests updating a hotel that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_hotel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Hotel).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HotelRepository::new(db);
    let updated = repo
        .update(
            "hotel_missing",
            UpdateHotelParams {
                name: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(!updated);

    Ok(())
}
