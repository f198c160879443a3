use super::*;

/// Tests deleting hotels.
///
/// Expected: Ok(true) for an existing hotel, Ok(false) once it is gone
#[tokio::test]
async fn deletes_hotel_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Hotel).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::create_hotel(db).await?;

    let repo = HotelRepository::new(db);

    assert!(repo.delete(&hotel.id).await?);
    assert!(!repo.delete(&hotel.id).await?);
    assert!(Hotel::find_by_id(hotel.id).one(db).await?.is_none());

    Ok(())
}
