use super::*;

/// Tests finding a member by username.
///
/// Expected: Ok(Some) with the matching member
#[tokio::test]
async fn finds_existing_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::MemberFactory::new(db)
        .username("carol")
        .build()
        .await?;
    factory::create_member(db).await?;

    let repo = MemberRepository::new(db);
    let found = repo.find_by_username("carol").await?;

    assert_eq!(found.map(|m| m.id()), Some(member.id));

    Ok(())
}

/// Tests looking up an unknown username.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_member(db).await?;

    let repo = MemberRepository::new(db);
    let found = repo.find_by_username("nobody").await?;

    assert!(found.is_none());

    Ok(())
}
