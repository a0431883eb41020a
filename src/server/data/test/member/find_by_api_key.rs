use super::*;

/// Tests resolving a member from an API key.
///
/// Expected: Ok(Some) with the owner of the key
#[tokio::test]
async fn finds_member_by_api_key() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::MemberFactory::new(db)
        .api_key("abc123")
        .build()
        .await?;

    let repo = MemberRepository::new(db);
    let found = repo.find_by_api_key("abc123").await?;

    assert_eq!(found.map(|m| m.id()), Some(member.id));

    Ok(())
}

/// Tests that API key matching is exact.
///
/// Verifies that prefixes and case variants of a stored key do not match.
///
/// Expected: Ok(None) for every variant
#[tokio::test]
async fn requires_exact_match() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member::MemberFactory::new(db)
        .api_key("abc123")
        .build()
        .await?;

    let repo = MemberRepository::new(db);

    for candidate in ["abc", "abc1234", "ABC123", ""] {
        assert!(repo.find_by_api_key(candidate).await?.is_none());
    }

    Ok(())
}
