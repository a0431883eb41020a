use super::*;

fn param(username: &str) -> CreateMemberParam {
    CreateMemberParam {
        username: username.to_string(),
        password: "secret".to_string(),
        nickname: "Tester".to_string(),
    }
}

/// Tests creating a new member.
///
/// Expected: Ok with all fields persisted and matching create/modify dates
#[tokio::test]
async fn creates_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let member = repo.create(param("alice"), "key-alice".to_string()).await?;

    assert_eq!(member.username, "alice");
    assert_eq!(member.password, "secret");
    assert_eq!(member.nickname, "Tester");
    assert_eq!(member.api_key, "key-alice");
    assert_eq!(member.base.create_date, member.base.modify_date);

    let stored = repo.find_by_username("alice").await?.unwrap();
    assert_eq!(stored.id(), member.id());
    assert_eq!(stored.api_key, member.api_key);

    Ok(())
}

/// Tests that usernames are unique.
///
/// Expected: Err on second insert with the same username
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    repo.create(param("alice"), "key-1".to_string()).await?;
    let result = repo.create(param("alice"), "key-2".to_string()).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests that API keys are unique.
///
/// Expected: Err on second insert with the same API key
#[tokio::test]
async fn rejects_duplicate_api_key() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    repo.create(param("alice"), "same-key".to_string()).await?;
    let result = repo.create(param("bob"), "same-key".to_string()).await;

    assert!(result.is_err());

    Ok(())
}
