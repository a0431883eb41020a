use super::*;

/// Tests resolving a member from a valid credential.
///
/// Expected: Ok(Member) owning the API key
#[tokio::test]
async fn resolves_member_from_credential() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::MemberFactory::new(db)
        .nickname("Ann")
        .api_key("key-ann")
        .build()
        .await?;

    let header = HeaderValue::from_static("Bearer key-ann");
    let actor = AuthGuard::new(db).require_actor(Some(&header)).await?;

    assert_eq!(actor.id(), member.id);
    assert_eq!(actor.name(), "Ann");

    Ok(())
}

/// Tests that resolving the same credential twice yields the same member.
///
/// Expected: Two identical members
#[tokio::test]
async fn resolution_is_repeatable() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member::MemberFactory::new(db)
        .api_key("key-repeat")
        .build()
        .await?;

    let header = HeaderValue::from_static("Bearer key-repeat");
    let guard = AuthGuard::new(db);
    let first = guard.require_actor(Some(&header)).await?;
    let second = guard.require_actor(Some(&header)).await?;

    assert_eq!(first, second);

    Ok(())
}

/// Tests a well-formed credential that no member owns.
///
/// Expected: Err(AuthError::InvalidCredential)
#[tokio::test]
async fn rejects_unknown_credential() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_member(db).await?;

    let header = HeaderValue::from_static("Bearer not-a-key");
    let result = AuthGuard::new(db).require_actor(Some(&header)).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredential))
    ));

    Ok(())
}

/// Tests a missing header.
///
/// Expected: Err(AuthError::MissingCredential) without touching the database
#[tokio::test]
async fn rejects_missing_header() {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AuthGuard::new(db).require_actor(None).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingCredential))
    ));
}

/// Tests a header value that is not visible ASCII.
///
/// Expected: Err(AuthError::MalformedCredential)
#[tokio::test]
async fn rejects_non_ascii_header() {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let header = HeaderValue::from_bytes("Bearer 키".as_bytes()).unwrap();
    let result = AuthGuard::new(db).require_actor(Some(&header)).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MalformedCredential))
    ));
}
