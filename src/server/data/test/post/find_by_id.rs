use super::*;

/// Tests getting a post by id.
///
/// Expected: Ok(Some) with matching post
#[tokio::test]
async fn finds_existing_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_member(db).await?;
    let post = factory::create_post(db, author.id).await?;

    let repo = PostRepository::new(db);
    let found = repo.find_by_id(post.id).await?.unwrap();

    assert_eq!(found.id(), post.id);
    assert_eq!(found.title, post.title);
    assert_eq!(found.author_name, author.nickname);

    Ok(())
}

/// Tests getting a post that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PostRepository::new(db);
    let found = repo.find_by_id(42).await?;

    assert!(found.is_none());

    Ok(())
}
