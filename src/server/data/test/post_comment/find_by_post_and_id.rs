use super::*;

/// Tests getting a comment under its own post.
///
/// Expected: Ok(Some) with matching comment
#[tokio::test]
async fn finds_comment_under_its_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_member, post, comment) = factory::helpers::create_comment_with_dependencies(db).await?;

    let repo = PostCommentRepository::new(db);
    let found = repo.find_by_post_and_id(post.id, comment.id).await?.unwrap();

    assert_eq!(found.id(), comment.id);
    assert_eq!(found.content, comment.content);

    Ok(())
}

/// Tests that a comment is not reachable through another post.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_under_other_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, _post, comment) = factory::helpers::create_comment_with_dependencies(db).await?;
    let other_post = factory::create_post(db, member.id).await?;

    let repo = PostCommentRepository::new(db);
    let found = repo.find_by_post_and_id(other_post.id, comment.id).await?;

    assert!(found.is_none());

    Ok(())
}
