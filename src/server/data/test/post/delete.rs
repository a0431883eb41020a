use super::*;

/// Tests deleting a post.
///
/// Expected: Ok with post removed
#[tokio::test]
async fn deletes_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_member(db).await?;
    let post = factory::create_post(db, author.id).await?;

    let repo = PostRepository::new(db);
    repo.delete(post.id).await?;

    let check = entity::prelude::Post::find_by_id(post.id).one(db).await?;
    assert!(check.is_none());

    Ok(())
}

/// Tests that deleting a post removes its comments.
///
/// Verifies that comments on other posts are left alone.
///
/// Expected: Ok with only the deleted post's comments removed
#[tokio::test]
async fn deletes_comments_of_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, post, _comment) = factory::helpers::create_comment_with_dependencies(db).await?;
    factory::create_comment(db, post.id, member.id).await?;

    let other_post = factory::create_post(db, member.id).await?;
    let other_comment = factory::create_comment(db, other_post.id, member.id).await?;

    let repo = PostRepository::new(db);
    repo.delete(post.id).await?;

    let remaining = entity::prelude::PostComment::find()
        .filter(entity::post_comment::Column::PostId.eq(post.id))
        .count(db)
        .await?;
    assert_eq!(remaining, 0);

    let kept = entity::prelude::PostComment::find_by_id(other_comment.id)
        .one(db)
        .await?;
    assert!(kept.is_some());

    Ok(())
}
