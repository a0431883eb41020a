use super::*;

/// Tests deleting a comment.
///
/// Verifies that the post itself is untouched.
///
/// Expected: Ok with comment removed
#[tokio::test]
async fn deletes_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_member, post, comment) = factory::helpers::create_comment_with_dependencies(db).await?;

    let repo = PostCommentRepository::new(db);
    repo.delete(comment.id).await?;

    let check = entity::prelude::PostComment::find_by_id(comment.id)
        .one(db)
        .await?;
    assert!(check.is_none());

    let post_check = entity::prelude::Post::find_by_id(post.id).one(db).await?;
    assert!(post_check.is_some());

    Ok(())
}
