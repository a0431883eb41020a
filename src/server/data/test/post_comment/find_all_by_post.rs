use super::*;

/// Tests listing comments of a post.
///
/// Verifies that only the post's own comments are returned, in ascending id order.
///
/// Expected: Ok with the post's comments only
#[tokio::test]
async fn returns_only_comments_of_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, post, first) = factory::helpers::create_comment_with_dependencies(db).await?;
    let second = factory::create_comment(db, post.id, member.id).await?;

    let other_post = factory::create_post(db, member.id).await?;
    factory::create_comment(db, other_post.id, member.id).await?;

    let repo = PostCommentRepository::new(db);
    let comments = repo.find_all_by_post(post.id).await?;

    let ids: Vec<i32> = comments.iter().map(|c| c.id()).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests listing comments of a post without any.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let post = factory::create_post(db, member.id).await?;

    let repo = PostCommentRepository::new(db);
    let comments = repo.find_all_by_post(post.id).await?;

    assert!(comments.is_empty());

    Ok(())
}
