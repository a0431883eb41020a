use super::*;

/// Tests creating a comment on a post.
///
/// Expected: Ok with comment linked to post and author
#[tokio::test]
async fn creates_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_member(db).await?;
    let post = factory::create_post(db, author.id).await?;

    let repo = PostCommentRepository::new(db);
    let comment = repo
        .create(CreatePostCommentParam {
            author_id: author.id,
            post_id: post.id,
            content: "Nice post".to_string(),
        })
        .await?;

    assert_eq!(comment.post_id, post.id);
    assert_eq!(comment.author_id, author.id);
    assert_eq!(comment.author_name, author.nickname);
    assert_eq!(comment.content, "Nice post");

    Ok(())
}
