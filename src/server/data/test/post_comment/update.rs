use super::*;

/// Tests updating a comment.
///
/// Expected: Ok with new content and unchanged post and author
#[tokio::test]
async fn updates_content() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, post, comment) = factory::helpers::create_comment_with_dependencies(db).await?;

    let repo = PostCommentRepository::new(db);
    let updated = repo
        .update(UpdatePostCommentParam {
            id: comment.id,
            content: "Edited".to_string(),
        })
        .await?;

    assert_eq!(updated.id(), comment.id);
    assert_eq!(updated.content, "Edited");
    assert_eq!(updated.post_id, post.id);
    assert_eq!(updated.author_id, member.id);
    assert!(updated.base.modify_date >= comment.modify_date);

    Ok(())
}
