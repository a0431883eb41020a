use super::*;

/// Tests updating a post.
///
/// Verifies that title and content are replaced and the author is unchanged.
///
/// Expected: Ok with updated post
#[tokio::test]
async fn updates_title_and_content() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_member(db).await?;
    let post = factory::create_post(db, author.id).await?;

    let repo = PostRepository::new(db);
    let updated = repo
        .update(UpdatePostParam {
            id: post.id,
            title: "New title".to_string(),
            content: "New content".to_string(),
        })
        .await?;

    assert_eq!(updated.id(), post.id);
    assert_eq!(updated.author_id, author.id);
    assert_eq!(updated.title, "New title");
    assert_eq!(updated.content, "New content");
    assert!(updated.base.modify_date >= post.modify_date);

    Ok(())
}

/// Tests updating a post that doesn't exist.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_missing_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PostRepository::new(db);
    let result = repo
        .update(UpdatePostParam {
            id: 404,
            title: "Title".to_string(),
            content: "Content".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
