use super::*;

/// Tests creating a post.
///
/// Verifies that the created post carries its author's nickname.
///
/// Expected: Ok with the post persisted
#[tokio::test]
async fn creates_post_with_author_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::member::MemberFactory::new(db)
        .nickname("Writer")
        .build()
        .await?;

    let repo = PostRepository::new(db);
    let post = repo
        .create(CreatePostParam {
            author_id: author.id,
            title: "Hello".to_string(),
            content: "World".to_string(),
        })
        .await?;

    assert_eq!(post.author_id, author.id);
    assert_eq!(post.author_name, "Writer");
    assert_eq!(post.title, "Hello");
    assert_eq!(post.content, "World");

    let stored = entity::prelude::Post::find_by_id(post.id()).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests that a post requires an existing author.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_unknown_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PostRepository::new(db);
    let result = repo
        .create(CreatePostParam {
            author_id: 999,
            title: "Hello".to_string(),
            content: "World".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
