use super::*;

/// Tests listing posts.
///
/// Expected: Ok with all posts ordered by ascending id
#[tokio::test]
async fn returns_posts_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_member(db).await?;
    let first = factory::create_post(db, author.id).await?;
    let second = factory::create_post(db, author.id).await?;
    let third = factory::create_post(db, author.id).await?;

    let repo = PostRepository::new(db);
    let posts = repo.find_all().await?;

    let ids: Vec<i32> = posts.iter().map(|p| p.id()).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);
    assert!(posts.iter().all(|p| p.author_name == author.nickname));

    Ok(())
}

/// Tests listing when no posts exist.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PostRepository::new(db);
    let posts = repo.find_all().await?;

    assert!(posts.is_empty());

    Ok(())
}
