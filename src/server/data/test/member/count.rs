use super::*;

/// Tests counting members.
///
/// Expected: 0 on an empty table, then the number of inserted members
#[tokio::test]
async fn counts_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    assert_eq!(repo.count().await?, 0);

    factory::create_member(db).await?;
    factory::create_member(db).await?;

    assert_eq!(repo.count().await?, 2);

    Ok(())
}
