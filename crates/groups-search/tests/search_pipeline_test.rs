//! End-to-end tests for group and member search over in-memory collaborators.

use std::sync::{Arc, Once};

use groups_search::{
    GroupSearcher, InMemoryGroupStore, InMemoryMemberDirectory, MemberSearcher,
    MockOwnershipOracle, MockUserSearch, NamingConvention,
};
use groups_types::{
    Group, GroupSearchOptions, MemberSearchRequest, Settings, SortStrategy, User,
    UserSearchResults,
};

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
            .with_test_writer()
            .try_init();
    });
}

fn forum_store() -> InMemoryGroupStore {
    InMemoryGroupStore::default()
        .with_unlisted(Group::new("guests", 0, 0))
        .with_unlisted(Group::new("spiders", 0, 0))
        .with_group(Group::new("administrators", 1, 2))
        .with_group(Group::new("Global Moderators", 2, 6))
        .with_group(Group::new("registered-users", 3, 500))
        .with_group(Group::new("banned-users", 4, 9))
        .with_group(Group::new("cid:3:privileges:groups:find", 5, 1))
        .with_group(Group::new("rust-users", 6, 40).hidden())
        .with_group(Group::new("go-users", 7, 40))
}

#[tokio::test]
async fn test_group_search_properties_hold_for_many_queries() -> anyhow::Result<()> {
    init_tracing();
    let searcher = GroupSearcher::from_settings(Arc::new(forum_store()), &Settings::default());

    for query in ["users", "USERS", "s", "e", "-", "o", "privileges", "banned"] {
        let groups = searcher
            .search(query, &GroupSearchOptions::default())
            .await?;
        let lowered = query.to_lowercase();

        assert!(groups.len() <= 100);
        for group in &groups {
            assert!(group.slug.to_lowercase().contains(&lowered));
            assert_ne!(group.slug, "banned-users");
            assert!(!group.slug.starts_with("cid:"));
        }
        assert!(groups.windows(2).all(|w| w[0].slug <= w[1].slug));
    }
    Ok(())
}

#[tokio::test]
async fn test_group_search_users_by_count() -> anyhow::Result<()> {
    init_tracing();
    let searcher = GroupSearcher::from_settings(Arc::new(forum_store()), &Settings::default());

    let groups = searcher
        .search(
            "users",
            &GroupSearchOptions::new()
                .filter_hidden()
                .with_sort(SortStrategy::Count),
        )
        .await?;

    let slugs: Vec<&str> = groups.iter().map(|g| g.slug.as_str()).collect();
    assert_eq!(slugs, vec!["registered-users", "go-users"]);
    Ok(())
}

#[tokio::test]
async fn test_group_search_by_date_with_ephemeral() -> anyhow::Result<()> {
    init_tracing();
    let searcher = GroupSearcher::new(
        Arc::new(forum_store()),
        Arc::new(NamingConvention::default()),
        vec!["guests".to_string(), "spiders".to_string()],
    );

    let groups = searcher
        .search("s", &GroupSearchOptions::new().with_sort(SortStrategy::Date))
        .await?;

    assert!(groups.windows(2).all(|w| w[0].createtime >= w[1].createtime));
    assert_eq!(groups.first().map(|g| g.slug.as_str()), Some("go-users"));
    assert!(groups.iter().any(|g| g.slug == "guests"));
    Ok(())
}

#[tokio::test]
async fn test_group_search_store_failure() {
    init_tracing();
    let searcher = GroupSearcher::from_settings(
        Arc::new(forum_store().with_range_failure()),
        &Settings::default(),
    );

    let result = searcher.search("users", &GroupSearchOptions::default()).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_member_search_both_paths() -> anyhow::Result<()> {
    init_tracing();
    let members: Vec<User> = (1..=25).map(|uid| User::new(uid, format!("member{uid}"))).collect();
    let upstream = UserSearchResults::new(
        vec![10, 11, 12, 13]
            .into_iter()
            .map(|uid| Some(User::new(uid, format!("member{uid}"))))
            .collect(),
    );

    let searcher = MemberSearcher::from_settings(
        Arc::new(InMemoryMemberDirectory::default().with_members("administrators", members)),
        Arc::new(MockUserSearch::default().with_results(upstream)),
        Arc::new(MockOwnershipOracle::default().with_owners("administrators", &[12, 13])),
        &Settings::default(),
    );

    let page = searcher
        .search_members(MemberSearchRequest::new("administrators", 1))
        .await?;
    assert_eq!(page.users.len(), 20);
    assert!(page.users.iter().flatten().all(|u| u.is_owner.is_none()));

    let found = searcher
        .search_members(MemberSearchRequest::new("administrators", 1).with_query("member1"))
        .await?;
    let order: Vec<u64> = found.users.iter().flatten().map(|u| u.uid).collect();
    assert_eq!(order, vec![12, 13, 10, 11]);

    let json = serde_json::to_value(&found)?;
    assert_eq!(json["users"][0]["isOwner"], true);
    assert_eq!(json["users"][3]["isOwner"], false);
    Ok(())
}
