//! Commits endpoints against a stub server.

mod common;

use chrono::{TimeZone, Utc};
use common::{mount_fixture, only_request, setup};
use wakatime::{CommitsGetOptions, Context, Nullable};

#[tokio::test]
async fn test_get_all_commits() {
    let (server, client) = setup().await;
    mount_fixture(&server, "users/current/projects/wakago/commits", "commits.json").await;

    let options = CommitsGetOptions {
        author: Some("yamash723".to_string()),
        branch: Some("main".to_string()),
        page: Some(1),
    };
    let commits = client
        .commits()
        .get_all(&Context::background(), "current", "wakago", Some(&options))
        .await
        .expect("should succeed");

    assert_eq!(commits.author.as_deref(), Some("current author"));
    assert_eq!(commits.branch, "main");
    assert_eq!(commits.page, 1);
    assert_eq!(commits.next_page, Nullable::Value(10));
    assert_eq!(commits.next_page_url.as_deref(), Some("https://example.com/next"));
    assert_eq!(commits.prev_page, Nullable::Value(11));
    assert_eq!(commits.prev_page_url.as_deref(), Some("https://example.com/prev"));
    assert_eq!(commits.status, "pending_update");
    assert_eq!(commits.total, 5);
    assert_eq!(commits.total_pages, 1);

    let commit = &commits.commits[0];
    assert_eq!(commit.hash, "633785770b4ac4e5a0acc80395bd6a015486c6a0");
    assert_eq!(commit.author_id.as_deref(), Some("author_id"));
    assert_eq!(commit.author_date, Utc.with_ymd_and_hms(2022, 10, 27, 11, 46, 4).unwrap());
    assert_eq!(commit.message, "[add] Editors");
    assert_eq!(commit.git_ref, "refs/heads/main");
    assert_eq!(commit.total_seconds, 1657.0);
    assert_eq!(commit.human_readable_total_with_seconds, "27 mins 37 secs");
    assert!(commit.is_author_found);

    let project = &commits.project;
    assert_eq!(project.name, "wakago");
    assert!(project.color.is_null());
    assert_eq!(project.badge.as_deref(), Some("badge"));
    assert_eq!(project.repository.provider, "github");
    assert_eq!(project.repository.full_name, "yamash723/wakago");
    assert!(project.repository.is_private);

    let request = only_request(&server).await;
    assert_eq!(request.url.query(), Some("author=yamash723&branch=main&page=1"));
}

#[tokio::test]
async fn test_get_all_commits_without_options() {
    let (server, client) = setup().await;
    mount_fixture(&server, "users/current/projects/wakago/commits", "commits.json").await;

    client
        .commits()
        .get_all(&Context::background(), "current", "wakago", None)
        .await
        .expect("should succeed");

    let request = only_request(&server).await;
    assert_eq!(request.url.query(), None);
}

#[tokio::test]
async fn test_get_all_commits_partial_options() {
    let (server, client) = setup().await;
    mount_fixture(&server, "users/current/projects/wakago/commits", "commits.json").await;

    let options = CommitsGetOptions {
        page: Some(3),
        ..Default::default()
    };
    client
        .commits()
        .get_all(&Context::background(), "current", "wakago", Some(&options))
        .await
        .expect("should succeed");

    let request = only_request(&server).await;
    assert_eq!(request.url.query(), Some("page=3"));
}

#[tokio::test]
async fn test_get_commit() {
    let (server, client) = setup().await;
    let hash = "633785770b4ac4e5a0acc80395bd6a015486c6a0";
    mount_fixture(
        &server,
        &format!("users/current/projects/wakago/commits/{hash}"),
        "commit.json",
    )
    .await;

    let commit = client
        .commits()
        .get(&Context::background(), "current", "wakago", hash, None)
        .await
        .expect("should succeed");

    assert_eq!(commit.branch, "main");
    assert_eq!(commit.status, "pending_update");
    assert_eq!(commit.commit.hash, hash);
    assert_eq!(commit.commit.truncated_hash, "6337857");
    assert_eq!(commit.project.repository.provider, "github");
    assert_eq!(commit.project.repository.default_branch, "main");
    assert_eq!(
        commit.project.repository.last_synced_at,
        Nullable::Value(Utc.with_ymd_and_hms(2022, 11, 1, 11, 8, 6).unwrap())
    );

    let request = only_request(&server).await;
    assert_eq!(request.url.query(), None);
}

#[tokio::test]
async fn test_get_commit_on_branch() {
    let (server, client) = setup().await;
    mount_fixture(&server, "users/current/projects/wakago/commits/6337857", "commit.json").await;

    client
        .commits()
        .get(&Context::background(), "current", "wakago", "6337857", Some("develop"))
        .await
        .expect("should succeed");

    let request = only_request(&server).await;
    assert_eq!(request.url.query(), Some("branch=develop"));
}
