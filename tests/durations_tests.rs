//! Durations endpoint against a stub server.

mod common;

use chrono::{NaiveDate, TimeZone, Utc};
use common::{mount_fixture, only_request, setup};
use wakatime::{Context, DurationsGetOptions};

#[tokio::test]
async fn test_get_durations() {
    let (server, client) = setup().await;
    mount_fixture(&server, "users/current/durations", "durations.json").await;

    let options = DurationsGetOptions {
        date: NaiveDate::from_ymd_opt(2022, 10, 27),
        project: Some("wakago".to_string()),
        branches: Some("main,master".to_string()),
        timeout: Some(15),
        writes_only: Some(true),
        timezone: Some("Asia/Tokyo".to_string()),
        slice_by: Some("language".to_string()),
    };
    let durations = client
        .durations()
        .get(&Context::background(), "current", Some(&options))
        .await
        .expect("should succeed");

    assert_eq!(durations.branches, vec!["main", "master"]);
    assert_eq!(durations.start, Utc.with_ymd_and_hms(2022, 10, 26, 15, 0, 0).unwrap());
    assert_eq!(durations.end, Utc.with_ymd_and_hms(2022, 10, 27, 14, 59, 59).unwrap());
    assert_eq!(durations.timezone, "Asia/Tokyo");
    assert_eq!(durations.data.len(), 1);
    assert_eq!(durations.data[0].project, "wakago");
    assert_eq!(durations.data[0].duration, 3015.151763);
    assert_eq!(durations.data[0].time, 1666866121.027658);
    assert!(durations.data[0].color.is_null());

    let request = only_request(&server).await;
    assert_eq!(
        request.url.query(),
        Some(
            "date=2022-10-27&project=wakago&branches=main%2Cmaster&timeout=15\
             &writes_only=true&timezone=Asia%2FTokyo&slice_by=language"
        )
    );
}

#[tokio::test]
async fn test_get_durations_without_options() {
    let (server, client) = setup().await;
    mount_fixture(&server, "users/current/durations", "durations.json").await;

    client
        .durations()
        .get(&Context::background(), "current", None)
        .await
        .expect("should succeed");

    let request = only_request(&server).await;
    assert_eq!(request.url.query(), None);
}
