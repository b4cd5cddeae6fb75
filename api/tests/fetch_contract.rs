mod support;

use assert_matches::assert_matches;
use chrono::{TimeZone, Utc};
use engage_api::prelude::*;
use rstest::rstest;
use serde_json::json;
use support::*;

fn routed() -> MockTransport {
    let transport = MockTransport::new();
    transport
        .respond("/leaderboard/github/?order_by=commits", 200, github_body())
        .respond("/leaderboard/leetcode/?order_by=total", 200, leetcode_body())
        .respond("/leaderboard/internship/?order_by=applied", 200, application_body())
        .respond("/leaderboard/newgrad/?order_by=applied", 200, application_body())
        .respond(
            "/leaderboard/attendance/?order_by=attendance&page=1&page_size=50",
            200,
            attendance_body(2, None),
        )
        .respond(
            "/leaderboard/cohorts/?order_by=daily_check&page=1&page_size=50",
            200,
            cohort_stats_body(),
        );
    transport
}

#[rstest]
#[case(LeaderboardKind::GitHub)]
#[case(LeaderboardKind::LeetCode)]
#[case(LeaderboardKind::InternshipApplications)]
#[case(LeaderboardKind::NewGradApplications)]
#[case(LeaderboardKind::Attendance)]
#[case(LeaderboardKind::CohortStats)]
#[tokio::test]
async fn every_row_fills_its_kind_columns(#[case] kind: LeaderboardKind) {
    let transport = routed();
    let query = LeaderboardQuery::from(kind);

    let page = fetch_leaderboard(&transport, &query, ATTENDANCE_PAGE_SIZE)
        .await
        .expect("fetch succeeds");

    assert!(!page.data.is_empty());
    for row in &page.data {
        assert!(row.matches(kind), "{row:?} is not a {kind} row");
        assert!(!row.username().is_empty());
        for column in kind.columns().iter().filter(|c| c.sortable) {
            assert!(
                row.stat(column.key).is_some(),
                "{kind} row has no value for {}",
                column.key
            );
        }
    }
}

#[tokio::test]
async fn wrapped_and_bare_lists_decode_alike() {
    let transport = routed();

    let page = fetch_leetcode(&transport, LeetCodeOrderBy::Total)
        .await
        .unwrap();

    let names: Vec<_> = page.data.iter().map(LeaderboardRow::username).collect();
    assert_eq!(names, ["bo", "cy"]);
    assert_eq!(
        page.data[1].entry().last_updated,
        Some(Utc.with_ymd_and_hms(2024, 4, 1, 9, 0, 0).unwrap())
    );
    assert_eq!(page.count, None);
}

#[tokio::test]
async fn server_ranks_are_ignored() {
    let transport = routed();

    let page = fetch_attendance(&transport, EngagementOrderBy::Attendance, 1, 50)
        .await
        .unwrap();

    assert!(page.data.iter().all(|row| row.entry().rank.is_none()));
    assert_eq!(page.ranked().data[1].entry().rank, Some(2));
}

#[tokio::test]
async fn cohort_rows_carry_the_cohort_name_and_fetch_time() {
    let transport = routed();
    let before = Utc::now();

    let page = fetch_cohort_stats(&transport, CohortStatsOrderBy::DailyCheck, 1, 50)
        .await
        .unwrap();

    assert_matches!(&page.data[0], LeaderboardRow::Cohort(stats) => {
        assert_eq!(stats.cohort_name, "Fall Cohort");
        assert_eq!(stats.daily_check, 20);
        assert!(stats.entry.last_updated >= Some(before));
    });
}

#[tokio::test]
async fn malformed_dates_do_not_fail_the_page() {
    let transport = MockTransport::new();
    transport.respond(
        "/leaderboard/github/?order_by=followers",
        200,
        json!([{
            "user": { "username": "ivy" },
            "total_prs": 1,
            "total_commits": 2,
            "followers": 3,
            "last_updated": "yesterday-ish"
        }]),
    );

    let page = fetch_github(&transport, GitHubOrderBy::Followers).await.unwrap();

    assert_eq!(page.data[0].entry().last_updated, None);
}

#[tokio::test]
async fn null_or_missing_dates_do_not_fail_the_page() {
    let transport = MockTransport::new();
    transport.respond(
        "/leaderboard/github/?order_by=followers",
        200,
        json!([
            {
                "user": { "username": "ivy" },
                "total_prs": 1,
                "total_commits": 2,
                "followers": 3,
                "last_updated": null
            },
            {
                "user": { "username": "jo" },
                "total_prs": 4,
                "total_commits": 5,
                "followers": 6
            }
        ]),
    );

    let page = fetch_github(&transport, GitHubOrderBy::Followers).await.unwrap();

    assert_eq!(page.data.len(), 2);
    assert_eq!(page.data[0].entry().username, "ivy");
    assert_eq!(page.data[0].entry().last_updated, None);
    assert_eq!(page.data[1].entry().last_updated, None);
}

#[tokio::test]
async fn non_200_statuses_are_rejected() {
    let transport = MockTransport::new();
    transport.respond(
        "/leaderboard/internship/?order_by=recent",
        503,
        json!({ "detail": "down" }),
    );

    let err = fetch_internship(&transport, ApplicationOrderBy::Recent)
        .await
        .unwrap_err();

    assert_matches!(
        err,
        LeaderboardError::Status {
            leaderboard: "internship application",
            status: 503
        }
    );
}

#[tokio::test]
async fn malformed_bodies_are_decode_errors() {
    let transport = MockTransport::new();
    transport.respond_text("/leaderboard/newgrad/?order_by=applied", 200, "<html>oops</html>");

    let err = fetch_new_grad(&transport, ApplicationOrderBy::Applied)
        .await
        .unwrap_err();

    assert_matches!(err, LeaderboardError::Decode(_));
}

#[tokio::test]
async fn transport_failures_propagate() {
    let transport = MockTransport::new();

    let err = fetch_github(&transport, GitHubOrderBy::Recent)
        .await
        .unwrap_err();

    assert_matches!(err, LeaderboardError::Transport(message) if message.contains("connection refused"));
}

#[tokio::test]
async fn mismatched_queries_are_refused_before_sending() {
    let transport = MockTransport::new();
    let query = LeaderboardQuery::new(
        LeaderboardKind::Attendance,
        OrderBy::LeetCode(LeetCodeOrderBy::Hard),
    );

    let err = fetch_leaderboard(&transport, &query, 50).await.unwrap_err();

    assert_matches!(
        err,
        LeaderboardError::InvalidOrdering {
            kind: LeaderboardKind::Attendance,
            ..
        }
    );
    assert_eq!(transport.calls(), 0);
}
