//! One fetch function per leaderboard kind, plus the kind dispatch.
//!
//! Every function resolves to a [`LeaderboardPage`] on HTTP 200 and rejects
//! with a [`LeaderboardError`] otherwise. Nothing is swallowed here; callers
//! decide how to surface failures.

use chrono::Utc;
use serde::de::DeserializeOwned;

use crate::error::{LeaderboardError, LeaderboardResult};
use crate::kind::{
    ApplicationOrderBy, CohortStatsOrderBy, EngagementOrderBy, GitHubOrderBy, LeaderboardKind,
    LeaderboardQuery, LeetCodeOrderBy,
};
use crate::stats::{LeaderboardPage, LeaderboardRow};
use crate::transport::{ApiResponse, Transport};
use crate::wire::{
    deserialize_cohort_stats, RawApplicationStats, RawAttendanceStats, RawCohortStats,
    RawGitHubStats, RawLeetCodeStats, RawList, RawPaginated,
};

pub const ATTENDANCE_PAGE_SIZE: u32 = 50;
pub const COHORT_PAGE_SIZE: u32 = 50;

fn decode_ok<D: DeserializeOwned>(
    response: &ApiResponse,
    leaderboard: &'static str,
) -> LeaderboardResult<D> {
    if response.status != 200 {
        return Err(LeaderboardError::Status {
            leaderboard,
            status: response.status,
        });
    }
    response.json()
}

pub async fn fetch_leetcode<T: Transport>(
    transport: &T,
    order_by: LeetCodeOrderBy,
) -> LeaderboardResult<LeaderboardPage> {
    let response = transport
        .get(&format!("/leaderboard/leetcode/?order_by={order_by}"))
        .await?;
    let raw: RawList<RawLeetCodeStats> = decode_ok(&response, "leetcode")?;
    Ok(LeaderboardPage::unpaginated(
        raw.into_vec()
            .into_iter()
            .map(|r| LeaderboardRow::LeetCode(r.into()))
            .collect(),
    ))
}

pub async fn fetch_github<T: Transport>(
    transport: &T,
    order_by: GitHubOrderBy,
) -> LeaderboardResult<LeaderboardPage> {
    let response = transport
        .get(&format!("/leaderboard/github/?order_by={order_by}"))
        .await?;
    let raw: RawList<RawGitHubStats> = decode_ok(&response, "github")?;
    Ok(LeaderboardPage::unpaginated(
        raw.into_vec()
            .into_iter()
            .map(|r| LeaderboardRow::GitHub(r.into()))
            .collect(),
    ))
}

pub async fn fetch_internship<T: Transport>(
    transport: &T,
    order_by: ApplicationOrderBy,
) -> LeaderboardResult<LeaderboardPage> {
    let response = transport
        .get(&format!("/leaderboard/internship/?order_by={order_by}"))
        .await?;
    let raw: RawList<RawApplicationStats> = decode_ok(&response, "internship application")?;
    Ok(LeaderboardPage::unpaginated(
        raw.into_vec()
            .into_iter()
            .map(|r| LeaderboardRow::Application(r.into()))
            .collect(),
    ))
}

pub async fn fetch_new_grad<T: Transport>(
    transport: &T,
    order_by: ApplicationOrderBy,
) -> LeaderboardResult<LeaderboardPage> {
    let response = transport
        .get(&format!("/leaderboard/newgrad/?order_by={order_by}"))
        .await?;
    let raw: RawList<RawApplicationStats> = decode_ok(&response, "new grad application")?;
    Ok(LeaderboardPage::unpaginated(
        raw.into_vec()
            .into_iter()
            .map(|r| LeaderboardRow::Application(r.into()))
            .collect(),
    ))
}

pub async fn fetch_attendance<T: Transport>(
    transport: &T,
    order_by: EngagementOrderBy,
    page: u32,
    page_size: u32,
) -> LeaderboardResult<LeaderboardPage> {
    let response = transport
        .get(&format!(
            "/leaderboard/attendance/?order_by={order_by}&page={page}&page_size={page_size}"
        ))
        .await?;
    let raw: RawPaginated<RawAttendanceStats> = decode_ok(&response, "attendance")?;
    Ok(raw.into_page(|r| LeaderboardRow::Attendance(r.into())))
}

pub async fn fetch_cohort_stats<T: Transport>(
    transport: &T,
    order_by: CohortStatsOrderBy,
    page: u32,
    page_size: u32,
) -> LeaderboardResult<LeaderboardPage> {
    let response = transport
        .get(&format!(
            "/leaderboard/cohorts/?order_by={order_by}&page={page}&page_size={page_size}"
        ))
        .await?;
    let raw: RawPaginated<RawCohortStats> = decode_ok(&response, "cohort stats")?;
    let fetched_at = Utc::now();
    Ok(raw.into_page(|r| LeaderboardRow::Cohort(deserialize_cohort_stats(r, fetched_at))))
}

/// Routes a query to the fetch function for its kind.
///
/// `page_size` only matters for the offset-paginated kinds.
pub async fn fetch_leaderboard<T: Transport>(
    transport: &T,
    query: &LeaderboardQuery,
    page_size: u32,
) -> LeaderboardResult<LeaderboardPage> {
    let invalid = || LeaderboardError::InvalidOrdering {
        kind: query.kind,
        order_by: query.order_by.to_string(),
    };
    let order_by = query.order_by;
    match query.kind {
        LeaderboardKind::LeetCode => {
            fetch_leetcode(transport, order_by.leetcode().ok_or_else(invalid)?).await
        }
        LeaderboardKind::GitHub => {
            fetch_github(transport, order_by.github().ok_or_else(invalid)?).await
        }
        LeaderboardKind::InternshipApplications => {
            fetch_internship(transport, order_by.application().ok_or_else(invalid)?).await
        }
        LeaderboardKind::NewGradApplications => {
            fetch_new_grad(transport, order_by.application().ok_or_else(invalid)?).await
        }
        LeaderboardKind::Attendance => {
            let order_by = order_by.engagement().ok_or_else(invalid)?;
            fetch_attendance(transport, order_by, query.page, page_size).await
        }
        LeaderboardKind::CohortStats => {
            let order_by = order_by.cohort_stats().ok_or_else(invalid)?;
            fetch_cohort_stats(transport, order_by, query.page, page_size).await
        }
    }
}
