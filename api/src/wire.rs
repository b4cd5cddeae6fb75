//! Wire records as the backend sends them, and their conversion into rows.
//!
//! Conversions are pure: they flatten the nested `user`/`member` identity,
//! rename fields and parse dates. Nothing is validated beyond what serde
//! needs to build the struct.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;

use crate::member::{deserialize_cohort, RawCohortData};
use crate::stats::{
    ApplicationStats, AttendanceStats, CohortStats, GitHubStats, LeaderboardEntry, LeaderboardPage,
    LeaderboardRow, LeetCodeStats,
};

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// Accepts RFC 3339 as well as the naive formats the backend has used over
/// time. Naive values are read as UTC. Returns `None` for anything else.
pub fn parse_any_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Some(parsed.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|d| d.and_utc());
    }
    tracing::warn!(value, "unparseable date in leaderboard response");
    None
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct RawUser {
    pub username: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct RawGitHubStats {
    pub user: RawUser,
    pub total_prs: u64,
    pub total_commits: u64,
    pub followers: u64,
    #[serde(default)]
    pub last_updated: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct RawLeetCodeStats {
    pub user: RawUser,
    pub total_solved: u64,
    pub easy_solved: u64,
    pub medium_solved: u64,
    pub hard_solved: u64,
    #[serde(default)]
    pub last_updated: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct RawApplicationStats {
    pub user: RawUser,
    pub applied: u64,
    #[serde(default)]
    pub last_updated: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct RawAttendanceStats {
    #[serde(default)]
    pub id: Option<u64>,
    pub member: RawUser,
    pub sessions_attended: u64,
    #[serde(default)]
    pub last_updated: Option<String>,
    /// Server rank; the client ranks by position instead.
    #[serde(default)]
    pub rank: Option<u32>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RawCohortStats {
    pub cohort: RawCohortData,
    pub member: RawUser,
    pub daily_checks: u64,
    pub applications: u64,
    pub online_assessments: u64,
    pub offers: u64,
    pub interviews: u64,
}

/// Unpaginated list endpoints answer either `{ "results": [...] }` or a bare
/// array, depending on the backend version.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum RawList<T> {
    Wrapped { results: Vec<T> },
    Bare(Vec<T>),
}

impl<T> RawList<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Wrapped { results } => results,
            Self::Bare(results) => results,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct RawPaginated<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> RawPaginated<T> {
    pub fn into_page(self, convert: impl FnMut(T) -> LeaderboardRow) -> LeaderboardPage {
        LeaderboardPage {
            data: self.results.into_iter().map(convert).collect(),
            next: self.next,
            previous: self.previous,
            count: Some(self.count),
        }
    }
}

/// A missing or null timestamp is treated like an unparseable one.
fn entry(username: String, last_updated: Option<&str>) -> LeaderboardEntry {
    LeaderboardEntry {
        username,
        last_updated: last_updated.and_then(parse_any_date),
        rank: None,
    }
}

impl From<RawGitHubStats> for GitHubStats {
    fn from(raw: RawGitHubStats) -> Self {
        Self {
            entry: entry(raw.user.username, raw.last_updated.as_deref()),
            total_commits: raw.total_commits,
            total_prs: raw.total_prs,
            followers: raw.followers,
        }
    }
}

impl From<RawLeetCodeStats> for LeetCodeStats {
    fn from(raw: RawLeetCodeStats) -> Self {
        Self {
            entry: entry(raw.user.username, raw.last_updated.as_deref()),
            total_solved: raw.total_solved,
            easy_solved: raw.easy_solved,
            medium_solved: raw.medium_solved,
            hard_solved: raw.hard_solved,
        }
    }
}

impl From<RawApplicationStats> for ApplicationStats {
    fn from(raw: RawApplicationStats) -> Self {
        Self {
            entry: entry(raw.user.username, raw.last_updated.as_deref()),
            applied: raw.applied,
        }
    }
}

impl From<RawAttendanceStats> for AttendanceStats {
    fn from(raw: RawAttendanceStats) -> Self {
        Self {
            entry: entry(raw.member.username, raw.last_updated.as_deref()),
            sessions_attended: raw.sessions_attended,
        }
    }
}

/// Cohort stats carry no timestamp on the wire; rows are stamped with the
/// time they were fetched.
pub fn deserialize_cohort_stats(raw: RawCohortStats, fetched_at: DateTime<Utc>) -> CohortStats {
    CohortStats {
        entry: LeaderboardEntry {
            username: raw.member.username,
            last_updated: Some(fetched_at),
            rank: None,
        },
        daily_check: raw.daily_checks,
        applications: raw.applications,
        online_assessments: raw.online_assessments,
        interviews: raw.interviews,
        offers: raw.offers,
        cohort_name: deserialize_cohort(raw.cohort).name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn parses_every_supported_date_shape() {
        let midnight = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        for value in [
            "2024-01-01T00:00:00Z",
            "2024-01-01T01:00:00+01:00",
            "2024-01-01T00:00:00.000000",
            "2024-01-01 00:00:00",
            "2024-01-01",
        ] {
            assert_eq!(parse_any_date(value), Some(midnight), "{value}");
        }
    }

    #[test]
    fn unparseable_dates_become_none() {
        assert_eq!(parse_any_date("last tuesday"), None);
        assert_eq!(parse_any_date(""), None);
    }

    #[test]
    fn github_record_is_flattened() {
        let raw: RawGitHubStats = serde_json::from_value(json!({
            "user": { "username": "alice" },
            "total_prs": 5,
            "total_commits": 120,
            "followers": 10,
            "last_updated": "2024-01-01T00:00:00Z"
        }))
        .unwrap();

        let stats = GitHubStats::from(raw);
        assert_eq!(stats.entry.username, "alice");
        assert_eq!(stats.total_commits, 120);
        assert_eq!(stats.total_prs, 5);
        assert_eq!(stats.followers, 10);
        assert_eq!(
            stats.entry.last_updated,
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(stats.entry.rank, None);
    }

    #[test]
    fn deserializing_twice_gives_equal_rows() {
        let raw = RawAttendanceStats {
            id: Some(3),
            member: RawUser {
                username: "bob".into(),
            },
            sessions_attended: 7,
            last_updated: Some("2024-03-04 10:00:00".into()),
            rank: Some(12),
        };
        assert_eq!(
            AttendanceStats::from(raw.clone()),
            AttendanceStats::from(raw)
        );
    }

    #[test]
    fn server_rank_is_ignored_for_attendance() {
        let raw: RawAttendanceStats = serde_json::from_value(json!({
            "id": 1,
            "member": { "username": "carol" },
            "sessions_attended": 4,
            "last_updated": "2024-02-02",
            "rank": 9
        }))
        .unwrap();
        assert_eq!(AttendanceStats::from(raw).entry.rank, None);
    }

    #[test]
    fn list_body_accepts_both_shapes() {
        let wrapped: RawList<RawUser> =
            serde_json::from_value(json!({ "results": [{ "username": "a" }] })).unwrap();
        let bare: RawList<RawUser> = serde_json::from_value(json!([{ "username": "a" }])).unwrap();
        assert_eq!(wrapped.into_vec(), bare.into_vec());
    }
}
