use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::kind::LeaderboardKind;
use crate::table::ColumnKey;

/// Fields every leaderboard row carries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub username: String,
    /// `None` when the server sent a date that could not be parsed.
    pub last_updated: Option<DateTime<Utc>>,
    /// Position in the server's ordering, assigned client side.
    pub rank: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubStats {
    #[serde(flatten)]
    pub entry: LeaderboardEntry,
    pub total_commits: u64,
    pub total_prs: u64,
    pub followers: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeetCodeStats {
    #[serde(flatten)]
    pub entry: LeaderboardEntry,
    pub total_solved: u64,
    pub easy_solved: u64,
    pub medium_solved: u64,
    pub hard_solved: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationStats {
    #[serde(flatten)]
    pub entry: LeaderboardEntry,
    pub applied: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceStats {
    #[serde(flatten)]
    pub entry: LeaderboardEntry,
    pub sessions_attended: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CohortStats {
    #[serde(flatten)]
    pub entry: LeaderboardEntry,
    pub daily_check: u64,
    pub applications: u64,
    pub online_assessments: u64,
    pub interviews: u64,
    pub offers: u64,
    pub cohort_name: String,
}

/// One row of whichever leaderboard is active.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LeaderboardRow {
    GitHub(GitHubStats),
    LeetCode(LeetCodeStats),
    Application(ApplicationStats),
    Attendance(AttendanceStats),
    Cohort(CohortStats),
}

impl LeaderboardRow {
    pub fn entry(&self) -> &LeaderboardEntry {
        match self {
            Self::GitHub(s) => &s.entry,
            Self::LeetCode(s) => &s.entry,
            Self::Application(s) => &s.entry,
            Self::Attendance(s) => &s.entry,
            Self::Cohort(s) => &s.entry,
        }
    }

    pub fn entry_mut(&mut self) -> &mut LeaderboardEntry {
        match self {
            Self::GitHub(s) => &mut s.entry,
            Self::LeetCode(s) => &mut s.entry,
            Self::Application(s) => &mut s.entry,
            Self::Attendance(s) => &mut s.entry,
            Self::Cohort(s) => &mut s.entry,
        }
    }

    pub fn username(&self) -> &str {
        &self.entry().username
    }

    /// Whether this row has the shape `kind` displays.
    pub fn matches(&self, kind: LeaderboardKind) -> bool {
        use LeaderboardKind as K;
        matches!(
            (self, kind),
            (Self::GitHub(_), K::GitHub)
                | (Self::LeetCode(_), K::LeetCode)
                | (
                    Self::Application(_),
                    K::InternshipApplications | K::NewGradApplications
                )
                | (Self::Attendance(_), K::Attendance)
                | (Self::Cohort(_), K::CohortStats)
        )
    }

    /// Numeric stat behind a column, if this row has one.
    pub fn stat(&self, column: ColumnKey) -> Option<u64> {
        use ColumnKey as C;
        match (self, column) {
            (Self::GitHub(s), C::TotalCommits) => Some(s.total_commits),
            (Self::GitHub(s), C::TotalPrs) => Some(s.total_prs),
            (Self::GitHub(s), C::Followers) => Some(s.followers),
            (Self::LeetCode(s), C::TotalSolved) => Some(s.total_solved),
            (Self::LeetCode(s), C::EasySolved) => Some(s.easy_solved),
            (Self::LeetCode(s), C::MediumSolved) => Some(s.medium_solved),
            (Self::LeetCode(s), C::HardSolved) => Some(s.hard_solved),
            (Self::Application(s), C::Applied) => Some(s.applied),
            (Self::Attendance(s), C::SessionsAttended) => Some(s.sessions_attended),
            (Self::Cohort(s), C::DailyCheck) => Some(s.daily_check),
            (Self::Cohort(s), C::Applications) => Some(s.applications),
            (Self::Cohort(s), C::OnlineAssessments) => Some(s.online_assessments),
            (Self::Cohort(s), C::Interviews) => Some(s.interviews),
            (Self::Cohort(s), C::Offers) => Some(s.offers),
            _ => None,
        }
    }
}

/// Uniform result of every fetch function.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardPage {
    pub data: Vec<LeaderboardRow>,
    pub next: Option<String>,
    pub previous: Option<String>,
    /// Only present for offset-paginated endpoints.
    pub count: Option<u64>,
}

impl LeaderboardPage {
    pub fn unpaginated(data: Vec<LeaderboardRow>) -> Self {
        Self {
            data,
            next: None,
            previous: None,
            count: None,
        }
    }

    /// Stamps each row with its position in server order.
    pub fn ranked(mut self) -> Self {
        for (index, row) in self.data.iter_mut().enumerate() {
            row.entry_mut().rank = Some(index as u32 + 1);
        }
        self
    }
}
