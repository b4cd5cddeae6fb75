//! Table model shared by every leaderboard view.
//!
//! Rows arrive in the server's ordering, which is always descending by the
//! requested stat. The displayed rank is a position in the displayed
//! sequence: flipping to ascending reverses the rows, so the server's first
//! row is shown last with rank N.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::kind::{
    ApplicationOrderBy, CohortStatsOrderBy, EngagementOrderBy, GitHubOrderBy, LeaderboardKind,
    LeetCodeOrderBy, OrderBy,
};
use crate::stats::LeaderboardRow;

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ColumnKey {
    Rank,
    Username,
    TotalSolved,
    EasySolved,
    MediumSolved,
    HardSolved,
    TotalCommits,
    TotalPrs,
    Followers,
    Applied,
    SessionsAttended,
    DailyCheck,
    Applications,
    OnlineAssessments,
    Interviews,
    Offers,
}

impl ColumnKey {
    pub fn tone(self) -> CellTone {
        match self {
            Self::EasySolved => CellTone::Easy,
            Self::MediumSolved => CellTone::Medium,
            Self::HardSolved => CellTone::Hard,
            _ => CellTone::Plain,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub key: ColumnKey,
    pub label: &'static str,
    pub sortable: bool,
}

impl Column {
    const fn fixed(key: ColumnKey, label: &'static str) -> Self {
        Self {
            key,
            label,
            sortable: false,
        }
    }

    const fn stat(key: ColumnKey, label: &'static str) -> Self {
        Self {
            key,
            label,
            sortable: true,
        }
    }
}

/// Colour hint for difficulty columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellTone {
    Plain,
    Easy,
    Medium,
    Hard,
}

impl LeaderboardKind {
    pub fn columns(self) -> Vec<Column> {
        use ColumnKey as C;
        let mut columns = vec![
            Column::fixed(C::Rank, "Rank"),
            Column::fixed(C::Username, "Username"),
        ];
        columns.extend(match self {
            Self::LeetCode => vec![
                Column::stat(C::TotalSolved, "Total"),
                Column::stat(C::EasySolved, "Easy"),
                Column::stat(C::MediumSolved, "Medium"),
                Column::stat(C::HardSolved, "Hard"),
            ],
            Self::GitHub => vec![
                Column::stat(C::TotalCommits, "Commits"),
                Column::stat(C::TotalPrs, "PRs"),
                Column::stat(C::Followers, "Followers"),
            ],
            Self::InternshipApplications | Self::NewGradApplications => {
                vec![Column::stat(C::Applied, "Applied")]
            }
            Self::Attendance => vec![Column::stat(C::SessionsAttended, "Sessions Attended")],
            Self::CohortStats => vec![
                Column::stat(C::Applications, "Applications"),
                Column::stat(C::DailyCheck, "Daily Check-ins"),
                Column::stat(C::Interviews, "Interviews"),
                Column::stat(C::Offers, "Offers"),
                Column::stat(C::OnlineAssessments, "Online Assessments"),
            ],
        });
        columns
    }

    /// Ordering requested when `column` is clicked on this kind's table.
    pub fn order_for_column(self, column: ColumnKey) -> Option<OrderBy> {
        use ColumnKey as C;
        let order_by = match (self, column) {
            (Self::LeetCode, C::TotalSolved) => OrderBy::LeetCode(LeetCodeOrderBy::Total),
            (Self::LeetCode, C::EasySolved) => OrderBy::LeetCode(LeetCodeOrderBy::Easy),
            (Self::LeetCode, C::MediumSolved) => OrderBy::LeetCode(LeetCodeOrderBy::Medium),
            (Self::LeetCode, C::HardSolved) => OrderBy::LeetCode(LeetCodeOrderBy::Hard),
            (Self::GitHub, C::TotalCommits) => OrderBy::GitHub(GitHubOrderBy::Commits),
            (Self::GitHub, C::TotalPrs) => OrderBy::GitHub(GitHubOrderBy::Prs),
            (Self::GitHub, C::Followers) => OrderBy::GitHub(GitHubOrderBy::Followers),
            (Self::InternshipApplications | Self::NewGradApplications, C::Applied) => {
                OrderBy::Application(ApplicationOrderBy::Applied)
            }
            (Self::Attendance, C::SessionsAttended) => {
                OrderBy::Engagement(EngagementOrderBy::Attendance)
            }
            (Self::CohortStats, C::Applications) => {
                OrderBy::CohortStats(CohortStatsOrderBy::Applications)
            }
            (Self::CohortStats, C::DailyCheck) => {
                OrderBy::CohortStats(CohortStatsOrderBy::DailyCheck)
            }
            (Self::CohortStats, C::Interviews) => {
                OrderBy::CohortStats(CohortStatsOrderBy::Interviews)
            }
            (Self::CohortStats, C::Offers) => OrderBy::CohortStats(CohortStatsOrderBy::Offers),
            (Self::CohortStats, C::OnlineAssessments) => {
                OrderBy::CohortStats(CohortStatsOrderBy::OnlineAssessments)
            }
            _ => return None,
        };
        Some(order_by)
    }

    /// Where a username links to, for kinds backed by a public profile.
    pub fn profile_url(self, username: &str) -> Option<String> {
        match self {
            Self::GitHub => Some(format!("https://github.com/{username}")),
            Self::LeetCode => Some(format!("https://leetcode.com/u/{username}")),
            _ => None,
        }
    }
}

impl OrderBy {
    /// Column highlighted as the active sort column.
    pub fn column(self) -> Option<ColumnKey> {
        use ColumnKey as C;
        match self {
            Self::LeetCode(LeetCodeOrderBy::Total | LeetCodeOrderBy::Completion) => {
                Some(C::TotalSolved)
            }
            Self::LeetCode(LeetCodeOrderBy::Easy) => Some(C::EasySolved),
            Self::LeetCode(LeetCodeOrderBy::Medium) => Some(C::MediumSolved),
            Self::LeetCode(LeetCodeOrderBy::Hard) => Some(C::HardSolved),
            Self::GitHub(GitHubOrderBy::Commits) => Some(C::TotalCommits),
            Self::GitHub(GitHubOrderBy::Prs) => Some(C::TotalPrs),
            Self::GitHub(GitHubOrderBy::Followers) => Some(C::Followers),
            Self::GitHub(GitHubOrderBy::Recent) => None,
            Self::Application(_) => Some(C::Applied),
            Self::Engagement(EngagementOrderBy::Attendance) => Some(C::SessionsAttended),
            Self::CohortStats(CohortStatsOrderBy::Applications) => Some(C::Applications),
            Self::CohortStats(CohortStatsOrderBy::DailyCheck) => Some(C::DailyCheck),
            Self::CohortStats(CohortStatsOrderBy::Interviews) => Some(C::Interviews),
            Self::CohortStats(CohortStatsOrderBy::Offers) => Some(C::Offers),
            Self::CohortStats(CohortStatsOrderBy::OnlineAssessments) => {
                Some(C::OnlineAssessments)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Medal {
    Crown,
    Silver,
    Bronze,
}

impl Medal {
    /// Decorates the top three displayed ranks, whatever their stats are.
    pub fn for_rank(rank: u32) -> Option<Self> {
        match rank {
            1 => Some(Self::Crown),
            2 => Some(Self::Silver),
            3 => Some(Self::Bronze),
            _ => None,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Crown => "👑",
            Self::Silver => "🥈",
            Self::Bronze => "🥉",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RankedRow<'a> {
    pub rank: u32,
    pub medal: Option<Medal>,
    pub row: &'a LeaderboardRow,
}

pub fn rank_rows(rows: &[LeaderboardRow], direction: SortDirection) -> Vec<RankedRow<'_>> {
    let displayed: Vec<&LeaderboardRow> = match direction {
        SortDirection::Desc => rows.iter().collect(),
        SortDirection::Asc => rows.iter().rev().collect(),
    };
    displayed
        .into_iter()
        .enumerate()
        .map(|(index, row)| {
            let rank = index as u32 + 1;
            RankedRow {
                rank,
                medal: Medal::for_rank(rank),
                row,
            }
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellValue {
    Rank(u32),
    Username {
        name: String,
        profile_url: Option<String>,
        medal: Option<Medal>,
    },
    Count { value: u64, tone: CellTone },
    Empty,
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rank(rank) => write!(f, "#{rank}"),
            Self::Username { name, medal, .. } => match medal {
                Some(medal) => write!(f, "{name} {}", medal.glyph()),
                None => f.write_str(name),
            },
            Self::Count { value, .. } => write!(f, "{value}"),
            Self::Empty => Ok(()),
        }
    }
}

/// Default cell formatter for `column` of a ranked row.
pub fn cell(kind: LeaderboardKind, ranked: &RankedRow<'_>, column: ColumnKey) -> CellValue {
    match column {
        ColumnKey::Rank => CellValue::Rank(ranked.rank),
        ColumnKey::Username => CellValue::Username {
            name: ranked.row.username().to_string(),
            profile_url: kind.profile_url(ranked.row.username()),
            medal: ranked.medal,
        },
        column => match ranked.row.stat(column) {
            Some(value) => CellValue::Count {
                value,
                tone: column.tone(),
            },
            None => CellValue::Empty,
        },
    }
}

/// What a header click asks the view to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortAction {
    /// A different ordering: reload from the server.
    Refetch(OrderBy),
    /// The active ordering: flip the displayed direction only.
    ToggleDirection,
    Ignore,
}

/// Local sort state of one leaderboard view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortState {
    pub kind: LeaderboardKind,
    pub order_by: OrderBy,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(kind: LeaderboardKind) -> Self {
        Self {
            kind,
            order_by: kind.default_order_by(),
            direction: SortDirection::Desc,
        }
    }

    pub fn active_column(&self) -> Option<ColumnKey> {
        self.order_by.column()
    }

    /// Picking an ordering from the menu resets the direction.
    pub fn select(&mut self, order_by: OrderBy) {
        self.order_by = order_by;
        self.direction = SortDirection::Desc;
    }

    pub fn on_header_click(&mut self, column: &Column) -> SortAction {
        if !column.sortable {
            return SortAction::Ignore;
        }
        let Some(order_by) = self.kind.order_for_column(column.key) else {
            return SortAction::Ignore;
        };
        if order_by == self.order_by {
            self.direction = self.direction.toggled();
            SortAction::ToggleDirection
        } else {
            self.select(order_by);
            SortAction::Refetch(order_by)
        }
    }
}
