use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::error::{LeaderboardError, LeaderboardResult};

/// Which leaderboard is being shown. Selects the endpoint and the row shape.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, IntoStaticStr,
)]
pub enum LeaderboardKind {
    #[serde(rename = "leetcode")]
    #[strum(serialize = "leetcode")]
    LeetCode,
    #[serde(rename = "github")]
    #[strum(serialize = "github")]
    GitHub,
    #[serde(rename = "internship-applications")]
    #[strum(serialize = "internship-applications")]
    InternshipApplications,
    #[serde(rename = "new-grad-application")]
    #[strum(serialize = "new-grad-application")]
    NewGradApplications,
    #[serde(rename = "attendance")]
    #[strum(serialize = "attendance")]
    Attendance,
    #[serde(rename = "cohort-stats")]
    #[strum(serialize = "cohort-stats")]
    CohortStats,
}

impl LeaderboardKind {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Tab label.
    pub fn label(self) -> &'static str {
        match self {
            Self::LeetCode => "LeetCode",
            Self::GitHub => "GitHub",
            Self::InternshipApplications => "Internship Applications",
            Self::NewGradApplications => "New Grad Applications",
            Self::Attendance => "Attendance",
            Self::CohortStats => "Cohort Stats",
        }
    }

    pub fn endpoint(self) -> &'static str {
        match self {
            Self::LeetCode => "/leaderboard/leetcode/",
            Self::GitHub => "/leaderboard/github/",
            Self::InternshipApplications => "/leaderboard/internship/",
            Self::NewGradApplications => "/leaderboard/newgrad/",
            Self::Attendance => "/leaderboard/attendance/",
            Self::CohortStats => "/leaderboard/cohorts/",
        }
    }

    /// Offset-paginated endpoints take `page`/`page_size` and report `count`.
    pub fn is_paginated(self) -> bool {
        matches!(self, Self::Attendance | Self::CohortStats)
    }

    pub fn default_order_by(self) -> OrderBy {
        match self {
            Self::LeetCode => OrderBy::LeetCode(LeetCodeOrderBy::Total),
            Self::GitHub => OrderBy::GitHub(GitHubOrderBy::Commits),
            Self::InternshipApplications | Self::NewGradApplications => {
                OrderBy::Application(ApplicationOrderBy::Applied)
            }
            Self::Attendance => OrderBy::Engagement(EngagementOrderBy::Attendance),
            Self::CohortStats => OrderBy::CohortStats(CohortStatsOrderBy::DailyCheck),
        }
    }

    /// Every ordering the backend accepts for this kind.
    pub fn orderings(self) -> Vec<OrderBy> {
        match self {
            Self::LeetCode => LeetCodeOrderBy::iter().map(OrderBy::LeetCode).collect(),
            Self::GitHub => GitHubOrderBy::iter().map(OrderBy::GitHub).collect(),
            Self::InternshipApplications | Self::NewGradApplications => {
                ApplicationOrderBy::iter().map(OrderBy::Application).collect()
            }
            Self::Attendance => EngagementOrderBy::iter().map(OrderBy::Engagement).collect(),
            Self::CohortStats => CohortStatsOrderBy::iter().map(OrderBy::CohortStats).collect(),
        }
    }

    /// Orderings offered in the order-by menu, with their labels.
    pub fn order_options(self) -> Vec<(OrderBy, &'static str)> {
        use OrderBy::*;
        match self {
            Self::LeetCode => vec![
                (LeetCode(LeetCodeOrderBy::Total), "Total Problems"),
                (LeetCode(LeetCodeOrderBy::Easy), "Easy Problems"),
                (LeetCode(LeetCodeOrderBy::Medium), "Medium Problems"),
                (LeetCode(LeetCodeOrderBy::Hard), "Hard Problems"),
            ],
            Self::GitHub => vec![
                (GitHub(GitHubOrderBy::Commits), "Total Commits"),
                (GitHub(GitHubOrderBy::Prs), "Pull Requests"),
                (GitHub(GitHubOrderBy::Followers), "Followers"),
            ],
            Self::InternshipApplications | Self::NewGradApplications => vec![
                (Application(ApplicationOrderBy::Applied), "Total Applied"),
                (Application(ApplicationOrderBy::Recent), "Recently Applied"),
            ],
            Self::Attendance => vec![(Engagement(EngagementOrderBy::Attendance), "Attendance")],
            Self::CohortStats => vec![
                (CohortStats(CohortStatsOrderBy::Applications), "Applications"),
                (CohortStats(CohortStatsOrderBy::DailyCheck), "Daily Check-ins"),
                (CohortStats(CohortStatsOrderBy::Interviews), "Interviews"),
                (CohortStats(CohortStatsOrderBy::Offers), "Offers"),
                (
                    CohortStats(CohortStatsOrderBy::OnlineAssessments),
                    "Online Assessments",
                ),
            ],
        }
    }

    /// An ordering is only meaningful together with its own kind.
    pub fn accepts(self, order_by: OrderBy) -> bool {
        matches!(
            (self, order_by),
            (Self::LeetCode, OrderBy::LeetCode(_))
                | (Self::GitHub, OrderBy::GitHub(_))
                | (
                    Self::InternshipApplications | Self::NewGradApplications,
                    OrderBy::Application(_)
                )
                | (Self::Attendance, OrderBy::Engagement(_))
                | (Self::CohortStats, OrderBy::CohortStats(_))
        )
    }
}

impl FromStr for LeaderboardKind {
    type Err = LeaderboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| LeaderboardError::UnknownKind(s.to_string()))
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GitHubOrderBy {
    Commits,
    Prs,
    Followers,
    Recent,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LeetCodeOrderBy {
    Total,
    Easy,
    Medium,
    Hard,
    Completion,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ApplicationOrderBy {
    Applied,
    Recent,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EngagementOrderBy {
    Attendance,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CohortStatsOrderBy {
    DailyCheck,
    Applications,
    OnlineAssessments,
    Interviews,
    Offers,
}

/// The `order_by` value sent to the server. Tagged by the family it belongs to,
/// so `recent` for GitHub and `recent` for applications stay distinct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderBy {
    LeetCode(LeetCodeOrderBy),
    GitHub(GitHubOrderBy),
    Application(ApplicationOrderBy),
    Engagement(EngagementOrderBy),
    CohortStats(CohortStatsOrderBy),
}

impl OrderBy {
    /// Wire value for the `order_by` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LeetCode(o) => o.into(),
            Self::GitHub(o) => o.into(),
            Self::Application(o) => o.into(),
            Self::Engagement(o) => o.into(),
            Self::CohortStats(o) => o.into(),
        }
    }

    /// Resolves a wire value in the context of `kind`.
    ///
    /// A value that exists for some other kind is reported as an invalid
    /// combination; a value no kind knows is unknown.
    pub fn parse_for(kind: LeaderboardKind, value: &str) -> LeaderboardResult<Self> {
        if let Some(order_by) = kind.orderings().into_iter().find(|o| o.as_str() == value) {
            return Ok(order_by);
        }
        let known_elsewhere = LeaderboardKind::iter()
            .flat_map(LeaderboardKind::orderings)
            .any(|o| o.as_str() == value);
        if known_elsewhere {
            Err(LeaderboardError::InvalidOrdering {
                kind,
                order_by: value.to_string(),
            })
        } else {
            Err(LeaderboardError::UnknownOrdering(value.to_string()))
        }
    }

    pub fn leetcode(self) -> Option<LeetCodeOrderBy> {
        match self {
            Self::LeetCode(o) => Some(o),
            _ => None,
        }
    }

    pub fn github(self) -> Option<GitHubOrderBy> {
        match self {
            Self::GitHub(o) => Some(o),
            _ => None,
        }
    }

    pub fn application(self) -> Option<ApplicationOrderBy> {
        match self {
            Self::Application(o) => Some(o),
            _ => None,
        }
    }

    pub fn engagement(self) -> Option<EngagementOrderBy> {
        match self {
            Self::Engagement(o) => Some(o),
            _ => None,
        }
    }

    pub fn cohort_stats(self) -> Option<CohortStatsOrderBy> {
        match self {
            Self::CohortStats(o) => Some(o),
            _ => None,
        }
    }
}

impl std::fmt::Display for OrderBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything that identifies one load: the kind, its ordering and the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeaderboardQuery {
    pub kind: LeaderboardKind,
    pub order_by: OrderBy,
    pub page: u32,
}

impl LeaderboardQuery {
    pub fn new(kind: LeaderboardKind, order_by: OrderBy) -> Self {
        Self {
            kind,
            order_by,
            page: 1,
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn is_valid(&self) -> bool {
        self.kind.accepts(self.order_by)
    }

    pub fn validate(&self) -> LeaderboardResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(LeaderboardError::InvalidOrdering {
                kind: self.kind,
                order_by: self.order_by.to_string(),
            })
        }
    }

    /// Unpaginated endpoints ignore the page, so they all share page 1.
    pub fn normalized(mut self) -> Self {
        if !self.kind.is_paginated() {
            self.page = 1;
        }
        self
    }
}

impl From<LeaderboardKind> for LeaderboardQuery {
    fn from(kind: LeaderboardKind) -> Self {
        Self::new(kind, kind.default_order_by())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn kind_round_trips_through_its_wire_name() {
        for kind in LeaderboardKind::iter() {
            assert_eq!(kind.as_str().parse::<LeaderboardKind>().unwrap(), kind);
        }
        assert_matches!(
            "bowling".parse::<LeaderboardKind>(),
            Err(LeaderboardError::UnknownKind(name)) if name == "bowling"
        );
    }

    #[test]
    fn orderings_serialize_to_snake_case() {
        assert_eq!(
            OrderBy::CohortStats(CohortStatsOrderBy::OnlineAssessments).as_str(),
            "online_assessments"
        );
        assert_eq!(OrderBy::GitHub(GitHubOrderBy::Prs).to_string(), "prs");
    }

    #[test]
    fn default_orderings_are_accepted_by_their_kind() {
        for kind in LeaderboardKind::iter() {
            assert!(kind.accepts(kind.default_order_by()), "{kind}");
            for (order_by, _) in kind.order_options() {
                assert!(kind.accepts(order_by));
            }
        }
    }

    #[test]
    fn parse_for_distinguishes_foreign_and_unknown_values() {
        assert_eq!(
            OrderBy::parse_for(LeaderboardKind::InternshipApplications, "recent").unwrap(),
            OrderBy::Application(ApplicationOrderBy::Recent)
        );
        assert_eq!(
            OrderBy::parse_for(LeaderboardKind::GitHub, "recent").unwrap(),
            OrderBy::GitHub(GitHubOrderBy::Recent)
        );
        assert_matches!(
            OrderBy::parse_for(LeaderboardKind::LeetCode, "attendance"),
            Err(LeaderboardError::InvalidOrdering { kind: LeaderboardKind::LeetCode, .. })
        );
        assert_matches!(
            OrderBy::parse_for(LeaderboardKind::LeetCode, "stars"),
            Err(LeaderboardError::UnknownOrdering(_))
        );
    }

    #[test]
    fn normalized_query_drops_page_for_unpaginated_kinds() {
        let github = LeaderboardQuery::from(LeaderboardKind::GitHub).with_page(4);
        assert_eq!(github.normalized().page, 1);
        let attendance = LeaderboardQuery::from(LeaderboardKind::Attendance).with_page(4);
        assert_eq!(attendance.normalized().page, 4);
    }
}
