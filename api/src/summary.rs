use chrono::{DateTime, Utc};

use crate::stats::LeaderboardRow;

/// Most recent `last_updated` across the rows. Rows with unparseable dates
/// are skipped.
pub fn last_updated(rows: &[LeaderboardRow]) -> Option<DateTime<Utc>> {
    rows.iter().filter_map(|row| row.entry().last_updated).max()
}

/// "Last updated" text shown above a table, empty when nothing is known.
pub fn format_last_updated(rows: &[LeaderboardRow]) -> String {
    last_updated(rows)
        .map(|at| at.format("%b %-d, %Y %H:%M UTC").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{AttendanceStats, LeaderboardEntry};
    use chrono::TimeZone;

    fn row(last_updated: Option<DateTime<Utc>>) -> LeaderboardRow {
        LeaderboardRow::Attendance(AttendanceStats {
            entry: LeaderboardEntry {
                username: "m".into(),
                last_updated,
                rank: None,
            },
            sessions_attended: 1,
        })
    }

    #[test]
    fn picks_the_latest_parseable_date() {
        let early = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2024, 2, 3, 9, 30, 0).unwrap();
        let rows = vec![row(Some(early)), row(None), row(Some(late))];
        assert_eq!(last_updated(&rows), Some(late));
        assert_eq!(format_last_updated(&rows), "Feb 3, 2024 09:30 UTC");
    }

    #[test]
    fn empty_when_nothing_is_known() {
        assert_eq!(format_last_updated(&[row(None)]), "");
    }
}
