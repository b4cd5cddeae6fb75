//! Member profiles and cohorts, as embedded in cohort statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::wire::parse_any_date;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialField {
    pub username: String,
    #[serde(default)]
    pub is_private: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RawMemberData {
    pub id: u64,
    pub username: String,
    pub created: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub discord_id: Option<u64>,
    #[serde(default)]
    pub discord_username: Option<String>,
    #[serde(default)]
    pub major: Option<String>,
    #[serde(default)]
    pub preview: Option<String>,
    #[serde(default)]
    pub grad_date: Option<String>,
    #[serde(default)]
    pub linkedin: Option<SocialField>,
    #[serde(default)]
    pub github: Option<SocialField>,
    #[serde(default)]
    pub leetcode: Option<SocialField>,
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default)]
    pub local: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub profile_picture_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Member {
    pub id: u64,
    pub username: String,
    pub created: Option<DateTime<Utc>>,
    pub email: String,
    pub role: String,
    pub first_name: String,
    pub last_name: String,
    pub discord_id: Option<u64>,
    pub discord_username: Option<String>,
    pub major: Option<String>,
    pub preview: Option<String>,
    pub grad_date: Option<DateTime<Utc>>,
    pub linkedin: Option<SocialField>,
    pub github: Option<SocialField>,
    pub leetcode: Option<SocialField>,
    pub resume_url: Option<String>,
    pub local: Option<String>,
    pub bio: Option<String>,
    pub groups: Vec<Group>,
    pub profile_picture_url: Option<String>,
}

pub fn deserialize_member(raw: RawMemberData) -> Member {
    Member {
        id: raw.id,
        username: raw.username,
        created: parse_any_date(&raw.created),
        email: raw.email,
        role: raw.role,
        first_name: raw.first_name,
        last_name: raw.last_name,
        discord_id: raw.discord_id,
        discord_username: raw.discord_username,
        major: raw.major,
        preview: raw.preview,
        grad_date: raw.grad_date.as_deref().and_then(parse_any_date),
        linkedin: raw.linkedin,
        github: raw.github,
        leetcode: raw.leetcode,
        resume_url: raw.resume_url,
        local: raw.local,
        bio: raw.bio,
        groups: raw.groups,
        profile_picture_url: raw.profile_picture_url,
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RawCohortData {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub members: Vec<RawMemberData>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Cohort {
    pub id: u64,
    pub name: String,
    pub members: Vec<Member>,
}

pub fn deserialize_cohort(raw: RawCohortData) -> Cohort {
    Cohort {
        id: raw.id,
        name: raw.name,
        members: raw.members.into_iter().map(deserialize_member).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cohort_members_are_deserialized() {
        let raw: RawCohortData = serde_json::from_value(json!({
            "id": 2,
            "name": "Spring Cohort",
            "members": [{
                "id": 11,
                "username": "dana",
                "created": "2023-09-01T12:00:00Z",
                "email": "dana@example.com",
                "role": "is_active",
                "first_name": "Dana",
                "last_name": "Lee",
                "discord_id": 42,
                "discord_username": "dana#1",
                "grad_date": "2026-06-01",
                "github": { "username": "danalee", "isPrivate": false }
            }]
        }))
        .unwrap();

        let cohort = deserialize_cohort(raw);
        assert_eq!(cohort.name, "Spring Cohort");
        let member = &cohort.members[0];
        assert_eq!(member.first_name, "Dana");
        assert!(member.created.is_some());
        assert!(member.grad_date.is_some());
        assert_eq!(member.github.as_ref().map(|g| g.username.as_str()), Some("danalee"));
    }
}
