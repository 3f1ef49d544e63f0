//! Wire-format records for API responses
//!
//! These structs are the deserialization boundary: identity and scoring
//! fields are required, so a malformed element rejects the whole
//! response instead of materializing a half-formed model. Attributes
//! the server legitimately omits are `Option`.

use serde::Deserialize;

/// One node of the group-authority tree; `children` nests recursively
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRecord {
    pub id: i64,
    /// Back-reference only; tree structure comes from `children`
    #[serde(default)]
    pub parent_id: Option<i64>,
    pub name: String,
    pub pathname: String,
    #[serde(default)]
    pub children: Vec<GroupRecord>,
}

/// One member of a group roster
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: i64,
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub contact_id: Option<String>,
}

/// One mission within a mastery topic
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionRecord {
    pub id: i64,
    pub name: String,
    pub sequence: i64,
    pub suffix: i64,
}

/// One (user, program, topic) progress row
///
/// `id` is the mastery-program topic id and arrives as a string; it is
/// interpolated back into the mission endpoint path on lazy expansion.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasteryProgressRecord {
    pub id: String,
    pub user_id: i64,

    pub mastery_program_id: i64,
    pub mastery_program_name: String,

    pub mastery_program_topic_sequence: i64,
    pub mastery_program_level_name: String,
    pub mastery_program_topic_name: String,

    pub points_earned: i64,
    pub total_points: i64,

    pub emerging_minimum_points: i64,
    pub developing_minimum_points: i64,
    pub proficient_minimum_points: i64,
    pub exemplary_minimum_points: i64,
}
