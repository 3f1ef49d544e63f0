//! Domain models and record mappers
//!
//! Models are built exclusively by their `from_record` constructors and
//! are immutable afterwards except for their lazy sub-collections (and,
//! for `MasteryProgress`, the expansion flag), which live in reactive
//! containers so view bindings survive refreshes.

use crate::observable::Observable;
use crate::records::{GroupRecord, MasteryProgressRecord, MissionRecord, UserRecord};

/// An authorization node with a hierarchical pathname
///
/// The parent owns its children; `parent_id` is a lookup back-reference
/// and never drives tree construction.
#[derive(Debug, Clone)]
pub struct Group {
    pub id: i64,
    pub parent_id: Option<i64>,
    pub name: String,
    pub pathname: String,
    pub children: Vec<Group>,
    /// Roster, filled on demand; empty until first loaded
    pub users: Observable<Vec<User>>,
}

impl Group {
    /// Map a wire record into a fully materialized tree in one pass,
    /// preserving child order
    pub fn from_record(record: GroupRecord) -> Self {
        Self {
            id: record.id,
            parent_id: record.parent_id,
            name: record.name,
            pathname: record.pathname,
            children: record.children.into_iter().map(Group::from_record).collect(),
            users: Observable::new(Vec::new()),
        }
    }
}

/// A member of a group roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    pub external_id: Option<String>,
    pub contact_id: Option<String>,
}

impl User {
    pub fn from_record(record: UserRecord) -> Self {
        Self {
            id: record.id,
            user_name: record.user_name,
            first_name: record.first_name,
            last_name: record.last_name,
            external_id: record.external_id,
            contact_id: record.contact_id,
        }
    }
}

/// An assignable unit of work within a mastery topic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mission {
    pub id: i64,
    pub name: String,
    pub sequence: i64,
    pub suffix: i64,
}

impl Mission {
    pub fn from_record(record: MissionRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            sequence: record.sequence,
            suffix: record.suffix,
        }
    }

    /// Standard display form, e.g. `M1151-10 Conditionals Level 1`
    pub fn display_name(&self) -> String {
        format!("M{}-{} {}", self.sequence, self.suffix, self.name)
    }
}

/// Progress of one user through one mastery topic
#[derive(Debug, Clone)]
pub struct MasteryProgress {
    /// Mastery-program topic id; used as the topic segment of the
    /// mission endpoint on lazy expansion
    pub id: String,
    pub user_id: i64,

    pub program_id: i64,
    pub program_name: String,

    pub topic_sequence: i64,
    pub level_name: String,
    pub topic_name: String,

    pub points_earned: i64,
    pub total_points: i64,

    pub emerging_minimum_points: i64,
    pub developing_minimum_points: i64,
    pub proficient_minimum_points: i64,
    pub exemplary_minimum_points: i64,

    /// Missions for this topic, fetched on first expansion
    pub missions: Observable<Vec<Mission>>,
    /// Whether the row is currently expanded in the table
    pub expanded: Observable<bool>,
}

impl MasteryProgress {
    pub fn from_record(record: MasteryProgressRecord) -> Self {
        Self {
            id: record.id,
            user_id: record.user_id,
            program_id: record.mastery_program_id,
            program_name: record.mastery_program_name,
            topic_sequence: record.mastery_program_topic_sequence,
            level_name: record.mastery_program_level_name,
            topic_name: record.mastery_program_topic_name,
            points_earned: record.points_earned,
            total_points: record.total_points,
            emerging_minimum_points: record.emerging_minimum_points,
            developing_minimum_points: record.developing_minimum_points,
            proficient_minimum_points: record.proficient_minimum_points,
            exemplary_minimum_points: record.exemplary_minimum_points,
            missions: Observable::new(Vec::new()),
            expanded: Observable::new(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_record() -> GroupRecord {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "Academy",
            "pathname": "/academy",
            "children": [
                {
                    "id": 2,
                    "parentId": 1,
                    "name": "Period 1",
                    "pathname": "/academy/period-1",
                    "children": [
                        {
                            "id": 4,
                            "parentId": 2,
                            "name": "Table A",
                            "pathname": "/academy/period-1/table-a"
                        }
                    ]
                },
                {
                    "id": 3,
                    "parentId": 1,
                    "name": "Period 2",
                    "pathname": "/academy/period-2"
                }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_group_tree_preserves_shape_and_order() {
        let group = Group::from_record(tree_record());

        assert_eq!(group.pathname, "/academy");
        assert_eq!(group.children.len(), 2);
        assert_eq!(group.children[0].name, "Period 1");
        assert_eq!(group.children[1].name, "Period 2");
        assert_eq!(group.children[0].children.len(), 1);
        assert_eq!(
            group.children[0].children[0].pathname,
            "/academy/period-1/table-a"
        );
        assert_eq!(group.children[0].children[0].parent_id, Some(2));
        // Rosters start empty until lazily loaded.
        assert!(group.children[1].users.get().is_empty());
    }

    #[test]
    fn test_mission_display_name_composition() {
        let mission = Mission {
            id: 73,
            name: "Conditionals Level 1".to_string(),
            sequence: 1151,
            suffix: 10,
        };
        assert_eq!(mission.display_name(), "M1151-10 Conditionals Level 1");
    }

    #[test]
    fn test_progress_mapper_starts_collapsed_and_unloaded() {
        let record: MasteryProgressRecord = serde_json::from_value(serde_json::json!({
            "id": "2",
            "userId": 3,
            "masteryProgramId": 1,
            "masteryProgramName": "Coder White",
            "masteryProgramTopicSequence": 100,
            "masteryProgramLevelName": "White 1",
            "masteryProgramTopicName": "Basic CLI Tools",
            "pointsEarned": 0,
            "totalPoints": 150,
            "emergingMinimumPoints": 75,
            "developingMinimumPoints": 98,
            "proficientMinimumPoints": 120,
            "exemplaryMinimumPoints": 135
        }))
        .unwrap();

        let progress = MasteryProgress::from_record(record);
        assert_eq!(progress.id, "2");
        assert_eq!(progress.program_id, 1);
        assert_eq!(progress.topic_sequence, 100);
        assert!(!progress.expanded.get());
        assert!(progress.missions.get().is_empty());
    }
}
