//! Task entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use worktrack_core::import::ImportRecord;
use worktrack_core::types::{DbId, Timestamp};

/// A row from the `tasks` table, or an import candidate.
///
/// Task codes are unique per project; the optional sub-division is content,
/// so moving a task between sub-divisions shows up as a conflict on import.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Task {
    #[serde(default, skip_deserializing)]
    pub id: Option<DbId>,
    pub project_id: DbId,
    #[serde(default)]
    pub sub_division_id: Option<DbId>,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub estimated_hours: Option<i32>,
    #[serde(default, skip_deserializing)]
    pub created_at: Option<Timestamp>,
}

impl ImportRecord for Task {
    type Key = (DbId, String);

    const KIND: &'static str = "task";
    const CONFLICT_MARKER: &'static str = "TASK_CONFLICTS";

    fn identity(&self) -> Option<DbId> {
        self.id
    }

    fn business_key(&self) -> (DbId, String) {
        (self.project_id, self.code.clone())
    }

    fn same_content(&self, other: &Self) -> bool {
        self.project_id == other.project_id
            && self.sub_division_id == other.sub_division_id
            && self.code == other.code
            && self.name == other.name
            && self.description == other.description
            && self.estimated_hours == other.estimated_hours
    }
}

/// DTO for creating a new task.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTask {
    pub project_id: DbId,
    pub sub_division_id: Option<DbId>,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub estimated_hours: Option<i32>,
}

/// DTO for updating a task. Absent fields are left unchanged; `null` clears
/// the nullable ones.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTask {
    #[serde(default, deserialize_with = "crate::models::present")]
    pub sub_division_id: Option<Option<DbId>>,
    pub code: Option<String>,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::models::present")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::models::present")]
    pub estimated_hours: Option<Option<i32>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moving_sub_division_changes_content() {
        let stored = Task {
            id: Some(3),
            project_id: 1,
            sub_division_id: Some(10),
            code: "T-1".to_string(),
            name: "Design schema".to_string(),
            description: None,
            estimated_hours: Some(8),
            created_at: None,
        };
        let moved = Task {
            id: None,
            sub_division_id: Some(11),
            ..stored.clone()
        };
        assert_eq!(moved.business_key(), stored.business_key());
        assert!(!moved.same_content(&stored));
    }

    #[test]
    fn update_distinguishes_absent_from_null() {
        let update: UpdateTask = serde_json::from_value(serde_json::json!({
            "sub_division_id": null,
            "estimated_hours": 12,
        }))
        .unwrap();

        assert_eq!(update.sub_division_id, Some(None));
        assert_eq!(update.estimated_hours, Some(Some(12)));
        assert_eq!(update.description, None);
        assert_eq!(update.code, None);
    }
}
