//! Sub-division entity model and DTOs.
//!
//! Sub-divisions belong to a project; their codes are unique per project.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use worktrack_core::import::ImportRecord;
use worktrack_core::types::{DbId, Timestamp};

/// A row from the `sub_divisions` table, or an import candidate.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct SubDivision {
    #[serde(default, skip_deserializing)]
    pub id: Option<DbId>,
    pub project_id: DbId,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, skip_deserializing)]
    pub created_at: Option<Timestamp>,
}

impl ImportRecord for SubDivision {
    type Key = (DbId, String);

    const KIND: &'static str = "sub_division";
    const CONFLICT_MARKER: &'static str = "SUB_DIVISION_CONFLICTS";

    fn identity(&self) -> Option<DbId> {
        self.id
    }

    fn business_key(&self) -> (DbId, String) {
        (self.project_id, self.code.clone())
    }

    fn same_content(&self, other: &Self) -> bool {
        self.project_id == other.project_id
            && self.code == other.code
            && self.name == other.name
            && self.description == other.description
    }
}

/// DTO for creating a new sub-division.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubDivision {
    pub project_id: DbId,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

/// DTO for updating a sub-division. The owning project cannot change.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSubDivision {
    pub code: Option<String>,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::models::present")]
    pub description: Option<Option<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sub_division(project_id: DbId, code: &str) -> SubDivision {
        SubDivision {
            id: None,
            project_id,
            code: code.to_string(),
            name: "Backend".to_string(),
            description: None,
            created_at: None,
        }
    }

    #[test]
    fn same_code_in_other_project_is_a_different_key() {
        assert_ne!(
            sub_division(1, "BE").business_key(),
            sub_division(2, "BE").business_key()
        );
    }

    #[test]
    fn update_description_can_be_replaced() {
        let update: UpdateSubDivision =
            serde_json::from_value(serde_json::json!({"description": "APIs"})).unwrap();
        assert_eq!(update.description, Some(Some("APIs".to_string())));
    }
}
