//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use worktrack_core::import::ImportRecord;
use worktrack_core::types::{DbId, Timestamp};

/// A project row from the `projects` table, or an import candidate.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, skip_deserializing)]
    pub id: Option<DbId>,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, skip_deserializing)]
    pub created_at: Option<Timestamp>,
}

impl ImportRecord for Project {
    type Key = String;

    const KIND: &'static str = "project";
    const CONFLICT_MARKER: &'static str = "PROJECT_CONFLICTS";

    fn identity(&self) -> Option<DbId> {
        self.id
    }

    fn business_key(&self) -> String {
        self.code.clone()
    }

    fn same_content(&self, other: &Self) -> bool {
        self.code == other.code && self.name == other.name && self.description == other.description
    }
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

/// DTO for updating an existing project. Absent fields are left unchanged;
/// an explicit `null` description clears it.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub code: Option<String>,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::models::present")]
    pub description: Option<Option<String>>,
}
