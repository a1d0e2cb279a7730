/// Store-assigned identity of a project, sub-division or task
/// (`BIGSERIAL` in PostgreSQL). Import candidates carry none.
pub type DbId = i64;

/// Row creation time, always UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
