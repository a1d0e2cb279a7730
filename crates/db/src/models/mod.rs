//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` + `Deserialize` record struct. Deserializing
//!   produces an import candidate with no identity.
//! - The record's `ImportRecord` impl (business key and content equality).
//! - `Deserialize` create and update DTOs for single-record endpoints.

use serde::{Deserialize, Deserializer};

pub mod project;
pub mod sub_division;
pub mod task;

/// Deserialize a present field into `Some`.
///
/// With `#[serde(default)]` on an `Option<Option<T>>` field, an absent key
/// stays `None` (leave the column alone), `null` becomes `Some(None)` (clear
/// it) and a value becomes `Some(Some(v))`.
pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
