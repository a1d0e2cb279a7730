//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Batch inserts take a
//! connection so callers can run them inside a transaction.

pub mod project_repo;
pub mod sub_division_repo;
pub mod task_repo;

pub use project_repo::ProjectRepo;
pub use sub_division_repo::SubDivisionRepo;
pub use task_repo::TaskRepo;
