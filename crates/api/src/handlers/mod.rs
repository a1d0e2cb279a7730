pub mod import;
pub mod project;
pub mod sub_division;
pub mod task;
