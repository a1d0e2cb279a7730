//! Domain logic for the worktrack services.
//!
//! Everything in this crate is free of database and HTTP concerns: the
//! bulk-import engine talks to storage only through the
//! [`import::ImportRepository`] port.

pub mod error;
pub mod import;
pub mod tracking;
pub mod types;
