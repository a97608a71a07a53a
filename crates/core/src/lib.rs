//! Domain rules for the translab collaborative translation review platform.
//!
//! Pure constants, validation functions, and the shared [`error::CoreError`]
//! taxonomy consumed by the DB and API layers. This crate performs no I/O.

pub mod annotation;
pub mod comment;
pub mod error;
pub mod session;
pub mod translation;
pub mod types;
pub mod vote;
