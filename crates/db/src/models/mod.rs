//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Read-projection composites where an operation returns a nested shape

pub mod annotation;
pub mod comment;
pub mod export;
pub mod session;
pub mod translation;
pub mod vote;
