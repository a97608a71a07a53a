//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument. Not-found is expressed
//! as `Option`/`bool` return values, never as an error.

pub mod annotation_repo;
pub mod comment_repo;
pub mod session_repo;
pub mod translation_repo;
pub mod vote_repo;

pub use annotation_repo::AnnotationRepo;
pub use comment_repo::CommentRepo;
pub use session_repo::SessionRepo;
pub use translation_repo::TranslationRepo;
pub use vote_repo::VoteRepo;
