//! Request handlers for the collaborative translation review API.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers validate input via `translab_core`, delegate persistence to
//! the repositories in `translab_db`, map errors via [`AppError`], and
//! publish a [`CollabEvent`] after each successful mutation.
//!
//! [`AppError`]: crate::error::AppError
//! [`CollabEvent`]: translab_events::CollabEvent

pub mod annotation;
pub mod comment;
pub mod export;
pub mod session;
pub mod translation;
pub mod vote;
