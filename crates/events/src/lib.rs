//! Translab collaboration event bus.
//!
//! Real-time delivery is a collaborator of the review core, not part of
//! it: no operation requires a live subscriber to succeed. This crate
//! provides the seam:
//!
//! - [`CollabEvent`] — the canonical session-scoped event envelope.
//! - [`EventBus`] — in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//!
//! A transport layer (WebSocket fan-out, SSE, a message broker bridge)
//! subscribes to the bus and filters by `session_id`.

pub mod bus;

pub use bus::{CollabEvent, EventBus};
