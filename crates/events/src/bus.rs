//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is the central publish/subscribe hub for [`CollabEvent`]s.
//! It is shared via `Arc<EventBus>` across the application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use translab_core::types::DbId;

// ---------------------------------------------------------------------------
// CollabEvent
// ---------------------------------------------------------------------------

/// A mutation that occurred inside a collaboration session.
///
/// Every event is scoped to one session so transport layers can route it
/// to that session's connected participants. Constructed via
/// [`CollabEvent::new`] and enriched with the builder methods
/// [`with_entity`](CollabEvent::with_entity),
/// [`with_actor`](CollabEvent::with_actor), and
/// [`with_payload`](CollabEvent::with_payload).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollabEvent {
    /// Dot-separated event name, e.g. `"translation.voted"`.
    pub event_type: String,

    /// The session this event belongs to.
    pub session_id: DbId,

    /// Optional subject entity kind (e.g. `"translation"`, `"comment"`).
    pub entity_type: Option<String>,

    /// Optional subject entity database id.
    pub entity_id: Option<DbId>,

    /// Optional id of the user that triggered the event.
    pub actor_user_id: Option<DbId>,

    /// Free-form JSON payload carrying event-specific data.
    pub payload: serde_json::Value,

    /// When the event was created (UTC).
    pub timestamp: DateTime<Utc>,
}

impl CollabEvent {
    /// Create a new event for a session with only the required fields.
    pub fn new(event_type: impl Into<String>, session_id: DbId) -> Self {
        Self {
            event_type: event_type.into(),
            session_id,
            entity_type: None,
            entity_id: None,
            actor_user_id: None,
            payload: serde_json::Value::Object(Default::default()),
            timestamp: Utc::now(),
        }
    }

    /// Attach the subject entity to the event.
    pub fn with_entity(mut self, entity_type: impl Into<String>, entity_id: DbId) -> Self {
        self.entity_type = Some(entity_type.into());
        self.entity_id = Some(entity_id);
        self
    }

    /// Attach the acting user to the event.
    pub fn with_actor(mut self, user_id: DbId) -> Self {
        self.actor_user_id = Some(user_id);
        self
    }

    /// Set the JSON payload for the event.
    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out event bus.
///
/// Wraps a [`broadcast::Sender`] so any number of subscribers can
/// independently receive every published [`CollabEvent`]. Subscribers
/// filter on [`CollabEvent::session_id`] to serve one session's feed.
pub struct EventBus {
    sender: broadcast::Sender<CollabEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed messages are
    /// dropped and slow receivers observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// Zero subscribers is not an error: review operations never depend
    /// on anyone being live.
    pub fn publish(&self, event: CollabEvent) {
        // Ignore the SendError — it only means there are no receivers.
        let _ = self.sender.send(event);
    }

    /// Subscribe to all events published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<CollabEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
