//! Export snapshot: a read-only, point-in-time projection of a session.

use serde::Serialize;
use translab_core::types::Timestamp;

use crate::models::session::{Session, SessionParticipant};
use crate::models::translation::TranslationWithComments;

/// A session plus all its translation records (each with comments),
/// stamped at composition time. Never persisted.
#[derive(Debug, Serialize)]
pub struct SessionExport {
    pub session: Session,
    pub participants: Vec<SessionParticipant>,
    pub translations: Vec<TranslationWithComments>,
    pub exported_at: Timestamp,
}
