//! Parameter types for session slot operations.

use chrono::{DateTime, Utc};

/// Parameters for creating a new session slot.
///
/// The owning session id comes from the request path, not from the params.
#[derive(Debug, Clone)]
pub struct CreateSlotParams {
    /// Start of the candidate time window.
    pub slot_from: DateTime<Utc>,
    /// End of the candidate time window; must be strictly after `slot_from`.
    pub slot_to: DateTime<Utc>,
    /// Optional free-text note shown alongside the slot.
    pub note: Option<String>,
}

/// Parameters for updating an existing session slot.
///
/// All fields are optional - only provided fields will be updated. The
/// `slot_to > slot_from` invariant is re-validated against the resulting
/// bounds, so changing a single bound is checked against the stored value
/// of the other. The note field uses a nested `Option` (outer indicates
/// field presence, inner the nullable value).
#[derive(Debug, Clone, Default)]
pub struct UpdateSlotParams {
    /// New start of the time window.
    pub slot_from: Option<DateTime<Utc>>,
    /// New end of the time window.
    pub slot_to: Option<DateTime<Utc>>,
    /// New note (`Some(None)` clears the stored note).
    pub note: Option<Option<String>>,
}
