//! Parameter types for user availability operations.

use chrono::{DateTime, Utc};

/// Parameters for recording one availability interval inside a slot.
///
/// The submitting user and the target slot come from the request context;
/// there is no update-in-place for availability, changing an interval means
/// deleting and re-creating it.
#[derive(Debug, Clone)]
pub struct SetAvailabilityParams {
    /// Start of the availability interval.
    pub available_from: DateTime<Utc>,
    /// End of the availability interval; must be strictly after the start.
    pub available_to: DateTime<Utc>,
    /// Optional free-text note.
    pub note: Option<String>,
}
