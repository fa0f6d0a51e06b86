//! Request and response DTOs for the HTTP surface.
//!
//! Timestamps are timezone-aware and serialized as ISO-8601 through chrono's
//! serde support.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Error body for availability overlap conflicts.
///
/// Carries the stored interval's bounds so the caller can resolve the
/// conflict without an extra read.
#[derive(Serialize)]
pub struct OverlapErrorDto {
    pub error: String,
    pub conflict_from: DateTime<Utc>,
    pub conflict_to: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct DeletedDto {
    pub deleted: bool,
}

/// Request body for creating a session slot.
#[derive(Deserialize)]
pub struct CreateSlotDto {
    pub slot_from: DateTime<Utc>,
    pub slot_to: DateTime<Utc>,
    pub note: Option<String>,
}

/// Request body for updating a session slot.
///
/// The note field distinguishes "absent" (keep stored value) from an
/// explicit `null` (clear the note).
#[derive(Deserialize, Default)]
pub struct UpdateSlotDto {
    pub slot_from: Option<DateTime<Utc>>,
    pub slot_to: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub note: Option<Option<String>>,
}

/// Deserializes a present-but-possibly-null field into `Some(inner)`.
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Response body for a session slot.
#[derive(Serialize)]
pub struct SlotDto {
    pub id: i32,
    pub session_id: i32,
    pub slot_from: DateTime<Utc>,
    pub slot_to: DateTime<Utc>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<entity::session_slot::Model> for SlotDto {
    fn from(model: entity::session_slot::Model) -> Self {
        Self {
            id: model.id,
            session_id: model.session_id,
            slot_from: model.slot_from,
            slot_to: model.slot_to,
            note: model.note,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Request body for submitting an availability interval.
#[derive(Deserialize)]
pub struct SetAvailabilityDto {
    pub available_from: DateTime<Utc>,
    pub available_to: DateTime<Utc>,
    pub note: Option<String>,
}

/// Query parameters for the availability delete endpoint.
///
/// When both bounds are present, every stored interval overlapping the
/// window is deleted; when both are absent, all of the caller's intervals
/// for the slot are deleted. Providing only one bound is rejected.
#[derive(Deserialize, Default)]
pub struct DeleteAvailabilityQuery {
    pub time_from: Option<DateTime<Utc>>,
    pub time_to: Option<DateTime<Utc>>,
}

/// Response body for a user availability interval.
#[derive(Serialize)]
pub struct AvailabilityDto {
    pub id: i32,
    pub user_id: i32,
    pub slot_id: i32,
    pub available_from: DateTime<Utc>,
    pub available_to: DateTime<Utc>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<entity::user_availability::Model> for AvailabilityDto {
    fn from(model: entity::user_availability::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            slot_id: model.slot_id,
            available_from: model.available_from,
            available_to: model.available_to,
            note: model.note,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
