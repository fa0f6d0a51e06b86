//! Error taxonomy of the scheduling stores.
//!
//! Every validation failure in the slot and availability repositories is
//! detected before any write, so a returned error always means storage is
//! unchanged. Overlap conflicts carry the conflicting interval's bounds so
//! the caller does not need a second round-trip to discover them.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::{
    error::InternalServerError,
    model::api::{ErrorDto, OverlapErrorDto},
};

#[derive(Error, Debug)]
pub enum ScheduleError {
    /// Interval end is not strictly after its start.
    ///
    /// Applies to slot bounds, availability intervals, and deletion windows.
    /// Results in a 400 Bad Request response.
    #[error("Interval end {to} must be after start {from}")]
    InvalidInterval {
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    },

    /// Availability interval or deletion window is not fully contained
    /// within the parent slot's bounds.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Interval from {from} to {to} must be within the session slot boundaries")]
    OutOfBounds {
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    },

    /// New availability interval overlaps one the user already stored for
    /// this slot. Carries the stored interval's bounds for diagnostics.
    ///
    /// Results in a 409 Conflict response.
    #[error("Availability overlaps an existing interval from {existing_from} to {existing_to}")]
    OverlapConflict {
        existing_from: DateTime<Utc>,
        existing_to: DateTime<Utc>,
    },

    /// Referenced session slot does not exist.
    ///
    /// Results in a 404 Not Found response.
    #[error("Session slot {0} not found")]
    SlotNotFound(i32),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with details logged server-side.
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
}

/// Maps the scheduling taxonomy onto HTTP status codes.
///
/// `InvalidInterval`/`OutOfBounds` are caller-fixable input errors (400),
/// `OverlapConflict` is a conflict with stored state (409) whose payload
/// includes the conflicting bounds, and `SlotNotFound` is 404.
impl IntoResponse for ScheduleError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidInterval { .. } | Self::OutOfBounds { .. } => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::OverlapConflict {
                existing_from,
                existing_to,
            } => (
                StatusCode::CONFLICT,
                Json(OverlapErrorDto {
                    error: format!(
                        "Availability overlaps an existing interval from {} to {}",
                        existing_from, existing_to
                    ),
                    conflict_from: existing_from,
                    conflict_to: existing_to,
                }),
            )
                .into_response(),
            Self::SlotNotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::Db(err) => InternalServerError(err).into_response(),
        }
    }
}
