use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user id is present in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No authenticated user in session")]
    NotLoggedIn,

    /// The session references a user id that no longer exists in the database.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} from session no longer exists")]
    UserNotInDatabase(i32),

    /// The caller is not a member of the campaign owning the requested resource.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {user_id} is not a member of campaign {campaign_id}")]
    MembershipRequired { user_id: i32, campaign_id: i32 },

    /// The caller is a member but lacks the GM role required for the operation.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {user_id} is not the GM of campaign {campaign_id}")]
    GmRequired { user_id: i32, campaign_id: i32 },
}

/// Converts authentication errors into HTTP responses.
///
/// Missing or stale sessions map to 401, role failures to 403. The full error
/// is logged at debug level while client-facing messages stay generic to avoid
/// leaking membership information.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotLoggedIn | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Not logged in".to_string(),
                }),
            )
                .into_response(),
            Self::MembershipRequired { .. } | Self::GmRequired { .. } => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Not enough permissions".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
