use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    controller::PaginationQuery,
    data::{
        availability::AvailabilityRepository, session::GameSessionRepository, slot::SlotRepository,
    },
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::{
        api::{AvailabilityDto, DeleteAvailabilityQuery, DeletedDto, SetAvailabilityDto},
        availability::SetAvailabilityParams,
        interval::Interval,
    },
    state::AppState,
};

/// Resolves the game session, the slot, and verifies the slot belongs to
/// the path session.
async fn get_session_and_slot(
    state: &AppState,
    session_id: i32,
    slot_id: i32,
) -> Result<(entity::game_session::Model, entity::session_slot::Model), AppError> {
    let game_session = GameSessionRepository::new(&state.db)
        .get_by_id(session_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Session not found".to_string()))?;

    let slot = SlotRepository::new(&state.db)
        .get_by_id(slot_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Session slot not found".to_string()))?;

    if slot.session_id != session_id {
        return Err(AppError::BadRequest(
            "Slot does not belong to the specified session".to_string(),
        ));
    }

    Ok((game_session, slot))
}

/// PUT /api/sessions/{session_id}/slots/{slot_id}/availabilities/me
/// Record an availability interval for the calling user. Requires campaign
/// membership; users can only ever write their own availability.
pub async fn set_my_availability(
    State(state): State<AppState>,
    session: Session,
    Path((session_id, slot_id)): Path<(i32, i32)>,
    Json(dto): Json<SetAvailabilityDto>,
) -> Result<impl IntoResponse, AppError> {
    let (game_session, slot) = get_session_and_slot(&state, session_id, slot_id).await?;

    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::CampaignMember(game_session.campaign_id)])
        .await?;

    let availability = AvailabilityRepository::new(&state.db)
        .set(
            &slot,
            user.id,
            SetAvailabilityParams {
                available_from: dto.available_from,
                available_to: dto.available_to,
                note: dto.note,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(AvailabilityDto::from(availability))))
}

/// DELETE /api/sessions/{session_id}/slots/{slot_id}/availabilities/me[?time_from&time_to]
/// Delete the calling user's availability for a slot, either wholesale or
/// every interval overlapping the given window. Requires campaign membership.
/// Deleting nothing is reported as `deleted: false`, not an error.
pub async fn delete_my_availability(
    State(state): State<AppState>,
    session: Session,
    Path((session_id, slot_id)): Path<(i32, i32)>,
    Query(query): Query<DeleteAvailabilityQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (game_session, slot) = get_session_and_slot(&state, session_id, slot_id).await?;

    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::CampaignMember(game_session.campaign_id)])
        .await?;

    let window = match (query.time_from, query.time_to) {
        (Some(from), Some(to)) => Some(Interval::new(from, to)),
        (None, None) => None,
        _ => {
            return Err(AppError::BadRequest(
                "Both time_from and time_to must be provided for window deletion".to_string(),
            ));
        }
    };

    let deleted = AvailabilityRepository::new(&state.db)
        .delete_for_user(&slot, user.id, window)
        .await?;

    Ok((StatusCode::OK, Json(DeletedDto { deleted })))
}

/// GET /api/sessions/{session_id}/slots/{slot_id}/availabilities
/// List all users' availability for a slot. Requires campaign membership.
pub async fn list_slot_availabilities(
    State(state): State<AppState>,
    session: Session,
    Path((session_id, slot_id)): Path<(i32, i32)>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (game_session, _slot) = get_session_and_slot(&state, session_id, slot_id).await?;

    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::CampaignMember(game_session.campaign_id)])
        .await?;

    let (rows, _total) = AvailabilityRepository::new(&state.db)
        .get_by_slot(slot_id, pagination.page, pagination.per_page)
        .await?;

    let dtos: Vec<AvailabilityDto> = rows.into_iter().map(AvailabilityDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/sessions/{session_id}/availabilities
/// List availability across every slot of a session for building the full
/// scheduling matrix. Requires campaign membership.
pub async fn list_session_availabilities(
    State(state): State<AppState>,
    session: Session,
    Path(session_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let game_session = GameSessionRepository::new(&state.db)
        .get_by_id(session_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Session not found".to_string()))?;

    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::CampaignMember(game_session.campaign_id)])
        .await?;

    let rows = AvailabilityRepository::new(&state.db)
        .get_all_by_session(session_id)
        .await?;

    let dtos: Vec<AvailabilityDto> = rows.into_iter().map(AvailabilityDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
