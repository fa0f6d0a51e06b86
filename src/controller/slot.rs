use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    controller::PaginationQuery,
    data::{session::GameSessionRepository, slot::SlotRepository},
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::{
        api::{CreateSlotDto, SlotDto, UpdateSlotDto},
        slot::{CreateSlotParams, UpdateSlotParams},
    },
    state::AppState,
};

/// Resolves the game session for a slot route, or 404.
async fn get_game_session(
    state: &AppState,
    session_id: i32,
) -> Result<entity::game_session::Model, AppError> {
    GameSessionRepository::new(&state.db)
        .get_by_id(session_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Session not found".to_string()))
}

/// Resolves a slot and verifies it belongs to the path session.
async fn get_session_slot(
    state: &AppState,
    session_id: i32,
    slot_id: i32,
) -> Result<entity::session_slot::Model, AppError> {
    let slot = SlotRepository::new(&state.db)
        .get_by_id(slot_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Session slot not found".to_string()))?;

    if slot.session_id != session_id {
        return Err(AppError::BadRequest(
            "Slot does not belong to the specified session".to_string(),
        ));
    }

    Ok(slot)
}

/// POST /api/sessions/{session_id}/slots
/// Create a new availability slot for a session. Requires the GM role.
pub async fn create_slot(
    State(state): State<AppState>,
    session: Session,
    Path(session_id): Path<i32>,
    Json(dto): Json<CreateSlotDto>,
) -> Result<impl IntoResponse, AppError> {
    let game_session = get_game_session(&state, session_id).await?;

    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::CampaignGm(game_session.campaign_id)])
        .await?;

    let slot = SlotRepository::new(&state.db)
        .create(
            session_id,
            CreateSlotParams {
                slot_from: dto.slot_from,
                slot_to: dto.slot_to,
                note: dto.note,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(SlotDto::from(slot))))
}

/// GET /api/sessions/{session_id}/slots
/// List a session's slots ordered by start time. Requires campaign membership.
pub async fn list_slots(
    State(state): State<AppState>,
    session: Session,
    Path(session_id): Path<i32>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let game_session = get_game_session(&state, session_id).await?;

    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::CampaignMember(game_session.campaign_id)])
        .await?;

    let (slots, _total) = SlotRepository::new(&state.db)
        .get_by_session(session_id, pagination.page, pagination.per_page)
        .await?;

    let dtos: Vec<SlotDto> = slots.into_iter().map(SlotDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// PUT /api/sessions/{session_id}/slots/{slot_id}
/// Update a slot's bounds or note. Requires the GM role.
pub async fn update_slot(
    State(state): State<AppState>,
    session: Session,
    Path((session_id, slot_id)): Path<(i32, i32)>,
    Json(dto): Json<UpdateSlotDto>,
) -> Result<impl IntoResponse, AppError> {
    let game_session = get_game_session(&state, session_id).await?;

    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::CampaignGm(game_session.campaign_id)])
        .await?;

    get_session_slot(&state, session_id, slot_id).await?;

    let slot = SlotRepository::new(&state.db)
        .update(
            slot_id,
            UpdateSlotParams {
                slot_from: dto.slot_from,
                slot_to: dto.slot_to,
                note: dto.note,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(SlotDto::from(slot))))
}

/// DELETE /api/sessions/{session_id}/slots/{slot_id}
/// Delete a slot and all availability recorded in it. Requires the GM role.
pub async fn delete_slot(
    State(state): State<AppState>,
    session: Session,
    Path((session_id, slot_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let game_session = get_game_session(&state, session_id).await?;

    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::CampaignGm(game_session.campaign_id)])
        .await?;

    get_session_slot(&state, session_id, slot_id).await?;

    let slot = SlotRepository::new(&state.db).delete(slot_id).await?;

    Ok((StatusCode::OK, Json(SlotDto::from(slot))))
}
