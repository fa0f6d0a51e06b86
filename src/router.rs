use axum::{
    routing::{get, post, put},
    Router,
};

use crate::{
    controller::availability::{
        delete_my_availability, list_session_availabilities, list_slot_availabilities,
        set_my_availability,
    },
    controller::slot::{create_slot, delete_slot, list_slots, update_slot},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/sessions/{session_id}/slots",
            post(create_slot).get(list_slots),
        )
        .route(
            "/api/sessions/{session_id}/slots/{slot_id}",
            put(update_slot).delete(delete_slot),
        )
        .route(
            "/api/sessions/{session_id}/slots/{slot_id}/availabilities/me",
            put(set_my_availability).delete(delete_my_availability),
        )
        .route(
            "/api/sessions/{session_id}/slots/{slot_id}/availabilities",
            get(list_slot_availabilities),
        )
        .route(
            "/api/sessions/{session_id}/availabilities",
            get(list_session_availabilities),
        )
}
