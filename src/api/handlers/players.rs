use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{error_response, AppState};
use crate::api::models::{CountResponse, RegisterPlayerRequest};

pub async fn get_players(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.tournament.list_players() {
        Ok(players) => Json(players).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn register_player(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RegisterPlayerRequest>,
) -> impl IntoResponse {
    match state.tournament.register_player(&request.name) {
        Ok(player) => (StatusCode::CREATED, Json(player)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn delete_players(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.tournament.delete_players() {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn count_players(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.tournament.count_players() {
        Ok(count) => Json(CountResponse { count }).into_response(),
        Err(e) => error_response(e),
    }
}
