use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{error_response, AppState};
use crate::api::models::ReportMatchRequest;

pub async fn get_matches(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.tournament.list_matches() {
        Ok(matches) => Json(matches).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn report_match(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ReportMatchRequest>,
) -> impl IntoResponse {
    match state.tournament.report_match(request.winner_id, request.loser_id) {
        Ok(recorded) => (StatusCode::CREATED, Json(recorded)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn delete_matches(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.tournament.delete_matches() {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}
