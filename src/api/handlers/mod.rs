use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::api::models::ErrorResponse;
use crate::errors::is_invalid_request;
use crate::services::TournamentService;

pub mod matches;
pub mod players;
pub mod standings;

pub struct AppState {
    pub tournament: TournamentService,
}

/// Map a failed operation to a status code: rejected input is the caller's
/// fault, anything else came from the store.
pub fn error_response(error: anyhow::Error) -> Response {
    let status = if is_invalid_request(&error) {
        StatusCode::BAD_REQUEST
    } else {
        log::error!("Request failed: {:#}", error);
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (status, Json(ErrorResponse { error: format!("{:#}", error) })).into_response()
}
