use axum::{extract::State, response::IntoResponse, Json};
use tower_sessions::Session;
use tracing::warn;

use crate::{
    controller::extract::ApiJson,
    error::AppError,
    middleware::auth::AuthGuard,
    model::{
        advisor::{AnalyzeRequestDto, BookingAnalysisDto, ChatRequestDto, ChatResponseDto},
        api::ErrorDto,
    },
    service::{advisor::CHAT_FALLBACK, booking::BookingService},
    state::AppState,
};

pub static ADVISOR_TAG: &str = "advisor";

#[utoipa::path(
    post,
    path = "/api/gemini/chat",
    tag = ADVISOR_TAG,
    request_body = ChatRequestDto,
    responses(
        (status = 200, description = "Assistant reply, or a fallback note when the provider is unavailable", body = ChatResponseDto),
        (status = 400, description = "Empty prompt", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn chat(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ChatRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let prompt = payload.prompt.trim();

    if prompt.is_empty() {
        return Err(AppError::BadRequest("Prompt is required.".to_string()));
    }

    // Chat degrades gracefully: a provider outage gives the client a canned
    // reply instead of an error page.
    let response = match state.advisor.chat(prompt).await {
        Ok(text) => text,
        Err(e) => {
            warn!("chat provider call failed: {}", e);
            CHAT_FALLBACK.to_string()
        }
    };

    Ok(Json(ChatResponseDto { response }))
}

#[utoipa::path(
    post,
    path = "/api/gemini/analyze",
    tag = ADVISOR_TAG,
    request_body = AnalyzeRequestDto,
    responses(
        (status = 200, description = "Structured analysis of the booking", body = BookingAnalysisDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Booking missing or owned by another user", body = ErrorDto),
        (status = 500, description = "Analysis provider failed", body = ErrorDto)
    ),
)]
pub async fn analyze_booking(
    State(state): State<AppState>,
    session: Session,
    ApiJson(payload): ApiJson<AnalyzeRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let Some(booking) = BookingService::new(&state.db)
        .get_owned(payload.booking_id, user.id)
        .await?
    else {
        return Err(AppError::NotFound("Booking not found.".to_string()));
    };

    let analysis = state
        .advisor
        .analyze(&booking)
        .await
        .map_err(|e| AppError::InternalError(format!("Booking analysis failed: {}", e)))?;

    Ok(Json(analysis))
}
