use axum::{extract::State, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    controller::extract::ApiJson,
    error::AppError,
    middleware::auth::AuthGuard,
    model::{
        api::ErrorDto,
        favorite::{FavoriteDto, ToggleFavoriteDto, ToggleResultDto},
    },
    service::favorite::FavoriteService,
    state::AppState,
};

pub static FAVORITE_TAG: &str = "favorite";

#[utoipa::path(
    get,
    path = "/api/favorites",
    tag = FAVORITE_TAG,
    responses(
        (status = 200, description = "The user's favorites", body = Vec<FavoriteDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favorites(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let favorites = FavoriteService::new(&state.db).list(user.id).await?;

    let dtos: Vec<FavoriteDto> = favorites
        .into_iter()
        .map(|favorite| favorite.into_dto())
        .collect();

    Ok(Json(dtos))
}

#[utoipa::path(
    post,
    path = "/api/favorites/toggle",
    tag = FAVORITE_TAG,
    request_body = ToggleFavoriteDto,
    responses(
        (status = 200, description = "Toggle applied; body reports the new state", body = ToggleResultDto),
        (status = 400, description = "Missing item name", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_favorite(
    State(state): State<AppState>,
    session: Session,
    ApiJson(payload): ApiJson<ToggleFavoriteDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let item_name = payload.item_name.trim();
    if item_name.is_empty() {
        return Err(AppError::BadRequest("Item name is required.".to_string()));
    }

    let is_favorite = FavoriteService::new(&state.db)
        .toggle(user.id, item_name.to_string(), payload.city.trim().to_string())
        .await?;

    let message = if is_favorite {
        "Added to favorites."
    } else {
        "Removed from favorites."
    };

    Ok(Json(ToggleResultDto {
        is_favorite,
        message: message.to_string(),
    }))
}
