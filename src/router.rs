use axum::{
    routing::{delete, get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{advisor, auth, booking, favorite},
    openapi::ApiDoc,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/register", post(auth::register))
        .route("/api/login", post(auth::login))
        .route("/api/logout", post(auth::logout))
        .route("/api/status", get(auth::status))
        .route("/api/booking", post(booking::create_booking))
        .route("/api/bookings", get(booking::get_user_bookings))
        .route("/api/booking/{id}", delete(booking::delete_booking))
        .route("/api/favorites", get(favorite::get_favorites))
        .route("/api/favorites/toggle", post(favorite::toggle_favorite))
        .route("/api/gemini/chat", post(advisor::chat))
        .route("/api/gemini/analyze", post(advisor::analyze_booking))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
