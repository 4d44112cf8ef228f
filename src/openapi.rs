//! OpenAPI document served at `/api-docs/openapi.json` and rendered by the
//! Swagger UI.

use utoipa::OpenApi;

use crate::{
    controller::{advisor, auth, booking, favorite},
    model::{
        advisor::{
            ActivitySuggestionDto, AnalyzeRequestDto, BookingAnalysisDto, ChatRequestDto,
            ChatResponseDto,
        },
        api::{ErrorDto, MessageDto},
        booking::{BookingDto, CreateBookingDto, CreatedBookingDto},
        favorite::{FavoriteDto, ToggleFavoriteDto, ToggleResultDto},
        user::{CredentialsDto, SessionUserDto, StatusDto},
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register,
        auth::login,
        auth::logout,
        auth::status,
        booking::create_booking,
        booking::get_user_bookings,
        booking::delete_booking,
        favorite::get_favorites,
        favorite::toggle_favorite,
        advisor::chat,
        advisor::analyze_booking,
    ),
    components(schemas(
        CredentialsDto,
        SessionUserDto,
        StatusDto,
        CreateBookingDto,
        CreatedBookingDto,
        BookingDto,
        FavoriteDto,
        ToggleFavoriteDto,
        ToggleResultDto,
        ChatRequestDto,
        ChatResponseDto,
        AnalyzeRequestDto,
        BookingAnalysisDto,
        ActivitySuggestionDto,
        ErrorDto,
        MessageDto,
    )),
    tags(
        (name = "auth", description = "Registration, login, and session state"),
        (name = "booking", description = "Owner-scoped hotel bookings"),
        (name = "favorite", description = "Favorite hotels toggle list"),
        (name = "advisor", description = "AI travel chat and booking analysis"),
    )
)]
pub struct ApiDoc;
