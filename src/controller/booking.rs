use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    controller::extract::ApiJson,
    error::AppError,
    middleware::auth::AuthGuard,
    model::{
        api::{ErrorDto, MessageDto},
        booking::{BookingDto, CreateBookingDto, CreateBookingParam, CreatedBookingDto},
    },
    service::booking::BookingService,
    state::AppState,
};

pub static BOOKING_TAG: &str = "booking";

#[utoipa::path(
    post,
    path = "/api/booking",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Booking created", body = CreatedBookingDto),
        (status = 400, description = "Missing fields or non-positive price", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    session: Session,
    ApiJson(payload): ApiJson<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    validate_booking(&payload)?;

    let booking_id = BookingService::new(&state.db)
        .create(CreateBookingParam {
            owner_id: user.id,
            owner_name: user.username,
            hotel_name: payload.hotel_name.trim().to_string(),
            city: payload.city.trim().to_string(),
            check_in: payload.check_in,
            check_out: payload.check_out,
            price: payload.price,
            hotel_image_url: payload.hotel_image_url,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(CreatedBookingDto { booking_id })))
}

#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    responses(
        (status = 200, description = "The user's bookings, newest first", body = Vec<BookingDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_bookings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let bookings = BookingService::new(&state.db).list(user.id).await?;

    let dtos: Vec<BookingDto> = bookings
        .into_iter()
        .map(|booking| booking.into_dto())
        .collect();

    Ok(Json(dtos))
}

#[utoipa::path(
    delete,
    path = "/api/booking/{id}",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Booking missing or owned by another user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_booking(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let deleted = BookingService::new(&state.db).delete(id, user.id).await?;

    if !deleted {
        return Err(AppError::NotFound("Booking not found.".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Booking deleted successfully.".to_string(),
        }),
    ))
}

/// Field-level checks on a booking request.
///
/// Prices must be strictly positive and finite; a zero-cost or NaN booking
/// is always a client error.
fn validate_booking(payload: &CreateBookingDto) -> Result<(), AppError> {
    let required = [
        payload.hotel_name.trim(),
        payload.city.trim(),
        payload.check_in.trim(),
        payload.check_out.trim(),
    ];

    if required.iter().any(|field| field.is_empty()) {
        return Err(AppError::BadRequest(
            "Hotel name, city, check-in, and check-out are required.".to_string(),
        ));
    }

    if !payload.price.is_finite() || payload.price <= 0.0 {
        return Err(AppError::BadRequest(
            "Price must be a positive number.".to_string(),
        ));
    }

    Ok(())
}
