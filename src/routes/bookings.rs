use actix_web::{http::header, web, HttpResponse};
use chrono::Local;
use url::form_urlencoded;

use crate::middleware::auth::Session;
use crate::models::bookings::BookingForm;
use crate::services::api_client::{ApiError, StoreApi};
use crate::services::booking_validator::BookingValidator;

fn encode_segment(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

fn see_other(location: String) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Trip page URL carrying an error message for the booking form.
pub fn error_redirect(trip_id: &str, message: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("error", message)
        .finish();
    format!("/trips/{}?{}", encode_segment(trip_id), query)
}

pub fn success_redirect(booking_id: Option<&str>) -> String {
    match booking_id {
        Some(id) => format!("/booking/success?bookingId={}", encode_segment(id)),
        None => "/booking/success".to_string(),
    }
}

/// Message shown on the trip page when the upstream rejects a booking.
pub fn booking_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Status {
            status: 400,
            message,
        } if !message.is_empty() => message.clone(),
        ApiError::Status { status: 400, .. } => "Invalid booking details".to_string(),
        ApiError::Unauthorized => "Please sign in to complete your booking".to_string(),
        ApiError::Conflict(_) => "This time slot is no longer available".to_string(),
        _ => "Failed to create booking. Please try again.".to_string(),
    }
}

/*
    POST /api/trips/{id}/book (form post from the trip page)
*/
pub async fn submit(
    api: web::Data<dyn StoreApi>,
    path: web::Path<String>,
    form: web::Form<BookingForm>,
    session: Option<Session>,
) -> HttpResponse {
    let trip_id = path.into_inner();
    let form = form.into_inner();

    // Without the trip config the validator falls back to its defaults.
    let trip = match api.get_trip(&trip_id).await {
        Ok(trip) => Some(trip),
        Err(err) => {
            log::warn!("Trip {} config unavailable for booking: {}", trip_id, err);
            None
        }
    };

    let submission = match BookingValidator::validate_at(
        &form,
        &trip_id,
        trip.as_ref(),
        session.as_ref().map(Session::user_id),
        Local::now().date_naive(),
    ) {
        Ok(submission) => submission,
        Err(errors) => {
            log::info!("Booking for trip {} rejected: {} errors", trip_id, errors.len());
            return see_other(error_redirect(&trip_id, &errors.join(", ")));
        }
    };

    let token = session.as_ref().map(|s| s.token.as_str());
    match api.create_booking(&submission, token).await {
        Ok(created) => {
            log::info!(
                "Booking {:?} created for trip {} (total {})",
                created.id,
                trip_id,
                submission.total_price
            );
            see_other(success_redirect(created.id.as_deref()))
        }
        Err(err) => {
            log::error!("Failed to create booking for trip {}: {}", trip_id, err);
            see_other(error_redirect(&trip_id, &booking_failure_message(&err)))
        }
    }
}
