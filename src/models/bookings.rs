use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::lenient::deserialize_optional_id;

/// Raw booking form fields as posted by the trip page. Every field is kept
/// as the submitted string; validation decides what they mean.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub nationality: String,
    pub hotel_name: String,
    pub room_number: String,
    pub preferred_date: String,
    pub preferred_time: String,
    pub adults: String,
    pub children: String,
    pub special_requests: String,
}

/// Payload forwarded to `POST /bookings` once the form validates.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct BookingSubmission {
    pub trip_id: String,
    pub user_id: Option<String>,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub nationality: String,
    pub hotel_name: String,
    pub room_number: String,
    pub preferred_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_time: Option<String>,
    pub number_of_adults: u32,
    pub number_of_children: u32,
    pub adult_price: f64,
    pub child_price: f64,
    pub total_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BookingCreated {
    #[serde(alias = "booking_id", deserialize_with = "deserialize_optional_id", default)]
    pub id: Option<String>,
}
