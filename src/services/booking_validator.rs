use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::models::bookings::{BookingForm, BookingSubmission};
use crate::models::trip::Trip;
use crate::services::pricing_service::PricingService;

pub const DEFAULT_MAX_PERSONS: i64 = 10;

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    // Accept datetime-local values by reading the date part only.
    let date_part = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub struct BookingValidator;

impl BookingValidator {
    /// Validate a submitted booking form against the trip it targets.
    ///
    /// Every rule is checked so the guest sees all problems at once. On
    /// success the submission carries the computed total price.
    pub fn validate_at(
        form: &BookingForm,
        trip_id: &str,
        trip: Option<&Trip>,
        user_id: Option<&str>,
        today: NaiveDate,
    ) -> Result<BookingSubmission, Vec<String>> {
        let mut errors = Vec::new();
        let max_persons = trip
            .and_then(|t| t.maxim_person)
            .filter(|m| *m > 0)
            .unwrap_or(DEFAULT_MAX_PERSONS);

        if form.full_name.trim().chars().count() < 2 {
            errors.push("Full name must be at least 2 characters".to_string());
        }

        let email = form.email.trim();
        if email.is_empty() {
            errors.push("Email is required".to_string());
        } else if !email_regex().is_match(email) {
            errors.push("Please enter a valid email address".to_string());
        }

        if form.phone.trim().chars().count() < 10 {
            errors.push("Phone number must be at least 10 characters".to_string());
        }
        if form.nationality.trim().is_empty() {
            errors.push("Nationality is required".to_string());
        }
        if form.hotel_name.trim().is_empty() {
            errors.push("Hotel name is required".to_string());
        }
        if form.room_number.trim().is_empty() {
            errors.push("Room number is required".to_string());
        }

        let preferred_date = if form.preferred_date.trim().is_empty() {
            errors.push("Preferred date is required".to_string());
            None
        } else {
            match parse_date(&form.preferred_date) {
                Some(date) if date < today => {
                    errors.push("Preferred date cannot be in the past".to_string());
                    None
                }
                Some(date) => Some(date),
                None => {
                    errors.push("Please enter a valid date".to_string());
                    None
                }
            }
        };

        let adults = form.adults.trim().parse::<i64>().ok();
        let adults = match adults {
            Some(a) if (1..=max_persons).contains(&a) => Some(a),
            _ => {
                errors.push(format!(
                    "Number of adults must be between 1 and {}",
                    max_persons
                ));
                None
            }
        };

        let children = if form.children.trim().is_empty() {
            Some(0)
        } else {
            match form.children.trim().parse::<i64>() {
                Ok(c) if c >= 0 => Some(c),
                Ok(_) => {
                    errors.push("Number of children cannot be negative".to_string());
                    None
                }
                Err(_) => {
                    errors.push("Number of children must be a whole number".to_string());
                    None
                }
            }
        };

        // Counts are bounded here so the u32 fields and the total cannot overflow.
        let guests = match (adults, children) {
            (Some(a), Some(c)) => {
                let within = a.checked_add(c).is_some_and(|total| total <= max_persons);
                match (within, u32::try_from(a), u32::try_from(c)) {
                    (true, Ok(a), Ok(c)) => Some((a, c)),
                    _ => {
                        errors.push(format!(
                            "Total number of guests cannot exceed {}",
                            max_persons
                        ));
                        None
                    }
                }
            }
            _ => None,
        };

        match (errors.is_empty(), preferred_date, guests) {
            (true, Some(preferred_date), Some((adults, children))) => {
                let adult_price = trip.and_then(|t| t.adult_price).unwrap_or(0.0);
                let child_price = PricingService::child_price_or_default(
                    adult_price,
                    trip.and_then(|t| t.child_price),
                );

                Ok(BookingSubmission {
                    trip_id: trip_id.to_string(),
                    user_id: user_id.map(str::to_string),
                    full_name: form.full_name.trim().to_string(),
                    email: email.to_string(),
                    phone: form.phone.trim().to_string(),
                    nationality: form.nationality.trim().to_string(),
                    hotel_name: form.hotel_name.trim().to_string(),
                    room_number: form.room_number.trim().to_string(),
                    preferred_date,
                    preferred_time: non_empty(&form.preferred_time),
                    number_of_adults: adults,
                    number_of_children: children,
                    adult_price,
                    child_price,
                    total_price: f64::from(adults) * adult_price + f64::from(children) * child_price,
                    special_requests: non_empty(&form.special_requests),
                })
            }
            _ => Err(errors),
        }
    }
}
