pub mod api_client;
pub mod best_selling_service;
pub mod booking_validator;
pub mod course_service;
pub mod dashboard_service;
pub mod discount_service;
pub mod duration_format;
pub mod included_normalizer;
pub mod invoice_service;
pub mod lookup_limiter;
pub mod pricing_service;
pub mod reading_time;
pub mod trip_service;
