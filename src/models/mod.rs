pub mod best_selling;
pub mod blog;
pub mod bookings;
pub mod course;
pub mod dashboard;
pub mod invoice;
pub mod lenient;
pub mod trip;
