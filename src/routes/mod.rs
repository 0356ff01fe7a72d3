use actix_web::web;

pub mod admin;
pub mod best_selling;
pub mod blog;
pub mod bookings;
pub mod courses;
pub mod health;
pub mod invoices;
pub mod packages;
pub mod trips;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .route("/trips", web::get().to(trips::get_all))
                .route("/trips/{id}", web::get().to(trips::get_by_id))
                .route("/trips/{id}/book", web::post().to(bookings::submit))
                .route("/packages", web::get().to(packages::get_all))
                .route("/packages/{id}", web::get().to(packages::get_by_id))
                .route("/courses", web::get().to(courses::get_all))
                .route("/courses/{id}", web::get().to(courses::get_by_id))
                .route("/best-selling", web::get().to(best_selling::get_all))
                .route("/blog/tag/{tag}", web::get().to(blog::get_by_tag))
                .route("/blog/{title}", web::get().to(blog::get_by_title))
                // Lookup routes must be registered before `/invoices/{id}`.
                .route("/invoices/lookup", web::get().to(invoices::lookup))
                .route("/invoices/lookup/pickup", web::put().to(invoices::pickup))
                .route("/invoices/{id}", web::get().to(invoices::get_by_id))
                .route("/invoices/{id}/pay", web::post().to(invoices::pay))
                .configure(admin::config),
        );
}
