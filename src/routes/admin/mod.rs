use actix_web::{web, HttpResponse};

use crate::middleware::auth::Session;
use crate::middleware::role_auth::{RequireRole, UserRole};
use crate::models::best_selling::NewBestSellingEntry;
use crate::services::api_client::{ApiError, StoreApi};
use crate::services::dashboard_service::DashboardService;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .wrap(RequireRole::new(UserRole::Admin))
            .route("/dashboard", web::get().to(dashboard))
            .route("/best-selling", web::get().to(list_best_selling))
            .route("/best-selling", web::post().to(add_best_selling))
            .route("/best-selling/{id}", web::delete().to(remove_best_selling)),
    );
}

pub async fn dashboard(api: web::Data<dyn StoreApi>, session: Session) -> HttpResponse {
    let stats = DashboardService::stats(api.get_ref(), Some(&session.token)).await;
    HttpResponse::Ok().json(stats)
}

/// Raw ranking entries, including ones whose item has been deleted, so the
/// back-office can clean them up.
pub async fn list_best_selling(api: web::Data<dyn StoreApi>) -> Result<HttpResponse, ApiError> {
    let mut entries = api.list_best_selling().await?;
    entries.sort_by_key(|entry| entry.ranking_position.unwrap_or(i64::MAX));
    Ok(HttpResponse::Ok().json(entries))
}

pub async fn add_best_selling(
    api: web::Data<dyn StoreApi>,
    input: web::Json<NewBestSellingEntry>,
    session: Session,
) -> Result<HttpResponse, ApiError> {
    let entry = input.into_inner();
    if entry.item_id.trim().is_empty() || entry.ranking_position < 1 {
        return Err(ApiError::Status {
            status: 400,
            message: "An item and a ranking position of at least 1 are required".to_string(),
        });
    }

    let created = api
        .create_best_selling(&entry, Some(&session.token))
        .await?;
    log::info!(
        "Best-selling entry added for {:?} {} at position {}",
        entry.item_type,
        entry.item_id,
        entry.ranking_position
    );
    Ok(HttpResponse::Created().json(created))
}

pub async fn remove_best_selling(
    api: web::Data<dyn StoreApi>,
    path: web::Path<String>,
    session: Session,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    api.delete_best_selling(&id, Some(&session.token)).await?;
    log::info!("Best-selling entry {} removed by {}", id, session.user_id());
    Ok(HttpResponse::NoContent().finish())
}
